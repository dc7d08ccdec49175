//! Interaction mode and viewport classification.
//!
//! DESIGN
//! ======
//! Hover and selection are mutually exclusive in practice (narrow viewports
//! disable hover, wide viewports disable tap-to-select), so the mode is a
//! single tagged union instead of two optional cells. A stale transition can
//! never resurrect the variant the current viewport mode cannot drive.

#[cfg(test)]
#[path = "interaction_test.rs"]
mod interaction_test;

use crate::projects::ProjectRecord;

/// Widths at or below this many CSS pixels use the tap/modal presentation.
pub const NARROW_VIEWPORT_MAX_PX: f64 = 1000.0;

pub fn is_narrow_viewport(width: f64) -> bool {
    width <= NARROW_VIEWPORT_MAX_PX
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    #[default]
    Idle,
    Hovering(ProjectRecord),
    Selected(ProjectRecord),
}

impl InteractionMode {
    /// Mouse-enter (or keyboard focus) on a project link. The latest enter
    /// wins regardless of the previous variant.
    pub fn pointer_enter(self, record: ProjectRecord, narrow: bool) -> Self {
        if narrow {
            self
        } else {
            Self::Hovering(record)
        }
    }

    /// Mouse-leave (or blur). Only clears the preview when the leaving record
    /// is the one currently showing, so a leave that arrives after a newer
    /// enter is ignored.
    pub fn pointer_leave(self, record: ProjectRecord, narrow: bool) -> Self {
        match self {
            Self::Hovering(current) if !narrow && current == record => Self::Idle,
            other => other,
        }
    }

    /// Link activation. Opens the modal on narrow viewports; on wide ones the
    /// browser follows the hyperlink and the mode is untouched.
    pub fn activate(self, record: ProjectRecord, narrow: bool) -> Self {
        if narrow {
            Self::Selected(record)
        } else {
            self
        }
    }

    /// Close the modal.
    pub fn dismiss(self) -> Self {
        match self {
            Self::Selected(_) => Self::Idle,
            other => other,
        }
    }

    /// Drop whichever variant the new viewport mode cannot drive.
    pub fn reclassify(self, narrow: bool) -> Self {
        match self {
            Self::Hovering(_) if narrow => Self::Idle,
            Self::Selected(_) if !narrow => Self::Idle,
            other => other,
        }
    }

    pub fn hovered(&self) -> Option<&ProjectRecord> {
        match self {
            Self::Hovering(record) => Some(record),
            _ => None,
        }
    }

    pub fn selected(&self) -> Option<&ProjectRecord> {
        match self {
            Self::Selected(record) => Some(record),
            _ => None,
        }
    }
}
