//! Theme state and its mirror on the document root.
//!
//! The current value lives in component state only; nothing is stored, so a
//! reload starts over in light mode. The stylesheet consumes the `data-theme`
//! attribute on `<html>`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Toggle button glyph: shows the mode a press would switch into.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::Theme;
    use js_sys::{Function, Reflect};
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::window;

    /// Write the current theme onto `<html data-theme="...">`.
    pub fn apply_theme(theme: Theme) {
        if let Some(document) = window().and_then(|w| w.document()) {
            if let Some(root) = document.document_element() {
                let _ = root.set_attribute("data-theme", theme.as_str());
            }
        }
    }

    fn prefers_reduced_motion() -> bool {
        window()
            .and_then(|w| {
                w.match_media("(prefers-reduced-motion: reduce)")
                    .ok()
                    .flatten()
            })
            .map(|mq| mq.matches())
            .unwrap_or(false)
    }

    /// Apply the theme inside `document.startViewTransition` when the browser
    /// has it, falling back to a plain attribute write. Skipped entirely under
    /// reduced-motion.
    pub fn apply_theme_with_transition(theme: Theme) {
        if prefers_reduced_motion() {
            apply_theme(theme);
            return;
        }

        let Some(document) = window().and_then(|w| w.document()) else {
            apply_theme(theme);
            return;
        };

        let document_js: JsValue = document.into();
        let Ok(start_view_transition) =
            Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
        else {
            apply_theme(theme);
            return;
        };

        let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
            apply_theme(theme);
            return;
        };

        let callback = Closure::<dyn FnMut()>::new(move || {
            apply_theme(theme);
        });

        if start_view_transition
            .call1(&document_js, callback.as_ref().unchecked_ref())
            .is_err()
        {
            apply_theme(theme);
        } else {
            // The browser invokes the callback after snapshotting; it must
            // outlive this call.
            callback.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::{apply_theme, apply_theme_with_transition};
