//! Static project registry rendered as the link list.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::theme::Theme;

/// Media shown when a project is previewed. A record carries exactly one
/// kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Media {
    Image(&'static str),
    Video(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub name: &'static str,
    pub year: Option<&'static str>,
    pub link: &'static str,
    pub media: Media,
}

/// Display order is the slice order.
pub const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        name: "Gauri Cooks",
        year: Some("2025"),
        link: "https://github.com/thenakulmistry/chefV1",
        media: Media::Image("/assets/gauri-cooks.png"),
    },
    ProjectRecord {
        name: "SpotifyTUI",
        year: Some("2025"),
        link: "https://github.com/thenakulmistry/spotifyTUI",
        media: Media::Image("/assets/spotify-tui.png"),
    },
    ProjectRecord {
        name: "AI Trading Simulator",
        year: Some("2025"),
        link: "https://github.com/thenakulmistry/RetroTrade",
        media: Media::Video("/assets/ponke-ponkesol.mp4"),
    },
    ProjectRecord {
        name: "Resume",
        year: None,
        link: "/assets/resume.pdf",
        media: Media::Image("/assets/resume-photo.jpg"),
    },
];

/// Call-to-action label for the mobile modal's outbound link.
pub fn cta_label(record: &ProjectRecord) -> &'static str {
    if record.name == "Resume" {
        "View Resume"
    } else {
        "View Project"
    }
}

/// The handwritten hero annotation has a dark-safe variant.
pub fn handwritten_note_src(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "/assets/mostly-backend.png",
        Theme::Dark => "/assets/mostly-backend-white.png",
    }
}
