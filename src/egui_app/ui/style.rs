//! Shared palette and status tones for the UI.

use eframe::egui::Color32;

/// Severity of a status-bar message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    /// Routine information.
    Info,
    /// Something the user may want to look at.
    Warning,
    /// A failure the user should know about.
    Error,
}

/// Text colors shared across panels.
pub struct Palette {
    /// Primary label color.
    pub text_primary: Color32,
    /// Dimmed color for secondary labels.
    pub text_muted: Color32,
}

/// The application palette.
pub fn palette() -> Palette {
    Palette {
        text_primary: Color32::from_rgb(230, 230, 230),
        text_muted: Color32::from_rgb(150, 150, 150),
    }
}

/// Badge color for a status tone.
pub fn status_color(tone: StatusTone) -> Color32 {
    match tone {
        StatusTone::Info => Color32::from_rgb(110, 190, 255),
        StatusTone::Warning => Color32::from_rgb(235, 190, 80),
        StatusTone::Error => Color32::from_rgb(235, 100, 100),
    }
}
