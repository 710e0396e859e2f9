//! Theme module for the invitation window
//!
//! Defines the InvitationTheme palette and applies it to the egui context.

use crate::models::settings::ThemePreference;
use egui::Color32;

/// Colors used by the invitation and survey views
#[derive(Debug, Clone, PartialEq)]
pub struct InvitationTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Window background color
    pub app_background: Color32,

    /// Background of detail/request cards
    pub card_background: Color32,

    /// Card border color
    pub card_border: Color32,

    /// Couple names, countdown values, primary buttons
    pub accent: Color32,

    /// Primary text color (headings, body)
    pub text_primary: Color32,

    /// Secondary text color (labels, hints)
    pub text_secondary: Color32,

    /// Inline validation/submission errors
    pub error: Color32,

    /// Success screen check mark
    pub success: Color32,
}

impl InvitationTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(252, 248, 243),
            card_background: Color32::from_rgb(255, 255, 255),
            card_border: Color32::from_rgb(230, 218, 204),
            accent: Color32::from_rgb(168, 120, 84),
            text_primary: Color32::from_rgb(60, 48, 40),
            text_secondary: Color32::from_rgb(120, 108, 98),
            error: Color32::from_rgb(180, 40, 40),
            success: Color32::from_rgb(30, 120, 50),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 28, 27),
            card_background: Color32::from_rgb(42, 39, 37),
            card_border: Color32::from_rgb(70, 63, 58),
            accent: Color32::from_rgb(214, 170, 130),
            text_primary: Color32::from_rgb(240, 234, 228),
            text_secondary: Color32::from_rgb(170, 160, 150),
            error: Color32::from_rgb(255, 120, 120),
            success: Color32::from_rgb(100, 220, 120),
        }
    }

    /// Resolve the configured preference, asking the OS when set to system
    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        visuals.widgets.noninteractive.bg_fill = self.card_background;
        visuals.widgets.inactive.bg_fill = self.card_background;
        visuals.selection.bg_fill = self.accent;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_theme() {
        let theme = InvitationTheme::light();
        assert!(!theme.is_dark);
        assert_eq!(theme.app_background, Color32::from_rgb(252, 248, 243));
    }

    #[test]
    fn test_dark_theme() {
        let theme = InvitationTheme::dark();
        assert!(theme.is_dark);
        assert_eq!(theme.app_background, Color32::from_rgb(30, 28, 27));
    }

    #[test]
    fn test_explicit_preferences() {
        assert_eq!(
            InvitationTheme::for_preference(ThemePreference::Dark),
            InvitationTheme::dark()
        );
        assert_eq!(
            InvitationTheme::for_preference(ThemePreference::Light),
            InvitationTheme::light()
        );
    }
}
