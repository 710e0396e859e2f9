pub mod invitation_view;
pub mod survey_state;
pub mod survey_view;

use crate::ui_egui::theme::InvitationTheme;
use egui::RichText;

pub use invitation_view::{InvitationAction, InvitationView};
pub use survey_state::{SubmissionEvent, SubmissionPhase, SurveyState, SUBMIT_FAILED_MESSAGE};
pub use survey_view::{SurveyAction, SurveyView};

/// Rounded card used for detail blocks and the form
pub(crate) fn card_frame(theme: &InvitationTheme) -> egui::Frame {
    egui::Frame::none()
        .fill(theme.card_background)
        .rounding(8.0)
        .inner_margin(egui::Margin::same(14.0))
        .stroke(egui::Stroke::new(1.0, theme.card_border))
}

/// Small header shared by both pages
pub(crate) fn render_header(ui: &mut egui::Ui, couple_names: &str, theme: &InvitationTheme) {
    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.label(
            RichText::new(format!("💍 {}", couple_names))
                .size(14.0)
                .color(theme.text_secondary),
        );
    });
}
