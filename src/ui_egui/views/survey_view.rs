use super::survey_state::{SubmissionEvent, SubmissionPhase, SurveyState};
use super::{card_frame, render_header};
use crate::models::rsvp::Choice;
use crate::services::notifier::Notifier;
use crate::ui_egui::theme::InvitationTheme;
use chrono::NaiveDate;
use egui::{RichText, TextEdit};
use std::time::Duration;

const FIELD_WIDTH: f32 = 320.0;
const POLL_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyAction {
    None,
    BackToInvitation,
}

/// RSVP form page
#[derive(Default)]
pub struct SurveyView {
    pub state: SurveyState,
}

impl SurveyView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick up a finished background submission, keeping the UI ticking
    /// while one is in flight.
    pub fn poll_submission(&mut self, ctx: &egui::Context) -> Option<SubmissionEvent> {
        let event = self.state.poll();
        if self.state.is_submitting() {
            ctx.request_repaint_after(POLL_INTERVAL);
        } else if event.is_some() {
            ctx.request_repaint();
        }
        event
    }

    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        couple_names: &str,
        rsvp_deadline: NaiveDate,
        notifier: &Notifier,
        theme: &InvitationTheme,
    ) -> SurveyAction {
        render_header(ui, couple_names, theme);
        ui.add_space(16.0);

        if self.state.phase() == SubmissionPhase::Success {
            return render_success(ui, theme);
        }

        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Confirm your attendance").size(26.0));
            ui.label(
                RichText::new(format!(
                    "Please fill in the form by {}",
                    rsvp_deadline.format("%-d %B %Y")
                ))
                .color(theme.text_secondary),
            );
        });
        ui.add_space(12.0);

        card_frame(theme).show(ui, |ui| {
            ui.set_max_width(FIELD_WIDTH + 40.0);
            self.render_form(ui, notifier, theme);
        });

        SurveyAction::None
    }

    fn render_form(&mut self, ui: &mut egui::Ui, notifier: &Notifier, theme: &InvitationTheme) {
        let editable = !self.state.is_submitting();
        let form = &mut self.state.form;

        ui.add_enabled_ui(editable, |ui| {
            ui.label("First name *");
            ui.add(
                TextEdit::singleline(&mut form.first_name)
                    .hint_text("Ivan")
                    .desired_width(FIELD_WIDTH),
            );
            ui.add_space(8.0);

            ui.label("Last name *");
            ui.add(
                TextEdit::singleline(&mut form.last_name)
                    .hint_text("Ivanov")
                    .desired_width(FIELD_WIDTH),
            );
            ui.add_space(8.0);

            ui.label("Will you be able to attend? *");
            ui.radio_value(&mut form.attending, Choice::Yes, "Yes, I'd love to come");
            ui.radio_value(&mut form.attending, Choice::No, "Unfortunately, I can't");

            if form.attending == Choice::Yes {
                ui.add_space(8.0);
                ui.label("Will you come with your partner? *");
                ui.radio_value(&mut form.companion, Choice::Yes, "Yes, with my partner");
                ui.radio_value(&mut form.companion, Choice::No, "No, I'll come alone");
            }
        });

        if let Some(error) = self.state.error() {
            ui.add_space(8.0);
            ui.colored_label(theme.error, error);
        }

        ui.add_space(12.0);
        let label = if self.state.is_submitting() {
            "Sending..."
        } else {
            "Confirm attendance"
        };
        let button = egui::Button::new(RichText::new(label).strong()).min_size([FIELD_WIDTH, 36.0].into());
        if ui.add_enabled(editable, button).clicked() && self.state.submit(notifier) {
            log::info!("Submitting RSVP");
        }
    }
}

fn render_success(ui: &mut egui::Ui, theme: &InvitationTheme) -> SurveyAction {
    let mut action = SurveyAction::None;
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("✓").size(48.0).color(theme.success));
        ui.heading(RichText::new("Thank you for your answer!").size(26.0));
        ui.label(
            RichText::new("We have received your reply and look forward to celebrating with you")
                .color(theme.text_secondary),
        );
        ui.add_space(16.0);
        if ui.button("Back to invitation").clicked() {
            action = SurveyAction::BackToInvitation;
        }
    });
    action
}
