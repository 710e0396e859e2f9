use super::{card_frame, render_header};
use crate::models::settings::EventDetails;
use crate::services::countdown::{Countdown, CountdownTimer};
use crate::ui_egui::app::navigation::greeting;
use crate::ui_egui::theme::InvitationTheme;
use chrono::{Datelike, Local};
use egui::RichText;
use std::time::Instant;

const COUNTDOWN_VALUE_SIZE: f32 = 34.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvitationAction {
    None,
    OpenSurvey,
}

/// Landing page: greeting, event details and the live countdown.
pub struct InvitationView {
    guest_name: Option<String>,
    timer: CountdownTimer,
}

impl InvitationView {
    pub fn new(guest_name: Option<String>, event: &EventDetails) -> Self {
        Self {
            guest_name,
            timer: CountdownTimer::new(event.target_instant()),
        }
    }

    pub fn guest_name(&self) -> Option<&str> {
        self.guest_name.as_deref()
    }

    /// Recompute the countdown when due and schedule the next repaint.
    pub fn refresh_countdown(&mut self, ctx: &egui::Context) -> Countdown {
        let instant = Instant::now();
        self.timer.tick(instant, Local::now());
        ctx.request_repaint_after(self.timer.time_until_next_tick(instant));
        self.timer.current()
    }

    pub fn render(
        &mut self,
        ui: &mut egui::Ui,
        event: &EventDetails,
        theme: &InvitationTheme,
    ) -> InvitationAction {
        let countdown = self.refresh_countdown(ui.ctx());
        let mut action = InvitationAction::None;

        render_header(ui, &event.couple_names, theme);
        ui.add_space(12.0);

        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(greeting(self.guest_name()))
                    .size(20.0)
                    .italics(),
            );
            ui.add_space(8.0);
            ui.label(
                RichText::new(&event.couple_names)
                    .size(40.0)
                    .color(theme.accent)
                    .strong(),
            );
            ui.add_space(8.0);
            ui.label(RichText::new(&event.invitation_text).size(16.0));
            ui.add_space(12.0);
            ui.label(
                RichText::new(event.starts_at.format("%-d %B %Y").to_string())
                    .size(24.0)
                    .strong(),
            );
        });

        ui.add_space(16.0);
        render_countdown(ui, countdown, theme);
        ui.add_space(16.0);

        card_frame(theme).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("⏰ RSVP deadline").strong().size(18.0));
                ui.label(
                    RichText::new(format!("by {}", event.rsvp_deadline.format("%-d %B %Y")))
                        .color(theme.accent)
                        .size(18.0),
                );
                ui.label(
                    RichText::new("Please confirm your attendance\nby the date above")
                        .color(theme.text_secondary),
                );
            });
        });

        ui.add_space(12.0);
        ui.columns(3, |columns| {
            render_detail_card(&mut columns[0], "🕐 Schedule", &event.schedule, theme);
            render_detail_card(&mut columns[1], "📍 Venue", &event.venue, theme);
            render_detail_card(&mut columns[2], "👔 Dress code", &event.dress_code, theme);
        });

        if !event.special_requests.is_empty() {
            ui.add_space(16.0);
            ui.vertical_centered(|ui| {
                ui.heading("Important information");
            });
            ui.add_space(8.0);
            ui.columns(event.special_requests.len(), |columns| {
                for (column, request) in columns.iter_mut().zip(&event.special_requests) {
                    card_frame(theme).show(column, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(&request.icon).size(28.0));
                            ui.label(RichText::new(&request.title).strong());
                            ui.label(RichText::new(&request.text).color(theme.text_secondary));
                        });
                    });
                }
            });
        }

        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.heading("Confirm your attendance");
            ui.label(
                RichText::new(format!(
                    "Please fill in the form by {},\nso we can prepare everything",
                    event.rsvp_deadline.format("%-d %B %Y")
                ))
                .color(theme.text_secondary),
            );
            ui.add_space(8.0);
            let button = egui::Button::new(RichText::new("Fill in the form").strong().size(16.0))
                .fill(theme.accent)
                .min_size([220.0, 40.0].into());
            if ui.add(button).clicked() {
                action = InvitationAction::OpenSurvey;
            }
        });

        ui.add_space(24.0);
        render_footer(ui, &event.signature, theme);

        action
    }
}

fn render_countdown(ui: &mut egui::Ui, countdown: Countdown, theme: &InvitationTheme) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("Time left until the celebration:").size(16.0));
    });
    ui.add_space(6.0);

    let units = [
        (countdown.days, "days"),
        (countdown.hours, "hours"),
        (countdown.minutes, "minutes"),
        (countdown.seconds, "seconds"),
    ];

    ui.columns(units.len(), |columns| {
        for (column, (value, label)) in columns.iter_mut().zip(units) {
            column.vertical_centered(|ui| {
                ui.label(
                    RichText::new(value.to_string())
                        .size(COUNTDOWN_VALUE_SIZE)
                        .color(theme.accent)
                        .strong(),
                );
                ui.label(RichText::new(label).color(theme.text_secondary));
            });
        }
    });
}

fn render_detail_card(ui: &mut egui::Ui, title: &str, lines: &[String], theme: &InvitationTheme) {
    card_frame(theme).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(title).strong().size(16.0));
            ui.add_space(4.0);
            for line in lines {
                ui.label(line);
            }
        });
    });
}

fn render_footer(ui: &mut egui::Ui, signature: &str, theme: &InvitationTheme) {
    ui.separator();
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(signature).italics());
        ui.label(
            RichText::new(Local::now().year().to_string()).color(theme.text_secondary),
        );
    });
}
