use super::navigation::Route;
use super::toast::ToastManager;
use super::{ActiveView, InvitationApp};
use crate::models::settings::AppConfig;
use crate::services::notifier::Notifier;
use crate::ui_egui::theme::InvitationTheme;
use crate::ui_egui::views::{InvitationAction, SubmissionEvent, SurveyAction};

impl InvitationApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        notifier: Notifier,
        initial_route: Route,
    ) -> Self {
        let theme = InvitationTheme::for_preference(config.ui.theme);
        theme.apply_to_context(&cc.egui_ctx);
        log::info!(
            "Theme: {}",
            if theme.is_dark { "dark" } else { "light" }
        );

        let view = ActiveView::for_route(&initial_route, &config.event);
        log::info!("Opening {}", initial_route.path());

        Self {
            config,
            notifier,
            route: initial_route,
            view,
            theme,
            toast_manager: ToastManager::new(),
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_submission(ctx);

        let mut next_route: Option<Route> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.set_max_width(ui.available_width().min(900.0));
                    match &mut self.view {
                        ActiveView::Invitation(view) => {
                            if view.render(ui, &self.config.event, &self.theme)
                                == InvitationAction::OpenSurvey
                            {
                                next_route = Some(Route::Survey);
                            }
                        }
                        ActiveView::Survey(view) => {
                            let action = view.render(
                                ui,
                                &self.config.event.couple_names,
                                self.config.event.rsvp_deadline,
                                &self.notifier,
                                &self.theme,
                            );
                            if action == SurveyAction::BackToInvitation {
                                next_route = Some(Route::default());
                            }
                        }
                    }
                });
        });

        if let Some(route) = next_route {
            self.navigate(route);
            ctx.request_repaint();
        }

        // Render toast notifications (last, so they appear on top)
        self.toast_manager.render(ctx, &self.theme);
    }

    fn poll_submission(&mut self, ctx: &egui::Context) {
        let ActiveView::Survey(view) = &mut self.view else {
            return;
        };

        match view.poll_submission(ctx) {
            Some(SubmissionEvent::Delivered) => {
                self.toast_manager.success("Your answer has been sent");
            }
            Some(SubmissionEvent::Failed) => {
                self.toast_manager.error("Sending failed");
            }
            None => {}
        }
    }
}
