mod lifecycle;
pub mod navigation;
mod toast;

use self::navigation::Route;
use self::toast::ToastManager;
use crate::models::settings::{AppConfig, EventDetails};
use crate::services::notifier::Notifier;
use crate::ui_egui::theme::InvitationTheme;
use crate::ui_egui::views::{InvitationView, SurveyView};

pub const MIN_ROOT_WIDTH: f32 = 640.0;
pub const MIN_ROOT_HEIGHT: f32 = 480.0;

/// The page currently on screen. Each page owns its state; replacing the
/// variant tears the old page down.
pub enum ActiveView {
    Invitation(InvitationView),
    Survey(SurveyView),
}

impl ActiveView {
    pub fn for_route(route: &Route, event: &EventDetails) -> Self {
        match route {
            Route::Invitation { guest_name } => {
                ActiveView::Invitation(InvitationView::new(guest_name.clone(), event))
            }
            Route::Survey => ActiveView::Survey(SurveyView::new()),
        }
    }
}

pub struct InvitationApp {
    /// Event details and UI preferences loaded at start-up
    config: AppConfig,
    /// Shared with submission worker threads
    notifier: Notifier,
    route: Route,
    view: ActiveView,
    /// Currently applied theme colors
    theme: InvitationTheme,
    toast_manager: ToastManager,
}

impl eframe::App for InvitationApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}

impl InvitationApp {
    pub fn route(&self) -> &Route {
        &self.route
    }
}
