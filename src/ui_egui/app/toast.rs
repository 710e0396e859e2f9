//! Short-lived banners reporting how an RSVP submission went.
//!
//! Banners sit at the top centre of the window, newest first, and fade out
//! before they expire.

use std::time::{Duration, Instant};

use egui::{Align2, Color32, Context, RichText};

use crate::ui_egui::theme::InvitationTheme;

const BANNER_LIFETIME: Duration = Duration::from_millis(3500);
const FADE_OUT: Duration = Duration::from_millis(600);
const MAX_BANNERS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Delivered,
    Failed,
}

impl ToastKind {
    fn symbol(self) -> &'static str {
        match self {
            ToastKind::Delivered => "💌",
            ToastKind::Failed => "⚠",
        }
    }

    fn color(self, theme: &InvitationTheme) -> Color32 {
        match self {
            ToastKind::Delivered => theme.success,
            ToastKind::Failed => theme.error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub kind: ToastKind,
    shown_at: Instant,
    lifetime: Duration,
}

impl Toast {
    fn new(text: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            text: text.into(),
            kind,
            shown_at: Instant::now(),
            lifetime: BANNER_LIFETIME,
        }
    }

    fn remaining(&self, now: Instant) -> Duration {
        self.lifetime
            .saturating_sub(now.saturating_duration_since(self.shown_at))
    }

    /// 1.0 until the fade window, then linearly down to 0.0.
    fn alpha(&self, now: Instant) -> f32 {
        let remaining = self.remaining(now);
        if remaining >= FADE_OUT {
            1.0
        } else {
            remaining.as_secs_f32() / FADE_OUT.as_secs_f32()
        }
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(Toast::new(text, ToastKind::Delivered));
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(Toast::new(text, ToastKind::Failed));
    }

    fn push(&mut self, toast: Toast) {
        self.toasts.insert(0, toast);
        self.toasts.truncate(MAX_BANNERS);
    }

    fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| !toast.remaining(now).is_zero());
    }

    pub fn render(&mut self, ctx: &Context, theme: &InvitationTheme) {
        let now = Instant::now();
        self.prune(now);
        if self.toasts.is_empty() {
            return;
        }
        ctx.request_repaint();

        let mut offset = 16.0;
        for (index, toast) in self.toasts.iter().enumerate() {
            let alpha = toast.alpha(now);
            let tint = toast.kind.color(theme).gamma_multiply(alpha);
            let fill = theme.card_background.gamma_multiply(0.95 * alpha);

            let response = egui::Area::new(egui::Id::new(("rsvp_toast", index)))
                .anchor(Align2::CENTER_TOP, [0.0, offset])
                .order(egui::Order::Foreground)
                .interactable(false)
                .show(ctx, |ui| {
                    egui::Frame::none()
                        .fill(fill)
                        .stroke(egui::Stroke::new(1.5, tint))
                        .rounding(10.0)
                        .inner_margin(egui::Margin::symmetric(18.0, 10.0))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(toast.kind.symbol()).size(18.0));
                                ui.label(RichText::new(&toast.text).color(tint).strong());
                            });
                        });
                })
                .response;
            offset += response.rect.height() + 8.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_banner_is_fully_visible() {
        let toast = Toast::new("Sent", ToastKind::Delivered);
        assert_eq!(toast.alpha(toast.shown_at), 1.0);
    }

    #[test]
    fn test_banner_fades_then_expires() {
        let toast = Toast::new("Failed", ToastKind::Failed);
        let fading = toast.shown_at + BANNER_LIFETIME - FADE_OUT / 2;
        let alpha = toast.alpha(fading);
        assert!(alpha > 0.0 && alpha < 1.0);
        assert_eq!(toast.alpha(toast.shown_at + BANNER_LIFETIME), 0.0);
    }

    #[test]
    fn test_newest_first_and_capped() {
        let mut manager = ToastManager::new();
        for n in 0..5 {
            manager.error(format!("attempt {}", n));
        }
        manager.success("Sent");
        assert_eq!(manager.toasts.len(), MAX_BANNERS);
        assert_eq!(manager.toasts[0].kind, ToastKind::Delivered);
        assert_eq!(manager.toasts[1].text, "attempt 4");
    }

    #[test]
    fn test_prune_drops_expired() {
        let mut manager = ToastManager::new();
        manager.success("Sent");
        let later = manager.toasts[0].shown_at + BANNER_LIFETIME;
        manager.prune(later);
        assert!(manager.toasts.is_empty());
    }
}
