// Wedding Invitation Application
// Main entry point

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use wedding_invitation::services::notifier::Notifier;
use wedding_invitation::services::settings::SettingsService;
use wedding_invitation::ui_egui::{InvitationApp, Route, MIN_ROOT_HEIGHT, MIN_ROOT_WIDTH};

#[derive(Parser, Debug)]
#[command(name = "wedding-invitation", version, about = "Wedding invitation with RSVP form")]
struct Cli {
    /// Page to open, e.g. "/", "/?name=Ivan" or "/survey"
    #[arg(long, default_value = "/")]
    route: String,

    /// Config file (defaults to config.toml in the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::info!("Starting Wedding Invitation");

    let settings_service = SettingsService::new(cli.config);
    let config = settings_service
        .load()
        .context("Failed to load settings")?;

    let notifier = Notifier::telegram(config.telegram.clone())
        .context("Failed to set up the RSVP notifier")?;
    if !notifier.is_configured() {
        log::warn!(
            "Telegram credentials missing ({}); RSVP submissions will fail until configured",
            config.telegram.missing_fields().join(", ")
        );
    }

    let initial_route = Route::parse(&cli.route);
    let title = format!("{} · Wedding Invitation", config.event.couple_names);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([960.0, 800.0])
            .with_min_inner_size([MIN_ROOT_WIDTH, MIN_ROOT_HEIGHT]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            Ok(Box::new(InvitationApp::new(
                cc,
                config,
                notifier,
                initial_route,
            )))
        }),
    )
    .map_err(|err| anyhow!("Failed to run the invitation window: {}", err))
}
