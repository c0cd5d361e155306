//! Desktop output window for outpane.
//!
//! Hosts a [`outpane_core::BufferRegistry`] inside an egui window: pane
//! picker, display toggles, copy/clear/save commands and the rfd save dialog.

mod app;
mod listeners;
mod picker;

use app::OutputWindowApp;
use eframe::egui;
use outpane_core::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("outpane_core=info,outpane_gui=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

/// Start the output window with tracing enabled.
///
/// # Errors
/// Propagates any `eframe` initialization or runtime error.
pub fn run() -> eframe::Result<()> {
    init_tracing();

    let config = Config::from_env();
    info!(
        "output settings at {} (ephemeral: {})",
        config.settings_path.display(),
        config.ephemeral_settings
    );
    let app = OutputWindowApp::new(&config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title("Output"),
        ..Default::default()
    };

    eframe::run_native(
        "outpane",
        options,
        Box::new(|cc| {
            // Ctrl/Cmd +/- zoom the active pane, not the whole UI.
            cc.egui_ctx.options_mut(|options| options.zoom_with_keyboard = false);
            Ok(Box::new(app))
        }),
    )
}
