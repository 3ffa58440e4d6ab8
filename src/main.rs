#![cfg_attr(all(windows, feature = "windows_gui"), windows_subsystem = "windows")]

use randomizer::gui::RandomizerApp;
use randomizer::logging;
use randomizer::settings::{settings_path, Settings};
use randomizer::visibility::window_level;

use eframe::egui;

fn main() -> anyhow::Result<()> {
    let path = settings_path();
    let (settings, load_error) = match Settings::load(&path) {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    logging::init(settings.debug_logging, settings.log_path());
    if let Some(e) = load_error {
        tracing::warn!(path = %path.display(), error = %e, "settings unreadable; using defaults");
    }
    tracing::info!(path = %path.display(), "starting");

    let (width, height) = settings.window_size;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Randomizer")
            .with_inner_size([width as f32, height as f32])
            .with_min_inner_size([60.0, 40.0])
            .with_decorations(false)
            .with_taskbar(settings.show_in_taskbar)
            .with_window_level(window_level(settings.keep_on_top)),
        ..Default::default()
    };

    let app = RandomizerApp::new(settings, path);
    eframe::run_native(
        "Randomizer",
        native_options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| anyhow::anyhow!("failed to run window: {e}"))
}
