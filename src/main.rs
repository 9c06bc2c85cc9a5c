#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // no console window in release
// Entry point stays minimal: logger, config, window options, then hand over to the app.

use eframe::egui;

mod app;
mod logger;
mod types;
mod ui_constants;
mod views;

const WINDOW_TITLE: &str = "Counter Card";

fn main() -> eframe::Result<()> {
    logger::init();
    app::config::load_config_from_disk();

    let cfg = app::config::with_config(|c| c.clone());
    logger::open_log_file(&cfg.log_file);
    log::info!(
        "starting with {}x{} window, {} theme",
        cfg.window_width,
        cfg.window_height,
        cfg.theme
    );

    let native_options = eframe::NativeOptions {
        renderer: eframe::Renderer::Wgpu,
        hardware_acceleration: eframe::HardwareAcceleration::Preferred,
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(cfg.window_size())
            .with_resizable(cfg.resizable),
        ..Default::default()
    };

    let theme = cfg.theme;
    let res = eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |cc| {
            app::apply_theme(&cc.egui_ctx, theme);
            Box::new(app::CounterApp::new(theme))
        }),
    );
    if let Err(ref e) = res {
        log::error!("eframe::run_native failed: {e}");
    }
    res
}
