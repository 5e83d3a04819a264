#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod ports;
mod presentation;


use iced::daemon;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_TITLE);

    daemon(
        app::PaletteApp::build,
        app::PaletteApp::handle_update,
        app::PaletteApp::render_view,
    )
    .subscription(app::PaletteApp::handle_subscription)
    .run()
}
