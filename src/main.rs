#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;

use iced::daemon;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting Book Search application");

    daemon(
        app::BookSearchApp::build,
        app::BookSearchApp::handle_update,
        app::BookSearchApp::render_view,
    )
    .title(app::BookSearchApp::window_title)
    .subscription(app::BookSearchApp::handle_subscription)
    .run()
}
