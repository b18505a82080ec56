#![allow(non_snake_case)]

mod app;
mod components;
mod theme;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    tracing_subscriber::fmt::init();

    // Phone-shaped window; the card is a fixed layout, so no resizing.
    let window_width = 420.0;
    let window_height = 760.0;

    tracing::info!("starting business card display");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Business Card")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(false),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
