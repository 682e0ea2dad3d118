use anyhow::Result;
use dioxus_desktop::{Config, WindowBuilder};
use std::any::Any;

use projex::config::AppConfig;
use projex::ui_dioxus::App;

fn main() -> Result<()> {
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .init();

    tracing::info!(
        user = %config.user.id,
        theme = ?config.theme,
        comment_delay_ms = config.comment_delay_ms,
        "Starting projex"
    );

    let window = WindowBuilder::new().with_title(config.window_title.clone());
    let contexts: Vec<Box<dyn Fn() -> Box<dyn Any>>> =
        vec![Box::new(move || Box::new(config.clone()) as Box<dyn Any>)];

    dioxus_desktop::launch::launch(App, contexts, Config::new().with_window(window));
    Ok(())
}
