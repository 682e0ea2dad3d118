// Dioxus desktop UI: routes, screens and their view state
pub mod app;
pub mod components;
pub mod router;
pub mod state;
pub mod theme;
pub mod views;

pub use app::App;
