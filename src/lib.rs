pub mod config;
pub mod domain;
pub mod repository;
pub mod services;
pub mod ui_dioxus;
