pub mod app;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod render;
pub mod shell;
pub mod views;
pub mod widgets;

pub use app::Planner;
pub use config::{AppConfig, ConfigError};
