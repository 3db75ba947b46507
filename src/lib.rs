pub mod app;
pub use app::run;

pub mod activate;
pub mod config;
pub mod model;
pub mod tray;
pub mod window;

// Platform abstraction layer
pub mod platform;

// UI modules (cross-platform)
pub mod ui {
    pub mod icon;
    pub mod menu;
}
