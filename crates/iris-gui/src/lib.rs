pub mod app;
pub mod gui;
pub mod theme;

pub use app::{IrisApp, HEIGHT, WIDTH};
