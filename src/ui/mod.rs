//! UI module for egui-based user interface.

pub mod format;
pub mod screens;
pub mod theme;
pub mod widgets;

pub use theme::Theme;
