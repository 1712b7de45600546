//! Terminal front-end for the trade show ROI calculator
//!
//! Interactive ratatui UI over a `boothroi_core::Session`, plus headless
//! report, export and sweep commands.

pub mod app;
pub mod commands;
pub mod components;
pub mod data;
pub mod logging;
pub mod screens;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
