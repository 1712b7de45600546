mod app_state;
mod screen_state;
mod tabs;
mod text_input;

// Re-export all types from submodules
pub use app_state::*;
pub use screen_state::*;
pub use tabs::*;
pub use text_input::*;
