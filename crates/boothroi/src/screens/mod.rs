pub mod benchmarks;
pub mod calculator;
pub mod exhibitor;

use crate::components::Component;

/// Trait for full screen views
pub trait Screen: Component {
    /// Get the screen title
    fn title(&self) -> &str;
}
