//! Platform-neutral helpers: configuration, formatting and timers.

pub mod config;
pub mod format;
pub mod timing;

pub use config::{Margin, StoryConfig};
