//! Platform-agnostic view logic for the home page. Nothing here renders.

pub mod format;
pub mod navigation;
pub mod pagination;
pub mod platform;
pub mod stats;
pub mod submission;
pub mod view_state;
