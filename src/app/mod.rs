mod app_events;
mod app_render;
mod app_state;

// Re-export public types
pub use app_state::{App, FieldPane};
