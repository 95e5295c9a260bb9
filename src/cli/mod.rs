//! CLI command handlers.

mod render;

pub use render::run_render;
