#![warn(missing_debug_implementations)]

//! The scrawl-engine crate renders shapes by forwarding their descriptions to an output sink.

// Modules
pub mod renderer;

// Re-exports
pub use renderer::RenderError;
pub use renderer::Renderer;
