#![warn(missing_debug_implementations)]
#![warn(missing_docs)]

//! the scrawl-compose crate provides scrawl with building blocks for creating and describing shapes.

// Modules
/// module for shapes
pub mod shapes;

// Re-exports
pub use shapes::Drawable;
pub use shapes::Shape;

// Renames
extern crate nalgebra as na;
