//! Small geometric value types shared by the detection decoder.
//!
//! - [`Vector2`]: a generic 2-component vector over any numeric element type.
//! - [`BoundingBox`]: an axis-aligned box stored in center form.

pub mod bounding;
mod macros;
pub mod vector;

pub use bounding::BoundingBox;
pub use vector::Vector2;
