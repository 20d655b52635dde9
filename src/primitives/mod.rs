//! Rendering primitives shared by the tilt, scroll and reveal layers
//!
//! Each primitive is a small value type with a `to_css()`-style output.

#[macro_use]
pub mod bounded;
pub mod angle;
pub mod animation;
pub mod geometry;

pub use angle::Angle;
pub use animation::Entrance;
pub use geometry::{Point, Rect};
