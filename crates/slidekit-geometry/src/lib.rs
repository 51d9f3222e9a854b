//! Pure math/data for slide track measurement in Slidekit
//!
//! This crate contains the geometric primitives, the axis abstraction, and
//! the slide track arithmetic that the rest of the engine builds on. It has
//! no dependencies and no state.

mod axis;
mod geometry;
mod track;

pub use axis::*;
pub use geometry::*;
pub use track::*;

pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::geometry::{Point, Size};
    pub use crate::track::TrackGeometry;
}
