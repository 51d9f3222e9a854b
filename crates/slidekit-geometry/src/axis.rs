//! Axis selection for single-axis gesture handling.
//!
//! A slider moves along exactly one axis. Instead of orientation-specific
//! slider variants, everything downstream is parameterized by this enum,
//! which exposes the capability set an orientation actually needs: picking
//! the main/cross component of a coordinate pair, and turning a main-axis
//! offset back into a translation pair for the rendering side.

use crate::geometry::{Point, Size};

/// Orientation of slider movement - horizontal or vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Component of `point` along this axis.
    pub fn main(&self, point: Point) -> f32 {
        match self {
            Axis::Horizontal => point.x,
            Axis::Vertical => point.y,
        }
    }

    /// Component of `point` across this axis.
    pub fn cross(&self, point: Point) -> f32 {
        match self {
            Axis::Horizontal => point.y,
            Axis::Vertical => point.x,
        }
    }

    /// Extent of `size` along this axis.
    pub fn main_extent(&self, size: Size) -> f32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    /// Builds the (x, y) translation pair that moves a track by `offset`
    /// along this axis.
    pub fn translation(&self, offset: f32) -> (f32, f32) {
        match self {
            Axis::Horizontal => (offset, 0.0),
            Axis::Vertical => (0.0, offset),
        }
    }
}
