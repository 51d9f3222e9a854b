//! Touch-driven single-axis carousel positioning engine.
//!
//! Given a sequence of same-sized panels inside a viewport, [`Slider`]
//! tracks a finger-drag gesture, computes the visual offset of the slide
//! track in real time, and on release decides which slide becomes current,
//! then drives an animated transition on its [`RenderSurface`]. The slider
//! owns positioning only; element creation, styling, and the actual
//! animation belong to the surface implementation.

pub mod slider;
pub mod surface;

pub use slider::{Slide, Slider};
pub use surface::RenderSurface;

// The types a host application needs alongside the slider itself.
pub use slidekit_core::{
    GesturePhase, SampleId, SliderSettings, TouchPhase, TouchSample,
};
pub use slidekit_geometry::{Axis, Point, Size};

pub mod prelude {
    pub use crate::slider::Slider;
    pub use crate::surface::RenderSurface;
    pub use slidekit_core::prelude::*;
    pub use slidekit_geometry::prelude::*;
}
