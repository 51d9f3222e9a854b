//! Testing utilities and headless gesture harness for Slidekit
//!
//! [`RecordingSurface`] stands in for a real rendering surface and records
//! every command a slider issues, so tests can assert on placements,
//! animations, and slide layout black-box style. [`TouchRobot`] drives a
//! slider with deterministic synthesized touch sequences: ordinals and
//! timestamps increase monotonically under the robot's own clock, never a
//! real one.

mod robot;
mod surface;

pub use robot::TouchRobot;
pub use surface::{RecordingSurface, SurfaceCommand};
