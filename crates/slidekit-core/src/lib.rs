//! Gesture state machine and offset/snap arithmetic for Slidekit
//!
//! This crate holds the algorithmic heart of the engine and nothing else:
//! raw touch sample types, the per-gesture state machine with axis locking,
//! and the pure arithmetic that turns pixel deltas into live track offsets
//! and released drags into discrete slide positions. It renders nothing and
//! never reads a clock; every timestamp comes in on a sample.

pub mod gesture;
pub mod input;
pub mod settings;
pub mod snap;

pub use gesture::{GestureEvent, GestureMachine, GesturePhase};
pub use input::{SampleId, TouchPhase, TouchSample};
pub use settings::SliderSettings;
pub use snap::{live_drag_offset, max_index, resolve_drag, resolve_index, Snap, TrackState};

pub mod prelude {
    pub use crate::gesture::{GestureEvent, GestureMachine, GesturePhase};
    pub use crate::input::{SampleId, TouchPhase, TouchSample};
    pub use crate::settings::SliderSettings;
    pub use crate::snap::{Snap, TrackState};
}
