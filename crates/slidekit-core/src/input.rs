//! Raw touch sample types consumed from the rendering surface.

use slidekit_geometry::Point;

pub type SampleId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// One raw sample delivered by the rendering surface.
///
/// `id` is the event ordinal: the surface hands samples out in order, and
/// the machine drops anything that is not newer than the last one it
/// processed. `contacts` is the number of concurrent touch contacts at the
/// time of the event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSample {
    pub id: SampleId,
    pub phase: TouchPhase,
    pub position: Point,
    pub uptime_ms: u64,
    pub contacts: usize,
}

impl TouchSample {
    pub fn new(
        id: SampleId,
        phase: TouchPhase,
        position: Point,
        uptime_ms: u64,
        contacts: usize,
    ) -> Self {
        Self {
            id,
            phase,
            position,
            uptime_ms,
            contacts,
        }
    }
}
