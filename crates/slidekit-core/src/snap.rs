//! Offset and snap arithmetic.
//!
//! Pure functions over track geometry and the committed position: the live
//! offset while a finger drags the track (with rubber-band resistance past
//! the ends), and the resolution of a released drag to a discrete slide
//! index and its exactly aligned offset.

use crate::settings::SliderSettings;
use slidekit_geometry::TrackGeometry;

/// Positional context a drag computes against: the track measurements, the
/// committed index, and how many slides there are to move across.
#[derive(Debug, Clone, Copy)]
pub struct TrackState {
    pub geometry: TrackGeometry,
    pub current_index: usize,
    pub slide_count: usize,
}

/// Largest committed index: the last position from which a full view of
/// slides is still available. Collapses to 0 when there are fewer slides
/// than fit in the viewport.
pub fn max_index(state: &TrackState) -> usize {
    state
        .slide_count
        .saturating_sub(state.geometry.slides_per_view())
}

/// Pixel offset from the committed position to the start edge of the track.
/// Always >= 0; dragging further than this is out of bounds.
fn offset_to_start(state: &TrackState) -> f32 {
    state.current_index as f32 * state.geometry.stride()
}

/// Pixel offset from the committed position to the end edge of the track.
/// Always <= 0 while the committed index is in range.
fn offset_to_end(state: &TrackState) -> f32 {
    let per_view = state.geometry.slides_per_view() as f32;
    (state.current_index as f32 + per_view - state.slide_count as f32) * state.geometry.stride()
}

/// Live track offset for a drag of `delta` pixels from gesture start.
///
/// Inside the track the finger is tracked 1:1. Once the drag would pull a
/// slide index outside `[0, slide_count - 1]` into the leading position,
/// the excess past the exact border distance is divided by `resistance`,
/// which produces the decelerating rubber-band feel instead of a hard stop.
pub fn live_drag_offset(state: &TrackState, delta: f32, resistance: f32) -> f32 {
    let geometry = &state.geometry;
    let per_view = geometry.slides_per_view() as f32;
    let index_delta = delta / geometry.viewport() * per_view;
    let direction_offset = if delta > 0.0 { per_view } else { 0.0 };
    let pulled = state.current_index as f32 - index_delta.ceil() + per_view - direction_offset;

    let before_start = pulled < 0.0;
    let after_end = pulled > state.slide_count as f32 - 1.0;
    if before_start || after_end {
        let to_border = if before_start {
            offset_to_start(state)
        } else {
            offset_to_end(state)
        };
        to_border + (delta - to_border) / resistance
    } else {
        delta
    }
}

/// Resolved landing position for a drag or a programmatic move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snap {
    pub index: usize,
    /// Absolute track offset that aligns `index` exactly, free of the
    /// sub-pixel drift a fractional drag leaves behind.
    pub track_offset: f32,
}

/// Resolves a finished drag to the slide the track should settle on.
///
/// The fractional number of dragged slides rounds toward the drag direction
/// once it crosses `delta_threshold` percent of a slide; a release faster
/// than `time_threshold_ms` that would otherwise round to zero still
/// commits one slide in the drag's direction. A single gesture commits at
/// most one slide either way.
pub fn resolve_drag(
    state: &TrackState,
    current_slide_offset: f32,
    elapsed_ms: u64,
    settings: &SliderSettings,
) -> Snap {
    let slides_offset = -current_slide_offset / state.geometry.slide_size();
    let next = slides_offset - slides_offset.floor() > settings.delta_threshold / 100.0;
    let mut steps = slides_offset.floor() as i64 + i64::from(next);
    if steps == 0 && elapsed_ms < settings.time_threshold_ms {
        steps = if current_slide_offset > 0.0 { -1 } else { 1 };
    }
    let steps = steps.clamp(-1, 1);

    resolve_index(state, state.current_index as i64 + steps)
}

/// Clamps a requested index into the valid range and yields its aligned
/// offset. Out-of-range requests are serviced, never rejected.
pub fn resolve_index(state: &TrackState, index: i64) -> Snap {
    let index = index.clamp(0, max_index(state) as i64) as usize;
    Snap {
        index,
        track_offset: state.geometry.track_offset(index),
    }
}
