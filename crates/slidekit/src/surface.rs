//! Rendering surface seam.

use slidekit_geometry::Axis;

/// Rendering-side collaborator driven by a [`Slider`](crate::Slider).
///
/// The engine computes offsets; the surface owns elements, styling, and the
/// actual transition. After an [`animate_track`](RenderSurface::animate_track)
/// completes, the surface must deliver
/// [`Slider::transition_finished`](crate::Slider::transition_finished); a
/// duplicate or missed signal is tolerated, never fatal.
pub trait RenderSurface {
    /// Paints the track at `offset` immediately, with no transition. Called
    /// for every drag sample, so it must be cheap.
    ///
    /// `offset` is the absolute main-axis translation of the track;
    /// [`Axis::translation`] turns it into an (x, y) pair.
    fn place_track(&mut self, axis: Axis, offset: f32);

    /// Animates the track from wherever it currently is to `offset` over
    /// `duration_ms`.
    fn animate_track(&mut self, axis: Axis, offset: f32, duration_ms: u64);

    /// Applies the computed main-axis `size` and trailing `margin` of the
    /// slide at `index`.
    fn set_slide_extent(&mut self, index: usize, size: f32, margin: f32);
}
