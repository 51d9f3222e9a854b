//! The slider component.
//!
//! [`Slider`] wires the gesture machine and the snap arithmetic to a
//! [`RenderSurface`]: it owns the slide list, the committed index, and the
//! last offset handed to the surface, and it services both touch input and
//! programmatic navigation. All state transitions happen synchronously
//! inside the handler that receives a sample or a completion signal.

use crate::surface::RenderSurface;
use slidekit_core::{
    live_drag_offset, resolve_drag, resolve_index, GestureEvent, GestureMachine, GesturePhase,
    SliderSettings, Snap, TouchSample, TrackState,
};
use slidekit_geometry::{Axis, TrackGeometry};
use smallvec::SmallVec;

/// One panel in the track. Slides are interchangeable, identically sized
/// units; the slider records the extent last applied so layout runs only
/// when something actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Slide {
    extent: f32,
    margin: f32,
}

impl Slide {
    /// Main-axis size last applied to this slide.
    pub fn extent(&self) -> f32 {
        self.extent
    }

    /// Trailing gap last applied to this slide; zero for the last slide.
    pub fn margin(&self) -> f32 {
        self.margin
    }
}

/// Touch-driven carousel positioning component.
///
/// The slider is single-threaded and event-driven: feed it raw samples via
/// [`handle_touch`](Slider::handle_touch), completion signals via
/// [`transition_finished`](Slider::transition_finished), and it drives the
/// surface in return. One gesture session is open at a time; everything
/// else is ignored, not queued.
pub struct Slider<S: RenderSurface> {
    surface: S,
    axis: Axis,
    settings: SliderSettings,
    viewport: f32,
    slides: SmallVec<[Slide; 8]>,
    current_index: usize,
    machine: GestureMachine,
    /// Signed px between the committed position and the live position.
    current_slide_offset: f32,
    /// Last absolute offset handed to the surface; settling is skipped when
    /// the resolved target equals this exactly.
    rendered_offset: f32,
}

impl<S: RenderSurface> Slider<S> {
    /// Creates an empty slider over `surface`, moving along `axis` inside a
    /// viewport of `viewport` pixels. Settings are sanitized here once.
    pub fn new(surface: S, axis: Axis, viewport: f32, settings: SliderSettings) -> Self {
        Self {
            surface,
            axis,
            settings: settings.sanitized(),
            viewport,
            slides: SmallVec::new(),
            current_index: 0,
            machine: GestureMachine::new(axis),
            current_slide_offset: 0.0,
            rendered_offset: 0.0,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn settings(&self) -> &SliderSettings {
        &self.settings
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Effective slides-per-view: the configured value capped by the slide
    /// count, so a slide's size is always positive.
    pub fn slides_per_view(&self) -> usize {
        self.settings.slides_per_view.min(self.slides.len())
    }

    pub fn phase(&self) -> GesturePhase {
        self.machine.phase()
    }

    /// Absolute track offset last handed to the surface.
    pub fn rendered_offset(&self) -> f32 {
        self.rendered_offset
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Appends a slide at the end of the track and re-runs layout.
    /// Appending can raise the effective slides-per-view, which resizes
    /// every slide; it never changes the stride once `current_index > 0`
    /// (the per-view count is already saturated by then), so the idle track
    /// stays aligned.
    pub fn append_slide(&mut self) -> usize {
        self.slides.push(Slide::default());
        self.relayout_slides();
        self.slides.len() - 1
    }

    /// Relative move to the next slide.
    pub fn next(&mut self) {
        self.slide_to(self.current_index as i64 + 1);
    }

    /// Relative move to the previous slide.
    pub fn previous(&mut self) {
        self.slide_to(self.current_index as i64 - 1);
    }

    /// Programmatic absolute move; `index` is clamped, never rejected.
    ///
    /// Serviced synchronously while idle by entering the settle path
    /// directly (no drag). A request that resolves to the position already
    /// rendered is a no-op with no state transition; a request issued
    /// mid-gesture is ignored.
    pub fn slide_to(&mut self, index: i64) {
        let snap = resolve_index(&self.track_state(), index);
        if snap.index == self.current_index && snap.track_offset == self.rendered_offset {
            return;
        }
        if !self.machine.begin_settling() {
            log::trace!(
                "slide_to({index}) ignored in {:?} phase",
                self.machine.phase()
            );
            return;
        }
        self.settle(snap);
    }

    /// Feeds one raw touch sample from the rendering surface.
    pub fn handle_touch(&mut self, sample: TouchSample) {
        if self.slides.is_empty() {
            return;
        }
        match self.machine.handle(&sample) {
            GestureEvent::None => {}
            GestureEvent::Drag { delta } => {
                let offset = live_drag_offset(
                    &self.track_state(),
                    delta,
                    self.settings.out_of_bounds_resistance,
                );
                self.current_slide_offset = offset;
                let total = self.geometry().track_offset(self.current_index) + offset;
                self.rendered_offset = total;
                self.surface.place_track(self.axis, total);
            }
            GestureEvent::Release { elapsed_ms } => {
                let snap = resolve_drag(
                    &self.track_state(),
                    self.current_slide_offset,
                    elapsed_ms,
                    &self.settings,
                );
                self.settle(snap);
            }
        }
    }

    /// Viewport resize notification.
    ///
    /// Layout re-runs unconditionally so an in-flight gesture computes
    /// against the new geometry; the settle to the re-aligned offset is
    /// serviced only while idle.
    pub fn resize(&mut self, viewport: f32) {
        self.viewport = viewport;
        self.relayout_slides();
        let snap = resolve_index(&self.track_state(), self.current_index as i64);
        if snap.track_offset == self.rendered_offset {
            return;
        }
        if self.machine.begin_settling() {
            self.settle(snap);
        }
    }

    /// Completion signal for an animated transition. Idempotent: duplicate
    /// or unexpected signals simply leave the slider idle.
    pub fn transition_finished(&mut self) {
        self.machine.finish_settling();
    }

    /// Commits `snap` optimistically and starts the animated transition,
    /// unless the target offset is already on screen.
    fn settle(&mut self, snap: Snap) {
        log::debug!("settling on slide {} at {}px", snap.index, snap.track_offset);
        self.current_index = snap.index;
        self.current_slide_offset = 0.0;
        if snap.track_offset == self.rendered_offset {
            self.machine.finish_settling();
            return;
        }
        self.rendered_offset = snap.track_offset;
        self.surface.animate_track(
            self.axis,
            snap.track_offset,
            self.settings.transition_duration_ms,
        );
    }

    fn geometry(&self) -> TrackGeometry {
        TrackGeometry::new(
            self.viewport,
            self.slides_per_view(),
            self.settings.space_between,
        )
    }

    fn track_state(&self) -> TrackState {
        TrackState {
            geometry: self.geometry(),
            current_index: self.current_index,
            slide_count: self.slides.len(),
        }
    }

    fn relayout_slides(&mut self) {
        let size = self.geometry().slide_size();
        let count = self.slides.len();
        for (index, slide) in self.slides.iter_mut().enumerate() {
            let margin = if index + 1 < count {
                self.settings.space_between
            } else {
                0.0
            };
            if slide.extent != size || slide.margin != margin {
                slide.extent = size;
                slide.margin = margin;
                self.surface.set_slide_extent(index, size, margin);
            }
        }
    }
}
