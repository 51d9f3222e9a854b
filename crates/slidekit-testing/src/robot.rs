//! Deterministic gesture synthesis.

use crate::surface::RecordingSurface;
use slidekit::Slider;
use slidekit_core::{SampleId, SliderSettings, TouchPhase, TouchSample};
use slidekit_geometry::{Axis, Point};

/// Headless harness that wraps a [`Slider`] over a [`RecordingSurface`] and
/// drives it with synthesized touch sequences.
///
/// The robot owns a virtual clock and the sample ordinal counter: every
/// generated sample is newer than the last, and elapsed gesture time is
/// exactly what the test asked for. Nothing here reads a real clock.
pub struct TouchRobot {
    slider: Slider<RecordingSurface>,
    next_id: SampleId,
    clock_ms: u64,
}

impl TouchRobot {
    pub fn new(axis: Axis, viewport: f32, settings: SliderSettings) -> Self {
        Self {
            slider: Slider::new(RecordingSurface::new(), axis, viewport, settings),
            next_id: 0,
            clock_ms: 0,
        }
    }

    /// Convenience constructor that appends `slide_count` slides up front.
    pub fn with_slides(
        axis: Axis,
        viewport: f32,
        settings: SliderSettings,
        slide_count: usize,
    ) -> Self {
        let mut robot = Self::new(axis, viewport, settings);
        for _ in 0..slide_count {
            robot.slider.append_slide();
        }
        robot
    }

    pub fn slider(&self) -> &Slider<RecordingSurface> {
        &self.slider
    }

    pub fn slider_mut(&mut self) -> &mut Slider<RecordingSurface> {
        &mut self.slider
    }

    pub fn surface(&self) -> &RecordingSurface {
        self.slider.surface()
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn advance_clock(&mut self, ms: u64) {
        self.clock_ms += ms;
    }

    /// Feeds one sample with the next ordinal at the current clock.
    pub fn feed(&mut self, phase: TouchPhase, position: Point, contacts: usize) {
        self.next_id += 1;
        let sample = TouchSample::new(self.next_id, phase, position, self.clock_ms, contacts);
        self.slider.handle_touch(sample);
    }

    pub fn press(&mut self, x: f32, y: f32) {
        self.feed(TouchPhase::Start, Point::new(x, y), 1);
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.feed(TouchPhase::Move, Point::new(x, y), 1);
    }

    pub fn release(&mut self, x: f32, y: f32) {
        self.feed(TouchPhase::End, Point::new(x, y), 1);
    }

    pub fn cancel(&mut self, x: f32, y: f32) {
        self.feed(TouchPhase::Cancel, Point::new(x, y), 1);
    }

    /// Delivers the animation-complete signal a real surface would send
    /// once its transition ends.
    pub fn complete_transition(&mut self) {
        self.slider.transition_finished();
    }

    /// Full swipe from `from` to `to`: press, intermediate moves (the first
    /// decides the axis lock), release. The release sample lands exactly
    /// `duration_ms` after the press.
    pub fn swipe(&mut self, from: Point, to: Point, duration_ms: u64) {
        self.press(from.x, from.y);
        let step = duration_ms / 4;
        for fraction in [0.25f32, 0.5, 0.75] {
            self.advance_clock(step);
            self.move_to(
                from.x + (to.x - from.x) * fraction,
                from.y + (to.y - from.y) * fraction,
            );
        }
        self.advance_clock(duration_ms - 3 * step);
        self.move_to(to.x, to.y);
        self.release(to.x, to.y);
    }
}
