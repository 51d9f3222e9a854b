//! Per-gesture state machine with axis locking.
//!
//! One machine instance lives inside each slider. It consumes raw touch
//! samples, decides once per gesture whether the movement counts as a swipe
//! on the slider's axis, and reports the externally visible effect of every
//! sample as a [`GestureEvent`]. It performs no offset arithmetic itself;
//! that lives in [`crate::snap`].

use crate::input::{SampleId, TouchPhase, TouchSample};
use slidekit_geometry::{Axis, Point};

/// Phases of the touch gesture lifecycle.
///
/// `Idle → Pressed → Dragging → Settling → Idle` for a completed swipe;
/// `Pressed → Idle` when the finger lifts before the axis lock decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// No active gesture.
    Idle,
    /// Contact is down, axis lock still undecided.
    Pressed,
    /// Axis lock passed; every move tracks the finger 1:1.
    Dragging,
    /// Released; waiting for the settle animation to finish.
    Settling,
}

/// Ephemeral data captured on first contact, destroyed on resolution.
#[derive(Debug, Clone, Copy)]
struct GestureSession {
    start: Point,
    start_uptime_ms: u64,
    last_sample_id: SampleId,
}

/// Externally visible effect of feeding one sample to the machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Sample consumed or dropped with no visual effect.
    None,
    /// Live drag update; `delta` is the main-axis distance from gesture
    /// start in pixels.
    Drag { delta: f32 },
    /// A locked drag ended (release and cancel are identical); snap
    /// resolution runs exactly once per gesture.
    Release { elapsed_ms: u64 },
}

pub struct GestureMachine {
    axis: Axis,
    phase: GesturePhase,
    session: Option<GestureSession>,
}

impl GestureMachine {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            phase: GesturePhase::Idle,
            session: None,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Feeds one raw sample through the machine.
    ///
    /// Samples that arrive in an unexpected state are ignored, never fatal:
    /// a move with no open session, a second contact while one is active, a
    /// start sample mid-gesture. Within a session, sample ordinals must
    /// increase; anything else is dropped.
    pub fn handle(&mut self, sample: &TouchSample) -> GestureEvent {
        match sample.phase {
            TouchPhase::Start => {
                if self.phase == GesturePhase::Idle && sample.contacts == 1 {
                    self.session = Some(GestureSession {
                        start: sample.position,
                        start_uptime_ms: sample.uptime_ms,
                        last_sample_id: sample.id,
                    });
                    self.phase = GesturePhase::Pressed;
                }
                GestureEvent::None
            }
            TouchPhase::Move => {
                if sample.contacts != 1 {
                    return GestureEvent::None;
                }
                let axis = self.axis;
                let Some(session) = self.session.as_mut() else {
                    return GestureEvent::None;
                };
                if sample.id <= session.last_sample_id {
                    log::trace!(
                        "dropping stale sample {} (last processed {})",
                        sample.id,
                        session.last_sample_id
                    );
                    return GestureEvent::None;
                }
                session.last_sample_id = sample.id;
                let delta = sample.position - session.start;
                match self.phase {
                    GesturePhase::Pressed => {
                        // Main axis must dominate, otherwise the gesture
                        // belongs to whatever scrolls on the cross axis.
                        if axis.main(delta).abs() > axis.cross(delta).abs() {
                            self.phase = GesturePhase::Dragging;
                            log::trace!("drag locked on {:?} axis", axis);
                        }
                        // The locking move itself produces no offset update.
                        GestureEvent::None
                    }
                    GesturePhase::Dragging => GestureEvent::Drag {
                        delta: axis.main(delta),
                    },
                    _ => GestureEvent::None,
                }
            }
            TouchPhase::End | TouchPhase::Cancel => match self.phase {
                GesturePhase::Pressed => {
                    self.session = None;
                    self.phase = GesturePhase::Idle;
                    GestureEvent::None
                }
                GesturePhase::Dragging => {
                    let elapsed_ms = self
                        .session
                        .take()
                        .map(|session| sample.uptime_ms.saturating_sub(session.start_uptime_ms))
                        .unwrap_or(0);
                    self.phase = GesturePhase::Settling;
                    GestureEvent::Release { elapsed_ms }
                }
                _ => GestureEvent::None,
            },
        }
    }

    /// Enters `Settling` for a programmatic move issued while idle.
    ///
    /// Returns `false` (and does nothing) in any other phase.
    pub fn begin_settling(&mut self) -> bool {
        if self.phase == GesturePhase::Idle {
            self.phase = GesturePhase::Settling;
            true
        } else {
            false
        }
    }

    /// Animation-complete signal from the rendering surface.
    ///
    /// Idempotent: duplicate signals, or signals with no settle in flight,
    /// are no-ops.
    pub fn finish_settling(&mut self) {
        if self.phase == GesturePhase::Settling {
            self.phase = GesturePhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: SampleId, phase: TouchPhase, x: f32, y: f32, uptime_ms: u64) -> TouchSample {
        TouchSample::new(id, phase, Point::new(x, y), uptime_ms, 1)
    }

    fn locked_machine() -> GestureMachine {
        let mut machine = GestureMachine::new(Axis::Horizontal);
        machine.handle(&sample(1, TouchPhase::Start, 100.0, 100.0, 0));
        machine.handle(&sample(2, TouchPhase::Move, 90.0, 101.0, 16));
        assert_eq!(machine.phase(), GesturePhase::Dragging);
        machine
    }

    #[test]
    fn start_sample_opens_a_session() {
        let mut machine = GestureMachine::new(Axis::Horizontal);
        assert_eq!(machine.phase(), GesturePhase::Idle);

        let event = machine.handle(&sample(1, TouchPhase::Start, 100.0, 100.0, 0));
        assert_eq!(event, GestureEvent::None);
        assert_eq!(machine.phase(), GesturePhase::Pressed);
    }

    #[test]
    fn multi_contact_start_is_ignored() {
        let mut machine = GestureMachine::new(Axis::Horizontal);
        let two_fingers = TouchSample::new(1, TouchPhase::Start, Point::new(100.0, 100.0), 0, 2);
        machine.handle(&two_fingers);
        assert_eq!(machine.phase(), GesturePhase::Idle);
    }

    #[test]
    fn start_during_active_gesture_is_ignored() {
        let mut machine = locked_machine();
        machine.handle(&sample(3, TouchPhase::Start, 10.0, 10.0, 32));
        assert_eq!(machine.phase(), GesturePhase::Dragging);
    }

    #[test]
    fn cross_axis_movement_never_locks() {
        let mut machine = GestureMachine::new(Axis::Horizontal);
        machine.handle(&sample(1, TouchPhase::Start, 100.0, 100.0, 0));
        machine.handle(&sample(2, TouchPhase::Move, 102.0, 140.0, 16));
        assert_eq!(
            machine.phase(),
            GesturePhase::Pressed,
            "vertical movement must not hijack a horizontal slider"
        );

        machine.handle(&sample(3, TouchPhase::End, 102.0, 160.0, 32));
        assert_eq!(machine.phase(), GesturePhase::Idle);
    }

    #[test]
    fn vertical_machine_locks_on_vertical_movement() {
        let mut machine = GestureMachine::new(Axis::Vertical);
        machine.handle(&sample(1, TouchPhase::Start, 100.0, 100.0, 0));
        machine.handle(&sample(2, TouchPhase::Move, 101.0, 130.0, 16));
        assert_eq!(machine.phase(), GesturePhase::Dragging);
    }

    #[test]
    fn locking_move_emits_no_drag() {
        let mut machine = GestureMachine::new(Axis::Horizontal);
        machine.handle(&sample(1, TouchPhase::Start, 100.0, 100.0, 0));
        let event = machine.handle(&sample(2, TouchPhase::Move, 60.0, 100.0, 16));
        assert_eq!(event, GestureEvent::None);

        let event = machine.handle(&sample(3, TouchPhase::Move, 50.0, 100.0, 32));
        assert_eq!(event, GestureEvent::Drag { delta: -50.0 });
    }

    #[test]
    fn release_reports_elapsed_time_from_samples() {
        let mut machine = locked_machine();
        let event = machine.handle(&sample(3, TouchPhase::End, 90.0, 101.0, 120));
        assert_eq!(event, GestureEvent::Release { elapsed_ms: 120 });
        assert_eq!(machine.phase(), GesturePhase::Settling);
    }

    #[test]
    fn cancel_is_treated_as_release() {
        let mut machine = locked_machine();
        let event = machine.handle(&sample(3, TouchPhase::Cancel, 90.0, 101.0, 80));
        assert_eq!(event, GestureEvent::Release { elapsed_ms: 80 });
        assert_eq!(machine.phase(), GesturePhase::Settling);
    }

    #[test]
    fn move_without_session_is_ignored() {
        let mut machine = GestureMachine::new(Axis::Horizontal);
        let event = machine.handle(&sample(1, TouchPhase::Move, 50.0, 50.0, 0));
        assert_eq!(event, GestureEvent::None);
        assert_eq!(machine.phase(), GesturePhase::Idle);
    }

    #[test]
    fn end_without_session_is_ignored() {
        let mut machine = GestureMachine::new(Axis::Horizontal);
        let event = machine.handle(&sample(1, TouchPhase::End, 50.0, 50.0, 0));
        assert_eq!(event, GestureEvent::None);
        assert_eq!(machine.phase(), GesturePhase::Idle);
    }

    #[test]
    fn stale_ordinals_are_dropped() {
        let mut machine = locked_machine();
        let event = machine.handle(&sample(2, TouchPhase::Move, 10.0, 100.0, 48));
        assert_eq!(event, GestureEvent::None, "replayed ordinal must not move the track");
    }

    #[test]
    fn multi_contact_move_is_ignored_mid_drag() {
        let mut machine = locked_machine();
        let pinch = TouchSample::new(5, TouchPhase::Move, Point::new(10.0, 100.0), 48, 2);
        assert_eq!(machine.handle(&pinch), GestureEvent::None);
        assert_eq!(machine.phase(), GesturePhase::Dragging);
    }

    #[test]
    fn settling_signals_are_idempotent() {
        let mut machine = locked_machine();
        machine.handle(&sample(3, TouchPhase::End, 90.0, 101.0, 100));
        assert_eq!(machine.phase(), GesturePhase::Settling);

        machine.finish_settling();
        assert_eq!(machine.phase(), GesturePhase::Idle);
        machine.finish_settling();
        assert_eq!(machine.phase(), GesturePhase::Idle);
    }

    #[test]
    fn late_completion_signal_does_not_kill_a_live_gesture() {
        let mut machine = locked_machine();
        machine.finish_settling();
        assert_eq!(machine.phase(), GesturePhase::Dragging);
    }

    #[test]
    fn begin_settling_requires_idle() {
        let mut machine = GestureMachine::new(Axis::Horizontal);
        assert!(machine.begin_settling());
        assert_eq!(machine.phase(), GesturePhase::Settling);
        assert!(!machine.begin_settling());

        let mut dragging = locked_machine();
        assert!(!dragging.begin_settling());
        assert_eq!(dragging.phase(), GesturePhase::Dragging);
    }
}
