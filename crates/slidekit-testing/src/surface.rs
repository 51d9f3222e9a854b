//! Recording surface for black-box slider tests.

use slidekit::RenderSurface;
use slidekit_geometry::Axis;

/// One command received from a slider, in issue order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceCommand {
    /// Immediate placement for a drag sample.
    Place { axis: Axis, offset: f32 },
    /// Animated transition for a settled or programmatic move.
    Animate {
        axis: Axis,
        offset: f32,
        duration_ms: u64,
    },
    /// Slide layout applied on append/resize.
    SlideExtent {
        index: usize,
        size: f32,
        margin: f32,
    },
}

/// A [`RenderSurface`] that renders nothing and remembers everything.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command received so far, in order.
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Offsets of all immediate placements, in order.
    pub fn placements(&self) -> Vec<f32> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                SurfaceCommand::Place { offset, .. } => Some(*offset),
                _ => None,
            })
            .collect()
    }

    /// The most recent animated transition, as (offset, duration).
    pub fn last_animation(&self) -> Option<(f32, u64)> {
        self.commands.iter().rev().find_map(|command| match command {
            SurfaceCommand::Animate {
                offset,
                duration_ms,
                ..
            } => Some((*offset, *duration_ms)),
            _ => None,
        })
    }

    pub fn animation_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, SurfaceCommand::Animate { .. }))
            .count()
    }

    /// The offset the surface would currently show: the last placement or
    /// animation target, whichever came later.
    pub fn last_offset(&self) -> Option<f32> {
        self.commands.iter().rev().find_map(|command| match command {
            SurfaceCommand::Place { offset, .. } => Some(*offset),
            SurfaceCommand::Animate { offset, .. } => Some(*offset),
            _ => None,
        })
    }
}

impl RenderSurface for RecordingSurface {
    fn place_track(&mut self, axis: Axis, offset: f32) {
        self.commands.push(SurfaceCommand::Place { axis, offset });
    }

    fn animate_track(&mut self, axis: Axis, offset: f32, duration_ms: u64) {
        self.commands.push(SurfaceCommand::Animate {
            axis,
            offset,
            duration_ms,
        });
    }

    fn set_slide_extent(&mut self, index: usize, size: f32, margin: f32) {
        self.commands.push(SurfaceCommand::SlideExtent {
            index,
            size,
            margin,
        });
    }
}
