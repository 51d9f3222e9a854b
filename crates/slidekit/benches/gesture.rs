use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slidekit::{Axis, Point, RenderSurface, Slider, SliderSettings, TouchPhase, TouchSample};
use slidekit_core::{resolve_drag, TrackState};
use slidekit_geometry::TrackGeometry;

const MOVES_PER_GESTURE: usize = 60;

struct NullSurface;

impl RenderSurface for NullSurface {
    fn place_track(&mut self, _axis: Axis, _offset: f32) {}
    fn animate_track(&mut self, _axis: Axis, _offset: f32, _duration_ms: u64) {}
    fn set_slide_extent(&mut self, _index: usize, _size: f32, _margin: f32) {}
}

fn gesture_round_trip(c: &mut Criterion) {
    c.bench_function("gesture_round_trip", |b| {
        let mut slider = Slider::new(
            NullSurface,
            Axis::Horizontal,
            320.0,
            SliderSettings {
                slides_per_view: 2,
                space_between: 8.0,
                ..SliderSettings::default()
            },
        );
        for _ in 0..8 {
            slider.append_slide();
        }

        let mut next_id = 0u64;
        let mut uptime_ms = 0u64;
        b.iter(|| {
            next_id += 1;
            uptime_ms += 16;
            slider.handle_touch(TouchSample::new(
                next_id,
                TouchPhase::Start,
                Point::new(300.0, 40.0),
                uptime_ms,
                1,
            ));
            for step in 0..MOVES_PER_GESTURE {
                next_id += 1;
                uptime_ms += 4;
                slider.handle_touch(TouchSample::new(
                    next_id,
                    TouchPhase::Move,
                    black_box(Point::new(300.0 - step as f32 * 3.0, 40.0)),
                    uptime_ms,
                    1,
                ));
            }
            next_id += 1;
            uptime_ms += 4;
            slider.handle_touch(TouchSample::new(
                next_id,
                TouchPhase::End,
                Point::new(123.0, 40.0),
                uptime_ms,
                1,
            ));
            slider.transition_finished();
            black_box(slider.current_index())
        });
    });
}

fn snap_resolution(c: &mut Criterion) {
    let state = TrackState {
        geometry: TrackGeometry::new(320.0, 2, 8.0),
        current_index: 3,
        slide_count: 8,
    };
    let settings = SliderSettings::default();

    c.bench_function("snap_resolution", |b| {
        b.iter(|| {
            let mut index = 0usize;
            for raw in -40..40 {
                let offset = raw as f32 * 7.5;
                let snap = resolve_drag(&state, black_box(offset), 120, &settings);
                index += snap.index;
            }
            black_box(index)
        });
    });
}

criterion_group!(benches, gesture_round_trip, snap_resolution);
criterion_main!(benches);
