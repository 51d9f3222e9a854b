//! Slider tuning options.

/// Tuning options for a slider instance.
///
/// All fields are optional at the call site via struct update syntax over
/// [`Default`]. Values are sanitized once at the construction boundary
/// ([`SliderSettings::sanitized`]); the arithmetic downstream assumes the
/// sanitized ranges and never re-validates.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderSettings {
    /// Number of fully visible slides at once.
    pub slides_per_view: usize,
    /// Pixel gap between adjacent slides.
    pub space_between: f32,
    /// Percentage of one slide's size that must be crossed to commit to the
    /// next slide.
    pub delta_threshold: f32,
    /// Maximum gesture duration for the quick-flick override.
    pub time_threshold_ms: u64,
    /// Divisor applied to drag distance beyond the first/last slide.
    pub out_of_bounds_resistance: f32,
    /// Animation duration for programmatic and settled moves.
    pub transition_duration_ms: u64,
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            slides_per_view: 1,
            space_between: 0.0,
            delta_threshold: 50.0,
            time_threshold_ms: 300,
            out_of_bounds_resistance: 5.0,
            transition_duration_ms: 200,
        }
    }
}

impl SliderSettings {
    /// Clamps every field into the range the engine is defined over.
    pub fn sanitized(mut self) -> Self {
        self.slides_per_view = self.slides_per_view.max(1);
        self.space_between = self.space_between.max(0.0);
        self.delta_threshold = self.delta_threshold.clamp(0.0, 100.0);
        self.out_of_bounds_resistance = self.out_of_bounds_resistance.max(1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_table() {
        let settings = SliderSettings::default();
        assert_eq!(settings.slides_per_view, 1);
        assert_eq!(settings.space_between, 0.0);
        assert_eq!(settings.delta_threshold, 50.0);
        assert_eq!(settings.time_threshold_ms, 300);
        assert_eq!(settings.out_of_bounds_resistance, 5.0);
        assert_eq!(settings.transition_duration_ms, 200);
    }

    #[test]
    fn sanitized_lifts_degenerate_values() {
        let settings = SliderSettings {
            slides_per_view: 0,
            space_between: -4.0,
            delta_threshold: 250.0,
            out_of_bounds_resistance: 0.0,
            ..SliderSettings::default()
        }
        .sanitized();

        assert_eq!(settings.slides_per_view, 1);
        assert_eq!(settings.space_between, 0.0);
        assert_eq!(settings.delta_threshold, 100.0);
        assert_eq!(settings.out_of_bounds_resistance, 1.0);
    }
}
