//! Wave model and the pure height function.

use glam::Vec2;

use crate::color::ColorStop;
use crate::options::{ProximityOptions, WaveSpec};

/// One layered sinusoidal band.
///
/// Shape parameters are fixed at creation. Only the baseline moves, and
/// only when the surface is resized.
#[derive(Debug, Clone, PartialEq)]
pub struct Wave {
    /// `None` for bands laid out with an absolute baseline.
    baseline_ratio: Option<f32>,
    baseline: f32,
    amplitude: f32,
    frequency: f32,
    speed: f32,
    color_stops: Vec<ColorStop>,
}

impl Wave {
    /// Band described by `spec` on a surface `height` pixels tall.
    #[must_use]
    pub fn from_spec(spec: &WaveSpec, height: f32) -> Self {
        Self {
            baseline_ratio: Some(spec.baseline_ratio),
            baseline: spec.baseline_ratio * height,
            amplitude: spec.amplitude,
            frequency: spec.frequency,
            speed: spec.speed,
            color_stops: spec.color_stops.clone(),
        }
    }

    /// Band with an absolute baseline, for callers that lay bands out
    /// themselves. The baseline is not rescaled by [`rebase`](Self::rebase).
    #[must_use]
    pub fn with_baseline(
        baseline: f32,
        amplitude: f32,
        frequency: f32,
        speed: f32,
        color_stops: Vec<ColorStop>,
    ) -> Self {
        Self {
            baseline_ratio: None,
            baseline,
            amplitude,
            frequency,
            speed,
            color_stops,
        }
    }

    /// Recompute the baseline for a new surface height, keeping its
    /// proportional position.
    pub fn rebase(&mut self, height: f32) {
        if let Some(ratio) = self.baseline_ratio {
            self.baseline = ratio * height;
        }
    }

    /// Resting line, pixels from the top.
    #[must_use]
    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    /// Peak sinusoid displacement.
    #[must_use]
    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    /// Radians per horizontal pixel.
    #[must_use]
    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Radians per unit of animation time.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Horizontal fill gradient stops.
    #[must_use]
    pub fn color_stops(&self) -> &[ColorStop] {
        &self.color_stops
    }

    /// Undisturbed sinusoid at `x`: `amplitude · sin(x · frequency + time ·
    /// speed)`.
    #[inline]
    #[must_use]
    pub fn sinusoid(&self, x: f32, time: f32) -> f32 {
        self.amplitude * (x * self.frequency + time * self.speed).sin()
    }

    /// Upward pull the pointer exerts on this band at `x`.
    ///
    /// Zero unless hovering, within `cutoff` of `(x, baseline)`, and no more
    /// than `vertical_reach` above the baseline. Otherwise
    /// `strength · e^(−d / falloff) · max(0, 1 − |dy| / vertical_reach)`.
    #[must_use]
    pub fn proximity(
        &self,
        x: f32,
        pointer: Vec2,
        hovering: bool,
        params: &ProximityOptions,
    ) -> f32 {
        if !hovering || !pointer.is_finite() {
            return 0.0;
        }
        let dy = (self.baseline - pointer.y).abs();
        let distance = Vec2::new(x - pointer.x, dy).length();
        if distance >= params.cutoff
            || pointer.y <= self.baseline - params.vertical_reach
        {
            return 0.0;
        }
        let falloff = params.falloff.max(f32::EPSILON);
        let reach = params.vertical_reach.max(f32::EPSILON);
        params.strength * (-distance / falloff).exp() * (1.0 - dy / reach).max(0.0)
    }
}

/// Signed height offset of `wave` at `x`: the sinusoid minus the pointer
/// pull. Deterministic; no state is read besides the arguments.
#[must_use]
pub fn evaluate_height(
    wave: &Wave,
    x: f32,
    time: f32,
    pointer: Vec2,
    hovering: bool,
    params: &ProximityOptions,
) -> f32 {
    wave.sinusoid(x, time) - wave.proximity(x, pointer, hovering, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero_wave() -> Wave {
        Wave::with_baseline(420.0, 60.0, 0.008, 0.02, Vec::new())
    }

    #[test]
    fn origin_at_time_zero_is_flat() {
        let h = evaluate_height(
            &hero_wave(),
            0.0,
            0.0,
            Vec2::new(300.0, 300.0),
            false,
            &ProximityOptions::default(),
        );
        assert_eq!(h, 0.0);
    }

    #[test]
    fn same_inputs_same_height() {
        let wave = hero_wave();
        let params = ProximityOptions::default();
        let pointer = Vec2::new(200.0, 430.0);
        for x in [0.0, 13.0, 257.5, 799.0] {
            let a = evaluate_height(&wave, x, 4.2, pointer, true, &params);
            let b = evaluate_height(&wave, x, 4.2, pointer, true, &params);
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn no_pull_without_hover() {
        let wave = hero_wave();
        let params = ProximityOptions::default();
        for pointer in [
            Vec2::new(0.0, 420.0),
            Vec2::new(123.0, 500.0),
            Vec2::new(-50.0, -50.0),
        ] {
            assert_eq!(wave.proximity(0.0, pointer, false, &params), 0.0);
            assert_eq!(
                evaluate_height(&wave, 37.0, 1.5, pointer, false, &params),
                wave.sinusoid(37.0, 1.5)
            );
        }
    }

    #[test]
    fn pull_peaks_under_the_pointer_and_decays() {
        let wave = hero_wave();
        let params = ProximityOptions::default();
        let pointer = Vec2::new(400.0, 420.0);
        let at = wave.proximity(400.0, pointer, true, &params);
        assert!((at - 100.0).abs() < 1e-4);

        let near = wave.proximity(450.0, pointer, true, &params);
        let far = wave.proximity(700.0, pointer, true, &params);
        assert!(at > near && near > far && far > 0.0);
        // Beyond the cutoff the pull vanishes.
        assert_eq!(wave.proximity(820.0, pointer, true, &params), 0.0);
    }

    #[test]
    fn pointer_far_above_the_band_has_no_pull() {
        let wave = hero_wave();
        let params = ProximityOptions::default();
        let above = Vec2::new(0.0, 420.0 - 300.0);
        assert_eq!(wave.proximity(0.0, above, true, &params), 0.0);
        // Slightly below that line the pull is nonzero.
        let inside = Vec2::new(0.0, 420.0 - 250.0);
        assert!(wave.proximity(0.0, inside, true, &params) > 0.0);
    }

    #[test]
    fn rebase_keeps_proportional_position() {
        let spec = WaveSpec {
            baseline_ratio: 0.75,
            ..WaveSpec::default()
        };
        let mut wave = Wave::from_spec(&spec, 600.0);
        assert_eq!(wave.baseline(), 450.0);
        wave.rebase(1000.0);
        assert_eq!(wave.baseline(), 750.0);

        let mut fixed = hero_wave();
        fixed.rebase(1000.0);
        assert_eq!(fixed.baseline(), 420.0);
    }

    #[test]
    fn waves_compare_equal_to_their_clones() {
        let fixed = hero_wave();
        assert_eq!(fixed, fixed.clone());
        let scaled = Wave::from_spec(&WaveSpec::default(), 600.0);
        assert_eq!(scaled, scaled.clone());
        assert_ne!(fixed, scaled);
    }
}
