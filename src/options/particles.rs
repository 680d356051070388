use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// How the particle field reacts to a hovering pointer.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PointerMode {
    /// Soft radial glow centered on the pointer.
    #[default]
    Ripple,
    /// Lines from the pointer to nearby particles.
    Grab,
    /// No pointer effect.
    None,
}

/// Particle field generation, motion and linking parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Particles", inline)]
#[serde(default)]
pub struct ParticleOptions {
    /// Particles created per initialization (before density scaling).
    #[schemars(title = "Count", range(min = 1, max = 150))]
    pub count: usize,
    /// Hard cap on live particles. Linking is quadratic in this number.
    #[schemars(skip)]
    pub max_count: usize,
    /// When set, `count` is interpreted per this many thousand square
    /// pixels and scaled by the surface area.
    #[schemars(skip)]
    pub density_area: Option<f32>,
    /// Smallest particle radius in pixels.
    #[schemars(title = "Min Radius", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub radius_min: f32,
    /// Largest particle radius in pixels (exclusive).
    #[schemars(title = "Max Radius", range(min = 0.1, max = 8.0), extend("step" = 0.1))]
    pub radius_max: f32,
    /// Lowest particle opacity.
    #[schemars(title = "Min Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub opacity_min: f32,
    /// Highest particle opacity (exclusive).
    #[schemars(title = "Max Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub opacity_max: f32,
    /// Particle RGB; alpha is replaced by the randomized opacity.
    #[schemars(skip)]
    pub color: Rgba,
    /// Half-range of each initial velocity component, pixels per frame.
    #[schemars(title = "Speed", range(min = 0.0, max = 3.0), extend("step" = 0.05))]
    pub speed: f32,
    /// Amplitude of the per-frame sinusoidal drift, pixels.
    #[schemars(title = "Drift", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub drift: f32,
    /// Drift phase advance per second of animation time, radians.
    #[schemars(skip)]
    pub drift_rate: f32,
    /// Pairs closer than this are linked, pixels.
    #[schemars(title = "Link Distance", range(min = 0.0, max = 300.0), extend("step" = 5.0))]
    pub link_distance: f32,
    /// Link opacity as the distance approaches zero.
    #[schemars(title = "Link Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub link_opacity: f32,
    /// Link stroke width, pixels.
    #[schemars(skip)]
    pub link_width: f32,
    /// Link RGB; alpha is replaced by the distance-based opacity.
    #[schemars(skip)]
    pub link_color: Rgba,
    /// Pointer interaction style.
    #[schemars(title = "Pointer Mode")]
    pub pointer_mode: PointerMode,
    /// Ripple glow radius, pixels.
    #[schemars(title = "Ripple Radius", range(min = 0.0, max = 200.0), extend("step" = 1.0))]
    pub ripple_radius: f32,
    /// Ripple color at its center; fades to transparent at the rim.
    #[schemars(skip)]
    pub ripple_color: Rgba,
    /// Grab lines reach this far from the pointer, pixels.
    #[schemars(title = "Grab Distance", range(min = 0.0, max = 400.0), extend("step" = 5.0))]
    pub grab_distance: f32,
    /// Grab line opacity next to the pointer.
    #[schemars(skip)]
    pub grab_opacity: f32,
    /// Particles added per pointer press, never exceeding `max_count`.
    #[schemars(title = "Push Count", range(min = 0, max = 20))]
    pub push_count: usize,
}

impl Default for ParticleOptions {
    fn default() -> Self {
        Self {
            count: 100,
            max_count: 150,
            density_area: None,
            radius_min: 0.5,
            radius_max: 2.5,
            opacity_min: 0.1,
            opacity_max: 0.6,
            color: Rgba::new(59, 130, 246, 1.0),
            speed: 0.25,
            drift: 0.2,
            drift_rate: 1.0,
            link_distance: 100.0,
            link_opacity: 0.1,
            link_width: 1.0,
            link_color: Rgba::new(59, 130, 246, 1.0),
            pointer_mode: PointerMode::Ripple,
            ripple_radius: 50.0,
            ripple_color: Rgba::new(59, 130, 246, 0.2),
            grab_distance: 140.0,
            grab_opacity: 0.5,
            push_count: 4,
        }
    }
}

impl ParticleOptions {
    /// Particle count for a surface of `area` square pixels.
    ///
    /// Without a density area this is `count`. With one, `count` particles
    /// are placed per `density_area` thousand square pixels. The result is
    /// always within `[1, max_count]`.
    #[must_use]
    pub fn count_for_area(&self, area: f32) -> usize {
        let cap = self.max_count.max(1);
        let raw = match self.density_area {
            Some(density) if density > 0.0 && area.is_finite() => {
                (area / 1000.0 * self.count as f32 / density).round() as usize
            }
            _ => self.count,
        };
        raw.clamp(1, cap)
    }
}
