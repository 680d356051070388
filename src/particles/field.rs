//! Particle model and per-frame motion.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::color::Rgba;
use crate::options::ParticleOptions;
use crate::surface::SurfaceSize;

/// One animated dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in surface pixels.
    pub position: Vec2,
    /// Displacement per frame, pixels.
    pub velocity: Vec2,
    /// Circle radius, pixels.
    pub radius: f32,
    /// Fill color including the randomized opacity.
    pub color: Rgba,
    /// Phase that desynchronizes this particle's drift from the others.
    pub phase_offset: f32,
}

impl Particle {
    /// Particle at `position` with radius, opacity, velocity and phase drawn
    /// from the configured ranges.
    pub fn random<R: Rng + ?Sized>(
        position: Vec2,
        options: &ParticleOptions,
        rng: &mut R,
    ) -> Self {
        let speed = options.speed.abs();
        Self {
            position,
            velocity: Vec2::new(
                sample(rng, -speed, speed),
                sample(rng, -speed, speed),
            ),
            radius: sample(rng, options.radius_min, options.radius_max)
                .max(f32::EPSILON),
            color: options.color.with_alpha(sample(
                rng,
                options.opacity_min,
                options.opacity_max,
            )),
            phase_offset: sample(rng, 0.0, TAU),
        }
    }

    /// Sinusoidal drift added on top of the velocity at animation time `t`.
    #[inline]
    #[must_use]
    pub fn drift(&self, t: f32, amplitude: f32) -> Vec2 {
        let phase = t + self.phase_offset;
        Vec2::new(phase.sin(), phase.cos()) * amplitude
    }
}

/// Uniform sample from `[lo, hi)`, tolerating reversed or empty ranges.
fn sample<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    if lo < hi {
        rng.random_range(lo..hi)
    } else {
        lo
    }
}

/// Map `value` into `[0, extent)`, teleporting across the opposite edge.
///
/// Values already inside are returned unchanged. Non-finite values land at
/// the origin.
#[inline]
#[must_use]
pub fn wrap_coordinate(value: f32, extent: f32) -> f32 {
    if !value.is_finite() || extent.is_nan() || extent <= 0.0 {
        return 0.0;
    }
    if (0.0..extent).contains(&value) {
        return value;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs.
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

/// The set of particles living on one surface.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    size: SurfaceSize,
}

impl ParticleField {
    /// `count` particles spread uniformly over a surface of `size`.
    pub fn initialize<R: Rng + ?Sized>(
        size: SurfaceSize,
        count: usize,
        options: &ParticleOptions,
        rng: &mut R,
    ) -> Self {
        let extent = size.extent();
        let particles = (0..count)
            .map(|_| {
                let position = Vec2::new(
                    rng.random_range(0.0..extent.x),
                    rng.random_range(0.0..extent.y),
                );
                Particle::random(position, options, rng)
            })
            .collect();
        Self { particles, size }
    }

    /// Advance every particle by one frame at animation time `t` and wrap
    /// it back into bounds. Does not allocate.
    pub fn advance_frame(&mut self, t: f32, drift: f32) {
        let extent = self.size.extent();
        for p in &mut self.particles {
            let next = p.position + p.velocity + p.drift(t, drift);
            p.position = Vec2::new(
                wrap_coordinate(next.x, extent.x),
                wrap_coordinate(next.y, extent.y),
            );
        }
    }

    /// Adopt new bounds. Positions are left alone; anything now outside is
    /// wrapped by the next [`advance_frame`](Self::advance_frame).
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    /// Add up to `count` particles at `at`, never growing past `max`.
    /// Returns how many were added.
    pub fn push_at<R: Rng + ?Sized>(
        &mut self,
        at: Vec2,
        count: usize,
        max: usize,
        options: &ParticleOptions,
        rng: &mut R,
    ) -> usize {
        let room = max.saturating_sub(self.particles.len());
        let n = count.min(room);
        let extent = self.size.extent();
        let at = Vec2::new(
            wrap_coordinate(at.x, extent.x),
            wrap_coordinate(at.y, extent.y),
        );
        self.particles
            .extend((0..n).map(|_| Particle::random(at, options, rng)));
        n
    }

    /// Live particles.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Current bounds.
    #[must_use]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Number of live particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field has no particles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
