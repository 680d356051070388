use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::field::ParticleField;
use super::render::render_field;
use crate::driver::{FrameInfo, Scene};
use crate::input::PointerState;
use crate::options::{Options, ParticleOptions};
use crate::surface::{Surface, SurfaceSize};

/// Drifting, linked dots with a pointer ripple.
#[derive(Debug, Clone)]
pub struct ParticleScene {
    options: ParticleOptions,
    field: ParticleField,
    rng: StdRng,
}

impl ParticleScene {
    /// Scene seeded from the operating system's entropy source.
    #[must_use]
    pub fn new(options: ParticleOptions) -> Self {
        Self::with_rng(options, StdRng::from_os_rng())
    }

    /// Scene with a fixed seed, for reproducible previews and tests.
    #[must_use]
    pub fn with_seed(options: ParticleOptions, seed: u64) -> Self {
        Self::with_rng(options, StdRng::seed_from_u64(seed))
    }

    /// Scene configured from the `[particles]` option section.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self::new(options.particles.clone())
    }

    fn with_rng(options: ParticleOptions, mut rng: StdRng) -> Self {
        let field = ParticleField::initialize(
            SurfaceSize::new(1, 1),
            0,
            &options,
            &mut rng,
        );
        Self { options, field, rng }
    }

    /// The live particle field.
    #[must_use]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Scene parameters.
    #[must_use]
    pub fn options(&self) -> &ParticleOptions {
        &self.options
    }
}

impl Scene for ParticleScene {
    fn name(&self) -> &'static str {
        "particles"
    }

    fn initialize(&mut self, size: SurfaceSize) {
        let count = self.options.count_for_area(size.area());
        self.field =
            ParticleField::initialize(size, count, &self.options, &mut self.rng);
        log::debug!("particle field: {count} particles");
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.field.resize(size);
    }

    fn advance(&mut self, frame: &FrameInfo) {
        let t = frame.elapsed.as_secs_f32() * self.options.drift_rate;
        self.field.advance_frame(t, self.options.drift);
    }

    fn render(&self, surface: &mut dyn Surface, pointer: &PointerState) {
        render_field(surface, &self.field, pointer, &self.options);
    }

    fn press(&mut self, at: Vec2) {
        let added = self.field.push_at(
            at,
            self.options.push_count,
            self.options.max_count,
            &self.options,
            &mut self.rng,
        );
        if added > 0 {
            log::debug!("pushed {added} particles at ({}, {})", at.x, at.y);
        }
    }
}
