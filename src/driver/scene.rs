use glam::Vec2;
use web_time::Duration;

use crate::input::PointerState;
use crate::surface::{Surface, SurfaceSize};

/// Clock values for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInfo {
    /// Zero-based count of rendered frames.
    pub index: u64,
    /// Time since the first rendered frame.
    pub elapsed: Duration,
    /// Time since the previous rendered frame.
    pub delta: Duration,
}

/// An animation the driver can mount on a surface.
///
/// The driver calls [`initialize`](Self::initialize) once on mount, then
/// [`advance`](Self::advance) followed by [`render`](Self::render) exactly
/// once per tick.
pub trait Scene {
    /// Short name used in log messages.
    fn name(&self) -> &'static str;

    /// Build dimension-dependent state for a freshly mounted surface.
    fn initialize(&mut self, size: SurfaceSize);

    /// Adopt new surface dimensions.
    fn resize(&mut self, size: SurfaceSize);

    /// Step the simulation.
    fn advance(&mut self, frame: &FrameInfo);

    /// Draw the current state. Must not mutate the simulation.
    fn render(&self, surface: &mut dyn Surface, pointer: &PointerState);

    /// Primary press at a surface position.
    fn press(&mut self, _at: Vec2) {}
}
