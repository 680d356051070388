//! Animation lifecycle: mount, per-tick advance-then-render, teardown.
//!
//! An [`AnimationDriver`] binds one [`Scene`] to one [`Surface`]. The host
//! calls [`tick`](AnimationDriver::tick) once per display frame and
//! forwards pointer and resize notifications through
//! [`handle_event`](AnimationDriver::handle_event). Nothing is shared
//! between drivers, so two mounted surfaces never see each other's pointer.

mod scene;
mod timing;

pub use scene::{FrameInfo, Scene};
pub use timing::FrameTiming;
use web_time::Instant;

use crate::input::{InputCommand, InputEvent, InputProcessor, PointerState};
use crate::options::DriverOptions;
use crate::surface::Surface;

/// Lifecycle state of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Created, no surface bound yet.
    Idle,
    /// Mounted; ticks advance and draw.
    Running,
    /// Torn down. Terminal.
    Stopped,
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Advanced the scene and drew one frame.
    Rendered,
    /// Skipped to honor the frame cap.
    Throttled,
    /// Mounted without a usable surface; nothing to draw on.
    Disabled,
    /// Not running (idle or stopped).
    Inactive,
}

/// Drives one scene on one surface.
pub struct AnimationDriver<S: Surface, C: Scene> {
    scene: C,
    surface: Option<S>,
    state: DriverState,
    input: InputProcessor,
    timing: FrameTiming,
    frame_index: u64,
}

impl<S: Surface, C: Scene> AnimationDriver<S, C> {
    /// Idle driver for `scene`.
    #[must_use]
    pub fn new(scene: C, options: &DriverOptions) -> Self {
        Self {
            scene,
            surface: None,
            state: DriverState::Idle,
            input: InputProcessor::new(),
            timing: FrameTiming::new(options.target_fps),
            frame_index: 0,
        }
    }

    /// Bind a surface and lay the scene out for its size.
    ///
    /// `None` means the host could not obtain a drawing context. The driver
    /// still enters `Running`, but every tick reports
    /// [`TickOutcome::Disabled`]. Mounting anything but an idle driver is
    /// ignored.
    pub fn mount(&mut self, surface: Option<S>) {
        if self.state != DriverState::Idle {
            log::warn!(
                "{}: mount ignored in state {:?}",
                self.scene.name(),
                self.state
            );
            return;
        }
        self.state = DriverState::Running;
        let Some(surface) = surface else {
            log::warn!(
                "{}: drawing context unavailable, animation disabled",
                self.scene.name()
            );
            return;
        };
        let size = surface.size();
        self.scene.initialize(size);
        self.surface = Some(surface);
        log::debug!(
            "{}: mounted at {}x{}",
            self.scene.name(),
            size.width(),
            size.height()
        );
    }

    /// Run one frame at display time `now`: advance, then render, exactly
    /// once.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        if self.state != DriverState::Running {
            return TickOutcome::Inactive;
        }
        let Some(surface) = self.surface.as_mut() else {
            return TickOutcome::Disabled;
        };
        if !self.timing.should_render(now) {
            return TickOutcome::Throttled;
        }

        let (elapsed, delta) = self.timing.end_frame(now);
        let frame = FrameInfo {
            index: self.frame_index,
            elapsed,
            delta,
        };
        self.scene.advance(&frame);
        self.scene.render(surface, self.input.pointer());
        self.frame_index += 1;
        TickOutcome::Rendered
    }

    /// Apply a host notification.
    ///
    /// Pointer updates only touch the pointer state; the next tick reads it.
    /// Resizes and presses are applied immediately. Everything is ignored
    /// once stopped.
    pub fn handle_event(&mut self, event: InputEvent) {
        if self.state == DriverState::Stopped {
            return;
        }
        let Some(command) = self.input.handle_event(event) else {
            return;
        };
        if self.state != DriverState::Running {
            return;
        }
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        match command {
            InputCommand::Resize(size) => {
                if size == surface.size() {
                    return;
                }
                surface.resize(size);
                self.scene.resize(size);
                log::debug!(
                    "{}: resized to {}x{}",
                    self.scene.name(),
                    size.width(),
                    size.height()
                );
            }
            InputCommand::Press(at) => self.scene.press(at),
        }
    }

    /// Stop for good. No further ticks or events draw anything.
    pub fn teardown(&mut self) {
        if self.state == DriverState::Stopped {
            return;
        }
        log::debug!(
            "{}: torn down after {} frames",
            self.scene.name(),
            self.frame_index
        );
        self.state = DriverState::Stopped;
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// The driven scene.
    #[must_use]
    pub fn scene(&self) -> &C {
        &self.scene
    }

    /// The bound surface, if any.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Mutable access to the bound surface, e.g. to drain a recording.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Pointer state as of the last event.
    #[must_use]
    pub fn pointer(&self) -> &PointerState {
        self.input.pointer()
    }

    /// Smoothed rendered frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }

    /// Number of frames rendered so far.
    #[must_use]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use web_time::Duration;

    use super::*;
    use crate::input::MouseButton;
    use crate::options::{Options, ParticleOptions};
    use crate::particles::ParticleScene;
    use crate::surface::{DrawCommand, Paint, RecordingSurface, SurfaceSize};
    use crate::waves::WaveScene;

    const FRAME: Duration = Duration::from_millis(16);

    fn particles(
        target_fps: u32,
    ) -> AnimationDriver<RecordingSurface, ParticleScene> {
        let mut driver = AnimationDriver::new(
            ParticleScene::with_seed(ParticleOptions::default(), 7),
            &DriverOptions { target_fps },
        );
        driver.mount(Some(RecordingSurface::new(SurfaceSize::new(800, 600))));
        driver
    }

    fn recorded(
        driver: &mut AnimationDriver<RecordingSurface, ParticleScene>,
    ) -> usize {
        driver.surface_mut().map_or(0, |s| s.take().len())
    }

    /// Center of the pointer ripple in the last recorded frames, if drawn.
    fn ripple_center(
        driver: &AnimationDriver<RecordingSurface, ParticleScene>,
    ) -> Option<Vec2> {
        driver.surface()?.commands().iter().rev().find_map(|c| match c {
            DrawCommand::FillCircle {
                paint: Paint::Radial(g),
                ..
            } => Some(g.center),
            _ => None,
        })
    }

    #[test]
    fn idle_driver_does_nothing() {
        let mut driver: AnimationDriver<RecordingSurface, ParticleScene> =
            AnimationDriver::new(
                ParticleScene::with_seed(ParticleOptions::default(), 1),
                &DriverOptions::default(),
            );
        assert_eq!(driver.state(), DriverState::Idle);
        assert_eq!(driver.tick(Instant::now()), TickOutcome::Inactive);
    }

    #[test]
    fn each_tick_renders_one_frame() {
        let mut driver = particles(0);
        let t0 = Instant::now();
        for i in 0..5 {
            assert_eq!(driver.tick(t0 + FRAME * i), TickOutcome::Rendered);
        }
        assert_eq!(driver.frame_index(), 5);
        // Five clears, one per frame.
        let clears = driver
            .surface()
            .map_or(0, |s| s.commands().iter().filter(|c| !c.is_draw()).count());
        assert_eq!(clears, 5);
    }

    #[test]
    fn teardown_stops_drawing_even_on_pointer_events() {
        let mut driver = particles(0);
        let t0 = Instant::now();
        assert_eq!(driver.tick(t0), TickOutcome::Rendered);
        driver.teardown();
        let _ = recorded(&mut driver);

        driver.handle_event(InputEvent::PointerMoved { x: 10.0, y: 10.0 });
        driver.handle_event(InputEvent::PointerPressed {
            button: MouseButton::Left,
            x: 10.0,
            y: 10.0,
        });
        driver.handle_event(InputEvent::Resized {
            width: 100.0,
            height: 100.0,
        });
        assert_eq!(driver.tick(t0 + FRAME), TickOutcome::Inactive);

        assert_eq!(driver.state(), DriverState::Stopped);
        assert_eq!(recorded(&mut driver), 0);
        assert!(!driver.pointer().is_hovering());
        assert_eq!(driver.scene().field().len(), 100);
        assert_eq!(driver.surface().map(Surface::size), Some(SurfaceSize::new(800, 600)));
    }

    #[test]
    fn unavailable_context_disables_ticks() {
        let mut driver: AnimationDriver<RecordingSurface, ParticleScene> =
            AnimationDriver::new(
                ParticleScene::with_seed(ParticleOptions::default(), 1),
                &DriverOptions::default(),
            );
        driver.mount(None);
        assert_eq!(driver.state(), DriverState::Running);
        assert_eq!(driver.tick(Instant::now()), TickOutcome::Disabled);
        driver.handle_event(InputEvent::Resized {
            width: 10.0,
            height: 10.0,
        });
        assert_eq!(driver.frame_index(), 0);
    }

    #[test]
    fn frame_cap_throttles() {
        let mut driver = particles(30);
        let t0 = Instant::now();
        assert_eq!(driver.tick(t0), TickOutcome::Rendered);
        assert_eq!(driver.tick(t0 + FRAME), TickOutcome::Throttled);
        assert_eq!(driver.tick(t0 + FRAME * 3), TickOutcome::Rendered);
        assert_eq!(driver.frame_index(), 2);
    }

    #[test]
    fn resize_rebases_waves() {
        let mut driver = AnimationDriver::new(
            WaveScene::from_options(&Options::default()),
            &DriverOptions::default(),
        );
        driver.mount(Some(RecordingSurface::new(SurfaceSize::new(1000, 600))));
        driver.handle_event(InputEvent::Resized {
            width: 1000.0,
            height: 300.0,
        });
        assert_eq!(
            driver.surface().map(Surface::size),
            Some(SurfaceSize::new(1000, 300))
        );
        let baseline = driver.scene().waves()[0].baseline();
        assert!((baseline - 210.0).abs() < 1e-3);
    }

    #[test]
    fn resize_leaves_particles_in_place() {
        let mut driver = particles(0);
        let before: Vec<Vec2> = driver
            .scene()
            .field()
            .particles()
            .iter()
            .map(|p| p.position)
            .collect();
        driver.handle_event(InputEvent::Resized {
            width: 50.0,
            height: 50.0,
        });
        let after: Vec<Vec2> = driver
            .scene()
            .field()
            .particles()
            .iter()
            .map(|p| p.position)
            .collect();
        assert_eq!(before, after);
        assert_eq!(driver.scene().field().size(), SurfaceSize::new(50, 50));
    }

    #[test]
    fn press_pushes_particles() {
        let mut driver = particles(0);
        driver.handle_event(InputEvent::PointerPressed {
            button: MouseButton::Left,
            x: 5.0,
            y: 5.0,
        });
        assert_eq!(driver.scene().field().len(), 104);
    }

    #[test]
    fn second_mount_is_ignored() {
        let mut driver = particles(0);
        driver.mount(Some(RecordingSurface::new(SurfaceSize::new(10, 10))));
        assert_eq!(
            driver.surface().map(Surface::size),
            Some(SurfaceSize::new(800, 600))
        );
    }

    #[test]
    fn mounted_drivers_are_isolated() {
        let mut touched = particles(0);
        let mut quiet = AnimationDriver::new(
            ParticleScene::with_seed(ParticleOptions::default(), 11),
            &DriverOptions::default(),
        );
        quiet.mount(Some(RecordingSurface::new(SurfaceSize::new(640, 480))));
        let quiet_count = quiet.scene().field().len();

        touched.handle_event(InputEvent::PointerMoved { x: 300.0, y: 200.0 });
        touched.handle_event(InputEvent::PointerPressed {
            button: MouseButton::Left,
            x: 310.0,
            y: 210.0,
        });
        touched.handle_event(InputEvent::Resized {
            width: 400.0,
            height: 300.0,
        });

        let t0 = Instant::now();
        assert_eq!(touched.tick(t0), TickOutcome::Rendered);
        assert_eq!(quiet.tick(t0), TickOutcome::Rendered);

        assert_eq!(touched.scene().field().len(), 104);
        assert_eq!(ripple_center(&touched), Some(Vec2::new(310.0, 210.0)));

        assert_eq!(*quiet.pointer(), PointerState::default());
        assert_eq!(quiet.scene().field().len(), quiet_count);
        assert_eq!(
            quiet.surface().map(Surface::size),
            Some(SurfaceSize::new(640, 480))
        );
        assert_eq!(ripple_center(&quiet), None);
        assert_eq!(quiet.frame_index(), 1);
    }

    #[test]
    fn reentering_pointer_hides_ripple_until_it_moves() {
        let mut driver = particles(0);
        let t0 = Instant::now();
        driver.handle_event(InputEvent::PointerMoved { x: 700.0, y: 500.0 });
        driver.handle_event(InputEvent::PointerLeft);
        driver.handle_event(InputEvent::PointerEntered);
        assert_eq!(driver.tick(t0), TickOutcome::Rendered);
        assert_eq!(ripple_center(&driver), None);

        let _ = recorded(&mut driver);
        driver.handle_event(InputEvent::PointerMoved { x: 50.0, y: 60.0 });
        assert_eq!(driver.tick(t0 + FRAME), TickOutcome::Rendered);
        assert_eq!(ripple_center(&driver), Some(Vec2::new(50.0, 60.0)));
    }
}
