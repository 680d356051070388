use super::band::Wave;
use super::render::render_band;
use super::scenery::{Beacon, Channel};
use crate::driver::{FrameInfo, Scene};
use crate::input::PointerState;
use crate::options::{BeaconOptions, Options, WaveOptions};
use crate::surface::{Surface, SurfaceSize};

/// The hero scene: channel strip, layered bands and the lighthouse.
#[derive(Debug, Clone)]
pub struct WaveScene {
    options: WaveOptions,
    beacon_options: BeaconOptions,
    waves: Vec<Wave>,
    channel: Option<Channel>,
    beacon: Option<Beacon>,
    time: f32,
}

impl WaveScene {
    /// Scene with no bands laid out yet; they are built on mount.
    #[must_use]
    pub fn new(options: WaveOptions, beacon_options: BeaconOptions) -> Self {
        Self {
            options,
            beacon_options,
            waves: Vec::new(),
            channel: None,
            beacon: None,
            time: 0.0,
        }
    }

    /// Scene configured from the `[waves]` and `[beacon]` option sections.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self::new(options.waves.clone(), options.beacon.clone())
    }

    /// Bands in drawing order.
    #[must_use]
    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    /// Animation time; grows by `time_step` per advanced frame.
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Channel layout, when enabled and mounted.
    #[must_use]
    pub fn channel(&self) -> Option<&Channel> {
        self.channel.as_ref()
    }

    /// Lighthouse layout, when enabled and mounted.
    #[must_use]
    pub fn beacon(&self) -> Option<&Beacon> {
        self.beacon.as_ref()
    }

    fn layout(&mut self, size: SurfaceSize) {
        self.channel = self
            .options
            .channel
            .enabled
            .then(|| Channel::layout(size, &self.options.channel));
        self.beacon = self
            .beacon_options
            .enabled
            .then(|| Beacon::layout(size, &self.beacon_options));
    }
}

impl Scene for WaveScene {
    fn name(&self) -> &'static str {
        "waves"
    }

    fn initialize(&mut self, size: SurfaceSize) {
        let height = size.extent().y;
        self.waves = self
            .options
            .bands
            .iter()
            .map(|spec| Wave::from_spec(spec, height))
            .collect();
        self.layout(size);
        self.time = 0.0;
    }

    fn resize(&mut self, size: SurfaceSize) {
        let height = size.extent().y;
        for wave in &mut self.waves {
            wave.rebase(height);
        }
        self.layout(size);
    }

    fn advance(&mut self, _frame: &FrameInfo) {
        self.time += self.options.time_step;
    }

    fn render(&self, surface: &mut dyn Surface, pointer: &PointerState) {
        surface.clear();
        let at = pointer.hover_position();

        if let Some(channel) = &self.channel {
            channel.draw(surface, &self.options.channel);
        }
        for wave in &self.waves {
            render_band(
                surface,
                wave,
                self.time,
                at,
                self.options.sample_step,
                &self.options.proximity,
                self.channel.as_ref(),
            );
        }
        if let Some(beacon) = &self.beacon {
            beacon.draw(surface, &self.beacon_options, self.time, at);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, Paint, RecordingSurface};

    fn mounted(size: SurfaceSize) -> WaveScene {
        let mut scene = WaveScene::from_options(&Options::default());
        scene.initialize(size);
        scene
    }

    #[test]
    fn bands_are_laid_out_on_mount() {
        let scene = mounted(SurfaceSize::new(1000, 600));
        let baselines: Vec<f32> =
            scene.waves().iter().map(Wave::baseline).collect();
        assert_eq!(baselines.len(), 5);
        assert!((baselines[0] - 420.0).abs() < 1e-3);
        assert!((baselines[4] - 540.0).abs() < 1e-3);
    }

    #[test]
    fn resize_rebases_proportionally() {
        let mut scene = mounted(SurfaceSize::new(1000, 600));
        scene.resize(SurfaceSize::new(500, 1200));
        assert!((scene.waves()[0].baseline() - 840.0).abs() < 1e-3);
        let width = scene.channel().map_or(0.0, |c| c.width);
        assert!((width - 200.0).abs() < 1e-3);
    }

    #[test]
    fn time_steps_per_frame() {
        let mut scene = mounted(SurfaceSize::new(100, 100));
        for _ in 0..10 {
            scene.advance(&FrameInfo::default());
        }
        assert!((scene.time() - 0.3).abs() < 1e-5);
    }

    #[test]
    fn frame_draws_channel_then_bands_then_beacon() {
        let size = SurfaceSize::new(800, 600);
        let scene = mounted(size);
        let mut surface = RecordingSurface::new(size);
        scene.render(&mut surface, &PointerState::default());

        let cmds = surface.commands();
        assert!(matches!(cmds[0], DrawCommand::ClearRect { .. }));
        // Channel strip, then its two edge strokes.
        assert!(matches!(cmds[1], DrawCommand::FillPath { .. }));
        assert!(matches!(cmds[2], DrawCommand::StrokeLine { .. }));
        assert!(matches!(cmds[3], DrawCommand::StrokeLine { .. }));
        // Five bands share the full-width horizontal gradient.
        for cmd in &cmds[4..9] {
            match cmd {
                DrawCommand::FillPath {
                    paint: Paint::Linear(g),
                    ..
                } => assert_eq!(g.end.x, 800.0),
                other => panic!("expected band, got {other:?}"),
            }
        }
        // The beam is the last thing drawn.
        assert!(matches!(
            cmds.last(),
            Some(DrawCommand::FillPath { alpha, .. }) if *alpha == 0.7
        ));
    }

    #[test]
    fn disabled_scenery_is_skipped() {
        let mut options = Options::default();
        options.waves.channel.enabled = false;
        options.beacon.enabled = false;
        let size = SurfaceSize::new(400, 300);
        let mut scene = WaveScene::from_options(&options);
        scene.initialize(size);
        let mut surface = RecordingSurface::new(size);
        scene.render(&mut surface, &PointerState::default());
        assert_eq!(surface.draw_count(), 5);
    }
}
