use web_time::{Duration, Instant};

/// Frame pacing with a smoothed FPS readout and optional frame limiting.
///
/// Timestamps are passed in by the caller so the same driver runs on a
/// real display clock or a simulated one.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Timestamp of the first rendered frame
    started: Option<Instant>,
    /// Timestamp of the last rendered frame
    last_frame: Option<Instant>,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            target_fps,
            min_frame_duration,
            started: None,
            last_frame: None,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last frame to render
    /// another one at `now`.
    #[must_use]
    pub fn should_render(&self, now: Instant) -> bool {
        if self.target_fps == 0 {
            return true;
        }
        self.last_frame.is_none_or(|last| {
            now.saturating_duration_since(last) >= self.min_frame_duration
        })
    }

    /// Record a rendered frame at `now`. Returns `(elapsed since the first
    /// frame, delta since the previous frame)`.
    pub fn end_frame(&mut self, now: Instant) -> (Duration, Duration) {
        let started = *self.started.get_or_insert(now);
        let delta = self
            .last_frame
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last_frame = Some(now);

        let frame_time = delta.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        (now.saturating_duration_since(started), delta)
    }

    /// Current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Configured frame cap, 0 when uncapped.
    #[must_use]
    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncapped_always_renders() {
        let timing = FrameTiming::new(0);
        assert!(timing.should_render(Instant::now()));
    }

    #[test]
    fn cap_throttles_early_frames() {
        let t0 = Instant::now();
        let mut timing = FrameTiming::new(30);
        assert!(timing.should_render(t0));
        let _ = timing.end_frame(t0);

        assert!(!timing.should_render(t0 + Duration::from_millis(10)));
        assert!(timing.should_render(t0 + Duration::from_millis(34)));
    }

    #[test]
    fn elapsed_and_delta_accumulate() {
        let t0 = Instant::now();
        let mut timing = FrameTiming::new(0);
        assert_eq!(timing.end_frame(t0), (Duration::ZERO, Duration::ZERO));
        let step = Duration::from_millis(20);
        let (elapsed, delta) = timing.end_frame(t0 + step);
        assert_eq!((elapsed, delta), (step, step));
        let (elapsed, _) = timing.end_frame(t0 + step * 3);
        assert_eq!(elapsed, step * 3);
    }

    #[test]
    fn fps_moves_toward_the_frame_rate() {
        let t0 = Instant::now();
        let mut timing = FrameTiming::new(0);
        for i in 0..200 {
            let _ = timing.end_frame(t0 + Duration::from_millis(10) * i);
        }
        assert!(timing.fps() > 90.0 && timing.fps() <= 100.5);
    }
}
