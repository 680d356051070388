//! Decorative pieces drawn around the bands: the channel strip underneath
//! and the lighthouse beacon on top.

use std::f32::consts::{FRAC_PI_4, FRAC_PI_6};

use glam::Vec2;

use crate::color::ColorStop;
use crate::options::{BeaconOptions, ChannelOptions};
use crate::surface::{with_global_alpha, Paint, Path, Surface, SurfaceSize};

/// Pixel layout of the channel for one surface size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel {
    /// Horizontal center.
    pub center_x: f32,
    /// Full width.
    pub width: f32,
    /// Top edge.
    pub top: f32,
    /// Bottom edge (the surface bottom).
    pub bottom: f32,
    /// Extra band lift at the center line.
    pub lift: f32,
}

impl Channel {
    /// Lay the channel out on a surface.
    #[must_use]
    pub fn layout(size: SurfaceSize, options: &ChannelOptions) -> Self {
        let extent = size.extent();
        Self {
            center_x: extent.x / 2.0,
            width: extent.x * options.width_ratio.max(0.0),
            top: extent.y * options.top_ratio,
            bottom: extent.y,
            lift: options.lift,
        }
    }

    /// Band lift at `x`: `lift` at the center, falling linearly to zero at
    /// the channel edges.
    #[inline]
    #[must_use]
    pub fn lift_at(&self, x: f32) -> f32 {
        let half = self.width / 2.0;
        if half <= 0.0 {
            return 0.0;
        }
        let from_center = (x - self.center_x).abs();
        if from_center < half {
            self.lift * (1.0 - from_center / half)
        } else {
            0.0
        }
    }

    /// Gradient strip plus glowing side edges.
    pub fn draw(&self, surface: &mut dyn Surface, options: &ChannelOptions) {
        let left = self.center_x - self.width / 2.0;
        let right = self.center_x + self.width / 2.0;
        let strip = Path::polygon(&[
            Vec2::new(left, self.top),
            Vec2::new(left, self.bottom),
            Vec2::new(right, self.bottom),
            Vec2::new(right, self.top),
        ]);
        let fill = Paint::linear(
            Vec2::new(0.0, self.top),
            Vec2::new(0.0, self.bottom),
            vec![
                ColorStop::new(0.0, options.top_color),
                ColorStop::new(1.0, options.bottom_color),
            ],
        );
        surface.fill_path(&strip, &fill);

        for x in [left, right] {
            surface.stroke_line(
                Vec2::new(x, self.top),
                Vec2::new(x, self.bottom),
                options.edge_color,
                options.edge_width,
            );
        }
    }
}

/// Pixel layout of the lighthouse for one surface size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beacon {
    /// Tower center line.
    pub x: f32,
    /// Tower base.
    pub base_y: f32,
    /// Tower height.
    pub height: f32,
    /// Tower base width.
    pub width: f32,
    /// Beam length.
    pub beam_length: f32,
}

impl Beacon {
    /// Lay the lighthouse out on a surface.
    #[must_use]
    pub fn layout(size: SurfaceSize, options: &BeaconOptions) -> Self {
        let extent = size.extent();
        Self {
            x: extent.x * options.x_ratio,
            base_y: extent.y * options.base_ratio,
            height: options.height,
            width: options.width,
            beam_length: extent.x * options.beam_length_ratio,
        }
    }

    /// Center of the lamp at the tower top; the beam originates here.
    #[must_use]
    pub fn lamp(&self) -> Vec2 {
        Vec2::new(self.x, self.base_y - self.height)
    }

    /// Beam direction: toward the pointer while hovering, otherwise a slow
    /// sweep around `−π/4` driven by animation time.
    #[must_use]
    pub fn beam_angle(&self, time: f32, pointer: Option<Vec2>) -> f32 {
        match pointer {
            Some(p) if p.is_finite() => {
                let d = p - self.lamp();
                d.y.atan2(d.x)
            }
            _ => -FRAC_PI_4 + time.sin() * FRAC_PI_6,
        }
    }

    /// Tower, stripes, lamp and beam.
    pub fn draw(
        &self,
        surface: &mut dyn Surface,
        options: &BeaconOptions,
        time: f32,
        pointer: Option<Vec2>,
    ) {
        self.draw_tower(surface, options);
        self.draw_stripes(surface, options);

        let lamp = self.lamp();
        surface.fill_circle(
            lamp,
            self.width / 4.0,
            &Paint::Solid(options.accent_color),
        );

        let angle = self.beam_angle(time, pointer);
        let spread = options.beam_spread;
        let beam = Path::polygon(&[
            lamp,
            lamp + Vec2::from_angle(angle) * self.beam_length,
            lamp + Vec2::from_angle(angle + spread) * self.beam_length * 0.8,
        ]);
        let accent = options.accent_color;
        let glow = Paint::radial(
            lamp,
            0.0,
            self.beam_length,
            vec![
                ColorStop::new(0.0, options.beam_core_color),
                ColorStop::new(0.1, accent.with_alpha(0.7)),
                ColorStop::new(1.0, accent.with_alpha(0.0)),
            ],
        );
        with_global_alpha(surface, options.beam_alpha, |s| {
            s.fill_path(&beam, &glow);
        });
    }

    fn draw_tower(&self, surface: &mut dyn Surface, options: &BeaconOptions) {
        let half_base = self.width / 2.0;
        let half_top = self.width / 3.0;
        let top = self.base_y - self.height;
        let body = Path::polygon(&[
            Vec2::new(self.x - half_base, self.base_y),
            Vec2::new(self.x + half_base, self.base_y),
            Vec2::new(self.x + half_top, top),
            Vec2::new(self.x - half_top, top),
        ]);
        let paint = Paint::linear(
            Vec2::new(self.x - half_base, self.base_y),
            Vec2::new(self.x + half_base, self.base_y),
            vec![
                ColorStop::new(0.0, options.body_edge_color),
                ColorStop::new(0.5, options.body_center_color),
                ColorStop::new(1.0, options.body_edge_color),
            ],
        );
        surface.fill_path(&body, &paint);
    }

    /// Every odd band of the tower gets a stripe, narrowing toward the top.
    fn draw_stripes(&self, surface: &mut dyn Surface, options: &BeaconOptions) {
        let count = options.stripe_count;
        if count == 0 {
            return;
        }
        let n = count as f32;
        let stripe_height = self.height / n;
        let paint = Paint::Solid(options.accent_color.with_alpha(0.7));
        for i in (1..count).step_by(2) {
            let i = i as f32;
            let y = self.base_y - i * stripe_height;
            let top_half = self.width * (1.0 - i / n * 0.5) / 2.0;
            let bottom_half = self.width * (1.0 - (i - 1.0) / n * 0.5) / 2.0;
            let stripe = Path::polygon(&[
                Vec2::new(self.x - bottom_half, y),
                Vec2::new(self.x + bottom_half, y),
                Vec2::new(self.x + top_half, y - stripe_height),
                Vec2::new(self.x - top_half, y - stripe_height),
            ]);
            surface.fill_path(&stripe, &paint);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn channel_lift_is_a_tent() {
        let channel = Channel::layout(
            SurfaceSize::new(1000, 600),
            &ChannelOptions::default(),
        );
        assert_eq!(channel.width, 400.0);
        assert_eq!(channel.top, 450.0);
        assert_eq!(channel.lift_at(500.0), 25.0);
        assert!((channel.lift_at(600.0) - 12.5).abs() < 1e-4);
        assert_eq!(channel.lift_at(700.0), 0.0);
        assert_eq!(channel.lift_at(50.0), 0.0);
    }

    #[test]
    fn beam_tracks_the_pointer() {
        let beacon =
            Beacon::layout(SurfaceSize::new(1000, 800), &BeaconOptions::default());
        let lamp = beacon.lamp();
        assert_eq!(lamp, Vec2::new(850.0, 480.0));

        let below = beacon.beam_angle(0.0, Some(lamp + Vec2::new(0.0, 10.0)));
        assert!((below - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn idle_beam_sweeps_with_time() {
        let beacon =
            Beacon::layout(SurfaceSize::new(1000, 800), &BeaconOptions::default());
        assert!((beacon.beam_angle(0.0, None) + FRAC_PI_4).abs() < 1e-6);
        let later = beacon.beam_angle(1.0, None);
        assert!((later - (-FRAC_PI_4 + 1f32.sin() * FRAC_PI_6)).abs() < 1e-6);
    }

    #[test]
    fn beam_is_drawn_translucent_then_alpha_restored() {
        let size = SurfaceSize::new(1000, 800);
        let options = BeaconOptions::default();
        let beacon = Beacon::layout(size, &options);
        let mut surface = RecordingSurface::new(size);
        beacon.draw(&mut surface, &options, 0.0, None);

        let alphas: Vec<f32> = surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillPath { alpha, .. } => Some(*alpha),
                _ => None,
            })
            .collect();
        // tower, two stripes, beam
        assert_eq!(alphas, vec![1.0, 1.0, 1.0, 0.7]);
        assert_eq!(surface.global_alpha(), 1.0);
    }
}
