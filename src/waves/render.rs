//! Band path construction and fill.

use glam::Vec2;

use super::band::Wave;
use super::scenery::Channel;
use crate::options::ProximityOptions;
use crate::surface::{Paint, Path, Surface, SurfaceSize};

/// Vertical position of the crest at `x`.
///
/// The sinusoid is folded upward (absolute value) so bands only ever rise
/// above their baseline, then the pointer pull and channel lift are added on
/// top.
#[inline]
#[must_use]
pub fn crest_y(
    wave: &Wave,
    x: f32,
    time: f32,
    pointer: Option<Vec2>,
    proximity: &ProximityOptions,
    channel: Option<&Channel>,
) -> f32 {
    let (at, hovering) = pointer.map_or((Vec2::ZERO, false), |p| (p, true));
    let lift = channel.map_or(0.0, |c| c.lift_at(x));
    wave.baseline()
        - wave.sinusoid(x, time).abs()
        - wave.proximity(x, at, hovering, proximity)
        - lift
}

/// Closed outline of one band: crest samples every `step` pixels from the
/// left edge to the right edge, then down to the surface bottom.
#[must_use]
pub fn band_path(
    wave: &Wave,
    size: SurfaceSize,
    time: f32,
    pointer: Option<Vec2>,
    step: f32,
    proximity: &ProximityOptions,
    channel: Option<&Channel>,
) -> Path {
    let extent = size.extent();
    let step = if step.is_finite() && step >= 1.0 { step } else { 1.0 };
    let samples = (extent.x / step).ceil() as usize + 1;

    let mut path = Path::with_capacity(samples + 4);
    path.move_to(Vec2::new(0.0, wave.baseline()));
    for i in 0..samples {
        let x = (i as f32 * step).min(extent.x);
        path.line_to(Vec2::new(
            x,
            crest_y(wave, x, time, pointer, proximity, channel),
        ));
    }
    path.line_to(extent);
    path.line_to(Vec2::new(0.0, extent.y));
    path.close();
    path
}

/// Fill one band with its horizontal gradient spanning the surface width.
pub fn render_band(
    surface: &mut dyn Surface,
    wave: &Wave,
    time: f32,
    pointer: Option<Vec2>,
    step: f32,
    proximity: &ProximityOptions,
    channel: Option<&Channel>,
) {
    let size = surface.size();
    let path =
        band_path(wave, size, time, pointer, step, proximity, channel);
    let paint = Paint::linear(
        Vec2::ZERO,
        Vec2::new(size.extent().x, 0.0),
        wave.color_stops().to_vec(),
    );
    surface.fill_path(&path, &paint);
}
