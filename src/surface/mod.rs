//! The 2D drawing contract consumed by the renderers.
//!
//! A [`Surface`] is a fixed-size pixel buffer plus the handful of canvas
//! operations the animations need: clearing, filled circles and paths,
//! stroked lines, and solid/linear/radial paints. Backends:
//!
//! - [`RecordingSurface`] keeps the draw calls in memory (tests, headless
//!   hosts).
//! - [`SvgSurface`] serializes the current frame as an SVG document.
//! - `Canvas2dSurface` draws into a browser `CanvasRenderingContext2d`
//!   (feature `web`).

#[cfg(feature = "web")]
mod canvas2d;
mod recording;
mod svg;

#[cfg(feature = "web")]
pub use canvas2d::Canvas2dSurface;
use glam::Vec2;
pub use recording::{DrawCommand, RecordingSurface};
pub use svg::SvgSurface;

use crate::color::{ColorStop, Rgba};

/// Pixel dimensions of a surface. Never zero in either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceSize {
    width: u32,
    height: u32,
}

impl SurfaceSize {
    /// Size from pixel counts. Zero dimensions are clamped to 1.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Size from host layout values (CSS pixels, possibly fractional,
    /// negative or NaN). Anything below 1 is clamped to 1.
    #[must_use]
    pub fn from_layout(width: f64, height: f64) -> Self {
        fn to_px(v: f64) -> u32 {
            if v.is_finite() && v >= 1.0 {
                v.min(f64::from(u32::MAX)) as u32
            } else {
                1
            }
        }
        Self::new(to_px(width), to_px(height))
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }

    /// Dimensions as a float vector, the coordinate space renderers use.
    #[must_use]
    pub fn extent(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Pixel area.
    #[must_use]
    pub fn area(self) -> f32 {
        self.width as f32 * self.height as f32
    }
}

/// Horizontal, vertical or diagonal gradient between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    /// Point where offset `0.0` sits.
    pub start: Vec2,
    /// Point where offset `1.0` sits.
    pub end: Vec2,
    /// Ordered color stops.
    pub stops: Vec<ColorStop>,
}

/// Gradient between two concentric circles.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    /// Shared center of both circles.
    pub center: Vec2,
    /// Radius where offset `0.0` sits.
    pub inner_radius: f32,
    /// Radius where offset `1.0` sits.
    pub outer_radius: f32,
    /// Ordered color stops.
    pub stops: Vec<ColorStop>,
}

/// Fill style for circles and paths.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    /// Single flat color.
    Solid(Rgba),
    /// Linear gradient in surface coordinates.
    Linear(LinearGradient),
    /// Radial gradient in surface coordinates.
    Radial(RadialGradient),
}

impl Paint {
    /// Linear gradient paint.
    #[must_use]
    pub fn linear(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self::Linear(LinearGradient { start, end, stops })
    }

    /// Radial gradient paint centered at `center`.
    #[must_use]
    pub fn radial(
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        stops: Vec<ColorStop>,
    ) -> Self {
        Self::Radial(RadialGradient {
            center,
            inner_radius,
            outer_radius,
            stops,
        })
    }
}

/// One segment instruction of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath at a point.
    MoveTo(Vec2),
    /// Straight segment to a point.
    LineTo(Vec2),
    /// Close the current subpath.
    Close,
}

/// A polygonal path built from move/line/close instructions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty path with room for `capacity` instructions.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Closed polygon through `points`.
    #[must_use]
    pub fn polygon(points: &[Vec2]) -> Self {
        let mut path = Self::with_capacity(points.len() + 1);
        for (i, &p) in points.iter().enumerate() {
            if i == 0 {
                path.move_to(p);
            } else {
                path.line_to(p);
            }
        }
        path.close();
        path
    }

    /// Begin a subpath at `p`.
    pub fn move_to(&mut self, p: Vec2) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    /// Segment from the current point to `p`.
    pub fn line_to(&mut self, p: Vec2) {
        self.commands.push(PathCommand::LineTo(p));
    }

    /// Close the current subpath.
    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Instructions in drawing order.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Whether the path has no instructions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every point referenced by the path, in order.
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.commands.iter().filter_map(|cmd| match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::Close => None,
        })
    }
}

/// A 2D drawing target bound to a fixed-size pixel buffer.
///
/// Drawing is best-effort: implementations swallow backend failures so a
/// broken frame never propagates to the animation loop.
pub trait Surface {
    /// Current pixel dimensions.
    fn size(&self) -> SurfaceSize;

    /// Resize the pixel buffer. Contents after a resize are unspecified.
    fn resize(&mut self, size: SurfaceSize);

    /// Erase a rectangle to transparent.
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);

    /// Fill a closed path (nonzero winding).
    fn fill_path(&mut self, path: &Path, paint: &Paint);

    /// Stroke a straight line with a flat color.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);

    /// Set the alpha multiplied into every subsequent draw.
    fn set_global_alpha(&mut self, alpha: f32);

    /// Erase the whole surface.
    fn clear(&mut self) {
        let extent = self.size().extent();
        self.clear_rect(0.0, 0.0, extent.x, extent.y);
    }
}

/// Run `draw` with the global alpha set to `alpha`, restoring full opacity
/// afterwards.
pub fn with_global_alpha(
    surface: &mut dyn Surface,
    alpha: f32,
    draw: impl FnOnce(&mut dyn Surface),
) {
    surface.set_global_alpha(alpha);
    draw(surface);
    surface.set_global_alpha(1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_clamp_to_one_pixel() {
        let size = SurfaceSize::new(0, 0);
        assert_eq!((size.width(), size.height()), (1, 1));
    }

    #[test]
    fn layout_values_clamp_negative_and_nan() {
        assert_eq!(SurfaceSize::from_layout(-20.0, f64::NAN), SurfaceSize::new(1, 1));
        assert_eq!(
            SurfaceSize::from_layout(800.7, 600.2),
            SurfaceSize::new(800, 600)
        );
    }

    #[test]
    fn polygon_closes_and_keeps_point_order() {
        let pts = [Vec2::ZERO, Vec2::X, Vec2::ONE];
        let path = Path::polygon(&pts);
        assert_eq!(path.commands().len(), 4);
        assert_eq!(path.commands()[0], PathCommand::MoveTo(Vec2::ZERO));
        assert_eq!(path.commands()[3], PathCommand::Close);
        assert_eq!(path.points().collect::<Vec<_>>(), pts.to_vec());
    }

    #[test]
    fn global_alpha_is_restored() {
        let mut surface = RecordingSurface::new(SurfaceSize::new(10, 10));
        with_global_alpha(&mut surface, 0.7, |s| {
            s.fill_circle(Vec2::ONE, 1.0, &Paint::Solid(Rgba::TRANSPARENT));
        });
        assert_eq!(surface.global_alpha(), 1.0);
        match &surface.commands()[0] {
            DrawCommand::FillCircle { alpha, .. } => assert_eq!(*alpha, 0.7),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
