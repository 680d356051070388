use glam::Vec2;
use web_sys::{CanvasGradient, CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Paint, Path, PathCommand, Surface, SurfaceSize};
use crate::color::{ColorStop, Rgba};

/// Surface backed by a browser canvas and its 2D context.
pub struct Canvas2dSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    /// Wrap an existing canvas and context.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    /// Acquire the canvas' 2D context. `None` when the browser refuses
    /// (context already taken by WebGL, or canvas detached).
    #[must_use]
    pub fn from_canvas(canvas: HtmlCanvasElement) -> Option<Self> {
        use wasm_bindgen::JsCast;

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self::new(canvas, ctx))
    }

    /// The underlying canvas element.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn gradient(&self, paint: &Paint) -> Option<CanvasGradient> {
        let (gradient, stops) = match paint {
            Paint::Solid(_) => return None,
            Paint::Linear(g) => (
                self.ctx.create_linear_gradient(
                    f64::from(g.start.x),
                    f64::from(g.start.y),
                    f64::from(g.end.x),
                    f64::from(g.end.y),
                ),
                &g.stops,
            ),
            Paint::Radial(g) => (
                self.ctx
                    .create_radial_gradient(
                        f64::from(g.center.x),
                        f64::from(g.center.y),
                        f64::from(g.inner_radius.max(0.0)),
                        f64::from(g.center.x),
                        f64::from(g.center.y),
                        f64::from(g.outer_radius.max(0.0)),
                    )
                    .ok()?,
                &g.stops,
            ),
        };
        add_stops(&gradient, stops);
        Some(gradient)
    }

    fn apply_fill(&self, paint: &Paint) -> bool {
        match paint {
            Paint::Solid(color) => {
                self.ctx.set_fill_style_str(&color.to_string());
                true
            }
            _ => match self.gradient(paint) {
                Some(gradient) => {
                    self.ctx.set_fill_style_canvas_gradient(&gradient);
                    true
                }
                None => false,
            },
        }
    }

    fn trace(&self, path: &Path) {
        self.ctx.begin_path();
        for cmd in path.commands() {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    self.ctx.move_to(f64::from(p.x), f64::from(p.y));
                }
                PathCommand::LineTo(p) => {
                    self.ctx.line_to(f64::from(p.x), f64::from(p.y));
                }
                PathCommand::Close => self.ctx.close_path(),
            }
        }
    }
}

fn add_stops(gradient: &CanvasGradient, stops: &[ColorStop]) {
    for stop in stops {
        if gradient
            .add_color_stop(stop.clamped_offset(), &stop.color.to_string())
            .is_err()
        {
            log::trace!("canvas rejected color stop {stop:?}");
        }
    }
}

impl Surface for Canvas2dSurface {
    fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.canvas.set_width(size.width());
        self.canvas.set_height(size.height());
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx.clear_rect(
            f64::from(x),
            f64::from(y),
            f64::from(width),
            f64::from(height),
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        if radius.is_nan() || radius <= 0.0 || !self.apply_fill(paint) {
            return;
        }
        self.ctx.begin_path();
        if self
            .ctx
            .arc(
                f64::from(center.x),
                f64::from(center.y),
                f64::from(radius),
                0.0,
                std::f64::consts::TAU,
            )
            .is_err()
        {
            return;
        }
        self.ctx.fill();
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        if path.is_empty() || !self.apply_fill(paint) {
            return;
        }
        self.trace(path);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(f64::from(from.x), f64::from(from.y));
        self.ctx.line_to(f64::from(to.x), f64::from(to.y));
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(f64::from(width));
        self.ctx.stroke();
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(f64::from(alpha.clamp(0.0, 1.0)));
    }
}
