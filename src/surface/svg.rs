use std::fmt::Write as _;

use glam::Vec2;

use super::{Paint, Path, PathCommand, Surface, SurfaceSize};
use crate::color::{ColorStop, Rgba};
use crate::error::TidelightError;

/// Surface that renders the current frame as an SVG document.
///
/// A clear covering the whole surface discards everything drawn so far,
/// which matches canvas semantics for the full-frame clears the renderers
/// issue. Partial clears cannot erase vector content and are ignored.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    size: SurfaceSize,
    background: Option<Rgba>,
    global_alpha: f32,
    defs: String,
    body: String,
    next_gradient: usize,
}

impl SvgSurface {
    /// Empty, transparent document of the given size.
    #[must_use]
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            background: None,
            global_alpha: 1.0,
            defs: String::new(),
            body: String::new(),
            next_gradient: 0,
        }
    }

    /// Paint a flat backdrop behind every frame. Canvases are transparent
    /// and the page shows through; a preview file has no page behind it.
    #[must_use]
    pub fn with_background(mut self, color: Rgba) -> Self {
        self.background = Some(color);
        self
    }

    /// The document for the current frame.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let (w, h) = (self.size.width(), self.size.height());
        let mut out = String::with_capacity(
            self.defs.len() + self.body.len() + 256,
        );
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );
        if !self.defs.is_empty() {
            out.push_str("<defs>");
            out.push_str(&self.defs);
            out.push_str("</defs>");
        }
        if let Some(bg) = self.background {
            let _ = write!(
                out,
                r#"<rect width="{w}" height="{h}" fill="{}" fill-opacity="{}"/>"#,
                bg.hex(),
                bg.alpha()
            );
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    /// Write the current frame to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`TidelightError::Io`] if the file cannot be written.
    pub fn write_to(&self, path: &std::path::Path) -> Result<(), TidelightError> {
        std::fs::write(path, self.to_svg()).map_err(TidelightError::Io)
    }

    /// Register a gradient definition and return its fill attribute.
    fn fill_attrs(&mut self, paint: &Paint) -> String {
        match paint {
            Paint::Solid(color) => format!(
                r#"fill="{}" fill-opacity="{}""#,
                color.hex(),
                color.alpha()
            ),
            Paint::Linear(g) => {
                let id = self.gradient_id();
                let _ = write!(
                    self.defs,
                    r#"<linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}">"#,
                    g.start.x, g.start.y, g.end.x, g.end.y
                );
                push_stops(&mut self.defs, &g.stops);
                self.defs.push_str("</linearGradient>");
                format!(r#"fill="url(#{id})""#)
            }
            Paint::Radial(g) => {
                let id = self.gradient_id();
                let _ = write!(
                    self.defs,
                    r#"<radialGradient id="{id}" gradientUnits="userSpaceOnUse" cx="{:.2}" cy="{:.2}" r="{:.2}" fx="{:.2}" fy="{:.2}" fr="{:.2}">"#,
                    g.center.x,
                    g.center.y,
                    g.outer_radius.max(0.0),
                    g.center.x,
                    g.center.y,
                    g.inner_radius.max(0.0)
                );
                push_stops(&mut self.defs, &g.stops);
                self.defs.push_str("</radialGradient>");
                format!(r#"fill="url(#{id})""#)
            }
        }
    }

    fn gradient_id(&mut self) -> String {
        let id = format!("g{}", self.next_gradient);
        self.next_gradient += 1;
        id
    }

    fn opacity_attr(&self) -> String {
        if self.global_alpha < 1.0 {
            format!(r#" opacity="{}""#, self.global_alpha)
        } else {
            String::new()
        }
    }
}

fn push_stops(defs: &mut String, stops: &[ColorStop]) {
    for stop in stops {
        let _ = write!(
            defs,
            r#"<stop offset="{}" stop-color="{}" stop-opacity="{}"/>"#,
            stop.clamped_offset(),
            stop.color.hex(),
            stop.color.alpha()
        );
    }
}

fn path_data(path: &Path) -> String {
    let mut d = String::new();
    for cmd in path.commands() {
        match cmd {
            PathCommand::MoveTo(p) => {
                let _ = write!(d, "M{:.2} {:.2}", p.x, p.y);
            }
            PathCommand::LineTo(p) => {
                let _ = write!(d, "L{:.2} {:.2}", p.x, p.y);
            }
            PathCommand::Close => d.push('Z'),
        }
    }
    d
}

impl Surface for SvgSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.defs.clear();
        self.body.clear();
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let extent = self.size.extent();
        if x <= 0.0 && y <= 0.0 && width >= extent.x && height >= extent.y {
            self.defs.clear();
            self.body.clear();
            self.next_gradient = 0;
        } else {
            log::trace!("svg: partial clear ignored");
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        if radius.is_nan() || radius <= 0.0 {
            return;
        }
        let fill = self.fill_attrs(paint);
        let opacity = self.opacity_attr();
        let _ = write!(
            self.body,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" {fill}{opacity}/>"#,
            center.x, center.y, radius
        );
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        if path.is_empty() {
            return;
        }
        let fill = self.fill_attrs(paint);
        let opacity = self.opacity_attr();
        let _ = write!(
            self.body,
            r#"<path d="{}" {fill}{opacity}/>"#,
            path_data(path)
        );
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        let opacity = self.opacity_attr();
        let _ = write!(
            self.body,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-opacity="{}" stroke-width="{width}"{opacity}/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            color.hex(),
            color.alpha()
        );
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.global_alpha = alpha.clamp(0.0, 1.0);
    }
}
