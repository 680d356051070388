use glam::Vec2;

use super::{Paint, Path, Surface, SurfaceSize};
use crate::color::Rgba;

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Rectangle erased to transparent.
    ClearRect {
        /// Left edge.
        x: f32,
        /// Top edge.
        y: f32,
        /// Rectangle width.
        width: f32,
        /// Rectangle height.
        height: f32,
    },
    /// Filled circle.
    FillCircle {
        /// Circle center.
        center: Vec2,
        /// Circle radius.
        radius: f32,
        /// Fill style.
        paint: Paint,
        /// Global alpha at the time of the call.
        alpha: f32,
    },
    /// Filled path.
    FillPath {
        /// Path outline.
        path: Path,
        /// Fill style.
        paint: Paint,
        /// Global alpha at the time of the call.
        alpha: f32,
    },
    /// Stroked line.
    StrokeLine {
        /// Line start.
        from: Vec2,
        /// Line end.
        to: Vec2,
        /// Stroke color.
        color: Rgba,
        /// Stroke width in pixels.
        width: f32,
        /// Global alpha at the time of the call.
        alpha: f32,
    },
}

impl DrawCommand {
    /// Whether the command puts paint on the surface (anything but a clear).
    #[must_use]
    pub fn is_draw(&self) -> bool {
        !matches!(self, Self::ClearRect { .. })
    }
}

/// In-memory surface that records every call instead of rasterizing.
///
/// Used by tests to assert on what a frame would draw, and by headless
/// hosts that only need the simulation to run.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: SurfaceSize,
    global_alpha: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Empty recording of the given size.
    #[must_use]
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            global_alpha: 1.0,
            commands: Vec::new(),
        }
    }

    /// All calls since creation or the last [`take`](Self::take).
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded calls.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of recorded calls that paint something.
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_draw()).count()
    }

    /// Current global alpha.
    #[must_use]
    pub fn global_alpha(&self) -> f32 {
        self.global_alpha
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.commands.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            paint: paint.clone(),
            alpha: self.global_alpha,
        });
    }

    fn fill_path(&mut self, path: &Path, paint: &Paint) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            paint: paint.clone(),
            alpha: self.global_alpha,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            color,
            width,
            alpha: self.global_alpha,
        });
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.global_alpha = alpha.clamp(0.0, 1.0);
    }
}
