//! Colors and gradient stops.
//!
//! Colors are stored the way canvas fill styles consume them: 8-bit RGB
//! channels plus a floating-point alpha in `[0, 1]`.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An sRGB color with straight (non-premultiplied) alpha.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema,
)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Opacity in `[0, 1]`.
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0.0);

    /// Color from channels. Alpha is clamped on output, not here, so the
    /// constructor stays `const`.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same RGB channels with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Alpha clamped to `[0, 1]`; non-finite alpha reads as transparent.
    #[must_use]
    pub fn alpha(self) -> f32 {
        if self.a.is_finite() {
            self.a.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// `#rrggbb` form, used by backends that carry opacity separately.
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// CSS `rgba(r, g, b, a)` form, accepted by canvas fill and stroke styles.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha())
    }
}

/// One stop of a gradient: a color pinned at `offset` in `[0, 1]`.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema,
)]
pub struct ColorStop {
    /// Position along the gradient, `0.0` at the start, `1.0` at the end.
    pub offset: f32,
    /// Color at this position.
    pub color: Rgba,
}

impl ColorStop {
    /// Stop at `offset` with `color`.
    #[must_use]
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }

    /// Offset clamped to `[0, 1]`.
    #[must_use]
    pub fn clamped_offset(&self) -> f32 {
        if self.offset.is_finite() {
            self.offset.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_form_matches_canvas_syntax() {
        let c = Rgba::new(59, 130, 246, 0.2);
        assert_eq!(c.to_string(), "rgba(59, 130, 246, 0.2)");
    }

    #[test]
    fn alpha_is_clamped_on_output() {
        assert_eq!(Rgba::new(0, 0, 0, 1.7).alpha(), 1.0);
        assert_eq!(Rgba::new(0, 0, 0, -0.3).alpha(), 0.0);
        assert_eq!(Rgba::new(0, 0, 0, f32::NAN).alpha(), 0.0);
    }

    #[test]
    fn hex_form() {
        assert_eq!(Rgba::new(6, 182, 212, 1.0).hex(), "#06b6d4");
    }
}
