use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Lighthouse overlay drawn above the wave bands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Beacon", inline)]
#[serde(default)]
pub struct BeaconOptions {
    /// Whether to draw the lighthouse and its beam.
    #[schemars(title = "Show Beacon")]
    pub enabled: bool,
    /// Tower center as a fraction of surface width.
    #[schemars(title = "Position", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub x_ratio: f32,
    /// Tower base as a fraction of surface height.
    #[schemars(skip)]
    pub base_ratio: f32,
    /// Tower height, pixels.
    #[schemars(title = "Height", range(min = 10.0, max = 400.0), extend("step" = 5.0))]
    pub height: f32,
    /// Tower base width, pixels. The top is two thirds of this.
    #[schemars(skip)]
    pub width: f32,
    /// Number of horizontal bands the tower is divided into; every other
    /// one is painted.
    #[schemars(title = "Stripes", range(min = 0, max = 12))]
    pub stripe_count: u32,
    /// Beam length as a fraction of surface width.
    #[schemars(title = "Beam Length", range(min = 0.0, max = 1.5), extend("step" = 0.05))]
    pub beam_length_ratio: f32,
    /// Angular width of the beam, radians.
    #[schemars(title = "Beam Spread", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub beam_spread: f32,
    /// Global alpha applied to the beam.
    #[schemars(title = "Beam Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub beam_alpha: f32,
    /// Tower body color at the edges.
    #[schemars(skip)]
    pub body_edge_color: Rgba,
    /// Tower body color along the center line.
    #[schemars(skip)]
    pub body_center_color: Rgba,
    /// Stripe and lamp color.
    #[schemars(skip)]
    pub accent_color: Rgba,
    /// Beam color next to the lamp.
    #[schemars(skip)]
    pub beam_core_color: Rgba,
}

impl Default for BeaconOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            x_ratio: 0.85,
            base_ratio: 0.75,
            height: 120.0,
            width: 40.0,
            stripe_count: 5,
            beam_length_ratio: 0.5,
            beam_spread: 0.2,
            beam_alpha: 0.7,
            body_edge_color: Rgba::new(255, 255, 255, 0.9),
            body_center_color: Rgba::new(219, 234, 254, 0.9),
            accent_color: Rgba::new(59, 130, 246, 0.9),
            beam_core_color: Rgba::new(255, 255, 255, 0.9),
        }
    }
}
