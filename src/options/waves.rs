use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::color::{ColorStop, Rgba};

/// Shape and fill of one wave band.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct WaveSpec {
    /// Resting line as a fraction of surface height.
    pub baseline_ratio: f32,
    /// Peak sinusoid displacement, pixels.
    pub amplitude: f32,
    /// Radians per horizontal pixel.
    pub frequency: f32,
    /// Radians per unit of animation time.
    pub speed: f32,
    /// Horizontal gradient across the full surface width.
    pub color_stops: Vec<ColorStop>,
}

impl Default for WaveSpec {
    fn default() -> Self {
        Self {
            baseline_ratio: 0.8,
            amplitude: 50.0,
            frequency: 0.012,
            speed: 0.04,
            color_stops: band_gradient(0.8),
        }
    }
}

/// The four-stop blue gradient shared by the default bands.
fn band_gradient(alpha: f32) -> Vec<ColorStop> {
    vec![
        ColorStop::new(0.0, Rgba::new(67, 97, 238, alpha)),
        ColorStop::new(0.3, Rgba::new(58, 134, 255, alpha)),
        ColorStop::new(0.6, Rgba::new(72, 149, 239, alpha)),
        ColorStop::new(1.0, Rgba::new(96, 165, 250, alpha)),
    ]
}

/// How strongly a hovering pointer lifts nearby bands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Pointer Lift", inline)]
#[serde(default)]
pub struct ProximityOptions {
    /// Lift directly under the pointer, pixels.
    #[schemars(title = "Strength", range(min = 0.0, max = 300.0), extend("step" = 5.0))]
    pub strength: f32,
    /// Distance over which the lift decays by a factor of e, pixels.
    #[schemars(title = "Falloff", range(min = 1.0, max = 600.0), extend("step" = 5.0))]
    pub falloff: f32,
    /// No lift beyond this distance, pixels.
    #[schemars(title = "Cutoff", range(min = 0.0, max = 1200.0), extend("step" = 10.0))]
    pub cutoff: f32,
    /// Vertical distance at which the lift fades out entirely, pixels.
    /// Pointers further than this above a band leave it untouched.
    #[schemars(title = "Vertical Reach", range(min = 1.0, max = 800.0), extend("step" = 10.0))]
    pub vertical_reach: f32,
}

impl Default for ProximityOptions {
    fn default() -> Self {
        Self {
            strength: 100.0,
            falloff: 150.0,
            cutoff: 400.0,
            vertical_reach: 300.0,
        }
    }
}

/// The translucent channel strip the bands rise through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Channel", inline)]
#[serde(default)]
pub struct ChannelOptions {
    /// Whether to draw the channel and apply its lift.
    #[schemars(title = "Show Channel")]
    pub enabled: bool,
    /// Channel width as a fraction of surface width.
    #[schemars(title = "Width", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub width_ratio: f32,
    /// Channel top as a fraction of surface height.
    #[schemars(skip)]
    pub top_ratio: f32,
    /// Extra band lift at the channel center, pixels.
    #[schemars(title = "Lift", range(min = 0.0, max = 100.0), extend("step" = 1.0))]
    pub lift: f32,
    /// Fill at the channel top.
    #[schemars(skip)]
    pub top_color: Rgba,
    /// Fill at the surface bottom.
    #[schemars(skip)]
    pub bottom_color: Rgba,
    /// Side edge stroke color.
    #[schemars(skip)]
    pub edge_color: Rgba,
    /// Side edge stroke width, pixels.
    #[schemars(skip)]
    pub edge_width: f32,
}

impl Default for ChannelOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            width_ratio: 0.4,
            top_ratio: 0.75,
            lift: 25.0,
            top_color: Rgba::new(59, 130, 246, 0.2),
            bottom_color: Rgba::new(59, 130, 246, 0.05),
            edge_color: Rgba::new(59, 130, 246, 0.6),
            edge_width: 2.0,
        }
    }
}

/// Wave band scene parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Waves", inline)]
#[serde(default)]
pub struct WaveOptions {
    /// Bands in drawing order (first is furthest back).
    #[schemars(skip)]
    pub bands: Vec<WaveSpec>,
    /// Horizontal distance between crest samples, pixels.
    #[schemars(title = "Sample Step", range(min = 1.0, max = 16.0), extend("step" = 1.0))]
    pub sample_step: f32,
    /// Animation time added per rendered frame.
    #[schemars(title = "Time Step", range(min = 0.0, max = 0.2), extend("step" = 0.005))]
    pub time_step: f32,
    /// Pointer lift parameters.
    pub proximity: ProximityOptions,
    /// Channel strip parameters.
    pub channel: ChannelOptions,
}

impl Default for WaveOptions {
    fn default() -> Self {
        let band = |baseline_ratio, amplitude, frequency, speed| WaveSpec {
            baseline_ratio,
            amplitude,
            frequency,
            speed,
            color_stops: band_gradient(0.8),
        };
        Self {
            bands: vec![
                band(0.7, 60.0, 0.008, 0.02),
                band(0.75, 55.0, 0.01, 0.03),
                band(0.8, 50.0, 0.012, 0.04),
                band(0.85, 45.0, 0.014, 0.035),
                band(0.9, 40.0, 0.016, 0.025),
            ],
            sample_step: 2.0,
            time_step: 0.03,
            proximity: ProximityOptions::default(),
            channel: ChannelOptions::default(),
        }
    }
}
