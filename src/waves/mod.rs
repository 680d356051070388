//! Hero wave bands.
//!
//! [`Wave`] holds one band's shape and [`evaluate_height`] is the pure
//! height function behind it. The renderer samples the crest across the
//! surface width and fills down to the bottom edge. [`WaveScene`] layers
//! the bands between a centered channel strip and a lighthouse overlay.

mod band;
mod render;
mod scene;
mod scenery;

pub use band::{evaluate_height, Wave};
pub use render::{band_path, crest_y, render_band};
pub use scene::WaveScene;
pub use scenery::{Beacon, Channel};
