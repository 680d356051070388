//! The background particle field.
//!
//! Particles drift with a constant velocity plus a small sinusoidal wobble
//! and wrap across the surface edges. Pairs closer than the link distance
//! are joined by faint lines, and a hovering pointer adds a ripple or grab
//! effect.

mod field;
mod render;
mod scene;

pub use field::{wrap_coordinate, Particle, ParticleField};
pub use render::{connection_opacity, render_field, ripple_paint};
pub use scene::ParticleScene;
