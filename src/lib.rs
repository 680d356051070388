// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (default clippy thresholds)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests may unwrap and panic
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! Pointer-reactive 2D canvas animations: a drifting particle field and
//! layered hero wave bands.
//!
//! Both animations render through the small [`surface::Surface`] drawing
//! contract, so the same simulation runs in a browser canvas (feature
//! `web`), in memory for tests, or into an SVG preview.
//!
//! # Key entry points
//!
//! - [`driver::AnimationDriver`] - mount, tick, input, teardown lifecycle
//! - [`particles::ParticleScene`] - the background particle field
//! - [`waves::WaveScene`] - wave bands with channel and lighthouse overlay
//! - [`options::Options`] - TOML-backed configuration for every scene
//!
//! # Frame model
//!
//! The host calls [`driver::AnimationDriver::tick`] once per display
//! refresh. Each tick advances the scene exactly once and then draws it
//! exactly once. Pointer notifications only update per-instance pointer
//! state, which the next tick reads.

pub mod color;
pub mod driver;
pub mod error;
pub mod input;
pub mod options;
pub mod particles;
pub mod surface;
pub mod waves;
#[cfg(feature = "web")]
pub mod web;
