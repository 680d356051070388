//! Input handling: host event types, per-instance pointer state, and the
//! processor that turns raw events into driver commands.

/// Platform-agnostic input events.
pub mod event;
/// Pointer position and hover tracking.
pub mod pointer;
/// Converts raw events into driver commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use pointer::PointerState;
pub use processor::{InputCommand, InputProcessor};
