//! Converts raw host events into scene commands.
//!
//! The `InputProcessor` owns the per-instance pointer state. Pointer moves
//! and enter/leave only update that state (the next tick reads it); resizes
//! and presses become [`InputCommand`]s for the driver to apply.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::pointer::PointerState;
use crate::surface::SurfaceSize;

/// Work the driver must do in response to an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputCommand {
    /// Resize the surface and recompute dimension-dependent state.
    Resize(SurfaceSize),
    /// Primary press at a surface position.
    Press(Vec2),
}

/// Converts raw host events into [`InputCommand`]s.
#[derive(Debug, Clone, Default)]
pub struct InputProcessor {
    /// Pointer position and hover flag.
    pointer: PointerState,
}

impl InputProcessor {
    /// Create a processor with the pointer outside the surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pointer state.
    #[must_use]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<InputCommand> {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.pointer.handle_move(Vec2::new(x, y));
                None
            }
            InputEvent::PointerEntered => {
                self.pointer.handle_enter();
                None
            }
            InputEvent::PointerLeft => {
                self.pointer.handle_leave();
                None
            }
            InputEvent::PointerPressed { button, x, y } => {
                self.handle_press(button, Vec2::new(x, y))
            }
            InputEvent::Resized { width, height } => Some(
                InputCommand::Resize(SurfaceSize::from_layout(width, height)),
            ),
        }
    }

    /// Primary presses inside the surface become a press command.
    fn handle_press(
        &mut self,
        button: MouseButton,
        at: Vec2,
    ) -> Option<InputCommand> {
        if button != MouseButton::Left || !at.is_finite() {
            return None;
        }
        self.pointer.handle_move(at);
        Some(InputCommand::Press(at))
    }
}
