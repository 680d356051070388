/// Platform-agnostic input events delivered by the host.
///
/// Coordinates are in surface pixels relative to the surface origin. The
/// host is responsible for the conversion from page or window coordinates.
///
/// # Example
///
/// ```ignore
/// driver.handle_event(InputEvent::PointerMoved { x: 100.0, y: 200.0 });
/// driver.handle_event(InputEvent::PointerLeft);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved within the surface's host container.
    PointerMoved {
        /// Horizontal position in surface pixels.
        x: f32,
        /// Vertical position in surface pixels.
        y: f32,
    },
    /// Pointer entered the host container.
    PointerEntered,
    /// Pointer left the host container.
    PointerLeft,
    /// Mouse button pressed at a position.
    PointerPressed {
        /// Which button was pressed.
        button: MouseButton,
        /// Horizontal position in surface pixels.
        x: f32,
        /// Vertical position in surface pixels.
        y: f32,
    },
    /// Host container changed size.
    Resized {
        /// New width in layout pixels (may be fractional or invalid).
        width: f64,
        /// New height in layout pixels (may be fractional or invalid).
        height: f64,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` code. Unknown codes read as primary.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Right,
            _ => Self::Left,
        }
    }
}
