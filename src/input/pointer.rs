use glam::Vec2;

/// Last known pointer position and whether it is over the surface.
///
/// Owned by one driver instance. Written by event handling, read by the
/// next tick. Two mounted surfaces never share one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    position: Vec2,
    hovering: bool,
    /// Whether `position` was reported since the pointer last entered.
    tracked: bool,
}

impl PointerState {
    /// Pointer at `position`, hovering or not.
    #[must_use]
    pub fn new(position: Vec2, hovering: bool) -> Self {
        Self {
            position,
            hovering,
            tracked: true,
        }
    }

    /// Record a move. Moves are only delivered while the pointer is inside
    /// the host container, so a move also marks the pointer as hovering.
    pub(crate) fn handle_move(&mut self, position: Vec2) {
        if position.is_finite() {
            self.position = position;
            self.hovering = true;
            self.tracked = true;
        }
    }

    /// Pointer entered the container; position is updated by the next move.
    pub(crate) fn handle_enter(&mut self) {
        self.hovering = true;
    }

    /// Pointer left the container. The last position is kept but goes
    /// stale until the next move.
    pub(crate) fn handle_leave(&mut self) {
        self.hovering = false;
        self.tracked = false;
    }

    /// Last known position in surface pixels.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Whether the pointer is over the host container.
    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Position while hovering, `None` otherwise or before the first move
    /// after re-entering.
    #[must_use]
    pub fn hover_position(&self) -> Option<Vec2> {
        (self.hovering && self.tracked).then_some(self.position)
    }
}
