use glam::IVec2;

/// Position and per-tick velocity in integer pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vector {
    /// Top-left position in surface pixels.
    pub pos: IVec2,
    /// Change in position applied by each `advance()`.
    pub vel: IVec2,
}

impl Vector {
    pub fn new(pos: IVec2, vel: IVec2) -> Self {
        Self { pos, vel }
    }

    /// A vector at rest at the given position.
    pub fn at(pos: IVec2) -> Self {
        Self { pos, vel: IVec2::ZERO }
    }

    /// Move by one tick of velocity. Position clamps at the `i32` range.
    pub fn advance(&mut self) {
        self.pos = self.pos.saturating_add(self.vel);
    }
}
