use glam::Vec2;

/// Which end of the board a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,   // left edge, keyboard controlled
    Opponent, // right edge, never misses
}

/// Paddle component - a 3-cell vertical bar centred on `row`
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub row: i32,
}

impl Paddle {
    pub fn new(side: Side, row: i32) -> Self {
        Self { side, row }
    }
}

/// Ball component - real-valued position and velocity in board cells
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Grid cell the ball is drawn in
    pub fn cell(&self) -> (i32, i32) {
        (snap(self.pos.x), snap(self.pos.y))
    }

    /// Grid cell the ball would occupy after one more step
    pub fn tentative_cell(&self) -> (i32, i32) {
        let next = self.pos + self.vel;
        (snap(next.x), snap(next.y))
    }
}

/// Snap a coordinate to the nearest cell. Truncates toward zero after the
/// half-cell offset, so small negative values land on 0.
pub fn snap(v: f32) -> i32 {
    (v + 0.5) as i32
}
