use std::fmt;

use glam::Vec2;

use crate::{snap, Config, Score};

/// Positions the renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    pub ball: Vec2,
    pub player_row: i32,
    pub opponent_row: i32,
    pub score: Score,
}

/// Fixed-size character grid, indexed by (row, column).
///
/// Column 0 is a gutter that carries each row's line break when the board is
/// printed; the playfield is columns `1..width`.
#[derive(Debug, Clone)]
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<char>,
}

impl Board {
    pub const EMPTY: char = ' ';
    pub const WALL: char = '=';
    pub const PADDLE: char = '|';
    pub const BALL: char = 'O';

    pub fn new(config: &Config) -> Self {
        let width = config.board_width.max(2);
        let height = config.board_height.max(2);
        let mut board = Self {
            width,
            height,
            cells: vec![Self::EMPTY; (width * height) as usize],
        };
        board.clear();
        board
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row >= 0 && col >= 0 && row < self.height && col < self.width {
            Some((row * self.width + col) as usize)
        } else {
            None
        }
    }

    pub fn get(&self, row: i32, col: i32) -> Option<char> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Write a cell. Out-of-range writes are dropped; returns whether the
    /// cell exists.
    pub fn set(&mut self, row: i32, col: i32, ch: char) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = ch;
                true
            }
            None => false,
        }
    }

    /// Reset to an empty field with walls along the top and bottom rows.
    ///
    /// Redraws every cell, not just the ones that moved.
    pub fn clear(&mut self) {
        self.cells.fill(Self::EMPTY);

        let last_row = self.height - 1;
        for col in 1..self.width {
            self.set(0, col, Self::WALL);
            self.set(last_row, col, Self::WALL);
        }

        // Paddles can travel into the corners
        let last_col = self.width - 1;
        for (row, col) in [(0, 1), (0, last_col), (last_row, 1), (last_row, last_col)] {
            self.set(row, col, Self::EMPTY);
        }
    }

    /// Row the opponent paddle is drawn at. Follows the ball while it is
    /// between the walls; the opponent's returns never depend on it.
    pub fn opponent_display_row(&self, scene: &Scene) -> i32 {
        let ball_row = snap(scene.ball.y);
        if ball_row > 0 && ball_row < self.height - 1 {
            ball_row
        } else {
            scene.opponent_row
        }
    }

    /// Regenerate the whole grid from `scene`
    pub fn draw(&mut self, scene: &Scene) {
        self.clear();

        let opponent_row = self.opponent_display_row(scene);
        self.draw_paddle(1, scene.player_row);
        self.draw_paddle(self.width - 1, opponent_row);

        let ball_col = snap(scene.ball.x);
        let ball_row = snap(scene.ball.y);
        self.set(ball_row, ball_col, Self::BALL);
    }

    fn draw_paddle(&mut self, col: i32, row: i32) {
        for r in row - 1..=row + 1 {
            self.set(r, col, Self::PADDLE);
        }
    }

    /// Playfield cells of one row, without the gutter
    pub fn row_text(&self, row: i32) -> String {
        (1..self.width)
            .filter_map(|col| self.get(row, col))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            writeln!(f)?;
            f.write_str(&self.row_text(row))?;
        }
        Ok(())
    }
}
