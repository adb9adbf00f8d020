//! Board positions addressed by `(column, row)` coordinates.

use crate::action::CoordinateError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the 3x3 board.
///
/// Coordinates follow the presentation layer's convention: `x` is the
/// column and `y` is the row, both in `0..3`, with `(0, 0)` at the top-left.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Column 0, row 0.
    TopLeft,
    /// Column 1, row 0.
    TopCenter,
    /// Column 2, row 0.
    TopRight,
    /// Column 0, row 1.
    MiddleLeft,
    /// Column 1, row 1.
    Center,
    /// Column 2, row 1.
    MiddleRight,
    /// Column 0, row 2.
    BottomLeft,
    /// Column 1, row 2.
    BottomCenter,
    /// Column 2, row 2.
    BottomRight,
}

impl Position {
    /// The center cell, forbidden on each player's first move.
    pub const CENTER: Position = Position::Center;

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Resolves an `(x, y)` pair coming from the presentation layer.
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError`] when either axis is outside `0..3`.
    /// A correct adapter never produces one.
    #[track_caller]
    pub fn from_coords(x: usize, y: usize) -> Result<Self, CoordinateError> {
        if x >= 3 || y >= 3 {
            return Err(CoordinateError::new(x, y));
        }
        Ok(Self::ALL[y * 3 + x])
    }

    /// Creates a position from its row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Column (x) of this position.
    pub fn column(self) -> usize {
        self.to_index() % 3
    }

    /// Row (y) of this position.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parses `"x y"` or `"x,y"` into a position.
    #[instrument]
    pub fn parse_coords(s: &str) -> Option<Position> {
        let mut parts = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty());
        let x = parts.next()?.parse::<usize>().ok()?;
        let y = parts.next()?.parse::<usize>().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Self::from_coords(x, y).ok()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.column(), self.row())
    }
}
