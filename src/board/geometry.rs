use crate::{
    board::square::Square,
    foundation::core::{Canvas, Point, Rect},
    foundation::error::{ChessmotionError, ChessmotionResult},
};

/// Which side of the board is drawn at the bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// `a1` bottom-left.
    #[default]
    White,
    /// Flipped view: `h8` bottom-left.
    Black,
}

/// Map a square to `(file index, rank index counted from the top)` in White's view.
pub fn square_to_coords(square: Square) -> (u8, u8) {
    (square.file(), 7 - square.rank())
}

/// Pixel placement of the 8x8 board.
///
/// All conversions are pure. Positions are cell centers; the inverse rounds to the nearest cell
/// and clamps to the board, so any point maps to some square.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoardGeometry {
    /// Top-left corner of the board.
    pub origin: Point,
    /// Side length of one cell.
    pub square_size: f64,
    /// View orientation.
    #[serde(default)]
    pub orientation: Orientation,
}

impl BoardGeometry {
    /// Build a geometry with an explicit origin and cell size.
    pub fn new(origin: Point, square_size: f64) -> ChessmotionResult<Self> {
        if !square_size.is_finite() || square_size <= 0.0 {
            return Err(ChessmotionError::validation(
                "BoardGeometry square_size must be finite and > 0",
            ));
        }
        if !origin.x.is_finite() || !origin.y.is_finite() {
            return Err(ChessmotionError::validation(
                "BoardGeometry origin must be finite",
            ));
        }
        Ok(Self {
            origin,
            square_size,
            orientation: Orientation::White,
        })
    }

    /// Largest square board centered on `canvas`.
    pub fn centered_in(canvas: Canvas) -> Self {
        let board = canvas.min_side();
        Self {
            origin: Point::new(
                (f64::from(canvas.width) - board) / 2.0,
                (f64::from(canvas.height) - board) / 2.0,
            ),
            square_size: board / 8.0,
            orientation: Orientation::White,
        }
    }

    /// Same geometry with a different orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Same geometry viewed from the other side.
    pub fn flipped(self) -> Self {
        let orientation = match self.orientation {
            Orientation::White => Orientation::Black,
            Orientation::Black => Orientation::White,
        };
        self.with_orientation(orientation)
    }

    /// Full board rectangle.
    pub fn board_rect(&self) -> Rect {
        let side = self.square_size * 8.0;
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + side,
            self.origin.y + side,
        )
    }

    fn view_cell(&self, file: u8, row: u8) -> (u8, u8) {
        match self.orientation {
            Orientation::White => (file, row),
            Orientation::Black => (7 - file, 7 - row),
        }
    }

    /// Center of cell `(file, row)`; indices above 7 are clamped.
    pub fn coords_to_position(&self, file: u8, row: u8) -> Point {
        let (col, row) = self.view_cell(file.min(7), row.min(7));
        Point::new(
            self.origin.x + self.square_size * (f64::from(col) + 0.5),
            self.origin.y + self.square_size * (f64::from(row) + 0.5),
        )
    }

    /// Center of `square`.
    pub fn square_center(&self, square: Square) -> Point {
        let (file, row) = square_to_coords(square);
        self.coords_to_position(file, row)
    }

    /// Square whose cell center is nearest to `p`, clamped to the board.
    pub fn position_to_nearest_square(&self, p: Point) -> Square {
        let col = ((p.x - self.origin.x) / self.square_size - 0.5).round() as i64;
        let row = ((p.y - self.origin.y) / self.square_size - 0.5).round() as i64;
        let (col, row) = self.view_cell(col.clamp(0, 7) as u8, row.clamp(0, 7) as u8);
        Square::clamped_from_indices(i64::from(col), 7 - i64::from(row))
    }

    /// Cell rectangle of `square` (used for highlights).
    pub fn square_rect(&self, square: Square) -> Rect {
        let c = self.square_center(square);
        let half = self.square_size / 2.0;
        Rect::new(c.x - half, c.y - half, c.x + half, c.y + half)
    }

    /// Snap an arbitrary point onto the nearest cell center.
    pub fn snap(&self, p: Point) -> Point {
        self.square_center(self.position_to_nearest_square(p))
    }
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::centered_in(Canvas::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/board/geometry.rs"]
mod tests;
