//! Squares, pieces, and pixel geometry of the 8x8 board.

pub(crate) mod geometry;
pub(crate) mod piece;
pub(crate) mod square;
