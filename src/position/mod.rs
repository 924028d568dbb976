//! FEN decoding and the square-to-piece replay map.

pub(crate) mod fen;
pub(crate) mod tracker;
