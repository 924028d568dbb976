//! FEN piece-placement decoding.
//!
//! Only the placement field (everything before the first space) is consumed; side to move,
//! castling rights and clocks play no part in the animation.

use crate::{
    board::piece::{PieceColor, PieceKind, piece_from_fen_char},
    board::square::Square,
    foundation::error::{ChessmotionError, ChessmotionResult},
};

/// Placement field of the standard starting position.
pub const STANDARD_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// One piece found while scanning a placement field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedLetter {
    /// Square the letter occupies.
    pub square: Square,
    /// Decoded piece type.
    pub kind: PieceKind,
    /// Decoded piece color.
    pub color: PieceColor,
}

/// Return the placement field of a full FEN string.
pub fn placement_field(fen: &str) -> &str {
    fen.trim_start().split(' ').next().unwrap_or_default()
}

/// Decode a placement field in scan order: FEN rank 0 (rank 8) first, files `a` to `h`.
///
/// Fails unless there are exactly 8 ranks and each sums to exactly 8 files.
pub fn parse_placement(placement: &str) -> ChessmotionResult<Vec<PlacedLetter>> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessmotionError::invalid_fen(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut out = Vec::with_capacity(32);
    for (fen_rank, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank as u8;
        let mut file = 0u32;

        for ch in rank_str.chars() {
            if let Some(run) = ch.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(ChessmotionError::invalid_fen(format!(
                        "invalid empty-square count '{ch}' in rank {}",
                        8 - fen_rank
                    )));
                }
                file += run;
                continue;
            }

            let (kind, color) = piece_from_fen_char(ch).ok_or_else(|| {
                ChessmotionError::invalid_fen(format!("invalid piece character '{ch}'"))
            })?;
            let square = u8::try_from(file)
                .ok()
                .and_then(|f| Square::new(f, rank))
                .ok_or_else(|| {
                    ChessmotionError::invalid_fen(format!(
                        "rank {} has more than 8 files",
                        8 - fen_rank
                    ))
                })?;
            out.push(PlacedLetter {
                square,
                kind,
                color,
            });
            file += 1;
        }

        if file != 8 {
            return Err(ChessmotionError::invalid_fen(format!(
                "rank {} sums to {file} files, expected 8",
                8 - fen_rank
            )));
        }
    }

    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/position/fen.rs"]
mod tests;
