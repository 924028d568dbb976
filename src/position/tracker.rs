use std::collections::BTreeMap;

use crate::{
    board::piece::{Piece, PieceColor, PieceId, PieceKind},
    board::square::Square,
    foundation::error::{ChessmotionError, ChessmotionResult},
    position::fen::{STANDARD_PLACEMENT, parse_placement, placement_field},
};

/// Hands out piece identities.
///
/// The first king of each color gets a bare code (`wk`, `bk`). Every other piece, including
/// any further king, gets a 1-based sequence number scoped to its `(kind, color)` pair,
/// continuing across promotions.
#[derive(Clone, Debug, Default)]
pub struct IdentityAllocator {
    counters: BTreeMap<(PieceColor, PieceKind), u32>,
}

impl IdentityAllocator {
    /// Allocate the next identity for a `(kind, color)` pair.
    pub fn assign(&mut self, kind: PieceKind, color: PieceColor) -> PieceId {
        let n = self.counters.entry((color, kind)).or_insert(0);
        *n += 1;
        let base = format!("{}{}", color.code(), kind.letter());
        if kind == PieceKind::King && *n == 1 {
            PieceId(base)
        } else {
            PieceId(format!("{base}{n}"))
        }
    }
}

/// Square-to-occupant map replayed move by move.
///
/// Holds at most one piece per square. It is a transient replay aid: seeded once from a FEN
/// placement, mutated once per compiled move, then handed back to the caller.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct PositionTracker {
    squares: BTreeMap<Square, Piece>,
    #[serde(skip)]
    ids: IdentityAllocator,
}

impl PositionTracker {
    /// Empty board.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Seed from a FEN string. Only the placement field is read.
    pub fn from_fen(fen: &str) -> ChessmotionResult<Self> {
        let letters = parse_placement(placement_field(fen))?;
        let mut tracker = Self::empty();
        for l in letters {
            let id = tracker.assign_identity(l.kind, l.color);
            tracker.place(
                l.square,
                Piece {
                    id,
                    kind: l.kind,
                    color: l.color,
                },
            );
        }
        Ok(tracker)
    }

    /// Standard starting position.
    pub fn standard() -> Self {
        Self::from_fen(STANDARD_PLACEMENT).unwrap_or_default()
    }

    /// Seed from `fen`, substituting the standard position when it does not decode.
    ///
    /// The decode error is handed back so the caller can report the substitution.
    pub fn from_fen_or_standard(fen: &str) -> (Self, Option<ChessmotionError>) {
        match Self::from_fen(fen) {
            Ok(t) => (t, None),
            Err(e) => (Self::standard(), Some(e)),
        }
    }

    /// Allocate a fresh identity (see [`IdentityAllocator::assign`]).
    pub fn assign_identity(&mut self, kind: PieceKind, color: PieceColor) -> PieceId {
        self.ids.assign(kind, color)
    }

    /// Piece on `square`, if any.
    pub fn occupant(&self, square: Square) -> Option<&Piece> {
        self.squares.get(&square)
    }

    /// Put `piece` on `square`, replacing any previous occupant.
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.squares.insert(square, piece)
    }

    /// Clear `square`, returning what was there.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares.remove(&square)
    }

    /// Relocate the occupant of `from` to `to`. No-op when `from` is empty.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        if let Some(piece) = self.squares.remove(&from) {
            self.squares.insert(to, piece);
        }
    }

    /// Locate a rook for castling.
    ///
    /// Search order: the exact `preferred` square, then any rook of `color` on its back rank,
    /// then any rook of `color` anywhere. Scans run in square order.
    pub fn find_castling_rook(&self, color: PieceColor, preferred: Square) -> Option<Square> {
        let is_rook = |p: &Piece| p.kind == PieceKind::Rook && p.color == color;

        if self.occupant(preferred).is_some_and(is_rook) {
            return Some(preferred);
        }
        self.squares
            .iter()
            .find(|(sq, p)| sq.rank() == color.back_rank() && is_rook(*p))
            .or_else(|| self.squares.iter().find(|(_, p)| is_rook(*p)))
            .map(|(sq, _)| *sq)
    }

    /// Square currently holding the piece with `id`.
    pub fn square_of(&self, id: &PieceId) -> Option<Square> {
        self.squares
            .iter()
            .find(|(_, p)| &p.id == id)
            .map(|(sq, _)| *sq)
    }

    /// Occupied squares in square order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> {
        self.squares.iter().map(|(sq, p)| (*sq, p))
    }

    /// Number of pieces on the board.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Whether the board is empty.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/position/tracker.rs"]
mod tests;
