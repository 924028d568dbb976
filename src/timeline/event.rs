use crate::{
    board::piece::PieceId,
    board::square::Square,
    foundation::core::Point,
};

/// What happens to a piece during an [`AnimationEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Relocate from `from` to `to` over `[start, end]`.
    Move,
    /// Fade to invisible over `[start, end]` (captures, promoted pawns).
    FadeOut,
    /// Fade from invisible over `[start, end]` (promoted pieces).
    FadeIn,
    /// Placed on the board at setup time.
    Appear,
}

/// One scheduled change to one piece. Times are absolute seconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationEvent {
    /// Subject piece.
    pub piece: PieceId,
    /// Event kind.
    pub kind: EventKind,
    /// Start time.
    pub start: f64,
    /// End time (`>= start`).
    pub end: f64,
    /// Origin square for moves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Square>,
    /// Square the piece occupies once the event ends.
    pub to: Square,
    /// Pixel position of `from`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_position: Option<Point>,
    /// Pixel position of `to`.
    pub to_position: Point,
    /// Index of the move that produced this event; `None` for setup events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_index: Option<usize>,
}

impl AnimationEvent {
    /// Event duration in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Category of a non-fatal problem met while compiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The start FEN did not decode; the standard position was used.
    InvalidFen,
    /// A move lacks a usable `from_square` or `to_square`.
    MissingMoveEndpoint,
    /// Nothing stands on the move's origin square.
    NoPieceAtOrigin,
    /// A castling king move found no rook to bring along.
    RookNotFoundForCastling,
    /// The promotion letter is not one of `q`, `r`, `b`, `n`.
    InvalidPromotion,
    /// An optional square field did not parse; the destination square was used instead.
    InvalidSquare,
}

/// A reported, non-fatal problem.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Diagnostic {
    /// Zero-based index of the offending move, if the problem belongs to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub move_index: Option<usize>,
    /// Problem category.
    pub kind: DiagnosticKind,
    /// Human-readable detail.
    pub message: String,
}
