use std::fmt;

use crate::foundation::error::ChessmotionError;

/// Side a piece belongs to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    /// Uppercase FEN letters.
    White,
    /// Lowercase FEN letters.
    Black,
}

impl PieceColor {
    /// One-letter prefix used in piece identities (`w`/`b`).
    pub fn code(self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }

    /// Zero-based index of this side's back rank.
    pub fn back_rank(self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }
}

/// Piece type, independent of color.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    /// `p`
    Pawn,
    /// `n`
    Knight,
    /// `b`
    Bishop,
    /// `r`
    Rook,
    /// `q`
    Queen,
    /// `k`
    King,
}

impl PieceKind {
    /// Parse a type letter, case-insensitively.
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(Self::Pawn),
            'n' => Some(Self::Knight),
            'b' => Some(Self::Bishop),
            'r' => Some(Self::Rook),
            'q' => Some(Self::Queen),
            'k' => Some(Self::King),
            _ => None,
        }
    }

    /// Lowercase type letter.
    pub fn letter(self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Rook => 'r',
            Self::Queen => 'q',
            Self::King => 'k',
        }
    }

    /// Whether a pawn may promote into this kind.
    pub fn is_promotion_target(self) -> bool {
        matches!(self, Self::Knight | Self::Bishop | Self::Rook | Self::Queen)
    }

    /// Parse a promotion field (`"q"`, `"N"`, ...). Kings and pawns are rejected.
    pub fn parse_promotion(text: &str) -> Result<Self, ChessmotionError> {
        let mut chars = text.trim().chars();
        match (chars.next().and_then(Self::from_letter), chars.next()) {
            (Some(kind), None) if kind.is_promotion_target() => Ok(kind),
            _ => Err(ChessmotionError::validation(format!(
                "promotion piece '{text}' must be one of q, r, b, n"
            ))),
        }
    }
}

/// Decode a FEN piece letter into its kind and color.
pub fn piece_from_fen_char(c: char) -> Option<(PieceKind, PieceColor)> {
    let kind = PieceKind::from_letter(c)?;
    let color = if c.is_ascii_uppercase() {
        PieceColor::White
    } else {
        PieceColor::Black
    };
    Some((kind, color))
}

/// Stable identity of one piece for the whole animation (`wp1`, `bk`, `wq2`, ...).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PieceId(pub String);

impl PieceId {
    /// Borrow the identity text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A piece on the board: identity plus what it is.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Piece {
    /// Stable identity.
    pub id: PieceId,
    /// Piece type.
    pub kind: PieceKind,
    /// Piece color.
    pub color: PieceColor,
}

#[cfg(test)]
#[path = "../../tests/unit/board/piece.rs"]
mod tests;
