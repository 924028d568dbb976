use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::foundation::error::ChessmotionError;

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// One of the 64 board cells, addressed algebraically (`a1`..`h8`).
///
/// Ordering is rank-major from White's side (`a1 < b1 < .. < h1 < a2 < ..`), which is also the
/// iteration order of every square-keyed map in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square {
    file: u8, // 0 = a
    rank: u8, // 0 = rank 1
}

impl Square {
    /// Build a square from zero-based file and rank indices. Returns `None` if out of range.
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        if file > 7 || rank > 7 {
            return None;
        }
        Some(Self { file, rank })
    }

    /// Build a square from signed indices, clamping each into `0..=7`.
    pub fn clamped_from_indices(file: i64, rank: i64) -> Self {
        Self {
            file: file.clamp(0, 7) as u8,
            rank: rank.clamp(0, 7) as u8,
        }
    }

    /// Parse leniently: an unknown file letter or out-of-range rank is clamped to the board
    /// edge rather than rejected.
    pub fn clamped(text: &str) -> Self {
        let mut chars = text.trim().chars();
        let file = chars
            .next()
            .and_then(|c| FILES.iter().position(|&f| f == c.to_ascii_lowercase()))
            .map_or(0, |i| i as i64);
        let rank = match chars.as_str().parse::<i64>() {
            Ok(digit) => digit.saturating_sub(1),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => 7,
            Err(_) => 0,
        };
        Self::clamped_from_indices(file, rank)
    }

    /// Zero-based file index (`a` = 0).
    pub fn file(self) -> u8 {
        self.file
    }

    /// Zero-based rank index (rank `1` = 0).
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// File letter.
    pub fn file_char(self) -> char {
        FILES[usize::from(self.file)]
    }

    /// Rank digit as written in algebraic notation (`1`..`8`).
    pub fn rank_digit(self) -> u8 {
        self.rank + 1
    }

    /// Same rank, different file. Returns `None` if `file` is out of range.
    pub fn with_file(self, file: u8) -> Option<Self> {
        Self::new(file, self.rank)
    }

    /// Every square in rank-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { file, rank }))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.rank, self.file).cmp(&(other.rank, other.file))
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_digit())
    }
}

impl FromStr for Square {
    type Err = ChessmotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.trim().as_bytes();
        let [file, rank] = bytes else {
            return Err(ChessmotionError::validation(format!(
                "square '{s}' must be a file letter followed by a rank digit"
            )));
        };
        let file = file.to_ascii_lowercase();
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(rank) {
            return Err(ChessmotionError::validation(format!(
                "square '{s}' is off the board"
            )));
        }
        Ok(Self {
            file: file - b'a',
            rank: rank - b'1',
        })
    }
}

impl TryFrom<String> for Square {
    type Error = ChessmotionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> Self {
        sq.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/board/square.rs"]
mod tests;
