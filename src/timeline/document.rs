use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    animation::ease::Ease,
    board::geometry::{BoardGeometry, Orientation},
    board::piece::PieceColor,
    foundation::core::Canvas,
    foundation::error::{ChessmotionError, ChessmotionResult},
    timeline::compiler::TimingParams,
};

/// One move as written in the move-list document.
///
/// Every field is optional on the wire; the compiler decides what a missing or malformed
/// field means for the timeline.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MoveRecord {
    /// Origin square (`e2`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_square: Option<String>,
    /// Destination square (`e4`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_square: Option<String>,
    /// Whether this move captures.
    #[serde(default)]
    pub capture: bool,
    /// Square of the captured piece; defaults to the destination (differs for en passant).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_piece_square: Option<String>,
    /// Promotion type letter (`q`, `r`, `b`, `n`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<String>,
    /// Color of the promoted piece; defaults to the mover's color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion_color: Option<PieceColor>,
    /// Square the promoted piece appears on; defaults to the destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion_square: Option<String>,
}

impl MoveRecord {
    /// Plain move between two squares.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from_square: Some(from.into()),
            to_square: Some(to.into()),
            ..Self::default()
        }
    }

    /// Flag this move as a capture.
    pub fn capturing(mut self) -> Self {
        self.capture = true;
        self
    }

    /// Flag this move as a capture of the piece on `square`.
    pub fn capturing_at(mut self, square: impl Into<String>) -> Self {
        self.capture = true;
        self.captured_piece_square = Some(square.into());
        self
    }

    /// Flag this move as a promotion into `letter`.
    pub fn promoting(mut self, letter: impl Into<String>) -> Self {
        self.promotion = Some(letter.into());
        self
    }
}

/// Rendering and timing configuration. Every field has a default.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimelineSettings {
    /// Canvas the board is centered on.
    pub canvas: Canvas,
    /// Clock parameters.
    pub timing: TimingParams,
    /// View orientation.
    pub orientation: Orientation,
    /// Easing applied to move segments by the keyframe adapter.
    pub ease: Ease,
}

impl TimelineSettings {
    /// Validate canvas and timing values.
    pub fn validate(&self) -> ChessmotionResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)?;
        self.timing.validate()
    }

    /// Board geometry implied by canvas and orientation.
    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry::centered_in(self.canvas).with_orientation(self.orientation)
    }
}

/// Move-list document: a start position plus an ordered list of moves.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineDocument {
    /// Full FEN of the start position. Absent means the standard start.
    #[serde(rename = "startFEN", default, skip_serializing_if = "Option::is_none")]
    pub start_fen: Option<String>,
    /// Moves in play order.
    #[serde(default)]
    pub moves: Vec<MoveRecord>,
    /// Optional embedded settings.
    #[serde(default)]
    pub settings: TimelineSettings,
}

impl TimelineDocument {
    /// Parse a document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ChessmotionResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ChessmotionError::serde(format!("parse timeline JSON: {e}")))
    }

    /// Parse a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ChessmotionResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ChessmotionError::validation(format!("open timeline JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/document.rs"]
mod tests;
