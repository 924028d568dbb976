//! chessmotion compiles a chess game into a timed animation event stream.
//!
//! The input is a start position (FEN) plus an ordered move list. The output is a list of
//! [`AnimationEvent`]s (piece relocations, capture fades, promotion swaps, castling rook moves)
//! with absolute start and end times, ready for any rendering backend.
//!
//! # Pipeline overview
//!
//! 1. **Seed**: `FEN -> PositionTracker` (square to piece, with stable piece identities)
//! 2. **Compile**: `PositionTracker + [MoveRecord] -> CompiledTimeline` (events + diagnostics)
//! 3. **Animate** (optional): `CompiledTimeline -> BoardAnimation` (per-piece keyframe tracks
//!    that can be sampled at any time)
//!
//! Compilation is single-threaded and deterministic. Only a malformed start FEN or invalid
//! settings can fail a run; per-move problems become [`Diagnostic`]s and the clock still
//! advances so later moves keep their timing.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod board;
mod foundation;
mod position;
mod timeline;

pub use animation::ease::Ease;
pub use animation::keyframes::{InterpMode, Keyframe, Keyframes, Lerp};
pub use animation::tracks::{BoardAnimation, PieceFrame, PieceTrack};
pub use board::geometry::{BoardGeometry, Orientation, square_to_coords};
pub use board::piece::{Piece, PieceColor, PieceId, PieceKind, piece_from_fen_char};
pub use board::square::Square;
pub use foundation::core::{Canvas, Point, Rect};
pub use foundation::error::{ChessmotionError, ChessmotionResult};
pub use position::fen::{PlacedLetter, STANDARD_PLACEMENT, parse_placement, placement_field};
pub use position::tracker::{IdentityAllocator, PositionTracker};
pub use timeline::compiler::{
    CompiledTimeline, TimelineCompiler, TimingCursor, TimingParams, compile_document,
};
pub use timeline::document::{MoveRecord, TimelineDocument, TimelineSettings};
pub use timeline::event::{AnimationEvent, Diagnostic, DiagnosticKind, EventKind};
