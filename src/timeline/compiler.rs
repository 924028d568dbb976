//! Move list to animation event stream.
//!
//! Moves are replayed strictly in list order against a [`PositionTracker`]. Each move owns one
//! clock step of `move_duration + gap_between_moves`, whether or not it produced events, so a
//! malformed move never shifts the timing of the moves after it.

use crate::{
    board::geometry::BoardGeometry,
    board::piece::{Piece, PieceKind},
    board::square::Square,
    foundation::error::{ChessmotionError, ChessmotionResult},
    position::tracker::PositionTracker,
    timeline::document::{MoveRecord, TimelineDocument},
    timeline::event::{AnimationEvent, Diagnostic, DiagnosticKind, EventKind},
};

/// Clock parameters, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimingParams {
    /// Time at which the first move starts.
    pub start_time: f64,
    /// Length of one piece relocation.
    pub move_duration: f64,
    /// Length of capture and promotion fades.
    pub fade_duration: f64,
    /// Pause after each move.
    pub gap_between_moves: f64,
}

impl Default for TimingParams {
    fn default() -> Self {
        Self {
            start_time: 2.0,
            move_duration: 0.3,
            fade_duration: 0.02,
            gap_between_moves: 1.0,
        }
    }
}

impl TimingParams {
    /// Every value must be finite and non-negative.
    pub fn validate(&self) -> ChessmotionResult<()> {
        for (name, v) in [
            ("start_time", self.start_time),
            ("move_duration", self.move_duration),
            ("fade_duration", self.fade_duration),
            ("gap_between_moves", self.gap_between_moves),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ChessmotionError::validation(format!(
                    "timing {name} must be finite and >= 0 (got {v})"
                )));
            }
        }
        Ok(())
    }

    /// Clock advance per processed move.
    pub fn step(&self) -> f64 {
        self.move_duration + self.gap_between_moves
    }
}

/// Monotonic clock used to schedule successive moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingCursor {
    now: f64,
    step: f64,
}

impl TimingCursor {
    /// Cursor positioned at `params.start_time`.
    pub fn new(params: &TimingParams) -> Self {
        Self {
            now: params.start_time,
            step: params.step(),
        }
    }

    /// Current time.
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Move to the next slot.
    pub fn advance(&mut self) {
        self.now += self.step;
    }
}

/// Output of a compile run.
#[derive(Clone, Debug, serde::Serialize)]
pub struct CompiledTimeline {
    /// One `appear` event per initial piece, at time 0.
    pub setup: Vec<AnimationEvent>,
    /// Move-driven events, ordered by start time.
    pub events: Vec<AnimationEvent>,
    /// Non-fatal problems, in the order they were met.
    pub diagnostics: Vec<Diagnostic>,
    /// Clock value after the last move.
    pub end_time: f64,
    /// Board after every move was replayed.
    pub final_position: PositionTracker,
}

/// Turns an ordered move list into an animation event stream.
#[derive(Clone, Copy, Debug)]
pub struct TimelineCompiler {
    geometry: BoardGeometry,
    timing: TimingParams,
}

impl TimelineCompiler {
    /// Build a compiler, validating the timing parameters.
    pub fn new(geometry: BoardGeometry, timing: TimingParams) -> ChessmotionResult<Self> {
        timing.validate()?;
        Ok(Self { geometry, timing })
    }

    /// Replay `moves` against `tracker` and collect the resulting events.
    #[tracing::instrument(skip_all, fields(moves = moves.len(), pieces = tracker.len()))]
    pub fn compile(&self, tracker: PositionTracker, moves: &[MoveRecord]) -> CompiledTimeline {
        let setup = tracker
            .pieces()
            .map(|(sq, piece)| AnimationEvent {
                piece: piece.id.clone(),
                kind: EventKind::Appear,
                start: 0.0,
                end: 0.0,
                from: None,
                to: sq,
                from_position: None,
                to_position: self.geometry.square_center(sq),
                move_index: None,
            })
            .collect();

        let mut replay = Replay {
            compiler: self,
            tracker,
            events: Vec::new(),
            diagnostics: Vec::new(),
        };
        let mut cursor = TimingCursor::new(&self.timing);
        for (index, record) in moves.iter().enumerate() {
            replay.apply(index, record, cursor.now());
            cursor.advance();
        }

        let Replay {
            tracker,
            mut events,
            diagnostics,
            ..
        } = replay;
        events.sort_by(|a, b| a.start.total_cmp(&b.start));
        tracing::debug!(
            events = events.len(),
            diagnostics = diagnostics.len(),
            end_time = cursor.now(),
            "timeline compiled"
        );

        CompiledTimeline {
            setup,
            events,
            diagnostics,
            end_time: cursor.now(),
            final_position: tracker,
        }
    }
}

/// Compile a whole document using its embedded settings.
///
/// An absent start FEN means the standard position. A start FEN that does not decode is
/// replaced by the standard position and reported as a diagnostic; invalid settings are an error.
#[tracing::instrument(skip_all, fields(moves = doc.moves.len()))]
pub fn compile_document(doc: &TimelineDocument) -> ChessmotionResult<CompiledTimeline> {
    doc.settings.validate()?;
    let compiler = TimelineCompiler::new(doc.settings.geometry(), doc.settings.timing)?;

    let (tracker, fen_error) = match doc.start_fen.as_deref() {
        Some(fen) => PositionTracker::from_fen_or_standard(fen),
        None => (PositionTracker::standard(), None),
    };

    let mut out = compiler.compile(tracker, &doc.moves);
    if let Some(err) = fen_error {
        let message = format!("{err}; using the standard start position");
        tracing::warn!("{message}");
        out.diagnostics.insert(
            0,
            Diagnostic {
                move_index: None,
                kind: DiagnosticKind::InvalidFen,
                message,
            },
        );
    }
    Ok(out)
}

struct Replay<'a> {
    compiler: &'a TimelineCompiler,
    tracker: PositionTracker,
    events: Vec<AnimationEvent>,
    diagnostics: Vec<Diagnostic>,
}

impl Replay<'_> {
    fn apply(&mut self, index: usize, record: &MoveRecord, t0: f64) {
        let Some((from, to)) = self.endpoints(index, record) else {
            return;
        };
        let Some(mover) = self.tracker.occupant(from).cloned() else {
            self.report(
                Some(index),
                DiagnosticKind::NoPieceAtOrigin,
                format!("no piece at {from} for move {index} ({from}-{to})"),
            );
            return;
        };

        let timing = self.compiler.timing;
        let t1 = t0 + timing.move_duration;
        self.push_move(&mover, from, to, t0, t1, index);

        if record.capture {
            let at = self.aux_square(
                index,
                "captured_piece_square",
                &record.captured_piece_square,
                to,
            );
            // A vacated capture square is tolerated silently.
            if let Some(victim) = self.tracker.occupant(at).cloned()
                && victim.id != mover.id
            {
                self.push_fade(&victim, EventKind::FadeOut, at, t1, index);
                self.tracker.remove(at);
            }
        }

        if let Some(letter) = record.promotion.as_deref() {
            match PieceKind::parse_promotion(letter) {
                Ok(kind) => {
                    self.promote(index, record, &mover, from, to, kind, t1);
                    return;
                }
                Err(e) => self.report(
                    Some(index),
                    DiagnosticKind::InvalidPromotion,
                    format!("move {index}: {e}; treated as a plain move"),
                ),
            }
        }

        if mover.kind == PieceKind::King && from.file().abs_diff(to.file()) == 2 {
            self.castle(index, &mover, from, to, t0, t1);
        }

        // The mover lands last so capture lookups above still saw the captured piece.
        self.tracker.move_piece(from, to);
    }

    fn endpoints(&mut self, index: usize, record: &MoveRecord) -> Option<(Square, Square)> {
        let parse = |field: &Option<String>| field.as_deref().map(str::parse::<Square>);
        match (parse(&record.from_square), parse(&record.to_square)) {
            (Some(Ok(from)), Some(Ok(to))) => Some((from, to)),
            _ => {
                self.report(
                    Some(index),
                    DiagnosticKind::MissingMoveEndpoint,
                    format!(
                        "move {index} is missing a valid from_square or to_square (from={:?}, to={:?})",
                        record.from_square, record.to_square
                    ),
                );
                None
            }
        }
    }

    fn aux_square(
        &mut self,
        index: usize,
        field: &str,
        value: &Option<String>,
        fallback: Square,
    ) -> Square {
        match value.as_deref().map(str::parse::<Square>) {
            None => fallback,
            Some(Ok(sq)) => sq,
            Some(Err(e)) => {
                self.report(
                    Some(index),
                    DiagnosticKind::InvalidSquare,
                    format!("move {index}: {field}: {e}; using {fallback}"),
                );
                fallback
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn promote(
        &mut self,
        index: usize,
        record: &MoveRecord,
        pawn: &Piece,
        from: Square,
        to: Square,
        kind: PieceKind,
        t1: f64,
    ) {
        let color = record.promotion_color.unwrap_or(pawn.color);
        let at = self.aux_square(index, "promotion_square", &record.promotion_square, to);

        self.push_fade(pawn, EventKind::FadeOut, to, t1, index);
        let promoted = Piece {
            id: self.tracker.assign_identity(kind, color),
            kind,
            color,
        };
        self.push_fade(&promoted, EventKind::FadeIn, at, t1, index);
        tracing::debug!(pawn = %pawn.id, piece = %promoted.id, square = %at, "promotion");

        self.tracker.remove(from);
        self.tracker.place(at, promoted);
    }

    fn castle(
        &mut self,
        index: usize,
        king: &Piece,
        from: Square,
        to: Square,
        t0: f64,
        t1: f64,
    ) {
        let kingside = to.file() > from.file();
        let (preferred_file, target_file) = if kingside {
            (7, to.file() - 1)
        } else {
            (0, to.file() + 1)
        };
        let Some(back) = Square::new(0, king.color.back_rank()) else {
            return;
        };
        let (Some(preferred), Some(target)) =
            (back.with_file(preferred_file), back.with_file(target_file))
        else {
            return;
        };

        let Some(rook_sq) = self.tracker.find_castling_rook(king.color, preferred) else {
            self.report(
                Some(index),
                DiagnosticKind::RookNotFoundForCastling,
                format!(
                    "castling: rook not found for move {index} (king {from}-{to}); \
                     king moves, rook skipped"
                ),
            );
            return;
        };
        if let Some(rook) = self.tracker.remove(rook_sq) {
            self.push_move(&rook, rook_sq, target, t0, t1, index);
            self.tracker.place(target, rook);
        }
    }

    fn push_move(
        &mut self,
        piece: &Piece,
        from: Square,
        to: Square,
        t0: f64,
        t1: f64,
        index: usize,
    ) {
        let geometry = &self.compiler.geometry;
        self.events.push(AnimationEvent {
            piece: piece.id.clone(),
            kind: EventKind::Move,
            start: t0,
            end: t1,
            from: Some(from),
            to,
            from_position: Some(geometry.square_center(from)),
            to_position: geometry.square_center(to),
            move_index: Some(index),
        });
    }

    fn push_fade(&mut self, piece: &Piece, kind: EventKind, at: Square, start: f64, index: usize) {
        self.events.push(AnimationEvent {
            piece: piece.id.clone(),
            kind,
            start,
            end: start + self.compiler.timing.fade_duration,
            from: None,
            to: at,
            from_position: None,
            to_position: self.compiler.geometry.square_center(at),
            move_index: Some(index),
        });
    }

    fn report(&mut self, move_index: Option<usize>, kind: DiagnosticKind, message: String) {
        tracing::warn!(move_index = ?move_index, ?kind, "{message}");
        self.diagnostics.push(Diagnostic {
            move_index,
            kind,
            message,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/compiler.rs"]
mod tests;
