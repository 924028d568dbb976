//! Reference rendering adapter.
//!
//! Folds a compiled event stream into per-piece position and opacity keyframe tracks, which
//! can then be sampled at any time to get the whole board's visual state.

use std::collections::BTreeMap;

use crate::{
    animation::ease::Ease,
    animation::keyframes::Keyframes,
    board::geometry::BoardGeometry,
    board::piece::PieceId,
    board::square::Square,
    foundation::core::Point,
    foundation::error::ChessmotionResult,
    timeline::compiler::CompiledTimeline,
    timeline::event::{AnimationEvent, EventKind},
};

/// Keyframe tracks for one piece.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PieceTrack {
    /// Pixel position over time.
    pub position: Keyframes<Point>,
    /// Opacity in `[0, 1]` over time.
    pub opacity: Keyframes<f64>,
}

impl PieceTrack {
    fn placed(at: Point, visible: bool) -> Self {
        Self {
            position: Keyframes::constant(at),
            opacity: Keyframes::constant(if visible { 1.0 } else { 0.0 }),
        }
    }
}

/// Visual state of one piece at one instant.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PieceFrame {
    /// Piece identity.
    pub piece: PieceId,
    /// Pixel position.
    pub position: Point,
    /// Square nearest to `position`.
    pub square: Square,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// All piece tracks of one compiled timeline.
#[derive(Clone, Debug, serde::Serialize)]
pub struct BoardAnimation {
    geometry: BoardGeometry,
    tracks: BTreeMap<PieceId, PieceTrack>,
}

impl BoardAnimation {
    /// Build tracks from setup and move events.
    ///
    /// `ease` shapes every move segment; fades are always linear.
    pub fn from_timeline(
        timeline: &CompiledTimeline,
        geometry: BoardGeometry,
        ease: Ease,
    ) -> ChessmotionResult<Self> {
        let mut tracks = BTreeMap::new();
        for e in &timeline.setup {
            tracks.insert(e.piece.clone(), PieceTrack::placed(e.to_position, true));
        }
        for e in &timeline.events {
            apply_event(&mut tracks, e, ease);
        }
        for track in tracks.values() {
            track.position.validate()?;
            track.opacity.validate()?;
        }
        Ok(Self { geometry, tracks })
    }

    /// Track of one piece.
    pub fn track(&self, piece: &PieceId) -> Option<&PieceTrack> {
        self.tracks.get(piece)
    }

    /// Number of tracked pieces, including captured and promoted-away ones.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether no piece is tracked.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Every piece's state at time `t`, in identity order.
    pub fn sample(&self, t: f64) -> ChessmotionResult<Vec<PieceFrame>> {
        self.tracks
            .iter()
            .map(|(id, track)| {
                let position = track.position.sample(t)?;
                Ok(PieceFrame {
                    piece: id.clone(),
                    position,
                    square: self.geometry.position_to_nearest_square(position),
                    opacity: track.opacity.sample(t)?.clamp(0.0, 1.0),
                })
            })
            .collect()
    }

    /// Pieces with non-zero opacity at time `t`.
    pub fn visible_at(&self, t: f64) -> ChessmotionResult<Vec<PieceFrame>> {
        let mut frames = self.sample(t)?;
        frames.retain(|f| f.opacity > 0.0);
        Ok(frames)
    }
}

fn apply_event(tracks: &mut BTreeMap<PieceId, PieceTrack>, e: &AnimationEvent, ease: Ease) {
    match e.kind {
        EventKind::Appear => {
            tracks
                .entry(e.piece.clone())
                .or_insert_with(|| PieceTrack::placed(e.to_position, true));
        }
        EventKind::Move => {
            let from = e.from_position.unwrap_or(e.to_position);
            let track = tracks
                .entry(e.piece.clone())
                .or_insert_with(|| PieceTrack::placed(from, true));
            track.position.push(e.start, from, ease);
            track.position.push(e.end, e.to_position, Ease::Linear);
        }
        EventKind::FadeOut => {
            let track = tracks
                .entry(e.piece.clone())
                .or_insert_with(|| PieceTrack::placed(e.to_position, true));
            track.opacity.push(e.start, 1.0, Ease::Linear);
            track.opacity.push(e.end, 0.0, Ease::Linear);
        }
        EventKind::FadeIn => {
            let track = tracks
                .entry(e.piece.clone())
                .or_insert_with(|| PieceTrack::placed(e.to_position, false));
            track.opacity.push(e.start, 0.0, Ease::Linear);
            track.opacity.push(e.end, 1.0, Ease::Linear);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tracks.rs"]
mod tests;
