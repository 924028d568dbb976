use super::*;
use crate::board::geometry::BoardGeometry;
use crate::position::tracker::PositionTracker;
use crate::timeline::compiler::{TimelineCompiler, TimingParams};
use crate::timeline::document::MoveRecord;

fn geometry() -> BoardGeometry {
    BoardGeometry::new(Point::ZERO, 10.0).unwrap()
}

fn timing() -> TimingParams {
    TimingParams {
        start_time: 1.0,
        move_duration: 1.0,
        fade_duration: 0.5,
        gap_between_moves: 1.0,
    }
}

fn animate(fen: &str, moves: &[MoveRecord]) -> BoardAnimation {
    let compiled = TimelineCompiler::new(geometry(), timing())
        .unwrap()
        .compile(PositionTracker::from_fen(fen).unwrap(), moves);
    BoardAnimation::from_timeline(&compiled, geometry(), Ease::Linear).unwrap()
}

fn frame<'a>(frames: &'a [PieceFrame], id: &str) -> &'a PieceFrame {
    frames.iter().find(|f| f.piece.as_str() == id).unwrap()
}

#[test]
fn moving_piece_interpolates_between_cell_centers() {
    let anim = animate(
        "4k3/8/8/8/8/8/4P3/4K3",
        &[MoveRecord::new("e2", "e4")],
    );
    assert_eq!(anim.len(), 3);

    let before = anim.sample(0.0).unwrap();
    assert_eq!(frame(&before, "wp1").position, Point::new(45.0, 65.0));
    assert_eq!(frame(&before, "wp1").square.to_string(), "e2");

    let mid = anim.sample(1.5).unwrap();
    assert_eq!(frame(&mid, "wp1").position, Point::new(45.0, 55.0));

    let after = anim.sample(10.0).unwrap();
    assert_eq!(frame(&after, "wp1").square.to_string(), "e4");
    assert_eq!(frame(&after, "wk").square.to_string(), "e1");
}

#[test]
fn captured_piece_fades_after_the_move() {
    let anim = animate(
        "4k3/8/8/3p4/4P3/8/8/4K3",
        &[MoveRecord::new("e4", "d5").capturing()],
    );

    assert_eq!(frame(&anim.sample(1.5).unwrap(), "bp1").opacity, 1.0);
    assert_eq!(frame(&anim.sample(2.25).unwrap(), "bp1").opacity, 0.5);
    assert_eq!(frame(&anim.sample(3.0).unwrap(), "bp1").opacity, 0.0);

    let visible = anim.visible_at(3.0).unwrap();
    assert_eq!(visible.len(), 3);
    assert!(visible.iter().all(|f| f.piece.as_str() != "bp1"));
}

#[test]
fn promoted_piece_is_hidden_until_its_fade_in() {
    let anim = animate(
        "4k3/1P6/8/8/8/8/8/4K3",
        &[MoveRecord::new("b7", "b8").promoting("q")],
    );
    assert_eq!(anim.len(), 4);

    let start = anim.sample(0.0).unwrap();
    assert_eq!(frame(&start, "wq1").opacity, 0.0);
    assert_eq!(frame(&start, "wq1").square.to_string(), "b8");

    let end = anim.visible_at(5.0).unwrap();
    let ids: Vec<&str> = end.iter().map(|f| f.piece.as_str()).collect();
    assert_eq!(ids, ["bk", "wk", "wq1"]);
}

#[test]
fn castling_rook_track_moves_with_king() {
    let anim = animate("4k3/8/8/8/8/8/8/4K2R", &[MoveRecord::new("e1", "g1")]);
    let mid = anim.sample(1.5).unwrap();
    let king = frame(&mid, "wk").position;
    let rook = frame(&mid, "wr1").position;
    assert_eq!(king, Point::new(55.0, 75.0));
    assert_eq!(rook, Point::new(65.0, 75.0));

    let end = anim.sample(2.0).unwrap();
    assert_eq!(frame(&end, "wk").square.to_string(), "g1");
    assert_eq!(frame(&end, "wr1").square.to_string(), "f1");
}

#[test]
fn every_king_keeps_its_own_track() {
    let anim = animate("KK6/8/8/8/8/8/8/k7", &[]);
    assert_eq!(anim.len(), 3);
    let frames = anim.sample(0.0).unwrap();
    assert_eq!(frames.len(), 3);
    assert_eq!(frame(&frames, "wk").square.to_string(), "a8");
    assert_eq!(frame(&frames, "wk2").square.to_string(), "b8");
}
