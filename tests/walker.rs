use unique_walker::{Cell, Scripted, WalkError, Walker};

fn cells(points: &[(i32, i32)]) -> Vec<Cell> {
    points.iter().copied().map(Cell::from).collect()
}

fn scripted(points: &[(i32, i32)], picks: &[usize]) -> Walker<Scripted> {
    Walker::from_path_with(cells(points), Scripted::new(picks.iter().copied()))
}

/// Head at (1, 0) heading right with forward, left and right all taken.
const U_TRAP: [(i32, i32); 8] = [
    (1, -1),
    (2, -1),
    (2, 0),
    (2, 1),
    (1, 1),
    (0, 1),
    (0, 0),
    (1, 0),
];

#[test]
fn seed_uses_axis_then_sign() {
    let w = Walker::with_source(2, Scripted::new([1, 1])).unwrap();
    assert_eq!(w.path(), cells(&[(0, 0), (0, 1)]));

    let w = Walker::with_source(0, Scripted::new([0, 0])).unwrap();
    assert_eq!(w.path(), cells(&[(0, 0), (-1, 0)]));
}

#[test]
fn exhausted_script_always_walks_forward() {
    let w = Walker::with_source(5, Scripted::new([])).unwrap();
    assert_eq!(
        w.path(),
        cells(&[(0, 0), (-1, 0), (-2, 0), (-3, 0), (-4, 0)])
    );
    assert_eq!(w.source().drawn(), 5);
}

#[test]
fn scripted_picks_select_documented_candidates() {
    let mut w = scripted(&[(0, 0), (1, 0)], &[1, 2]);
    // forward, left, right: pick 1 turns to (1, 1)
    assert_eq!(w.advance(), Ok(Cell::new(1, 1)));
    // heading up the y axis now; pick 2 is (0, 1)
    assert_eq!(w.advance(), Ok(Cell::new(0, 1)));
    // (0, 0) blocks the left turn, forward is the first candidate
    assert_eq!(w.advance(), Ok(Cell::new(-1, 1)));
    assert_eq!(w.len(), 5);
}

#[test]
fn stuck_walker_reports_and_keeps_path() {
    let mut w = scripted(&U_TRAP, &[]);
    let err = w.advance().unwrap_err();
    assert_eq!(err, WalkError::Stuck { head: Cell::new(1, 0) });
    assert_eq!(err.to_string(), "walker unable to advance from (1, 0)");
    assert_eq!(w.path(), cells(&U_TRAP));
    assert_eq!(w.advance_by(3), Err(WalkError::Stuck { head: Cell::new(1, 0) }));
    assert_eq!(w.path(), cells(&U_TRAP));
}

#[test]
fn advance_by_keeps_partial_growth() {
    // one forced step down to (1, -1), then boxed in
    let points = [
        (0, -1),
        (0, -2),
        (1, -2),
        (2, -2),
        (2, -1),
        (2, 0),
        (2, 1),
        (1, 1),
        (0, 1),
        (0, 0),
        (1, 0),
    ];
    let mut w = scripted(&points, &[]);
    assert_eq!(
        w.advance_by(3),
        Err(WalkError::Stuck { head: Cell::new(1, -1) })
    );
    assert_eq!(w.len(), points.len() + 1);
    assert_eq!(w.head(), Some(Cell::new(1, -1)));
}

#[test]
fn blocked_forward_turns_away_from_sealed_pocket() {
    let points = [
        (2, -2),
        (2, -1),
        (2, 0),
        (2, 1),
        (1, 1),
        (0, 1),
        (0, 0),
        (0, -1),
        (0, -2),
        (1, -2),
    ];
    let mut w = scripted(&points, &[]);
    // (1, -1) would lead into the pocket closed by the loop above
    assert_eq!(w.advance(), Ok(Cell::new(1, -3)));
}

#[test]
fn retreat_undoes_forced_advance() {
    let points = [(2, 0), (2, 1), (1, 1), (0, 1), (0, 0), (1, 0)];
    let mut w = scripted(&points, &[]);
    let before = w.path().to_vec();
    let next = w.advance().unwrap();
    assert_eq!(next, Cell::new(1, -1));
    assert_eq!(w.index_of(next), Some(points.len()));
    assert_eq!(w.retreat(), Some(next));
    assert_eq!(w.path(), before);
    assert_eq!(w.index_of(next), None);
}

#[test]
fn retreat_stops_at_seed_cells() {
    let line: Vec<(i32, i32)> = (0..10).map(|x| (x, 0)).collect();
    let mut w = scripted(&line, &[]);
    assert_eq!(w.retreat_by(20), 8);
    assert_eq!(w.path(), cells(&[(0, 0), (1, 0)]));
    assert_eq!(w.retreat(), None);
    assert_eq!(w.len(), 2);
    assert_eq!(w.index_of(Cell::new(2, 0)), None);
}

#[test]
fn advance_to_reached_length_is_a_no_op() {
    let line: Vec<(i32, i32)> = (0..5).map(|x| (x, 0)).collect();
    let mut w = scripted(&line, &[]);
    w.advance_to(3).unwrap();
    w.advance_to(5).unwrap();
    assert_eq!(w.path(), cells(&line));
    assert_eq!(w.source().drawn(), 0);

    w.advance_to(7).unwrap();
    assert_eq!(w.len(), 7);
}

#[test]
fn index_of_tracks_positions() {
    let w = scripted(&[(0, 0), (0, 1), (1, 1)], &[]);
    assert_eq!(w.index_of(Cell::new(0, 1)), Some(1));
    assert_eq!(w.index_of(Cell::new(1, 1)), Some(2));
    assert_eq!(w.index_of(Cell::new(5, 5)), None);
    assert!(w.contains(Cell::ORIGIN));
    assert_eq!(w.head(), Some(Cell::new(1, 1)));
    assert_eq!(w.heading(), Some(Cell::new(1, 0)));
    assert_eq!(w.bounds(), Some((Cell::new(0, 0), Cell::new(1, 1))));
}

#[test]
fn unchecked_replay_keeps_last_index_of_duplicates() {
    let w = Walker::from_path(cells(&[(0, 0), (1, 0), (0, 0)]));
    assert_eq!(w.len(), 3);
    assert_eq!(w.index_of(Cell::ORIGIN), Some(2));
}

#[test]
fn short_replay_cannot_advance() {
    let mut w = Walker::from_path(cells(&[(0, 0)]));
    assert_eq!(w.advance(), Err(WalkError::Unseeded { len: 1 }));
    assert_eq!(w.heading(), None);
}

#[test]
fn checked_replay_rejects_broken_walks() {
    assert_eq!(
        Walker::try_from_path(cells(&[(0, 0)])).unwrap_err(),
        WalkError::TooShort { len: 1 }
    );
    assert_eq!(
        Walker::try_from_path(cells(&[(0, 0), (1, 1)])).unwrap_err(),
        WalkError::NotAdjacent {
            index: 1,
            from: Cell::new(0, 0),
            to: Cell::new(1, 1),
        }
    );
    assert_eq!(
        Walker::try_from_path(cells(&[(0, 0), (1, 0), (1, 1), (0, 1), (0, 0)])).unwrap_err(),
        WalkError::Revisited {
            index: 4,
            first: 0,
            cell: Cell::ORIGIN,
        }
    );

    let w = Walker::try_from_path(cells(&U_TRAP)).unwrap();
    assert_eq!(w.len(), U_TRAP.len());
}

#[test]
fn seeded_walks_repeat() {
    let mut a = Walker::seeded(42);
    let mut b = Walker::seeded(42);
    let _ = a.advance_by(100);
    let _ = b.advance_by(100);
    assert_eq!(a.path(), b.path());
}
