//! End-to-end tests across the engine, snapshot, and persistence sinks.

use blockfall::core::{Engine, PieceSource, Snapshot, UniformPieces};
use blockfall::persist::HighScoreStore;
use blockfall::types::{Command, GamePhase, PieceKind};

#[test]
fn same_seed_replays_the_same_game() {
    let mut a = Engine::new(777);
    let mut b = Engine::new(777);
    a.apply(Command::Start);
    b.apply(Command::Start);

    let commands = [
        Command::MoveLeft,
        Command::Rotate,
        Command::HardDrop,
        Command::MoveRight,
        Command::SoftDrop,
        Command::HardDrop,
    ];
    for command in commands {
        a.apply(command);
        b.apply(command);
    }

    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn uniform_source_draws_only_real_kinds() {
    let mut source = UniformPieces::new(42);
    for _ in 0..1000 {
        let kind = source.next_piece();
        assert!(PieceKind::ALL.contains(&kind));
    }
}

#[test]
fn active_piece_never_overlaps_the_board() {
    // Drive a full random game to game-over with a churn of inputs and
    // check the core invariant after every step.
    let mut engine = Engine::new(20260806);
    engine.apply(Command::Start);

    let inputs = [
        Command::MoveLeft,
        Command::Rotate,
        Command::MoveRight,
        Command::SoftDrop,
        Command::MoveRight,
        Command::HardDrop,
    ];
    let mut step = 0usize;
    while engine.phase() == GamePhase::Running && step < 20_000 {
        engine.apply(inputs[step % inputs.len()]);
        engine.tick(97);
        step += 1;

        if let Some(piece) = engine.active() {
            for (x, y) in piece.cells() {
                assert!((0..10).contains(&x), "x out of bounds at step {step}");
                assert!(y < 20, "below floor at step {step}");
                if y >= 0 {
                    assert!(
                        !engine.board().is_occupied(x, y),
                        "overlap at ({x},{y}), step {step}"
                    );
                }
            }
        }
    }
    assert_eq!(engine.phase(), GamePhase::GameOver);
}

#[test]
fn counters_are_monotonic_until_reset() {
    let mut engine = Engine::new(99);
    engine.apply(Command::Start);

    let mut last = (0u32, 1u32, 0u32);
    for step in 0..5_000 {
        if engine.phase() != GamePhase::Running {
            break;
        }
        engine.apply(if step % 3 == 0 {
            Command::Rotate
        } else {
            Command::HardDrop
        });
        let now = (engine.score(), engine.level(), engine.lines());
        assert!(now.0 >= last.0 && now.1 >= last.1 && now.2 >= last.2);
        last = now;
    }

    engine.apply(Command::Reset);
    assert_eq!(
        (engine.score(), engine.level(), engine.lines()),
        (0, 1, 0)
    );
}

#[test]
fn high_score_flow_matches_the_runner() {
    let path = std::env::temp_dir().join(format!(
        "blockfall-integration-{}.json",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let mut engine = Engine::new(31337);
    engine.apply(Command::Start);
    let mut store = HighScoreStore::open(&path);
    let mut snapshot = Snapshot::default();

    // Play a few pieces the way the binary does: snapshot, then record on
    // exceed.
    for _ in 0..5 {
        engine.apply(Command::HardDrop);
        engine.snapshot_into(&mut snapshot);
        if snapshot.score > store.best() {
            store.record(snapshot.score).unwrap();
        }
    }
    assert!(store.best() > 0);
    assert_eq!(store.best(), snapshot.score);

    // A fresh process sees the stored best.
    let reopened = HighScoreStore::open(&path);
    assert_eq!(reopened.best(), store.best());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn scripted_runs_are_reproducible_via_the_source_seam() {
    struct Fixed;
    impl PieceSource for Fixed {
        fn next_piece(&mut self) -> PieceKind {
            PieceKind::O
        }
    }

    let mut engine = Engine::with_source(Box::new(Fixed));
    engine.apply(Command::Start);
    assert_eq!(engine.active().unwrap().kind, PieceKind::O);
    assert_eq!(engine.queued(), PieceKind::O);
}
