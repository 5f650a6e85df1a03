//! Integration test: high score survives restarts and process exits

use city_runner::core::GameSession;
use city_runner::input::RunnerInput;
use city_runner::runner::{Obstacle, ObstacleKind, ScoreTracker};
use city_runner::utils::persistence::HighScoreStore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;

fn session_at(path: &Path, seed: u64) -> GameSession<ChaCha8Rng> {
    let store = HighScoreStore::at(path);
    GameSession::new(ScoreTracker::load(store), ChaCha8Rng::seed_from_u64(seed), 0)
}

/// Jump on every tick until `target` points, at a frozen clock so nothing spawns.
fn score_points(session: &mut GameSession<ChaCha8Rng>, target: u32) {
    for _ in 0..100_000 {
        if session.score.current() >= target {
            return;
        }
        session.handle_input(RunnerInput::Jump, 0);
        session.tick(0);
    }
    panic!("never reached {target}");
}

/// Let the runner land, then drop a dog in front of it.
fn crash(session: &mut GameSession<ChaCha8Rng>) {
    while !session.player.is_on_ground() {
        session.tick(0);
    }
    session.obstacles.insert(Obstacle::new(140.0, ObstacleKind::Dog));
    session.tick(0);
    assert!(session.is_game_over());
}

#[test]
fn test_high_score_carries_to_next_process() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.dat");

    let mut first = session_at(&path, 1);
    score_points(&mut first, 30);
    assert_eq!(first.shutdown(), 30);

    let second = session_at(&path, 2);
    assert_eq!(second.score.high(), 30);
    assert_eq!(second.score.current(), 0);
}

#[test]
fn test_restart_keeps_best_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.dat");

    let mut session = session_at(&path, 3);
    score_points(&mut session, 50);
    crash(&mut session);

    session.handle_input(RunnerInput::Jump, 1_000);
    assert!(!session.is_game_over());
    assert_eq!(session.score.current(), 0);
    assert_eq!(session.score.high(), 50);
    // Restart already wrote the best run to disk
    assert_eq!(HighScoreStore::at(&path).load(), 50);

    score_points(&mut session, 20);
    assert_eq!(session.shutdown(), 50);
    assert_eq!(HighScoreStore::at(&path).load(), 50);
}

#[test]
fn test_corrupt_file_starts_from_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.dat");
    std::fs::write(&path, "not a number").unwrap();

    let mut session = session_at(&path, 4);
    assert_eq!(session.score.high(), 0);

    score_points(&mut session, 10);
    assert_eq!(session.shutdown(), 10);
    assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "10");
}
