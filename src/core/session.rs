//! The game session: one run from the first step to the crash, plus restarts.
//!
//! [`GameSession::tick`] advances the simulation by exactly one frame and
//! returns the [`TickEvent`]s it produced, so the front end can log or react
//! without the logic knowing anything about the terminal.

use super::constants::{
    GAME_SPEED_INCREMENT, GAME_SPEED_INITIAL, SPAWN_INTERVAL_DECREMENT_MS,
    SPAWN_INTERVAL_INITIAL_MS, SPAWN_INTERVAL_MIN_MS, SPAWN_JITTER_MS, SPEED_UP_SCORE,
};
use super::view::{FrameView, ObstacleView, PlayerView, SessionState};
use crate::input::RunnerInput;
use crate::runner::{ObstacleKind, ObstacleSet, Player, ScoreTracker, StepOutcome};
use rand::Rng;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// A jump was scored at its apex.
    JumpScored { score: u32 },
    /// The score crossed a speed-up threshold.
    SpeedUp { speed: u32, spawn_interval_ms: u64 },
    ObstacleSpawned { kind: ObstacleKind },
    /// The runner hit an obstacle; the session is now over.
    Collision { kind: ObstacleKind, score: u32 },
}

/// What the loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Orchestrates player, obstacles and scoring.
pub struct GameSession<R: Rng> {
    pub player: Player,
    pub obstacles: ObstacleSet,
    pub score: ScoreTracker,
    pub state: SessionState,
    /// Pixels per tick the street scrolls by.
    pub game_speed: u32,
    /// Base delay between spawns, stepped down by speed-ups.
    pub spawn_interval_ms: u64,
    /// Delay that must elapse before the next spawn (interval plus jitter).
    pub next_spawn_delay_ms: u64,
    pub last_spawn_ms: u64,
    /// Ticks simulated since the session (re)started.
    pub tick_count: u64,
    rng: R,
}

impl<R: Rng> GameSession<R> {
    /// Start a session at time `now_ms` on the loop's clock.
    pub fn new(score: ScoreTracker, rng: R, now_ms: u64) -> Self {
        log::info!("Session started (high score {})", score.high());
        Self {
            player: Player::new(),
            obstacles: ObstacleSet::new(),
            score,
            state: SessionState::Running,
            game_speed: GAME_SPEED_INITIAL,
            spawn_interval_ms: SPAWN_INTERVAL_INITIAL_MS,
            next_spawn_delay_ms: SPAWN_INTERVAL_INITIAL_MS,
            last_spawn_ms: now_ms,
            tick_count: 0,
            rng,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    /// Apply one input. Jump restarts the run once it is over.
    pub fn handle_input(&mut self, input: RunnerInput, now_ms: u64) -> Control {
        match input {
            RunnerInput::Jump => {
                match self.state {
                    SessionState::Running => {
                        self.player.jump();
                    }
                    SessionState::GameOver => self.restart(now_ms),
                }
                Control::Continue
            }
            RunnerInput::Quit => Control::Quit,
            RunnerInput::Other => Control::Continue,
        }
    }

    /// Advance one frame. Nothing moves while the session is over.
    pub fn tick(&mut self, now_ms: u64) -> Vec<TickEvent> {
        let mut events = Vec::new();
        if self.state == SessionState::GameOver {
            return events;
        }
        self.tick_count += 1;

        self.player.update();

        if self.player.can_score_jump() {
            let before = self.score.current();
            let after = self.score.award_jump();
            events.push(TickEvent::JumpScored { score: after });

            for _ in (before / SPEED_UP_SCORE)..(after / SPEED_UP_SCORE) {
                self.speed_up();
                events.push(TickEvent::SpeedUp {
                    speed: self.game_speed,
                    spawn_interval_ms: self.spawn_interval_ms,
                });
            }
        }

        if let StepOutcome::Collision(index) =
            self.obstacles.step(self.game_speed, &self.player.hitbox())
        {
            self.state = SessionState::GameOver;
            if let Some(obstacle) = self.obstacles.get(index) {
                events.push(TickEvent::Collision {
                    kind: obstacle.kind,
                    score: self.score.current(),
                });
            }
            log::info!(
                "Game over after {} ticks: score {}, high score {}",
                self.tick_count,
                self.score.current(),
                self.score.high()
            );
            return events;
        }

        if now_ms.saturating_sub(self.last_spawn_ms) > self.next_spawn_delay_ms {
            let kind = ObstacleKind::random(&mut self.rng);
            self.obstacles.spawn(kind);
            self.last_spawn_ms = now_ms;
            self.next_spawn_delay_ms = self.jittered_spawn_delay();
            events.push(TickEvent::ObstacleSpawned { kind });
        }

        events
    }

    /// Begin a new run: clear the street, reset pace and score.
    pub fn restart(&mut self, now_ms: u64) {
        self.obstacles.clear();
        self.player = Player::new();
        self.state = SessionState::Running;
        self.game_speed = GAME_SPEED_INITIAL;
        self.spawn_interval_ms = SPAWN_INTERVAL_INITIAL_MS;
        self.next_spawn_delay_ms = SPAWN_INTERVAL_INITIAL_MS;
        self.last_spawn_ms = now_ms;
        self.tick_count = 0;
        self.score.reset_session();
        log::info!("Session restarted (high score {})", self.score.high());
    }

    /// Final teardown on quit. Persists the high score and returns it.
    pub fn shutdown(&mut self) -> u32 {
        self.score.persist();
        log::info!("Shut down with high score {}", self.score.high());
        self.score.high()
    }

    pub fn view(&self) -> FrameView {
        FrameView {
            state: self.state,
            player: PlayerView {
                hitbox: self.player.hitbox(),
                anim_frame: self.player.anim_frame,
                airborne: self.player.is_jumping,
            },
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    hitbox: o.hitbox(),
                    kind: o.kind,
                })
                .collect(),
            score: self.score.current(),
            high_score: self.score.high(),
            game_speed: self.game_speed,
            tick: self.tick_count,
        }
    }

    fn speed_up(&mut self) {
        self.game_speed += GAME_SPEED_INCREMENT;
        self.spawn_interval_ms = self
            .spawn_interval_ms
            .saturating_sub(SPAWN_INTERVAL_DECREMENT_MS)
            .max(SPAWN_INTERVAL_MIN_MS);
        log::info!(
            "Speed up: speed {}, spawn interval {}ms",
            self.game_speed,
            self.spawn_interval_ms
        );
    }

    fn jittered_spawn_delay(&mut self) -> u64 {
        let jitter = self.rng.gen_range(-SPAWN_JITTER_MS..=SPAWN_JITTER_MS);
        (self.spawn_interval_ms as i64 + jitter).max(SPAWN_INTERVAL_MIN_MS as i64) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::Obstacle;
    use crate::utils::persistence::HighScoreStore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn new_session(dir: &tempfile::TempDir) -> GameSession<ChaCha8Rng> {
        let store = HighScoreStore::at(dir.path().join("highscore.dat"));
        GameSession::new(ScoreTracker::load(store), ChaCha8Rng::seed_from_u64(42), 0)
    }

    /// Hold jump until the score reaches `target`, without spawning anything.
    fn jump_until(session: &mut GameSession<ChaCha8Rng>, target: u32) {
        for _ in 0..100_000 {
            if session.score.current() >= target {
                return;
            }
            session.handle_input(RunnerInput::Jump, 0);
            session.tick(0);
        }
        panic!("score never reached {target}");
    }

    #[test]
    fn test_new_session_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let session = new_session(&dir);
        assert_eq!(session.state, SessionState::Running);
        assert_eq!(session.game_speed, 5);
        assert_eq!(session.spawn_interval_ms, 2000);
        assert_eq!(session.score.current(), 0);
        assert!(session.obstacles.is_empty());
        assert!(session.player.is_on_ground());
    }

    #[test]
    fn test_jump_scores_once_at_apex() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = new_session(&dir);
        session.handle_input(RunnerInput::Jump, 0);

        let mut scored = Vec::new();
        for tick in 0..60 {
            for event in session.tick(0) {
                if let TickEvent::JumpScored { score } = event {
                    scored.push((tick, score));
                }
            }
        }

        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].1, 10);
        assert_eq!(session.score.current(), 10);
        assert!(session.player.is_on_ground());
    }

    #[test]
    fn test_speed_up_at_500() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = new_session(&dir);

        jump_until(&mut session, 490);
        assert_eq!(session.game_speed, 5);
        assert_eq!(session.spawn_interval_ms, 2000);

        jump_until(&mut session, 500);
        assert_eq!(session.score.current(), 500);
        assert_eq!(session.game_speed, 6);
        assert_eq!(session.spawn_interval_ms, 1900);

        // Staying at 500 for many ticks does not keep speeding up
        for _ in 0..30 {
            session.tick(0);
        }
        assert_eq!(session.game_speed, 6);

        jump_until(&mut session, 1000);
        assert_eq!(session.game_speed, 7);
        assert_eq!(session.spawn_interval_ms, 1800);
    }

    #[test]
    fn test_spawn_interval_floor() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = new_session(&dir);
        session.spawn_interval_ms = 550;

        jump_until(&mut session, 500);
        assert_eq!(session.spawn_interval_ms, 500);

        jump_until(&mut session, 1000);
        assert_eq!(session.spawn_interval_ms, 500);
        assert_eq!(session.game_speed, 7);
    }

    #[test]
    fn test_collision_ends_session_and_keeps_obstacle() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = new_session(&dir);
        session
            .obstacles
            .insert(Obstacle::new(152.0, ObstacleKind::FireHydrant));

        // First tick: hydrant moves to x=147, overlapping the runner at 100..150
        let events = session.tick(0);

        assert_eq!(session.state, SessionState::GameOver);
        assert!(events.contains(&TickEvent::Collision {
            kind: ObstacleKind::FireHydrant,
            score: 0
        }));
        assert_eq!(session.obstacles.len(), 1);
        let view = session.view();
        assert_eq!(view.state, SessionState::GameOver);
        assert_eq!(view.obstacles[0].hitbox.x, 147);
    }

    #[test]
    fn test_game_over_freezes_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = new_session(&dir);
        session
            .obstacles
            .insert(Obstacle::new(150.0, ObstacleKind::Dog));
        session.tick(0);
        assert!(session.is_game_over());

        let before = session.view();
        for now in [10_000, 20_000, 30_000] {
            assert!(session.tick(now).is_empty());
        }
        assert_eq!(session.view(), before);
    }

    #[test]
    fn test_jump_restarts_after_game_over() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = new_session(&dir);
        jump_until(&mut session, 30);
        // Land first so the dog cannot be cleared
        while !session.player.is_on_ground() {
            session.tick(0);
        }
        session
            .obstacles
            .insert(Obstacle::new(150.0, ObstacleKind::Dog));
        session.tick(0);
        assert!(session.is_game_over());

        let control = session.handle_input(RunnerInput::Jump, 5000);

        assert_eq!(control, Control::Continue);
        assert_eq!(session.state, SessionState::Running);
        assert!(session.obstacles.is_empty());
        assert_eq!(session.score.current(), 0);
        assert_eq!(session.score.high(), 30);
        assert_eq!(session.game_speed, 5);
        assert_eq!(session.last_spawn_ms, 5000);
        assert!(session.player.is_on_ground(), "restart must not also jump");
        // High score was persisted by the restart
        let store = HighScoreStore::at(dir.path().join("highscore.dat"));
        assert_eq!(store.load(), 30);
    }

    #[test]
    fn test_quit_and_other_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = new_session(&dir);
        assert_eq!(session.handle_input(RunnerInput::Other, 0), Control::Continue);
        assert!(session.player.is_on_ground());
        assert_eq!(session.handle_input(RunnerInput::Quit, 0), Control::Quit);
    }

    #[test]
    fn test_spawns_after_interval() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = new_session(&dir);

        assert!(session.tick(2000).is_empty(), "spawn needs strictly more than the interval");
        let events = session.tick(2001);

        assert_eq!(session.obstacles.len(), 1);
        assert!(matches!(events[..], [TickEvent::ObstacleSpawned { .. }]));
        assert_eq!(session.last_spawn_ms, 2001);
        assert!((500..=2500).contains(&session.next_spawn_delay_ms));
        let spawned = session.obstacles.get(0).map(|o| o.x);
        assert_eq!(spawned, Some(800.0));
    }

    #[test]
    fn test_spawn_delay_respects_floor() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = new_session(&dir);
        session.spawn_interval_ms = 500;
        for _ in 0..200 {
            assert!(session.jittered_spawn_delay() >= 500);
        }
    }

    #[test]
    fn test_shutdown_persists_high_score() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = new_session(&dir);
        jump_until(&mut session, 20);

        let store = HighScoreStore::at(dir.path().join("highscore.dat"));
        assert_eq!(store.load(), 0, "nothing is written before shutdown");

        assert_eq!(session.shutdown(), 20);
        // Written by shutdown itself, while the session is still alive
        assert_eq!(store.load(), 20);
        assert_eq!(session.score.high(), 20);
    }

    #[test]
    fn test_view_reflects_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = new_session(&dir);
        session.obstacles.spawn(ObstacleKind::Car);
        session.handle_input(RunnerInput::Jump, 0);
        session.tick(0);

        let view = session.view();
        assert_eq!(view.state, SessionState::Running);
        assert!(view.player.airborne);
        assert_eq!(view.obstacles.len(), 1);
        assert_eq!(view.obstacles[0].kind, ObstacleKind::Car);
        assert_eq!(view.obstacles[0].hitbox.x, 795);
        assert_eq!(view.game_speed, 5);
        assert_eq!(view.tick, 1);
    }
}
