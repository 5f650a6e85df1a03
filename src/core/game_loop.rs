//! Fixed-rate frame pump: input, one simulation tick, draw, sleep.
//!
//! Each frame drains every pending input without blocking, advances the
//! session by one tick, hands a [`FrameView`](super::view::FrameView) to the
//! renderer, then sleeps whatever is left of the frame budget.

use super::session::{Control, GameSession, TickEvent};
use super::view::SceneRenderer;
use crate::input::RunnerInput;
use rand::Rng;
use std::io;
use std::time::{Duration, Instant};

/// Source of time for the loop. Milliseconds since an arbitrary origin.
pub trait Clock {
    fn now_ms(&self) -> u64;
    fn sleep(&mut self, duration: Duration);
}

/// Wall clock backed by [`Instant`] and `thread::sleep`.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Anything that can hand over the inputs that arrived since the last frame.
pub trait InputSource {
    fn drain(&mut self) -> io::Result<Vec<RunnerInput>>;
}

/// Frame budget bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    frame_budget: Duration,
}

impl FramePacer {
    /// `fps` is clamped to at least 1.
    pub fn new(fps: u32) -> Self {
        Self {
            frame_budget: Duration::from_millis(1000 / u64::from(fps.max(1))),
        }
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Time left to sleep after a frame that took `elapsed`. Never negative.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.frame_budget.saturating_sub(elapsed)
    }
}

/// Counters from a finished loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    pub frames: u64,
    pub restarts: u64,
    pub game_overs: u64,
}

/// Run frames until a quit input arrives. The caller owns shutdown.
pub fn run<R, C, I, S>(
    session: &mut GameSession<R>,
    clock: &mut C,
    input: &mut I,
    renderer: &mut S,
    pacer: FramePacer,
) -> io::Result<LoopStats>
where
    R: Rng,
    C: Clock,
    I: InputSource,
    S: SceneRenderer,
{
    let mut stats = LoopStats::default();

    loop {
        let frame_start = clock.now_ms();

        for action in input.drain()? {
            let was_over = session.is_game_over();
            if session.handle_input(action, frame_start) == Control::Quit {
                log::info!("Quit after {} frames", stats.frames);
                return Ok(stats);
            }
            if was_over && !session.is_game_over() {
                stats.restarts += 1;
            }
        }

        for event in session.tick(frame_start) {
            match event {
                TickEvent::ObstacleSpawned { kind } => log::debug!("Spawned {}", kind.name()),
                TickEvent::JumpScored { score } => log::debug!("Jump scored, score {}", score),
                TickEvent::SpeedUp {
                    speed,
                    spawn_interval_ms,
                } => log::info!("Speed {} (spawn every {}ms)", speed, spawn_interval_ms),
                TickEvent::Collision { kind, score } => {
                    stats.game_overs += 1;
                    log::info!("Hit a {} at score {}", kind.name().to_lowercase(), score);
                }
            }
        }

        renderer.draw(&session.view())?;
        stats.frames += 1;

        let elapsed = Duration::from_millis(clock.now_ms().saturating_sub(frame_start));
        clock.sleep(pacer.remaining(elapsed));
    }
}
