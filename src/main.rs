use city_runner::config::{self, CliCommand, USAGE};
use city_runner::core::game_loop::{self, FramePacer, SystemClock};
use city_runner::core::{Clock, GameSession};
use city_runner::input::TerminalInput;
use city_runner::runner::ScoreTracker;
use city_runner::ui::TerminalRenderer;
use city_runner::utils::build_info;
use city_runner::utils::logging;
use city_runner::utils::persistence::HighScoreStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;

fn main() -> io::Result<()> {
    let config = match config::parse_args(std::env::args().skip(1)) {
        Ok(CliCommand::Play(config)) => config,
        Ok(CliCommand::Version) => {
            println!("{}", build_info::version_line());
            std::process::exit(0);
        }
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            std::process::exit(0);
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'city-runner --help' for usage.");
            std::process::exit(1);
        }
    };

    match logging::init_file_logging() {
        Ok(path) => log::info!("Logging to {}", path.display()),
        Err(e) => eprintln!("Warning: file logging disabled: {}", e),
    }

    let store = match &config.save_file {
        Some(path) => HighScoreStore::at(path),
        None => HighScoreStore::in_data_dir(),
    };
    let score = ScoreTracker::load(store);

    // Always run from a known seed so a run can be replayed from the log
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("Starting run: seed {}, {} fps", seed, config.fps);

    let mut clock = SystemClock::new();
    let mut session = GameSession::new(score, StdRng::seed_from_u64(seed), clock.now_ms());

    let mut renderer = match TerminalRenderer::enter(seed) {
        Ok(renderer) => renderer,
        Err(e) => {
            log::error!("Could not set up the terminal: {}", e);
            session.shutdown();
            return Err(e);
        }
    };

    let result = game_loop::run(
        &mut session,
        &mut clock,
        &mut TerminalInput,
        &mut renderer,
        FramePacer::new(config.fps),
    );

    // Put the terminal back before reporting anything
    let restored = renderer.restore();
    let high_score = session.shutdown();

    match &result {
        Ok(stats) => log::info!(
            "Exited after {} frames, {} crashes, {} restarts",
            stats.frames,
            stats.game_overs,
            stats.restarts
        ),
        Err(e) => log::error!("Game loop failed: {}", e),
    }
    result?;
    restored?;

    println!("High score: {}", high_score);
    Ok(())
}
