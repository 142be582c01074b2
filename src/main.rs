use crossterm::event;
use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};
use crossterm::ExecutableCommand;
use mazechase::build_info;
use mazechase::config::{parse_args, CliCommand, GameConfig, USAGE};
use mazechase::core::{run_game, GameError};
use mazechase::game::{start_game, GameOverReason};
use mazechase::input::KeyPoller;
use mazechase::level::{DirLevelSource, LevelSource, MemoryLevels};
use mazechase::ui::glyphs::GlyphTable;
use mazechase::ui::score_report::ScoreReport;
use mazechase::ui::{restore_terminal, RestoreGuard, TerminalSink};
use mazechase::utils::init_logging;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// How long the final frame stays up before the terminal is restored.
const GAME_OVER_LINGER: Duration = Duration::from_secs(3);

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    init_logging();

    let config = match parse_args(&args, GameConfig::load()) {
        Ok(CliCommand::Play(config)) => config,
        Ok(CliCommand::SaveConfig(config)) => match config.save() {
            Ok(path) => {
                println!("Saved settings to {}", path.display());
                return;
            }
            Err(e) => {
                eprintln!("Could not save settings: {}", e);
                std::process::exit(1);
            }
        },
        Ok(CliCommand::Version) => {
            println!("{}", build_info::version_line());
            return;
        }
        Ok(CliCommand::Help) => {
            println!("Maze Chase - collect every coin, then run for the door\n");
            println!("{}", USAGE);
            return;
        }
        Err(message) => {
            eprintln!("{}\n", message);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    match run(&config) {
        Ok(report) => println!("{}", report),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("mazechase: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(config: &GameConfig) -> Result<ScoreReport, GameError> {
    let levels: Box<dyn LevelSource> = match &config.levels_dir {
        Some(dir) => Box::new(DirLevelSource::new(dir.clone())),
        None => Box::new(MemoryLevels::builtin()),
    };

    let seed = config.resolve_seed();
    log::info!("placement seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    // Fail on a bad level set before touching the terminal
    let state = start_game(&*levels, config.rules(), &mut rng)?;

    // Setup terminal; the guard undoes it on every exit path
    enable_raw_mode()?;
    let _restore = RestoreGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;

    let mut sink = TerminalSink::new(terminal, GlyphTable::default());
    let mut input = KeyPoller::new();
    let outcome = run_game(
        state,
        &*levels,
        &mut rng,
        &mut input,
        &mut sink,
        config.frame_interval(),
        std::thread::sleep,
    );

    // Leave the final frame up until a key is pressed or the linger ends
    if matches!(&outcome, Ok(report) if report.reason != GameOverReason::Quit) {
        if event::poll(GAME_OVER_LINGER).unwrap_or(false) {
            let _ = event::read();
        }
    }

    outcome
}
