//! Terminal Tetris runner (default binary).
//!
//! Advances the engine once every `--tick-ms` milliseconds, feeding it the
//! last key pressed since the previous tick.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tick_tetris::core::{BagSource, GameState, PieceSource, UniformSource};
use tick_tetris::input::{handle_key_event, Command};
use tick_tetris::term::{Canvas, GameView, Screen, TerminalRenderer, Viewport};
use tick_tetris::types::{Move, Status, DEFAULT_COLS, DEFAULT_ROWS, MIN_COLS, MIN_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Randomizer {
    /// Every kind equally likely on every draw
    Uniform,
    /// One of each kind per shuffled bag of seven
    Bag,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Board height, including the two hidden spawn rows
    #[arg(long, default_value_t = DEFAULT_ROWS, value_parser = side_parser(MIN_ROWS))]
    rows: usize,
    /// Board width
    #[arg(long, default_value_t = DEFAULT_COLS, value_parser = side_parser(MIN_COLS))]
    cols: usize,
    /// Seed for the piece sequence; the same seed replays the same pieces
    #[arg(short, long)]
    seed: Option<u64>,
    /// Milliseconds between engine ticks
    #[arg(long, default_value_t = 10)]
    tick_ms: u64,
    #[arg(long, value_enum, default_value_t = Randomizer::Uniform)]
    randomizer: Randomizer,
    /// Write engine logs to this file (filter with RUST_LOG, default debug)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// Largest board side the terminal view can lay out
const MAX_SIDE: u64 = 1000;

fn side_parser(min: usize) -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(min as u64..=MAX_SIDE)
}

type Game = GameState<Box<dyn PieceSource>>;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let source = piece_source(cli.randomizer, cli.seed);
    let mut game: Game = GameState::init(cli.rows, cli.cols, source)?;
    info!(
        "starting {}x{} game, {:?} randomizer, seed {:?}",
        cli.rows, cli.cols, cli.randomizer, cli.seed
    );

    // Leave the alternate screen before a panic message is printed.
    std::panic::set_hook(Box::new(|panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::ExecutableCommand::execute(
            &mut io::stderr(),
            crossterm::terminal::LeaveAlternateScreen,
        );
        eprint!("{panic_info}\n\n");
    }));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, Duration::from_millis(cli.tick_ms));

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    println!("Game over!");
    println!(
        "You finished with {} points on level {}.",
        game.points(),
        game.level()
    );
    Ok(())
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn piece_source(randomizer: Randomizer, seed: Option<u64>) -> Box<dyn PieceSource> {
    match (randomizer, seed) {
        (Randomizer::Uniform, Some(seed)) => Box::new(UniformSource::seeded(seed)),
        (Randomizer::Uniform, None) => Box::new(UniformSource::from_entropy()),
        (Randomizer::Bag, Some(seed)) => Box::new(BagSource::seeded(seed)),
        (Randomizer::Bag, None) => Box::new(BagSource::from_entropy()),
    }
}

fn run(term: &mut TerminalRenderer, game: &mut Game, tick: Duration) -> Result<()> {
    let view = GameView::new();
    let mut canvas = Canvas::new(0, 0);
    let mut screen = Screen::Play;
    let mut pending = Move::None;
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render(game, screen, Viewport::new(w, h), &mut canvas);
        term.draw(&canvas)?;

        if game.status() == Status::GameOver {
            info!("game over with {} points", game.points());
            wait_for_key()?;
            return Ok(());
        }

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match handle_key_event(key) {
                        Some(Command::Quit) => return Ok(()),
                        // Any other key leaves the pause and boss screens.
                        _ if screen != Screen::Play => screen = Screen::Play,
                        Some(Command::Play(mv)) => pending = mv,
                        Some(Command::Pause) => screen = Screen::Paused,
                        Some(Command::Boss) => screen = Screen::Boss,
                        None => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            if screen == Screen::Play {
                game.tick(std::mem::take(&mut pending));
            }
        }
    }
}

fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
