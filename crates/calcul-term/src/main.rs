//! Calcul Mental
//!
//! A console addition drill.
//! - Results drawn between `res_min` and `res_max`
//! - Type the sum; the answer is graded once it has enough digits
//! - The run ends after `score_max` correct answers
//! - ESC to quit at any time

mod config;
mod input;
mod screen;

use anyhow::{Context, Result};
use calcul_core::{usage, Clock, Game, GameConfig, GameRng, RandomSource, Screen, SystemClock};
use config::TermConfig;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use input::{classify, Input};
use screen::TerminalScreen;
use std::io::{stdout, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("calcul-mental");

    let config = match GameConfig::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            warn!(%err, "rejected startup arguments");
            print!("{}", usage(program));
            return ExitCode::from(err.exit_code());
        }
    };

    match play(config, TermConfig::from_env()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            eprintln!("{program}: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn play(config: GameConfig, term: TermConfig) -> Result<()> {
    info!(seed = term.seed, refresh_ms = term.refresh.as_millis() as u64, "starting");
    let mut game = Game::new(config, SystemClock::new(), GameRng::new(term.seed));

    terminal::enable_raw_mode().context("enabling raw mode")?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, Hide).context("entering alternate screen")?;

    let mut screen = TerminalScreen::new(&mut out);
    let result = run(&mut screen, &mut game, term.refresh);
    drop(screen);

    // Restore the terminal even when the loop failed
    execute!(out, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    out.flush()?;

    result
}

fn run<W, C, R>(
    screen: &mut TerminalScreen<W>,
    game: &mut Game<C, R>,
    refresh: Duration,
) -> Result<()>
where
    W: Write,
    C: Clock,
    R: RandomSource,
{
    screen.render(&game.view())?;
    let mut last_tick = Instant::now();

    loop {
        if game.is_ticking() {
            let elapsed = last_tick.elapsed();
            if elapsed >= refresh {
                last_tick = Instant::now();
                screen.render(&game.on_tick())?;
                continue;
            }
            if !event::poll(refresh - elapsed)? {
                continue;
            }
        }

        let event = event::read().context("reading terminal event")?;
        if let Event::Resize(width, height) = event {
            screen.resize(width, height);
            screen.render(&game.view())?;
            continue;
        }

        match classify(&event) {
            Input::Quit => {
                info!("quit requested");
                return Ok(());
            }
            Input::Key(key) => {
                let was_ticking = game.is_ticking();
                let update = game.on_key(key);
                if let Some(transition) = update.transition {
                    debug!(from = %transition.from, to = %transition.to, "screen transition");
                }
                if game.is_ticking() && !was_ticking {
                    last_tick = Instant::now();
                }
                screen.render(&update.view)?;
            }
            Input::Ignore => {}
        }
    }
}
