//! Terminal Snake runner (default binary).
//!
//! The binary owns the single "current state" binding. It advances the core on
//! a fixed tick, applies key presses between ticks and redraws through the
//! framebuffer renderer. Logs go to a file because the terminal is in raw mode.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::config::SnakeConfig;
use tui_snake::core::{advance_state, GameState, RandomSource};
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_snake::types::{GameAction, STATIC_RENDER_INTERVAL_MS};

fn main() -> Result<()> {
    let config = SnakeConfig::from_env();
    let logging = init_logging(config.log_path.as_deref());
    log::info!(
        "starting tui-snake v{} ({}x{} board, {}ms tick, seed {:?})",
        env!("CARGO_PKG_VERSION"),
        config.grid_width,
        config.grid_height,
        config.tick_ms,
        config.seed
    );
    for warning in &config.warnings {
        if logging {
            log::warn!("{}", warning);
        } else {
            eprintln!("tui-snake: {}", warning);
        }
    }

    let mut rng = config.random_source();
    // Validate the board before touching the terminal.
    let state = GameState::new(config.grid_width, config.grid_height, rng.as_mut())
        .context("cannot start game")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, state, rng.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("exiting with error: {:#}", e);
    }
    result
}

/// Returns whether a log file is attached. Runs after config is read, so the
/// caller replays config warnings afterwards.
fn init_logging(path: Option<&str>) -> bool {
    let Some(path) = path else {
        return false;
    };
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("tui-snake: logging disabled, cannot open {}: {}", path, e);
            return false;
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    true
}

fn run(
    term: &mut TerminalRenderer,
    config: &SnakeConfig,
    mut state: GameState,
    rng: &mut dyn RandomSource,
) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(STATIC_RENDER_INTERVAL_MS as u64);

    let started = Instant::now();
    let tick_duration = config.tick_duration();
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, state.fingerprint(), !state.is_running()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&state, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        log::info!("quit with score {} (length {})", state.score, state.len());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if action == GameAction::Restart {
                            log::info!("restart after score {}", state.score);
                            last_tick = Instant::now();
                        }
                        state = state.apply_action(action, rng);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let next = advance_state(&state, rng);
            log_transition(&state, &next);
            state = next;
        }
    }
}

fn log_transition(prev: &GameState, next: &GameState) {
    if next.score > prev.score {
        log::debug!(
            "ate food at ({}, {}), score {}, next food {:?}",
            next.head().x,
            next.head().y,
            next.score,
            next.food
        );
    }
    if next.is_game_over && !prev.is_game_over {
        let cause = if next.is_won {
            "board full"
        } else if next.snake == prev.snake {
            "hit wall"
        } else {
            "hit self"
        };
        log::info!(
            "game over ({} heading {}): score {}, length {}",
            cause,
            next.direction.as_str(),
            next.score,
            next.len()
        );
    }
}
