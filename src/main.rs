//! 2060 terminal runner (default binary).
//!
//! Owns the loop: polls crossterm events, feeds the session monotonic time,
//! and redraws through the framebuffer renderer. Logs go to a file under the
//! configured log directory since stdout belongs to the game.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tui_2060::engine::{Engine, MergeEngine};
use tui_2060::input::{handle_key_event, handle_mouse_event, should_quit};
use tui_2060::session::{FileStore, SaveStore, Session, SessionConfig};
use tui_2060::term::{
    FrameBuffer, GameView, Hit, HudView, PowerupRow, Scene, TerminalRenderer, Viewport,
};
use tui_2060::types::GameAction;

/// Upper bound on how long one poll may block; keeps animation and the
/// countdown moving without input.
const FRAME_MS: u64 = 16;

fn main() -> Result<()> {
    let config = SessionConfig::from_env();
    init_logging(&config.log_dir)?;
    tracing::info!(
        seed = config.seed,
        save = %config.save_path.display(),
        "starting 2060"
    );

    let store = FileStore::new(&config.save_path);
    let engine = MergeEngine::new(config.seed);
    tracing::debug!(seed = engine.seed(), "engine ready");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let clock = Instant::now();
    let mut session = Session::new(engine, store, config, 0);
    let result = run(&mut term, &mut session, clock);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        tracing::error!("game loop failed: {:#}", e);
    }
    result
}

fn run<E: Engine, S: SaveStore>(
    term: &mut TerminalRenderer,
    session: &mut Session<E, S>,
    clock: Instant,
) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let now_ms = || clock.elapsed().as_millis() as u64;

    loop {
        let now = now_ms();
        session.tick(now);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        render(&view, session, viewport, now, &mut fb);
        term.draw(&fb)?;

        if !event::poll(Duration::from_millis(FRAME_MS))? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    tracing::info!(rounds = session.rounds_played(), "quit");
                    return Ok(());
                }
                handle_key_event(key)
            }
            Event::Mouse(mouse) => handle_mouse_event(mouse),
            Event::Resize(_, _) => {
                term.invalidate();
                None
            }
            _ => None,
        };

        let now = now_ms();
        match action {
            Some(GameAction::Move(direction)) => {
                session.handle_move(direction, now);
            }
            Some(GameAction::Powerup(index)) => {
                session.click_powerup(index);
            }
            Some(GameAction::Click { column, row }) => {
                let count = session.powerups().count();
                match view.hit_test(viewport, count, column, row) {
                    Some(Hit::Tile { x, y }) => {
                        session.click_tile(x, y);
                    }
                    Some(Hit::Powerup(index)) => {
                        session.click_powerup(index);
                    }
                    None => {}
                }
            }
            None => {}
        }
    }
}

fn render<E: Engine, S: SaveStore>(
    view: &GameView,
    session: &Session<E, S>,
    viewport: Viewport,
    now_ms: u64,
    fb: &mut FrameBuffer,
) {
    let armed = session.armed();
    let rows: Vec<PowerupRow<'_>> = session
        .powerups()
        .map(|(i, p, state)| PowerupRow {
            name: p.name,
            state,
            armed: armed == Some(i),
        })
        .collect();

    let frame = session.frame(now_ms);
    let scene = Scene {
        board: frame.board,
        motion: frame.animation.map(|a| (a.motions, a.progress)),
        hud: HudView {
            level: session.level(),
            xp: session.xp(),
            threshold: session.threshold(),
            xp_fraction: session.xp_fraction(),
            seconds_left: session.seconds_left(),
            score: session.presented_state().score(),
            message: session.message(now_ms),
        },
        powerups: &rows,
    };

    view.render_into(&scene, viewport, fb);
}

/// File-only tracing; the terminal is owned by the renderer.
fn init_logging(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, "2060.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // The writer must outlive every log call, including the one after exit.
    std::mem::forget(guard);

    tracing::info!("log file: {}", log_dir.join("2060.log").display());
    Ok(())
}
