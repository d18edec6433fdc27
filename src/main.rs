//! Terminal maze runner (default binary).
//!
//! Walk the maze with the arrow keys (or WASD / HJKL); the fog lifts around
//! the explorer and settles back over visited corridors. It uses crossterm
//! for input and the framebuffer-based renderer from `maze_fog::term`.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use maze_fog::core::{MazeSession, SessionConfig};
use maze_fog::input::{direction_for_key, handle_key_event, should_quit, InputHandler};
use maze_fog::term::{
    frame_fingerprint, FogLayer, FrameBuffer, MazeView, RenderThrottle, TerminalRenderer,
};
use maze_fog::types::{MazeAction, TICK_MS};

/// Redraw interval once nothing on screen is moving.
const STATIC_REDRAW_MS: u64 = 250;

fn main() -> Result<()> {
    let config = SessionConfig::from_env();
    init_logging(&config)?;

    let mut session = MazeSession::new(config.clone()).with_context(|| {
        format!(
            "cannot build a {}x{} maze (set MAZE_FOG_WIDTH / MAZE_FOG_HEIGHT)",
            config.width, config.height
        )
    })?;
    info!(
        "starting {}x{} maze, seed {}",
        session.maze().width(),
        session.maze().height(),
        config.seed
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log records go to `MAZE_FOG_LOG_PATH` when set; the terminal is in raw
/// alternate-screen mode, so nothing is written to stderr.
fn init_logging(config: &SessionConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("cannot open log file {}", path))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut MazeSession) -> Result<()> {
    let view = MazeView::default();
    let mut fog = FogLayer::new(session.maze().width(), session.maze().height());
    let mut fb = FrameBuffer::new(0, 0);
    let mut input_handler = InputHandler::new();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let viewport = term.viewport();
        let now_ms = started.elapsed().as_millis() as u64;
        let fingerprint = frame_fingerprint(session, viewport);
        if throttle.should_render(now_ms, fingerprint, session.is_settled()) {
            view.render_into(session, &fog, viewport, &mut fb);
            term.present(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            info!("quit after {} moves", session.moves());
                            return Ok(());
                        }

                        if direction_for_key(key.code).is_some() {
                            if let Some(action) = input_handler.handle_key_press(key.code) {
                                apply(session, &mut fog, action);
                            }
                        } else if let Some(action) = handle_key_event(key) {
                            input_handler.reset();
                            apply(session, &mut fog, action);
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Ignore terminal auto-repeat; the input handler repeats held keys.
                    }
                    KeyEventKind::Release => {
                        input_handler.handle_key_release(key.code);
                    }
                },
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for action in input_handler.update(TICK_MS) {
                apply(session, &mut fog, action);
            }
            session.tick(TICK_MS, &mut fog);
        }
    }
}

fn apply(session: &mut MazeSession, fog: &mut FogLayer, action: MazeAction) {
    if session.apply_action(action) && action == MazeAction::Restart {
        fog.resize(session.maze().width(), session.maze().height());
        fog.fill(session.fog().palette().unseen);
        info!("new maze, seed {}", session.config().seed);
    }
}
