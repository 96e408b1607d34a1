//! Terminal 2048 runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! `--plain` switches to a line-oriented console game on stdin/stdout.

mod cli;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::input::{should_quit, InputHandler};
use tui_2048::plain;
use tui_2048::term::{FrameBuffer, GameView, SpawnAnimation, TerminalRenderer, UiConfig, Viewport};
use tui_2048::types::GameAction;

use crate::cli::{init_logging, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = match &args.config {
        Some(path) => UiConfig::load(path)?,
        None => UiConfig::default(),
    };

    let mut game = match args.seed {
        Some(seed) => GameState::with_seed(args.grid_size, seed)?,
        None => GameState::new(args.grid_size)?,
    };
    info!(grid_size = args.grid_size, seed = game.seed(), plain = args.plain, "starting game");

    if args.plain {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        return plain::run(&mut game, stdin.lock(), &mut stdout);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &config, args.fps);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(score = game.score(), max_tile = game.max_tile(), "exiting");
    result
}

fn run(
    term: &mut TerminalRenderer,
    game: &mut GameState,
    config: &UiConfig,
    fps: u32,
) -> Result<()> {
    let view = GameView::new(config.palette.clone());
    let mut input = InputHandler::with_debounce_ms(config.move_debounce_ms);
    let mut spawn_anim = SpawnAnimation::new(config.spawn_animation_ms);

    let clock = Instant::now();
    let frame = Duration::from_millis(1000 / fps.max(1) as u64);
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    if let Some(pos) = game.last_spawn() {
        spawn_anim.start(pos, 0);
    }

    loop {
        // Render.
        let now_ms = clock.elapsed().as_millis() as u64;
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        let effect = spawn_anim.effect(now_ms);
        view.render_into_with_effect(&snap, effect.as_ref(), Viewport::new(w, h), &mut fb);
        term.present(&fb)?;

        // Input with timeout until next frame.
        if !event::poll(frame)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }

                let now_ms = clock.elapsed().as_millis() as u64;
                let Some(action) = input.handle_key_press(key, now_ms) else {
                    continue;
                };

                let changed = game.apply(action);
                match action {
                    GameAction::Restart => {
                        input.reset();
                        spawn_anim.cancel();
                    }
                    GameAction::Move(_) if changed => input.record_move(now_ms),
                    GameAction::Move(_) => continue,
                }
                if let Some(pos) = game.last_spawn() {
                    spawn_anim.start(pos, now_ms);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
