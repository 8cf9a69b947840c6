//! Terminal Flappy Bird runner (default binary).
//!
//! Uses crossterm for input and a framebuffer-based diff renderer. The whole
//! program is one thread: a 30 Hz loop that polls input with a timeout until
//! the next tick.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event};
use log::{debug, info};

use tui_flappy::core::GameState;
use tui_flappy::input::translate_key;
use tui_flappy::term::{GameView, TerminalRenderer, Viewport};
use tui_flappy::types::{InputEvent, TICK_MS};
use tui_flappy::ui::{Menu, MENU_PLAY, MENU_QUIT};

fn main() -> Result<()> {
    // Logging must be wired up before the alternate screen takes over.
    env_logger::init();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let view = GameView::new();

    if menu_loop(term, &view)? != MENU_PLAY {
        return Ok(());
    }

    loop {
        let seed = seed_from_clock();
        info!("starting session, seed {seed}");

        let Some(final_state) = play_session(term, &view, seed)? else {
            return Ok(());
        };
        info!(
            "session over after {} ticks, score {}, power-ups {}",
            final_state.ticks, final_state.score, final_state.power_ups_collected
        );

        if game_over_loop(term, &view, &final_state)? != MENU_PLAY {
            return Ok(());
        }
    }
}

/// Title screen. Returns the confirmed menu index.
fn menu_loop(term: &mut TerminalRenderer, view: &GameView) -> Result<usize> {
    let mut menu = Menu::main();
    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();
    let mut ticks: u64 = 0;

    loop {
        let mut fb = view.render_backdrop(ticks, viewport());
        view.draw_title(&mut fb, ticks);
        view.draw_hover_bird(&mut fb, ticks);
        view.draw_menu(&mut fb, &menu, ticks);
        term.draw_swap(&mut fb)?;

        for ev in drain_events(tick_duration, last_tick)? {
            match ev {
                Event::Key(key) => {
                    if let Some(input) = translate_key(key) {
                        if input == InputEvent::Quit {
                            return Ok(MENU_QUIT);
                        }
                        if let Some(choice) = menu.handle(input) {
                            return Ok(choice);
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            ticks += 1;
        }
    }
}

/// One life. Returns the final state on a terminal tick, or `None` when the
/// player quits mid-game.
fn play_session(
    term: &mut TerminalRenderer,
    view: &GameView,
    seed: u64,
) -> Result<Option<GameState>> {
    let mut state = GameState::new(seed);
    let mut pending: Vec<InputEvent> = Vec::new();

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        let mut fb = view.render(&state, viewport());
        term.draw_swap(&mut fb)?;

        for ev in drain_events(tick_duration, last_tick)? {
            match ev {
                Event::Key(key) => match translate_key(key) {
                    Some(InputEvent::Quit) => return Ok(None),
                    Some(InputEvent::Flap) => pending.push(InputEvent::Flap),
                    _ => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            state.advance(&pending);
            pending.clear();

            if !state.bird.alive {
                debug!("terminal tick at {}", state.ticks);
                return Ok(Some(state));
            }
        }
    }
}

/// Game-over screen drawn over the frozen final frame.
fn game_over_loop(
    term: &mut TerminalRenderer,
    view: &GameView,
    final_state: &GameState,
) -> Result<usize> {
    let mut menu = Menu::game_over();
    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();
    let mut ticks: u64 = 0;

    loop {
        let mut fb = view.render(final_state, viewport());
        view.draw_game_over(&mut fb, final_state.score);
        view.draw_menu(&mut fb, &menu, ticks);
        term.draw_swap(&mut fb)?;

        for ev in drain_events(tick_duration, last_tick)? {
            match ev {
                Event::Key(key) => {
                    if let Some(input) = translate_key(key) {
                        if input == InputEvent::Quit {
                            return Ok(MENU_QUIT);
                        }
                        if let Some(choice) = menu.handle(input) {
                            return Ok(choice);
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            ticks += 1;
        }
    }
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

/// Wait for input until the next tick is due, then drain everything pending.
fn drain_events(tick_duration: Duration, last_tick: Instant) -> Result<Vec<Event>> {
    let timeout = tick_duration
        .checked_sub(last_tick.elapsed())
        .unwrap_or_default();

    let mut events = Vec::new();
    if event::poll(timeout)? {
        events.push(event::read()?);
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }
    }
    Ok(events)
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
