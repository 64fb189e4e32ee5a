mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    cursor, terminal, ExecutableCommand,
};
use rand::thread_rng;

use flappy_bird::compute::{init_world, jump, tick, toggle_pause};
use flappy_bird::entities::GamePhase;

/// Fixed tick period driving the physics step.
const TICK: Duration = Duration::from_millis(40);

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Input model: the flap and pause triggers are bound to key *release*, so a
/// held Space doesn't machine-gun jumps.  Only terminals with keyboard
/// enhancement report release events; everywhere else we act on the press
/// instead, which is the closest a classic terminal can get.  Mouse clicks
/// flap as well.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    release_events: bool,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut world = init_world(&mut rng);

    loop {
        let tick_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => {
                    if kind == KeyEventKind::Press {
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                return Ok(());
                            }
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                return Ok(());
                            }
                            _ => {}
                        }
                    }

                    let trigger = if release_events {
                        kind == KeyEventKind::Release
                    } else {
                        kind == KeyEventKind::Press
                    };
                    if trigger {
                        match code {
                            KeyCode::Char(' ') => world = jump(&world, &mut rng),
                            KeyCode::Char('p') | KeyCode::Char('P') => {
                                world = toggle_pause(&world);
                            }
                            _ => {}
                        }
                    }
                }
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(_),
                    ..
                }) => {
                    world = jump(&world, &mut rng);
                }
                _ => {}
            }
        }

        // Physics only runs while Started; inputs alone move the other phases.
        if world.phase == GamePhase::Started {
            world = tick(&world, &mut rng);
        }

        display::render(out, &world)?;

        let elapsed = tick_start.elapsed();
        if elapsed < TICK {
            thread::sleep(TICK - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release events from the terminal.  Ghostty / kitty-protocol
    // terminals support this; others fall back to acting on key press.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &rx, keyboard_enhanced);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
