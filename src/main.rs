mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use log::{error, info, warn};
use rand::thread_rng;

use invaders::{Error, Game, GameConfig, Input};

use display::Viewport;

// ── Key bindings ──────────────────────────────────────────────────────────────

enum Command {
    Play(Input),
    Quit,
}

fn command_for(code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::Play(Input::MoveLeft))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::Play(Input::MoveRight))
        }
        KeyCode::Char(' ') => Some(Command::Play(Input::Fire)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Play(Input::Restart)),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Fixed-rate loop. Pending input is drained and applied before each tick;
/// ticking halts while the game is over and resumes after a restart.
fn game_loop<W: Write, R: rand::Rng>(
    out: &mut W,
    game: &mut Game<R>,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let period = game.config().tick_period();
    let view = Viewport::new(game.config());

    loop {
        let frame_start = Instant::now();

        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };
            if kind != KeyEventKind::Press {
                continue;
            }
            match command_for(code, modifiers) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::Play(input)) => game.handle_input(input),
                None => {}
            }
        }

        if !game.is_game_over() {
            game.advance();
        }

        display::render(out, &view, game.world())?;

        let elapsed = frame_start.elapsed();
        if elapsed < period {
            thread::sleep(period - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        error!("{err}");
        eprintln!("invaders: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let config = GameConfig::default();
    let mut game = Game::new(config, thread_rng())?;

    let (need_cols, need_rows) = Viewport::new(game.config()).terminal_size();
    let (cols, rows) = terminal::size()?;
    if cols < need_cols || rows < need_rows {
        warn!(
            "terminal is {}x{}, board needs {}x{}; output will be clipped",
            cols,
            rows,
            need_cols,
            need_rows
        );
    }

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    info!("starting");
    let result = game_loop(&mut out, &mut game, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("exiting with score {}", game.score());
    result.map_err(Error::from)
}
