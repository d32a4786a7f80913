use std::io::{stdout, BufWriter, Write};
use std::process::Command;
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};

use gesture_shooter::config::game_binary;
use gesture_shooter::launcher::{GameProcess, LaunchStatus};
use gesture_shooter::logging::init_tracing;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

enum MenuResult {
    Start,
    Quit,
}

fn show_menu<W: Write>(out: &mut W, status: &str) -> std::io::Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "★  GESTURE  SHOOTER  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(4),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    if !status.is_empty() {
        out.queue(cursor::MoveTo(
            cx.saturating_sub(status.chars().count() as u16 / 2),
            cy.saturating_sub(2),
        ))?;
        out.queue(style::SetForegroundColor(Color::Yellow))?;
        out.queue(Print(status))?;
    }

    let options: &[(&str, &str, Color)] = &[
        ("S", "Start game", Color::Green),
        ("Q", "Quit", Color::Red),
    ];
    for (i, (key, label, color)) in options.iter().enumerate() {
        let row = cy + i as u16;
        out.queue(cursor::MoveTo(cx.saturating_sub(8), row))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!("[{}] ", key)))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*label))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        if let Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. }) = event::read()? {
            match code {
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Enter => {
                    return Ok(MenuResult::Start);
                }
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            }
        }
    }
}

fn enter_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    Ok(())
}

fn leave_menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.execute(cursor::Show)?;
    out.execute(terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()
}

/// Hand the terminal to the game and poll it until it exits.
fn play_once() -> LaunchStatus {
    let binary = game_binary();
    let mut game = match GameProcess::start(Command::new(&binary)) {
        Ok(game) => game,
        Err(e) => return LaunchStatus::Failed(format!("cannot start {}: {e}", binary.display())),
    };
    tracing::info!(pid = game.id(), binary = %binary.display(), "waiting for game");

    loop {
        match game.poll() {
            Ok(LaunchStatus::Running) => thread::sleep(POLL_INTERVAL),
            Ok(status) => return status,
            Err(e) => return LaunchStatus::Failed(format!("lost track of the game: {e}")),
        }
    }
}

fn run<W: Write>(out: &mut W) -> std::io::Result<()> {
    let mut status = String::new();

    loop {
        match show_menu(out, &status)? {
            MenuResult::Quit => break,
            MenuResult::Start => {
                leave_menu(out)?;
                let result = play_once();
                if let LaunchStatus::Failed(reason) = &result {
                    tracing::warn!(%reason, "game failed");
                }
                status = result.message();
                enter_menu(out)?;
            }
        }
    }
    Ok(())
}

fn main() -> std::io::Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let mut out = BufWriter::new(stdout());
    enter_menu(&mut out)?;

    let result = run(&mut out);

    // Always restore the terminal
    let _ = leave_menu(&mut out);

    result
}
