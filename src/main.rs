use std::fs::File;
use std::io::{self, stdout, BufRead, BufReader, BufWriter, Stdout};
use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use gesture_shooter::assets::SpriteSheet;
use gesture_shooter::audio::TerminalBell;
use gesture_shooter::compute::init_state;
use gesture_shooter::config::GameConfig;
use gesture_shooter::display::TerminalRenderer;
use gesture_shooter::error::GameError;
use gesture_shooter::input::LandmarkStream;
use gesture_shooter::logging::init_tracing;
use gesture_shooter::orchestrator::{MonotonicClock, Orchestrator, QuitSignal, RoundEnd};
use gesture_shooter::tuning::RoundTuning;

/// Quit keys arrive from a dedicated reader thread; the loop drains them
/// once per tick.
struct KeyQuit {
    rx: mpsc::Receiver<Event>,
}

impl QuitSignal for KeyQuit {
    fn quit_requested(&mut self) -> bool {
        while let Ok(ev) = self.rx.try_recv() {
            if let Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. }) = ev {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
                    _ => {}
                }
            }
        }
        false
    }
}

fn open_source(config: &GameConfig) -> Result<LandmarkStream<Box<dyn BufRead>>, GameError> {
    let reader: Box<dyn BufRead> = match &config.input {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                GameError::Config(format!("cannot open landmark feed {}: {e}", path.display()))
            })?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };
    Ok(LandmarkStream::new(reader, config.width, config.height))
}

fn play(config: &GameConfig, sprites: SpriteSheet, out: &mut BufWriter<Stdout>) -> Result<RoundEnd, GameError> {
    let source = open_source(config)?;

    // Dedicate a thread exclusively to blocking key reads, sending them
    // through a channel so the tick loop never has to block on the keyboard.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let (cols, rows) = terminal::size()?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut state = init_state(RoundTuning::default(), config.width, config.height, &mut rng);

    let mut orchestrator = Orchestrator {
        source,
        renderer: TerminalRenderer::new(out, sprites, cols, rows),
        audio: TerminalBell::new(stdout()),
        quit: KeyQuit { rx },
        clock: MonotonicClock::start(),
        frame_interval: config.frame_interval(),
    };
    orchestrator.run(&mut state, &mut rng)
}

fn run() -> Result<RoundEnd, GameError> {
    let config = GameConfig::from_env()?;
    // Assets load before the terminal is taken over so failures print cleanly.
    let sprites = SpriteSheet::load(config.sprites.as_deref())?;

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    let result = play(&config, sprites, &mut out);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn main() -> ExitCode {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    match run() {
        Ok(RoundEnd::Finished { outcome, score }) => {
            tracing::info!(?outcome, score, "round finished");
            ExitCode::SUCCESS
        }
        Ok(RoundEnd::Quit { score }) => {
            tracing::info!(score, "quit");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "game aborted");
            ExitCode::FAILURE
        }
    }
}
