/// One tick per external frame, and the loop that drives a round.
///
/// External collaborators (frame source, renderer, audio, quit key, clock)
/// sit behind small traits so the loop runs the same against a terminal or
/// against in-memory fakes.

use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::info;

use crate::compute::{advance_projectiles, advance_targets};
use crate::draw::DrawRequest;
use crate::entities::{FrameInput, GameState, Outcome, MAX_HANDS};
use crate::error::GameError;
use crate::gesture::{apply_fire_events, orientation, read_gestures, GestureFrame};
use crate::round::evaluate_round;

pub trait FrameSource {
    /// Block until the next frame.  Running out of frames is an error.
    fn next_frame(&mut self) -> Result<FrameInput, GameError>;
}

pub trait Renderer {
    fn draw(&mut self, request: &DrawRequest) -> Result<(), GameError>;
}

pub trait AudioSink {
    fn play_alert(&mut self) -> Result<(), GameError>;
}

pub trait QuitSignal {
    /// Polled once at the top of every tick.
    fn quit_requested(&mut self) -> bool;
}

/// Monotonic time since round start.
pub trait Clock {
    fn now(&self) -> Duration;
}

pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundEnd {
    /// The round reached an outcome and the final frame was held.
    Finished { outcome: Outcome, score: u32 },
    /// The player asked to quit mid-round.
    Quit { score: u32 },
}

/// Run steps 2–7 of a tick on `frame` at round time `now`.
///
/// A finished round is left untouched; only its draw request is rebuilt,
/// with the hands from `frame` still shown.
pub fn step(
    state: &GameState,
    frame: &FrameInput,
    now: Duration,
    rng: &mut impl Rng,
) -> (GameState, DrawRequest) {
    if state.outcome.is_terminal() {
        let gestures = GestureFrame {
            fire_events: Vec::new(),
            orientations: frame.hands.iter().take(MAX_HANDS).map(orientation).collect(),
        };
        let mut request = DrawRequest::from_state(state, &frame.hands, &gestures);
        request.play_alert = false;
        return (state.clone(), request);
    }

    let state = advance_targets(state, rng);
    let gestures = read_gestures(&state, &frame.hands, now);
    let state = apply_fire_events(&state, &gestures.fire_events);
    let state = advance_projectiles(&state, rng);
    let mut state = evaluate_round(&state, now);
    state.frame += 1;

    let request = DrawRequest::from_state(&state, &frame.hands, &gestures);
    (state, request)
}

pub struct Orchestrator<S, D, A, Q, C> {
    pub source: S,
    pub renderer: D,
    pub audio: A,
    pub quit: Q,
    pub clock: C,
    /// Minimum wall time per tick; `None` runs as fast as frames arrive.
    pub frame_interval: Option<Duration>,
}

impl<S, D, A, Q, C> Orchestrator<S, D, A, Q, C>
where
    S: FrameSource,
    D: Renderer,
    A: AudioSink,
    Q: QuitSignal,
    C: Clock,
{
    /// Tick until the round ends, the player quits, or the source fails.
    pub fn run(&mut self, state: &mut GameState, rng: &mut impl Rng) -> Result<RoundEnd, GameError> {
        info!(
            width = state.width,
            height = state.height,
            targets = state.targets.len(),
            "round started"
        );

        loop {
            let tick_start = Instant::now();

            if self.quit.quit_requested() {
                info!(score = state.score, "quit requested");
                return Ok(RoundEnd::Quit { score: state.score });
            }

            let frame = self.source.next_frame()?;
            let now = self.clock.now();
            let (next, request) = step(state, &frame, now, rng);
            *state = next;

            self.renderer.draw(&request)?;
            if request.play_alert {
                self.audio.play_alert()?;
            }

            if state.outcome.is_terminal() {
                let (_, hold_frame) = step(state, &frame, now, rng);
                self.renderer.draw(&hold_frame)?;
                thread::sleep(state.tuning.display_hold);
                return Ok(RoundEnd::Finished {
                    outcome: state.outcome,
                    score: state.score,
                });
            }

            if let Some(interval) = self.frame_interval {
                let elapsed = tick_start.elapsed();
                if elapsed < interval {
                    thread::sleep(interval - elapsed);
                }
            }
        }
    }
}
