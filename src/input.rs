/// Landmark feed from an external hand detector.
///
/// One JSON object per line, one line per camera frame.  Coordinates are
/// normalized to `[0, 1]` of the capture resolution, as hand-landmark models
/// report them:
///
/// ```text
/// {"hands":[{"wrist":[0.51,0.82],"index_finger_tip":[0.55,0.41]}]}
/// ```
///
/// Unknown fields (other landmarks, handedness, scores) are ignored.  Blank
/// lines are skipped; end of input ends the feed.  Coordinates outside
/// `[-1, 2]` are rejected as malformed.

use std::io::BufRead;
use std::ops::RangeInclusive;

use glam::IVec2;
use serde::Deserialize;

use crate::entities::{FrameInput, HandObservation};
use crate::error::GameError;
use crate::orchestrator::FrameSource;

#[derive(Debug, Deserialize)]
struct LandmarkFrame {
    #[serde(default)]
    hands: Vec<HandLandmarks>,
}

#[derive(Debug, Deserialize)]
struct HandLandmarks {
    wrist: [f32; 2],
    index_finger_tip: [f32; 2],
}

/// Landmarks a little off-frame are normal near the capture edge; anything
/// further out is a broken detector.
const COORD_RANGE: RangeInclusive<f32> = -1.0..=2.0;

fn check_point(name: &str, point: [f32; 2]) -> Result<(), String> {
    if point.iter().all(|c| COORD_RANGE.contains(c)) {
        Ok(())
    } else {
        Err(format!("{name} {point:?} outside {COORD_RANGE:?}"))
    }
}

/// Normalized landmark → frame pixel, truncating toward zero.
fn to_pixels(point: [f32; 2], width: i32, height: i32) -> IVec2 {
    IVec2::new(
        (point[0] * width as f32) as i32,
        (point[1] * height as f32) as i32,
    )
}

pub struct LandmarkStream<R> {
    reader: R,
    width: i32,
    height: i32,
    line: u64,
    buf: String,
}

impl<R: BufRead> LandmarkStream<R> {
    pub fn new(reader: R, width: i32, height: i32) -> Self {
        Self {
            reader,
            width,
            height,
            line: 0,
            buf: String::new(),
        }
    }

    fn parse(&self, text: &str) -> Result<FrameInput, GameError> {
        let frame: LandmarkFrame =
            serde_json::from_str(text).map_err(|e| GameError::MalformedFrame {
                line: self.line,
                reason: e.to_string(),
            })?;
        let mut hands = Vec::with_capacity(frame.hands.len());
        for h in &frame.hands {
            check_point("wrist", h.wrist)
                .and_then(|_| check_point("index_finger_tip", h.index_finger_tip))
                .map_err(|reason| GameError::MalformedFrame {
                    line: self.line,
                    reason,
                })?;
            hands.push(HandObservation {
                wrist: to_pixels(h.wrist, self.width, self.height),
                index_tip: to_pixels(h.index_finger_tip, self.width, self.height),
            });
        }
        Ok(FrameInput { hands })
    }
}

impl<R: BufRead> FrameSource for LandmarkStream<R> {
    fn next_frame(&mut self) -> Result<FrameInput, GameError> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Err(GameError::SourceExhausted);
            }
            self.line += 1;
            let text = self.buf.trim();
            if !text.is_empty() {
                return self.parse(text);
            }
        }
    }
}
