/// Rendering layer — all terminal I/O lives here.
///
/// The renderer receives draw requests in frame-pixel coordinates and scales
/// them onto the terminal grid.  No game logic is performed; this module
/// only translates requests into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use glam::IVec2;

use crate::assets::SpriteSheet;
use crate::draw::{Banner, DrawRequest, HandOverlay, SpritePlacement};
use crate::error::GameError;
use crate::orchestrator::Renderer;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Green;
const C_HUD_TIME: Color = Color::Green;
const C_HUD_HANDS: Color = Color::White;
const C_HAND: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;
const C_WIN: Color = Color::Green;
const C_LOSE: Color = Color::Red;

/// Rows above and below the play field: HUD + top border, bottom border + hint.
const TOP_ROWS: u16 = 2;
const BOTTOM_ROWS: u16 = 2;

pub struct TerminalRenderer<W> {
    out: W,
    sprites: SpriteSheet,
    cols: u16,
    rows: u16,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, sprites: SpriteSheet, cols: u16, rows: u16) -> Self {
        Self {
            out,
            sprites,
            cols,
            rows,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn field_cols(&self) -> u16 {
        self.cols.saturating_sub(2).max(1)
    }

    fn field_rows(&self) -> u16 {
        self.rows.saturating_sub(TOP_ROWS + BOTTOM_ROWS).max(1)
    }

    /// Terminal cell for a frame pixel, or `None` when the pixel is off-frame.
    fn cell(&self, pos: IVec2, width: i32, height: i32) -> Option<(u16, u16)> {
        if pos.x < 0 || pos.y < 0 || pos.x > width || pos.y > height || width <= 0 || height <= 0 {
            return None;
        }
        let col = 1 + (pos.x as i64 * (self.field_cols() as i64 - 1) / width as i64) as u16;
        let row = TOP_ROWS + (pos.y as i64 * (self.field_rows() as i64 - 1) / height as i64) as u16;
        Some((col, row))
    }

    /// Print `text` centred on `pos`, clamped inside the side walls.
    fn put(&mut self, pos: IVec2, width: i32, height: i32, text: &str, color: Color) -> std::io::Result<()> {
        let Some((col, row)) = self.cell(pos, width, height) else {
            return Ok(());
        };
        let len = text.chars().count() as u16;
        let max_col = self.cols.saturating_sub(1 + len).max(1);
        let start = col.saturating_sub(len / 2).clamp(1, max_col);
        self.out.queue(cursor::MoveTo(start, row))?;
        self.out.queue(style::SetForegroundColor(color))?;
        self.out.queue(Print(text))?;
        Ok(())
    }

    fn render(&mut self, req: &DrawRequest) -> std::io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;

        self.draw_border()?;
        self.draw_hud(req)?;

        for hand in &req.hands {
            self.draw_hand(hand, req.width, req.height)?;
        }
        for placement in req.targets.iter().chain(&req.hits).chain(&req.projectiles) {
            self.draw_sprite(placement, req.width, req.height)?;
        }

        self.draw_controls_hint()?;

        if let Some(banner) = req.banner {
            self.draw_banner(banner, req.score)?;
        }

        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()?;
        Ok(())
    }

    // ── Border ────────────────────────────────────────────────────────────────

    fn draw_border(&mut self) -> std::io::Result<()> {
        let w = self.cols as usize;
        let h = self.rows;

        self.out.queue(style::SetForegroundColor(C_BORDER))?;

        self.out.queue(cursor::MoveTo(0, TOP_ROWS - 1))?;
        self.out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

        self.out.queue(cursor::MoveTo(0, h.saturating_sub(BOTTOM_ROWS)))?;
        self.out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

        for row in TOP_ROWS..h.saturating_sub(BOTTOM_ROWS) {
            self.out.queue(cursor::MoveTo(0, row))?;
            self.out.queue(Print("│"))?;
            self.out.queue(cursor::MoveTo(self.cols.saturating_sub(1), row))?;
            self.out.queue(Print("│"))?;
        }

        Ok(())
    }

    // ── HUD (row 0) ───────────────────────────────────────────────────────────

    fn draw_hud(&mut self, req: &DrawRequest) -> std::io::Result<()> {
        self.out.queue(cursor::MoveTo(1, 0))?;
        self.out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
        self.out.queue(Print(format!("Score: {}", req.score)))?;

        let time_str = format!("Time: {}s", req.remaining_secs);
        let tx = (self.cols / 2).saturating_sub(time_str.len() as u16 / 2);
        self.out.queue(cursor::MoveTo(tx, 0))?;
        self.out.queue(style::SetForegroundColor(C_HUD_TIME))?;
        self.out.queue(Print(&time_str))?;

        // Hand orientation labels — right side
        let hands_str = req
            .hands
            .iter()
            .enumerate()
            .map(|(i, h)| format!("Hand {}: {}", i + 1, h.orientation.label()))
            .collect::<Vec<_>>()
            .join("  ");
        if !hands_str.is_empty() {
            let rx = self
                .cols
                .saturating_sub(hands_str.chars().count() as u16 + 1);
            self.out.queue(cursor::MoveTo(rx, 0))?;
            self.out.queue(style::SetForegroundColor(C_HUD_HANDS))?;
            self.out.queue(Print(&hands_str))?;
        }

        Ok(())
    }

    // ── Entities ──────────────────────────────────────────────────────────────

    fn draw_hand(&mut self, hand: &HandOverlay, width: i32, height: i32) -> std::io::Result<()> {
        self.put(hand.wrist, width, height, "o", C_HAND)?;
        self.put(hand.index_tip, width, height, "+", C_HAND)
    }

    fn draw_sprite(&mut self, placement: &SpritePlacement, width: i32, height: i32) -> std::io::Result<()> {
        let glyph = self.sprites.glyph(placement.sprite).clone();
        self.put(placement.pos, width, height, &glyph.text, glyph.color)
    }

    // ── Controls hint (last row) ──────────────────────────────────────────────

    fn draw_controls_hint(&mut self) -> std::io::Result<()> {
        self.out.queue(cursor::MoveTo(1, self.rows.saturating_sub(1)))?;
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.out.queue(Print("Point with your index finger to shoot   Q : Quit"))?;
        Ok(())
    }

    // ── Outcome overlay ───────────────────────────────────────────────────────

    fn draw_banner(&mut self, banner: Banner, score: u32) -> std::io::Result<()> {
        let color = match banner {
            Banner::Win => C_WIN,
            Banner::Lose => C_LOSE,
        };
        let title = format!("║{:^20}║", banner.text());
        let lines = [
            "╔════════════════════╗".to_string(),
            title,
            "╚════════════════════╝".to_string(),
            format!("Final Score: {:>6}", score),
        ];

        let cx = self.cols / 2;
        let start_row = (self.rows / 2).saturating_sub(lines.len() as u16 / 2);

        for (i, line) in lines.iter().enumerate() {
            let row = start_row + i as u16;
            let col = cx.saturating_sub(line.chars().count() as u16 / 2);
            self.out.queue(cursor::MoveTo(col, row))?;
            self.out.queue(style::SetForegroundColor(color))?;
            self.out.queue(Print(line))?;
        }

        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw(&mut self, request: &DrawRequest) -> Result<(), GameError> {
        self.render(request)?;
        Ok(())
    }
}
