/// Sprite glyphs for the terminal renderer.
///
/// Built-in glyphs are used unless a sprite sheet is configured.  A
/// configured sheet must exist and parse; anything else is fatal before the
/// round starts.
///
/// ```text
/// {
///   "targets": [{"glyph":"(@)","color":"blue"}, {"glyph":"(@)","color":"red"}, {"glyph":"(@)","color":"green"}],
///   "projectile": {"glyph":"*","color":"cyan"},
///   "hit": {"glyph":"\\#/","color":"white"}
/// }
/// ```

use std::fs;
use std::path::Path;

use crossterm::style::Color;
use serde::Deserialize;

use crate::draw::SpriteId;
use crate::entities::TargetSprite;
use crate::error::GameError;

#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub text: String,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpriteSheet {
    targets: [Glyph; 3],
    projectile: Glyph,
    hit: Glyph,
}

#[derive(Deserialize)]
struct RawGlyph {
    glyph: String,
    color: String,
}

#[derive(Deserialize)]
struct RawSheet {
    targets: Vec<RawGlyph>,
    projectile: RawGlyph,
    hit: RawGlyph,
}

fn glyph(text: &str, color: Color) -> Glyph {
    Glyph {
        text: text.to_string(),
        color,
    }
}

fn parse_color(name: &str) -> Option<Color> {
    let color = match name.to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "white" => Color::White,
        "grey" | "gray" => Color::Grey,
        "dark_grey" | "dark_gray" => Color::DarkGrey,
        "red" => Color::Red,
        "dark_red" => Color::DarkRed,
        "green" => Color::Green,
        "dark_green" => Color::DarkGreen,
        "yellow" => Color::Yellow,
        "dark_yellow" => Color::DarkYellow,
        "blue" => Color::Blue,
        "dark_blue" => Color::DarkBlue,
        "magenta" => Color::Magenta,
        "dark_magenta" => Color::DarkMagenta,
        "cyan" => Color::Cyan,
        "dark_cyan" => Color::DarkCyan,
        _ => return None,
    };
    Some(color)
}

impl Default for SpriteSheet {
    fn default() -> Self {
        Self {
            targets: [
                glyph("(@)", Color::Blue),
                glyph("(@)", Color::Red),
                glyph("(@)", Color::Green),
            ],
            projectile: glyph("*", Color::Cyan),
            hit: glyph("\\#/", Color::White),
        }
    }
}

impl SpriteSheet {
    /// Built-in sheet for `None`, otherwise the file at `path`.
    pub fn load(path: Option<&Path>) -> Result<Self, GameError> {
        match path {
            None => Ok(Self::default()),
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|e| GameError::Asset {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
                Self::parse(&text).map_err(|reason| GameError::Asset {
                    path: path.to_path_buf(),
                    reason,
                })
            }
        }
    }

    pub fn parse(text: &str) -> Result<Self, String> {
        let raw: RawSheet = serde_json::from_str(text).map_err(|e| e.to_string())?;
        let targets: Vec<Glyph> = raw
            .targets
            .iter()
            .map(convert)
            .collect::<Result<_, _>>()?;
        let targets: [Glyph; 3] = targets
            .try_into()
            .map_err(|v: Vec<Glyph>| format!("expected 3 target glyphs, found {}", v.len()))?;

        Ok(Self {
            targets,
            projectile: convert(&raw.projectile)?,
            hit: convert(&raw.hit)?,
        })
    }

    pub fn glyph(&self, sprite: SpriteId) -> &Glyph {
        match sprite {
            SpriteId::Target(TargetSprite::Blue) => &self.targets[0],
            SpriteId::Target(TargetSprite::Red) => &self.targets[1],
            SpriteId::Target(TargetSprite::Green) => &self.targets[2],
            SpriteId::Projectile => &self.projectile,
            SpriteId::Hit => &self.hit,
        }
    }
}

fn convert(raw: &RawGlyph) -> Result<Glyph, String> {
    let width = raw.glyph.chars().count();
    if width == 0 || width > 5 {
        return Err(format!("glyph {:?} must be 1 to 5 characters", raw.glyph));
    }
    let color = parse_color(&raw.color).ok_or_else(|| format!("unknown color {:?}", raw.color))?;
    Ok(glyph(&raw.glyph, color))
}
