//! Draw-ready snapshot of a frame
//!
//! The simulation never draws. An external renderer calls
//! [`RenderFrame::capture`] once per frame and strokes the primitives it
//! gets back.

use glam::Vec2;
use serde::Serialize;

use crate::sim::GameState;

/// Outline stroke width in pixels
pub const LINE_WIDTH: f32 = 2.0;

/// HUD colors (RGB)
pub const SCORE_COLOR: [u8; 3] = [255, 255, 255];
pub const COMBO_COLOR: [u8; 3] = [255, 215, 0];
pub const HIGH_SCORE_COLOR: [u8; 3] = [100, 200, 255];

/// HUD positions, top-left anchored
pub const SCORE_POSITION: Vec2 = Vec2::new(10.0, 10.0);
pub const COMBO_POSITION: Vec2 = Vec2::new(10.0, 50.0);
pub const HIGH_SCORE_POSITION: Vec2 = Vec2::new(10.0, 90.0);
pub const HUD_FONT_SIZE: f32 = 36.0;

/// Outline primitive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Shape {
    Circle { center: Vec2, radius: f32 },
    Polygon { points: Vec<Vec2> },
}

/// One line of HUD text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HudLine {
    pub text: String,
    pub position: Vec2,
    pub color: [u8; 3],
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub player: Shape,
    /// False on the "off" half of the invulnerability blink
    pub player_visible: bool,
    pub asteroids: Vec<Shape>,
    pub shots: Vec<Shape>,
    pub hud: Vec<HudLine>,
    pub game_over: bool,
}

impl RenderFrame {
    pub fn capture(state: &GameState) -> Self {
        let player = Shape::Polygon {
            points: state.player.triangle().to_vec(),
        };
        let asteroids = state
            .asteroids
            .iter()
            .map(|(_, a)| Shape::Circle {
                center: a.body.pos,
                radius: a.radius(),
            })
            .collect();
        let shots = state
            .shots
            .iter()
            .map(|(_, s)| Shape::Circle {
                center: s.body.pos,
                radius: s.body.radius(),
            })
            .collect();

        Self {
            player,
            player_visible: state.player.is_visible(),
            asteroids,
            shots,
            hud: hud_lines(
                state.score.current_score(),
                state.score.combo_multiplier(),
                state.score.high_score(),
            ),
            game_over: state.is_game_over(),
        }
    }
}

/// Score, combo (only while chaining) and high score lines
pub fn hud_lines(score: u64, combo: u32, high_score: u64) -> Vec<HudLine> {
    let mut lines = Vec::with_capacity(3);
    lines.push(HudLine {
        text: format!("SCORE: {}", group_thousands(score)),
        position: SCORE_POSITION,
        color: SCORE_COLOR,
    });
    if combo >= 2 {
        lines.push(HudLine {
            text: format!("COMBO: {combo}"),
            position: COMBO_POSITION,
            color: COMBO_COLOR,
        });
    }
    lines.push(HudLine {
        text: format!("HIGH SCORE: {}", group_thousands(high_score)),
        position: HIGH_SCORE_POSITION,
        color: HIGH_SCORE_COLOR,
    });
    lines
}

/// `1234567` -> `"1,234,567"`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
