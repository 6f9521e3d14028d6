//! Draw-list description of the current frame
//!
//! Pure geometry for whatever renderer sits outside the crate: which screen
//! to show, the rectangles to fill and the text lines with their anchors.
//! Font metrics are the renderer's business, so text carries an alignment
//! instead of a measured position.

use glam::Vec2;

use crate::config::MatchConfig;
use crate::sim::{Match, MatchPhase, Rect, Side};

/// Window/title text
pub const TITLE: &str = "PYPONG";

/// Number of dashes in the centre line
pub const CENTER_DASHES: usize = 15;

/// Which screen the renderer should draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title,
    Rally,
    GameOver,
}

impl From<MatchPhase> for Screen {
    fn from(phase: MatchPhase) -> Self {
        match phase {
            MatchPhase::Start => Screen::Title,
            MatchPhase::Running => Screen::Rally,
            MatchPhase::End => Screen::GameOver,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    /// Title and score digits (a tenth of the field height)
    Big,
    /// Prompts and help lines
    Small,
}

/// Horizontal meaning of a text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    /// Top edge at `anchor.y`; `anchor.x` interpreted per `align`
    pub anchor: Vec2,
    pub align: Align,
    pub size: TextSize,
}

impl TextItem {
    fn new(text: impl Into<String>, anchor: Vec2, align: Align, size: TextSize) -> Self {
        Self {
            text: text.into(),
            anchor,
            align,
            size,
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub screen: Screen,
    pub rects: Vec<Rect>,
    pub texts: Vec<TextItem>,
}

impl Scene {
    pub fn build(game: &Match) -> Self {
        let config = game.config();
        let screen = Screen::from(game.phase());
        let (rects, texts) = match screen {
            Screen::Title => (Vec::new(), title_texts(config)),
            Screen::Rally => (rally_rects(game), score_texts(game)),
            Screen::GameOver => (Vec::new(), game_over_texts(game)),
        };
        Self {
            screen,
            rects,
            texts,
        }
    }
}

/// Top and bottom borders
pub fn border_rects(config: &MatchConfig) -> [Rect; 2] {
    let w = config.field_width;
    let b = config.border_thickness;
    [
        Rect::new(0.0, 0.0, w, b),
        Rect::new(0.0, config.field_height - b, w, b),
    ]
}

/// Dashed centre line between the borders
pub fn center_line(config: &MatchConfig) -> Vec<Rect> {
    let padding = config.field_height / 40.0;
    let dash_width = config.element_width() * 0.75;
    let working = config.field_height - config.border_thickness * 2.0 - padding;
    let pitch = working / CENTER_DASHES as f32;
    let dash_len = pitch - padding;
    let x = config.field_width / 2.0 - dash_width / 2.0;

    (0..CENTER_DASHES)
        .map(|i| {
            let y = i as f32 * pitch + config.border_thickness + padding;
            Rect::new(x, y, dash_width, dash_len)
        })
        .collect()
}

fn rally_rects(game: &Match) -> Vec<Rect> {
    let config = game.config();
    let mut rects = Vec::with_capacity(CENTER_DASHES + 5);
    for side in Side::BOTH {
        rects.push(game.paddle(side).rect(config));
    }
    // The ball stays hidden during the serve delay
    if game.ball().in_play {
        rects.push(game.ball().rect(config));
    }
    rects.extend(border_rects(config));
    rects.extend(center_line(config));
    rects
}

fn score_texts(game: &Match) -> Vec<TextItem> {
    let config = game.config();
    let padding = config.field_width / 10.0;
    let mid = config.field_width / 2.0;
    let y = config.field_height / 10.0;
    let (left, right) = game.scores();
    vec![
        TextItem::new(left.to_string(), Vec2::new(mid - padding, y), Align::Right, TextSize::Big),
        TextItem::new(right.to_string(), Vec2::new(mid + padding, y), Align::Left, TextSize::Big),
    ]
}

fn title_texts(config: &MatchConfig) -> Vec<TextItem> {
    let w = config.field_width;
    let h = config.field_height;
    let mid = w / 2.0;
    vec![
        TextItem::new(TITLE, Vec2::new(mid, h / 10.0), Align::Center, TextSize::Big),
        TextItem::new(
            "Press any key to start",
            Vec2::new(mid, h * 0.6),
            Align::Center,
            TextSize::Small,
        ),
        TextItem::new("P1: W / S", Vec2::new(w * 0.1, h * 0.7), Align::Left, TextSize::Small),
        TextItem::new(
            "P2: Up / Down",
            Vec2::new(w * 0.9, h * 0.7),
            Align::Right,
            TextSize::Small,
        ),
        TextItem::new(
            format!("First to {} wins!", score_words(config.winning_score)),
            Vec2::new(mid, h * 0.8),
            Align::Center,
            TextSize::Small,
        ),
    ]
}

fn game_over_texts(game: &Match) -> Vec<TextItem> {
    let config = game.config();
    let mid = config.field_width / 2.0;
    let h = config.field_height;
    let mut texts = vec![TextItem::new(
        "Game Over",
        Vec2::new(mid, h / 10.0),
        Align::Center,
        TextSize::Big,
    )];
    if let Some((left, right)) = game.state().final_score() {
        texts.push(TextItem::new(
            format!("{left} - {right}"),
            Vec2::new(mid, h * 0.35),
            Align::Center,
            TextSize::Small,
        ));
    }
    if let Some(winner) = game.state().winner() {
        texts.push(TextItem::new(
            format!("Player {} won!", winner.index()),
            Vec2::new(mid, h / 2.0),
            Align::Center,
            TextSize::Small,
        ));
    }
    texts.push(TextItem::new(
        "Press space to restart",
        Vec2::new(mid, h * 0.6),
        Align::Center,
        TextSize::Small,
    ));
    texts
}

/// Spelled-out score for the title prompt
fn score_words(n: u32) -> String {
    const WORDS: [&str; 11] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    ];
    WORDS
        .get(n as usize)
        .map_or_else(|| n.to_string(), |w| (*w).to_string())
}
