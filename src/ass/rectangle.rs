use serde::{Deserialize, Serialize};

/// Rounded rectangle outline, scaled by `\fscx`/`\fscy`
const RECTANGLE_SHAPE: &str = "m -38 -6 l 45 -6 b 45 -6 45 -6 45 -6 b 47 -6 48 -5 48 -3 b 48 2 48 8 48 13 b 48 16 47 17 45 17 b 17 17 -10 17 -38 17 b -40 17 -41 16 -41 13 b -41 8 -41 2 -41 -3 b -41 -5 -40 -6 -38 -6";

pub const MIN_HEIGHT: u32 = 380;
pub const MAX_HEIGHT: u32 = 500;

const BASE_HEIGHT: u32 = 320;
const HEIGHT_PER_LINE: u32 = 60;

/// Bubble background parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectangleStyle {
    /// Horizontal scale, in percent
    pub width: u32,
    pub x: i32,
    pub y: i32,
    /// Fill colour, BGR hex
    pub color: String,
}

impl Default for RectangleStyle {
    fn default() -> Self {
        Self {
            width: 450,
            x: 1030,
            y: 700,
            color: "FFFFFF".to_string(),
        }
    }
}

/// Requested bubble height for a comment of `num_lines` lines
pub fn height_for_lines(num_lines: usize) -> u32 {
    let lines = u32::try_from(num_lines).unwrap_or(u32::MAX);
    BASE_HEIGHT.saturating_add(HEIGHT_PER_LINE.saturating_mul(lines))
}

pub fn clamp_height(height: u32) -> u32 {
    height.clamp(MIN_HEIGHT, MAX_HEIGHT)
}

/// Drawing-mode dialogue text for the bubble background
pub fn rectangle(height: u32, style: &RectangleStyle) -> String {
    format!(
        "{{\\p1\\c&H{}&\\pos({}, {})\\fscx{}\\fscy{}}}{}{{\\p0}}",
        style.color,
        style.x,
        style.y,
        style.width,
        clamp_height(height),
        RECTANGLE_SHAPE,
    )
}
