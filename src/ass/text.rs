/*!
 * Chat bubble text layout.
 *
 * A raw `username: comment` line becomes a bold username header followed by
 * the comment wrapped onto at most three lines of roughly 42 characters.
 */

use serde::{Deserialize, Serialize};
use crate::errors::{ConvertError, LayoutError, TranscriptError};

/// Soft width of one bubble line, in characters
pub const LINE_WIDTH: usize = 42;

/// Maximum number of comment lines in a bubble
pub const MAX_LINES: usize = 3;

/// Longest comment kept before truncation
pub const MAX_COMMENT_CHARS: usize = LINE_WIDTH * MAX_LINES;

const ELLIPSIS: &str = "...";

/// ASS hard line break
pub const LINE_BREAK: &str = "\\N";

// The output marker is two characters wide, so the next scan starts 45 output
// characters after the marker, which is 44 input characters after the space.
const NEXT_SCAN_OFFSET: usize = LINE_WIDTH + 3 - 1;

/// Override tag parameters for the username header and the comment body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Username colour, BGR hex as ASS expects
    pub username_color: String,
    pub username_font: String,
    pub username_size: u32,
    pub username_x: i32,
    pub username_y: i32,
    /// Comment colour, BGR hex
    pub comment_color: String,
    pub comment_font: String,
    pub comment_size: u32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            username_color: "606B05".to_string(),
            username_font: "Open Sans".to_string(),
            username_size: 24,
            username_x: 890,
            username_y: 660,
            comment_color: "000000".to_string(),
            comment_font: "Roboto".to_string(),
            comment_size: 20,
        }
    }
}

/// Comment text after wrapping, with the number of lines it occupies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedComment {
    pub text: String,
    pub num_lines: usize,
}

/// Fully tagged dialogue text ready for an ASS `Text` field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    pub text: String,
    pub num_lines: usize,
}

/// Split on the first colon into trimmed (username, comment)
pub fn split_username(raw: &str) -> Result<(&str, &str), TranscriptError> {
    raw.split_once(':')
        .map(|(username, comment)| (username.trim(), comment.trim()))
        .ok_or_else(|| TranscriptError::MissingSeparator { text: raw.to_string() })
}

/// Cap a comment at `MAX_COMMENT_CHARS`, ending cut comments with an ellipsis
pub fn truncate_comment(comment: &str) -> String {
    if comment.chars().count() <= MAX_COMMENT_CHARS {
        return comment.to_string();
    }

    let mut truncated: String = comment
        .chars()
        .take(MAX_COMMENT_CHARS - ELLIPSIS.len())
        .collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Break a comment into at most `MAX_LINES` lines joined by `\N`.
///
/// Starting at character `LINE_WIDTH`, the nearest space at or before the scan
/// position becomes a line break. The search never crosses the previous break,
/// so a word that fills a whole line window is a `LayoutError`.
pub fn wrap_comment(comment: &str) -> Result<WrappedComment, LayoutError> {
    let chars: Vec<char> = comment.chars().collect();
    let mut breaks = Vec::with_capacity(MAX_LINES - 1);
    let mut line_start = 0;
    let mut pos = LINE_WIDTH;

    while pos < chars.len() && breaks.len() + 1 < MAX_LINES {
        let space = chars[line_start..=pos]
            .iter()
            .rposition(|&c| c == ' ')
            .map(|offset| line_start + offset)
            .ok_or(LayoutError::UnbreakableWord { from: line_start, to: pos })?;

        breaks.push(space);
        line_start = space + 1;
        pos = space + NEXT_SCAN_OFFSET;
    }

    let mut text = String::with_capacity(comment.len() + breaks.len() * LINE_BREAK.len());
    let mut segment_start = 0;
    for &space in &breaks {
        text.extend(&chars[segment_start..space]);
        text.push_str(LINE_BREAK);
        segment_start = space + 1;
    }
    text.extend(&chars[segment_start..]);

    Ok(WrappedComment {
        text,
        num_lines: breaks.len() + 1,
    })
}

/// Build the tagged bubble text for a raw `username: comment` line
pub fn style_dialogue_text(raw: &str, style: &TextStyle) -> Result<StyledText, ConvertError> {
    let (username, comment) = split_username(raw)?;
    let wrapped = wrap_comment(&truncate_comment(comment))?;

    let text = format!(
        "{{\\b1\\c&H{}&\\fn{}\\fs{}\\pos({},{})}}{}{{\\b0}}{br}{br}{{\\c&H{}&\\fn{}\\fs{}}}{}",
        style.username_color,
        style.username_font,
        style.username_size,
        style.username_x,
        style.username_y,
        username,
        style.comment_color,
        style.comment_font,
        style.comment_size,
        wrapped.text,
        br = LINE_BREAK,
    );

    Ok(StyledText {
        text,
        num_lines: wrapped.num_lines,
    })
}
