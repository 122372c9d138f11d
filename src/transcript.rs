use std::fmt;
use regex::Regex;
use once_cell::sync::Lazy;
use log::debug;
use crate::errors::TranscriptError;

// @module: Chat transcript parsing

// @const: One or more line breaks, CRLF tolerated
static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\r?\n)+").expect("line break pattern is valid")
});

// @struct: One timed chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueRecord {
    // @field: Start timestamp as written in the transcript (H:MM:SS.fraction)
    pub start: String,

    // @field: End timestamp as written in the transcript
    pub finish: String,

    // @field: Raw `username: comment` line
    pub text: String,
}

impl DialogueRecord {
    /// Creates a record from its three fields
    pub fn new(start: impl Into<String>, finish: impl Into<String>, text: impl Into<String>) -> Self {
        DialogueRecord {
            start: start.into(),
            finish: finish.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for DialogueRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{},{}", self.start, self.finish)?;
        writeln!(f, "{}", self.text)
    }
}

/// Parse a transcript made of `start,finish` / `username: comment` line pairs.
///
/// Blank and whitespace-only lines between blocks are ignored.
/// Records come back in transcript order.
pub fn parse_transcript(content: &str) -> Result<Vec<DialogueRecord>, TranscriptError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(TranscriptError::Empty);
    }

    let tokens: Vec<&str> = LINE_BREAKS
        .split(content)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();
    if tokens.len() % 2 != 0 {
        return Err(TranscriptError::OddTokenCount {
            tokens: tokens.len(),
            block: tokens.len() / 2 + 1,
        });
    }

    let mut records = Vec::with_capacity(tokens.len() / 2);
    for (i, pair) in tokens.chunks_exact(2).enumerate() {
        let block = i + 1;
        let (start, finish) = split_header(pair[0]).ok_or_else(|| TranscriptError::MalformedHeader {
            block,
            header: pair[0].to_string(),
        })?;

        let text = pair[1];
        if !text.contains(':') {
            return Err(TranscriptError::MissingSeparator { text: text.to_string() });
        }

        records.push(DialogueRecord::new(start, finish, text));
    }

    debug!("Parsed {} dialogue records", records.len());
    Ok(records)
}

// @returns: (start, finish) when the header is exactly two non-empty fields
fn split_header(header: &str) -> Option<(&str, &str)> {
    let mut parts = header.split(',').map(str::trim);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(start), Some(finish), None) if !start.is_empty() && !finish.is_empty() => {
            Some((start, finish))
        }
        _ => None,
    }
}
