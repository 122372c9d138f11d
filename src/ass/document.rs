use std::fmt;
use log::debug;
use crate::app_config::StyleConfig;
use crate::errors::ConvertError;
use crate::transcript::DialogueRecord;
use super::rectangle::{height_for_lines, rectangle};
use super::text::style_dialogue_text;
use super::timing::normalize_timestamp;

// @module: ASS document assembly

const EVENTS_FORMAT: &str = "Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text";

// @struct: Background and text lines for one chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDialogue {
    // @field: Normalized start timestamp
    pub start: String,

    // @field: Normalized end timestamp
    pub end: String,

    // @field: Style reference shared by both lines
    pub style: String,

    // @field: Bubble drawing
    pub rectangle: String,

    // @field: Tagged username and comment
    pub text: String,
}

impl RenderedDialogue {
    /// Render one record with the configured style name and layout
    pub fn render(record: &DialogueRecord, style: &str, config: &StyleConfig) -> Result<Self, ConvertError> {
        let start = normalize_timestamp(&record.start)?;
        let end = normalize_timestamp(&record.finish)?;
        let styled = style_dialogue_text(&record.text, &config.layout.text)?;
        let rectangle = rectangle(height_for_lines(styled.num_lines), &config.layout.rectangle);

        debug!("{} -> {}: {} line(s)", start, end, styled.num_lines);

        Ok(RenderedDialogue {
            start,
            end,
            style: style.to_string(),
            rectangle,
            text: styled.text,
        })
    }

    fn write_line(&self, f: &mut fmt::Formatter, text: &str) -> fmt::Result {
        writeln!(f, "Dialogue: 0,{},{},{},,0,0,0,,{}", self.start, self.end, self.style, text)
    }
}

impl fmt::Display for RenderedDialogue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Background first so the text renders on top of it
        self.write_line(f, &self.rectangle)?;
        self.write_line(f, &self.text)
    }
}

/// A complete ASS document; `to_string()` yields the file contents
#[derive(Debug, Clone)]
pub struct AssDocument {
    /// `[Script Info]` entries in configuration order
    pub script_info: Vec<(String, String)>,

    /// Field names of the `[V4+ Styles]` format line
    pub style_format: Vec<String>,

    /// One row of values per style, in `style_format` order
    pub styles: Vec<Vec<String>>,

    /// Rendered events in transcript order
    pub events: Vec<RenderedDialogue>,
}

impl AssDocument {
    /// Validate the configuration and render every record.
    ///
    /// Nothing is produced unless every record renders.
    pub fn build(config: &StyleConfig, records: &[DialogueRecord]) -> Result<Self, ConvertError> {
        config.validate()?;

        let script_info = config.script_info_entries()?;
        let style_format = config.style_fields();
        let styles = config.style_rows()?;
        let style_name = config.style_name()?;

        let events = records
            .iter()
            .map(|record| RenderedDialogue::render(record, &style_name, config))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AssDocument {
            script_info,
            style_format,
            styles,
            events,
        })
    }
}

impl fmt::Display for AssDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "[Script Info]")?;
        for (key, value) in &self.script_info {
            writeln!(f, "{}: {}", key, value)?;
        }

        writeln!(f)?;
        writeln!(f, "[V4+ Styles]")?;
        writeln!(f, "Format: {}", self.style_format.join(", "))?;
        for row in &self.styles {
            writeln!(f, "Style: {}", row.join(","))?;
        }

        writeln!(f)?;
        writeln!(f, "[Events]")?;
        writeln!(f, "Format: {}", EVENTS_FORMAT)?;
        for event in &self.events {
            write!(f, "{}", event)?;
        }
        Ok(())
    }
}
