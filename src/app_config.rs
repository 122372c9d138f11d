use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use log::LevelFilter;
use crate::ass::{RectangleStyle, TextStyle};
use crate::errors::ConfigError;

/// Style configuration module
/// This module handles the JSON style configuration: the `[Script Info]`
/// entries, the `[V4+ Styles]` rows and the optional bubble layout.
/// Key and field order of the JSON document is preserved.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StyleConfig {
    /// Emitted verbatim as `Key: Value` lines
    #[serde(rename = "Script Info", default)]
    pub script_info: Map<String, Value>,

    /// Style rows; the first row's keys define the format line
    #[serde(rename = "V4+ Styles", default)]
    pub styles: Vec<Map<String, Value>>,

    /// Bubble layout parameters
    #[serde(rename = "Layout", default)]
    pub layout: LayoutConfig,
}

/// Override tag parameters for the chat bubble
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct LayoutConfig {
    // @field: Username and comment tags
    pub text: TextStyle,

    // @field: Background bubble
    pub rectangle: RectangleStyle,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching `log` filter
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl StyleConfig {
    /// Parse a style configuration from JSON text
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let first = self.styles.first().ok_or(ConfigError::NoStyles)?;

        for (index, style) in self.styles.iter().enumerate().skip(1) {
            let same_fields = style.len() == first.len() && first.keys().all(|key| style.contains_key(key));
            if !same_fields {
                return Err(ConfigError::InconsistentFields { index });
            }
        }

        check_scalars("Script Info", &self.script_info)?;
        for style in &self.styles {
            check_scalars("V4+ Styles", style)?;
        }

        self.style_name().map(|_| ())
    }

    /// `[Script Info]` entries rendered as strings
    pub fn script_info_entries(&self) -> Result<Vec<(String, String)>, ConfigError> {
        self.script_info
            .iter()
            .map(|(key, value)| {
                scalar_to_string(value)
                    .map(|value| (key.clone(), value))
                    .ok_or_else(|| non_scalar("Script Info", key))
            })
            .collect()
    }

    /// Field names of the first style
    pub fn style_fields(&self) -> Vec<String> {
        self.styles
            .first()
            .map(|style| style.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Every style's values, ordered like `style_fields`
    pub fn style_rows(&self) -> Result<Vec<Vec<String>>, ConfigError> {
        let fields = self.style_fields();
        self.styles
            .iter()
            .enumerate()
            .map(|(index, style)| {
                fields
                    .iter()
                    .map(|field| {
                        let value = style.get(field).ok_or(ConfigError::InconsistentFields { index })?;
                        scalar_to_string(value).ok_or_else(|| non_scalar("V4+ Styles", field))
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect()
    }

    /// Style referenced by every dialogue line: the first style's `Name`
    pub fn style_name(&self) -> Result<String, ConfigError> {
        self.styles
            .first()
            .ok_or(ConfigError::NoStyles)?
            .get("Name")
            .filter(|name| !name.is_null())
            .and_then(scalar_to_string)
            .filter(|name| !name.is_empty())
            .ok_or(ConfigError::MissingName)
    }
}

/// Default implementation for StyleConfig
impl Default for StyleConfig {
    fn default() -> Self {
        let script_info = object(&[
            ("Title", Value::from("Chat overlay")),
            ("ScriptType", Value::from("v4.00+")),
            ("WrapStyle", Value::from(0)),
            ("ScaledBorderAndShadow", Value::from("yes")),
            ("PlayResX", Value::from(1920)),
            ("PlayResY", Value::from(1080)),
        ]);

        let default_style = object(&[
            ("Name", Value::from("Default")),
            ("Fontname", Value::from("Roboto")),
            ("Fontsize", Value::from(20)),
            ("PrimaryColour", Value::from("&H00FFFFFF")),
            ("SecondaryColour", Value::from("&H000000FF")),
            ("OutlineColour", Value::from("&H00000000")),
            ("BackColour", Value::from("&H00000000")),
            ("Bold", Value::from(0)),
            ("Italic", Value::from(0)),
            ("Underline", Value::from(0)),
            ("StrikeOut", Value::from(0)),
            ("ScaleX", Value::from(100)),
            ("ScaleY", Value::from(100)),
            ("Spacing", Value::from(0)),
            ("Angle", Value::from(0)),
            ("BorderStyle", Value::from(1)),
            ("Outline", Value::from(0)),
            ("Shadow", Value::from(0)),
            ("Alignment", Value::from(7)),
            ("MarginL", Value::from(10)),
            ("MarginR", Value::from(10)),
            ("MarginV", Value::from(10)),
            ("Encoding", Value::from(1)),
        ]);

        StyleConfig {
            script_info,
            styles: vec![default_style],
            layout: LayoutConfig::default(),
        }
    }
}

// @returns: Text form of a scalar JSON value, None for objects and arrays
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn check_scalars(section: &str, entries: &Map<String, Value>) -> Result<(), ConfigError> {
    match entries.iter().find(|(_, value)| value.is_array() || value.is_object()) {
        Some((key, _)) => Err(non_scalar(section, key)),
        None => Ok(()),
    }
}

fn non_scalar(section: &str, key: &str) -> ConfigError {
    ConfigError::NonScalarValue {
        section: section.to_string(),
        key: key.to_string(),
    }
}

fn object(pairs: &[(&str, Value)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}
