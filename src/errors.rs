/*!
 * Error types for the chat2ass library.
 *
 * Each pipeline stage has its own error enum; `ConvertError` wraps them all
 * and is what a single transcript/output conversion reports.
 */

use thiserror::Error;

/// Errors raised while splitting a transcript into dialogue records
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TranscriptError {
    /// The transcript had no content after trimming
    #[error("Transcript is empty")]
    Empty,

    /// The last timing header has no text line after it
    #[error("Transcript has an odd number of lines ({tokens}); block {block} has no comment line")]
    OddTokenCount {
        /// Number of non-empty lines found
        tokens: usize,
        /// 1-based index of the incomplete block
        block: usize,
    },

    /// A header line that is not `start,finish`
    #[error("Malformed timing header in block {block}: {header:?}")]
    MalformedHeader {
        /// 1-based block index
        block: usize,
        /// The offending line
        header: String,
    },

    /// A text line without the `username: comment` separator
    #[error("Missing ':' between username and comment in {text:?}")]
    MissingSeparator {
        /// The offending line
        text: String,
    },
}

/// Errors raised while normalizing timestamps
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimingError {
    /// Zero or more than one decimal point
    #[error("Timestamp {timestamp:?} must contain exactly one '.', found {found}")]
    DecimalPoints {
        /// The offending timestamp
        timestamp: String,
        /// Number of decimal points found
        found: usize,
    },
}

/// Errors raised while laying comment text out into bubble lines
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// No space to break on inside the current line window
    #[error("Cannot wrap comment: no space between characters {from} and {to}")]
    UnbreakableWord {
        /// First character index of the scanned window
        from: usize,
        /// Last character index of the scanned window
        to: usize,
    },
}

/// Errors in the style configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The JSON document could not be decoded
    #[error("Failed to parse style configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// `V4+ Styles` is empty
    #[error("Style configuration defines no styles")]
    NoStyles,

    /// A style whose field set differs from the first style
    #[error("Style {index} does not have the same fields as the first style")]
    InconsistentFields {
        /// 0-based style index
        index: usize,
    },

    /// The first style has no usable `Name`
    #[error("The first style has no Name field")]
    MissingName,

    /// An object or array where a scalar was expected
    #[error("Value of {key:?} in {section} must be a scalar")]
    NonScalarValue {
        /// Section the key belongs to
        section: String,
        /// Offending key
        key: String,
    },
}

/// Error for one transcript-to-subtitle conversion
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input and output path lists of different lengths
    #[error("The number of input files ({inputs}) does not match the number of output files ({outputs})")]
    ArgumentMismatch {
        /// Number of inputs given
        inputs: usize,
        /// Number of outputs given
        outputs: usize,
    },

    /// Malformed transcript
    #[error("Transcript error: {0}")]
    Transcript(#[from] TranscriptError),

    /// Invalid style configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed timestamp
    #[error("Timing error: {0}")]
    Timing(#[from] TimingError),

    /// Comment text that cannot be laid out
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Read or write failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for ConvertError {
    fn from(error: std::io::Error) -> Self {
        Self::Storage(error.to_string())
    }
}
