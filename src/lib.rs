/*!
 * # chat2ass - chat transcripts to ASS subtitles
 *
 * A Rust library for turning timestamped chat transcripts into styled
 * Advanced SubStation Alpha subtitle files, one chat bubble per message.
 *
 * ## Features
 *
 * - Parse `start,finish` / `username: comment` transcripts
 * - Truncate and wrap comments into a fixed-width three line bubble
 * - Draw a background bubble sized to the number of comment lines
 * - Normalize timestamps to ASS centisecond precision
 * - Emit `[Script Info]` and `[V4+ Styles]` from a JSON style configuration
 * - Batch conversion where each file succeeds or fails on its own
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `transcript`: Transcript parsing into dialogue records
 * - `ass`: Subtitle rendering:
 *   - `ass::timing`: Timestamp normalization
 *   - `ass::text`: Username/comment layout and style tags
 *   - `ass::rectangle`: Background bubble drawing
 *   - `ass::document`: Document assembly
 * - `app_config`: Style configuration loading and validation
 * - `file_utils`: Storage port and filesystem adapter
 * - `app_controller`: Per-file and batch conversion
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod ass;
pub mod transcript;
pub mod file_utils;
pub mod app_controller;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::{LayoutConfig, LogLevel, StyleConfig};
pub use app_controller::{ConversionReport, Controller, FileOutcome};
pub use ass::{AssDocument, RenderedDialogue};
pub use file_utils::{FileManager, Storage};
pub use transcript::{DialogueRecord, parse_transcript};
pub use errors::{ConfigError, ConvertError, LayoutError, TimingError, TranscriptError};
