/*!
 * Advanced SubStation Alpha rendering.
 *
 * Turns parsed dialogue records into the lines of an `.ass` document:
 * - `timing`: centisecond timestamp normalization
 * - `text`: username/comment split, truncation, bubble word-wrap and style tags
 * - `rectangle`: the background bubble drawn with a vector path
 * - `document`: `[Script Info]`, `[V4+ Styles]` and `[Events]` assembly
 */

pub mod timing;
pub mod text;
pub mod rectangle;
pub mod document;

// Re-export main types
pub use document::{AssDocument, RenderedDialogue};
pub use rectangle::RectangleStyle;
pub use text::{StyledText, TextStyle, WrappedComment};
pub use timing::normalize_timestamp;
