/*!
 * Tests for error types and conversions
 */

use chat2ass::errors::{ConvertError, LayoutError, TimingError, TranscriptError};

#[test]
fn test_convertError_argumentMismatch_shouldDisplayBothCounts() {
    let error = ConvertError::ArgumentMismatch { inputs: 2, outputs: 1 };
    let display = format!("{}", error);
    assert!(display.contains("(2)"));
    assert!(display.contains("(1)"));
}

#[test]
fn test_convertError_fromTranscriptError_shouldWrapCorrectly() {
    let error: ConvertError = TranscriptError::OddTokenCount { tokens: 3, block: 2 }.into();
    assert!(matches!(error, ConvertError::Transcript(_)));
    assert!(error.to_string().contains("block 2"));
}

#[test]
fn test_convertError_fromTimingError_shouldWrapCorrectly() {
    let error: ConvertError = TimingError::DecimalPoints { timestamp: "1:00".to_string(), found: 0 }.into();
    assert!(error.to_string().starts_with("Timing error:"));
}

#[test]
fn test_convertError_fromLayoutError_shouldWrapCorrectly() {
    let error: ConvertError = LayoutError::UnbreakableWord { from: 0, to: 42 }.into();
    assert!(error.to_string().contains("characters 0 and 42"));
}

#[test]
fn test_convertError_fromIoError_shouldBecomeStorageError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error: ConvertError = io_error.into();
    assert!(matches!(error, ConvertError::Storage(ref m) if m.contains("denied")));
}
