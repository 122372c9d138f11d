/*!
 * Tests for ASS document assembly
 */

use chat2ass::app_config::StyleConfig;
use chat2ass::ass::AssDocument;
use chat2ass::errors::{ConfigError, ConvertError, TimingError};
use chat2ass::transcript::{DialogueRecord, parse_transcript};
use crate::common;

fn minimal_config() -> StyleConfig {
    StyleConfig::from_json(common::MINIMAL_CONFIG).unwrap()
}

fn dialogue_lines(document: &str) -> Vec<&str> {
    document.lines().filter(|l| l.starts_with("Dialogue:")).collect()
}

#[test]
fn test_build_withSingleMessage_shouldEmitRectangleThenText() {
    let records = parse_transcript("0:00:01.500,0:00:04.200\nAlice: Hello there").unwrap();
    let document = AssDocument::build(&minimal_config(), &records).unwrap().to_string();
    let lines = dialogue_lines(&document);

    assert_eq!(lines.len(), 2);
    for line in &lines {
        assert!(line.starts_with("Dialogue: 0,0:00:01.50,0:00:04.20,Default,,0,0,0,,"), "{}", line);
    }
    assert!(lines[0].contains(",,{\\p1"));
    assert!(lines[0].contains("\\fscy380}"));
    assert!(lines[1].contains("{\\b1"));
    assert!(lines[1].contains("Alice{\\b0}"));
    assert!(lines[1].ends_with("Hello there"));
}

#[test]
fn test_build_withMinimalConfig_shouldWriteSectionsInOrder() {
    let records = parse_transcript(common::SAMPLE_TRANSCRIPT).unwrap();
    let document = AssDocument::build(&minimal_config(), &records).unwrap().to_string();

    let expected_head = "[Script Info]
Title: Test
PlayResX: 1920

[V4+ Styles]
Format: Name, Fontname, Fontsize
Style: Default,Roboto,20

[Events]
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text
";
    assert!(document.starts_with(expected_head), "{}", document);
    assert_eq!(dialogue_lines(&document).len(), 4);
    assert!(document.ends_with('\n'));
}

#[test]
fn test_build_withSeveralStyles_shouldEmitOneStyleLineEachInHeaderOrder() {
    let config = StyleConfig::from_json(r#"{
        "Script Info": { "Title": "Two" },
        "V4+ Styles": [
            { "Name": "Chat", "Fontsize": 20, "Bold": 0 },
            { "Bold": -1, "Name": "Loud", "Fontsize": 30 }
        ]
    }"#).unwrap();
    let document = AssDocument::build(&config, &[]).unwrap().to_string();

    assert!(document.contains("Format: Name, Fontsize, Bold\nStyle: Chat,20,0\nStyle: Loud,30,-1\n"));
    assert!(dialogue_lines(&document).is_empty());
}

#[test]
fn test_build_withThreeLineComment_shouldGrowRectangle() {
    let records = vec![DialogueRecord::new(
        "0:00:01.00",
        "0:00:02.00",
        format!("Carol: {}", common::words(12)),
    )];
    let document = AssDocument::build(&minimal_config(), &records).unwrap();

    assert!(document.events[0].rectangle.contains("\\fscy500}"));
    assert_eq!(document.events[0].text.matches("\\N").count(), 4);
}

#[test]
fn test_build_withLayoutOverride_shouldUseConfiguredRectangle() {
    let config = StyleConfig::from_json(r#"{
        "Script Info": {},
        "V4+ Styles": [ { "Name": "Default" } ],
        "Layout": { "rectangle": { "color": "112233", "x": 5 } }
    }"#).unwrap();
    let records = parse_transcript("0:00:01.00,0:00:02.00\nAlice: hi").unwrap();
    let document = AssDocument::build(&config, &records).unwrap();

    assert!(document.events[0].rectangle.starts_with("{\\p1\\c&H112233&\\pos(5, 700)\\fscx450"));
}

#[test]
fn test_build_withBadTimestamp_shouldFailWholeDocument() {
    let records = vec![
        DialogueRecord::new("0:00:01.00", "0:00:02.00", "Alice: fine"),
        DialogueRecord::new("0:00:03", "0:00:04.00", "Bob: broken"),
    ];
    let result = AssDocument::build(&minimal_config(), &records);

    assert!(matches!(
        result,
        Err(ConvertError::Timing(TimingError::DecimalPoints { found: 0, .. }))
    ));
}

#[test]
fn test_build_withNoStyles_shouldFailWithConfigError() {
    let config = StyleConfig::from_json(r#"{ "Script Info": {}, "V4+ Styles": [] }"#).unwrap();
    let records = parse_transcript(common::SAMPLE_TRANSCRIPT).unwrap();

    assert!(matches!(
        AssDocument::build(&config, &records),
        Err(ConvertError::Config(ConfigError::NoStyles))
    ));
}

#[test]
fn test_build_withNullValues_shouldWriteNullLiterally() {
    let config = StyleConfig::from_json(r#"{
        "Script Info": { "Title": null },
        "V4+ Styles": [ { "Name": "Default", "Effect": null } ]
    }"#).unwrap();
    let document = AssDocument::build(&config, &[]).unwrap().to_string();

    assert!(document.contains("\nTitle: null\n"), "{}", document);
    assert!(document.contains("Format: Name, Effect\nStyle: Default,null\n"), "{}", document);
}
