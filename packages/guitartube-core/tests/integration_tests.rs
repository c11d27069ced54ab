//! Integration tests for the GuitarTube core
//!
//! Tests the full lesson sheet pipeline from YAML to report, and the public
//! operations the editor calls directly.

use guitartube::{
    check_lesson, convert_to_diagram, format_seconds_to_time, is_valid_time_format, parse_time_to_seconds,
    validate_chord_times, validate_diagram, CaptionInterval, ChordShape, GuitarTubeError, RuleId,
};

#[test]
fn test_check_clean_lesson() {
    let source = r#"
title: F major practice
duration: 95
chords:
  F:
    frets: ['1', '3', '3', '2', '1', '1']
    fingering: ['1', '3', '4', '2', '1', '1']
  C:
    frets: ['X', '3', '2', '0', '1', '0']
    fingering: ['X', '3', '2', '0', '1', '0']
captions:
  - chord: C
    start: "0:00"
    end: "0:04"
  - chord: F
    start: "0:04"
    end: "0:08"
  - chord: C
    start: "1:30"
    end: "1:35"
"#;
    let report = check_lesson(source).expect("Should parse lesson sheet");
    assert!(report.is_clean(), "{:#?}", report);
    assert_eq!(report.captions.len(), 3);

    let f = report.diagrams.iter().find(|d| d.name == "F").unwrap();
    let diagram = f.diagram.as_ref().unwrap();
    assert_eq!(diagram.barres.len(), 1);
    assert_eq!(diagram.barres[0].from_string, 6);
    assert_eq!(diagram.barres[0].to_string, 1);
}

#[test]
fn test_check_lesson_reports_every_problem() {
    let source = r#"
duration: 60
chords:
  Am:
    frets: ['X', '0', '2', '2', '1']
    fingering: ['X', '0', '2', '3', '1', '0']
captions:
  - chord: Am
    start: "0:10"
    end: "0:10"
  - chord: Dm
    start: "0:50"
    end: "1:75"
  - chord: Am
    start: "0:20"
    end: "0:25"
"#;
    let report = check_lesson(source).unwrap();
    assert!(!report.is_clean());
    assert_eq!(report.invalid_caption_count(), 2);

    let zero_length = &report.captions[0].result;
    assert_eq!(zero_length.failures.len(), 1);
    assert_eq!(zero_length.failures[0].rule, RuleId::StartBeforeEnd);

    let overflow = &report.captions[1].result;
    assert!(overflow.has_failure(RuleId::StartBeforeEnd));
    assert!(overflow.has_failure(RuleId::MaxEnd));
    assert!(overflow.failures[0].suggestion.contains("2:15"));

    assert!(report.captions[2].result.is_valid);
    assert_eq!(report.missing_shapes, vec!["Dm".to_string()]);
    assert!(report.diagrams[0].error.is_some());
}

#[test]
fn test_check_lesson_without_duration() {
    let source = r#"
captions:
  - start: "0:10"
    end: "59:59"
"#;
    let report = check_lesson(source).unwrap();
    assert!(report.is_clean());
}

#[test]
fn test_invalid_lesson_yaml() {
    let result = check_lesson("chords: [unclosed");
    assert!(matches!(result, Err(GuitarTubeError::SheetError(_))));
}

#[test]
fn test_editor_flow() {
    // The editor validates a caption, then renders the chord it names
    let interval = CaptionInterval::new("1:02:03", "1:02:07");
    let result = validate_chord_times(&interval, Some(4000.0));
    assert!(result.is_valid);

    let shape = ChordShape::new(["X", "7", "9", "9", "8", "7"], ["X", "1", "3", "4", "2", "1"]).with_name("E/B");
    let diagram = convert_to_diagram(&shape).unwrap();
    assert_eq!(diagram.position, 7);

    let config = serde_json::to_value(&diagram).unwrap();
    let check = validate_diagram(&config);
    assert!(check.is_valid);
    assert!(check.warnings.is_empty());
}

#[test]
fn test_timecode_public_api() {
    assert!(is_valid_time_format("12:34"));
    assert_eq!(parse_time_to_seconds("12:34"), 754);
    assert_eq!(format_seconds_to_time(754), "12:34");
    assert!(!is_valid_time_format("12:34:56:78"));
}
