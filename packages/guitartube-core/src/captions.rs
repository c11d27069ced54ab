//! # Caption Timing Validation
//!
//! Checks the `[start, end]` interval of a chord caption before it is saved.
//!
//! ## Rules
//! - `START_BEFORE_END` - both ends are valid timestamps and start is strictly before end
//! - `MIN_START` - the start is a valid timestamp that is not negative
//! - `MAX_END` - the end does not run past the video, when the video duration is known
//!
//! The rules run independently. [`validate_chord_times`] collects every failure so
//! an editor can show all problems in one pass. Nothing here returns an error or
//! panics: a missing or malformed timestamp is just another failure.
//!
//! ## Example
//! ```rust
//! use guitartube::{validate_chord_times, CaptionInterval, RuleId};
//!
//! let interval = CaptionInterval::new("1:30", "1:10");
//! let result = validate_chord_times(&interval, Some(120.0));
//!
//! assert!(!result.is_valid);
//! assert_eq!(result.failures[0].rule, RuleId::StartBeforeEnd);
//! ```

use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::timecode::{
    format_seconds_to_time, is_valid_time_format, parse_time_to_seconds, time_format_suggestion, MAX_TIMESTAMP_SECONDS,
};

/// Identifier of a caption timing rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleId {
    StartBeforeEnd,
    MinStart,
    MaxEnd,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::StartBeforeEnd => "START_BEFORE_END",
            RuleId::MinStart => "MIN_START",
            RuleId::MaxEnd => "MAX_END",
        }
    }
}

/// A failed rule with a human-readable reason and a corrective suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    pub rule: RuleId,
    pub reason: String,
    pub suggestion: String,
}

impl Failure {
    fn new(rule: RuleId, reason: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            rule,
            reason: reason.into(),
            suggestion: suggestion.into(),
        }
    }

    fn invalid_format(rule: RuleId, label: &str, time: &str) -> Self {
        Self::new(
            rule,
            format!("Invalid {} time format: {:?}", label, time),
            time_format_suggestion(time),
        )
    }
}

/// Outcome of a single rule
pub type RuleResult = Result<(), Failure>;

/// Outcome of all rules for one caption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub failures: Vec<Failure>,
}

impl ValidationResult {
    pub fn from_failures(failures: Vec<Failure>) -> Self {
        Self {
            is_valid: failures.is_empty(),
            failures,
        }
    }

    /// Whether a particular rule failed
    pub fn has_failure(&self, rule: RuleId) -> bool {
        self.failures.iter().any(|f| f.rule == rule)
    }
}

/// Start and end timestamps of a caption as the user typed them.
///
/// `None` stands for a missing, `null` or non-text value and always fails
/// format validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionInterval {
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub end_time: Option<String>,
}

impl CaptionInterval {
    pub fn new(start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            start_time: Some(start_time.into()),
            end_time: Some(end_time.into()),
        }
    }

    fn start(&self) -> &str {
        self.start_time.as_deref().unwrap_or("")
    }

    fn end(&self) -> &str {
        self.end_time.as_deref().unwrap_or("")
    }

    /// Length of the caption in seconds, if both ends are valid and ordered
    pub fn duration_seconds(&self) -> Option<u32> {
        if !is_valid_time_format(self.start()) || !is_valid_time_format(self.end()) {
            return None;
        }
        let start = parse_time_to_seconds(self.start());
        let end = parse_time_to_seconds(self.end());
        end.checked_sub(start).filter(|d| *d > 0)
    }
}

/// Check that both times are valid and the start comes strictly before the end.
///
/// Format problems take precedence over ordering. A zero-length caption and a
/// reversed caption both fail `START_BEFORE_END` with different reasons.
pub fn validate_start_before_end(start_time: &str, end_time: &str) -> RuleResult {
    if !is_valid_time_format(start_time) {
        return Err(Failure::invalid_format(RuleId::StartBeforeEnd, "start", start_time));
    }
    if !is_valid_time_format(end_time) {
        return Err(Failure::invalid_format(RuleId::StartBeforeEnd, "end", end_time));
    }

    let start = parse_time_to_seconds(start_time);
    let end = parse_time_to_seconds(end_time);

    if start == end {
        // Nothing can follow the last expressible timestamp, so move the start back instead
        let suggestion = if start >= MAX_TIMESTAMP_SECONDS {
            format!(
                "Set the start time before {}, e.g. {}",
                end_time,
                format_seconds_to_time(i64::from(start) - 1)
            )
        } else {
            format!(
                "Set the end time after {}, e.g. {}",
                start_time,
                format_seconds_to_time(i64::from(start) + 1)
            )
        };
        return Err(Failure::new(
            RuleId::StartBeforeEnd,
            "Start and end times cannot be the same",
            suggestion,
        ));
    }

    if start > end {
        return Err(Failure::new(
            RuleId::StartBeforeEnd,
            "Start time must be before end time",
            format!("Swap the times: start at {} and end at {}", end_time, start_time),
        ));
    }

    Ok(())
}

/// Check that the start time is a valid, non-negative timestamp.
///
/// Seconds are unsigned, so a timestamp that passes the format check can never
/// be negative; the format check is what rejects `"-1:00"`.
pub fn validate_minimum_start_time(start_time: &str) -> RuleResult {
    if !is_valid_time_format(start_time) {
        return Err(Failure::invalid_format(RuleId::MinStart, "start", start_time));
    }
    Ok(())
}

/// Check that the end time does not run past the video.
///
/// An unknown duration (`None`, zero, negative or NaN) skips the bound check:
/// a missing duration must never block caption creation.
pub fn validate_maximum_end_time(end_time: &str, video_duration_seconds: Option<f64>) -> RuleResult {
    if !is_valid_time_format(end_time) {
        return Err(Failure::invalid_format(RuleId::MaxEnd, "end", end_time));
    }

    let Some(duration) = video_duration_seconds.filter(|d| *d > 0.0) else {
        return Ok(());
    };

    let end = parse_time_to_seconds(end_time);
    if f64::from(end) > duration {
        let limit = format_seconds_to_time(duration.floor() as i64);
        return Err(Failure::new(
            RuleId::MaxEnd,
            format!("End time {} is past the end of the video ({})", end_time, limit),
            format!("Use an end time of {} or earlier", limit),
        ));
    }

    Ok(())
}

/// Run every caption rule and collect all failures.
pub fn validate_chord_times(interval: &CaptionInterval, video_duration_seconds: Option<f64>) -> ValidationResult {
    let checks = [
        validate_start_before_end(interval.start(), interval.end()),
        validate_minimum_start_time(interval.start()),
        validate_maximum_end_time(interval.end(), video_duration_seconds),
    ];

    let failures: Vec<Failure> = checks.into_iter().filter_map(Result::err).collect();
    for failure in &failures {
        tracing::trace!(rule = failure.rule.as_str(), reason = %failure.reason, "caption rule failed");
    }

    ValidationResult::from_failures(failures)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_interval() {
        let result = validate_chord_times(&CaptionInterval::new("0:10", "0:15"), Some(60.0));
        assert!(result.is_valid);
        assert!(result.failures.is_empty());
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = validate_start_before_end("1:00", "1:00").unwrap_err();
        assert_eq!(err.rule, RuleId::StartBeforeEnd);
        assert!(err.reason.contains("cannot be the same"));
        assert!(err.suggestion.contains("1:01"));
    }

    #[test]
    fn test_zero_duration_at_last_timestamp_suggests_earlier_start() {
        let err = validate_start_before_end("99:59:59", "99:59:59").unwrap_err();
        assert_eq!(err.rule, RuleId::StartBeforeEnd);
        assert!(err.suggestion.contains("99:59:58"), "{}", err.suggestion);
        assert!(!err.suggestion.contains("100:00:00"));
    }

    #[test]
    fn test_reversed_order_rejected() {
        let err = validate_start_before_end("2:00", "1:00").unwrap_err();
        assert_eq!(err.rule, RuleId::StartBeforeEnd);
        assert!(err.reason.contains("must be before"));
    }

    #[test]
    fn test_format_failure_takes_precedence() {
        let err = validate_start_before_end("2:00", "1:75").unwrap_err();
        assert!(err.reason.contains("Invalid end time format"));
        assert!(err.suggestion.contains("2:15"));
    }

    #[test]
    fn test_minimum_start_time() {
        assert!(validate_minimum_start_time("0:00").is_ok());
        let err = validate_minimum_start_time("-0:05").unwrap_err();
        assert_eq!(err.rule, RuleId::MinStart);
    }

    #[test]
    fn test_max_end_skipped_when_duration_unknown() {
        assert!(validate_maximum_end_time("5:00", Some(0.0)).is_ok());
        assert!(validate_maximum_end_time("5:00", Some(-10.0)).is_ok());
        assert!(validate_maximum_end_time("5:00", None).is_ok());
        assert!(validate_maximum_end_time("5:00", Some(f64::NAN)).is_ok());
    }

    #[test]
    fn test_max_end_still_checks_format_without_duration() {
        let err = validate_maximum_end_time("9:99", None).unwrap_err();
        assert_eq!(err.rule, RuleId::MaxEnd);
    }

    #[test]
    fn test_max_end_bound() {
        assert!(validate_maximum_end_time("2:00", Some(120.0)).is_ok());
        assert!(validate_maximum_end_time("2:00", Some(119.5)).is_err());
        let err = validate_maximum_end_time("3:00", Some(150.0)).unwrap_err();
        assert_eq!(err.rule, RuleId::MaxEnd);
        assert!(err.suggestion.contains("2:30"));
    }

    #[test]
    fn test_all_failures_reported() {
        let interval = CaptionInterval::new("abc", "5:00");
        let result = validate_chord_times(&interval, Some(60.0));
        assert!(!result.is_valid);
        assert!(result.has_failure(RuleId::StartBeforeEnd));
        assert!(result.has_failure(RuleId::MinStart));
        assert!(result.has_failure(RuleId::MaxEnd));
        assert_eq!(result.failures.len(), 3);
    }

    #[test]
    fn test_missing_times_do_not_panic() {
        let result = validate_chord_times(&CaptionInterval::default(), None);
        assert!(!result.is_valid);
        assert_eq!(result.failures.len(), 3);
    }

    #[test]
    fn test_null_and_numeric_fields_from_json() {
        let interval: CaptionInterval =
            serde_json::from_str(r#"{"startTime": null, "endTime": 90}"#).unwrap();
        assert_eq!(interval.start_time, None);
        assert_eq!(interval.end_time.as_deref(), Some("90"));

        let interval: CaptionInterval =
            serde_json::from_str(r#"{"startTime": {"m": 1}, "endTime": ["1:00"]}"#).unwrap();
        assert_eq!(interval, CaptionInterval::default());
    }

    #[test]
    fn test_duration_seconds() {
        assert_eq!(CaptionInterval::new("0:10", "0:25").duration_seconds(), Some(15));
        assert_eq!(CaptionInterval::new("0:25", "0:10").duration_seconds(), None);
        assert_eq!(CaptionInterval::new("0:10", "0:10").duration_seconds(), None);
        assert_eq!(CaptionInterval::new("0:10", "x").duration_seconds(), None);
    }

    #[test]
    fn test_result_serializes_rule_ids() {
        let result = validate_chord_times(&CaptionInterval::new("1:00", "1:00"), None);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isValid"], false);
        assert_eq!(json["failures"][0]["rule"], "START_BEFORE_END");
    }
}
