//! # Timecode Module
//!
//! Parses, formats and diagnoses the timestamps people type into caption editors.
//!
//! ## Accepted Shapes
//! - `MM:SS` - minutes 0-59, seconds 0-59 (`"1:30"`, `"00:05"`)
//! - `H:MM:SS` - hours 0-99, minutes 0-59, seconds 0-59 (`"1:02:30"`)
//!
//! Every part must be a run of ASCII digits. Signs, decimals, whitespace and empty
//! parts are rejected, so `"1:60"`, `"60:00"`, `"abc"` and `"::"` are not timestamps.
//!
//! ## Example
//! ```rust
//! use guitartube::timecode::{format_seconds_to_time, is_valid_time_format, parse_time_to_seconds};
//!
//! assert!(is_valid_time_format("1:02:30"));
//! assert_eq!(parse_time_to_seconds("1:02:30"), 3750);
//! assert_eq!(format_seconds_to_time(3750), "1:02:30");
//! ```

/// Largest hour value a timestamp may carry
pub const MAX_HOURS: u32 = 99;

/// Largest minute or second value within a timestamp
pub const MAX_MINUTES_OR_SECONDS: u32 = 59;

/// Largest number of seconds a timestamp can express (99:59:59)
pub const MAX_TIMESTAMP_SECONDS: u32 = MAX_HOURS * 3600 + 59 * 60 + 59;

/// Split a timestamp into its numeric parts.
///
/// Returns `None` unless there are 2 or 3 parts and every part is all digits.
/// Range checks are left to the caller.
fn numeric_parts(s: &str) -> Option<Vec<u32>> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return None;
    }

    parts
        .iter()
        .map(|part| {
            if !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()) {
                part.parse::<u32>().ok()
            } else {
                None
            }
        })
        .collect()
}

fn in_range(parts: &[u32]) -> bool {
    match parts {
        [minutes, seconds] => *minutes <= MAX_MINUTES_OR_SECONDS && *seconds <= MAX_MINUTES_OR_SECONDS,
        [hours, minutes, seconds] => {
            *hours <= MAX_HOURS
                && *minutes <= MAX_MINUTES_OR_SECONDS
                && *seconds <= MAX_MINUTES_OR_SECONDS
        }
        _ => false,
    }
}

fn total_seconds(parts: &[u32]) -> u32 {
    match parts {
        [minutes, seconds] => minutes * 60 + seconds,
        [hours, minutes, seconds] => hours * 3600 + minutes * 60 + seconds,
        _ => 0,
    }
}

/// Check whether a string is a well-formed `MM:SS` or `H:MM:SS` timestamp.
///
/// # Examples
/// ```
/// use guitartube::timecode::is_valid_time_format;
///
/// assert!(is_valid_time_format("0:00"));
/// assert!(is_valid_time_format("99:59:59"));
/// assert!(!is_valid_time_format("1:60"));
/// assert!(!is_valid_time_format("1:2:3:4"));
/// ```
pub fn is_valid_time_format(s: &str) -> bool {
    numeric_parts(s).is_some_and(|parts| in_range(&parts))
}

/// Convert a timestamp to a number of seconds.
///
/// Invalid input yields `0`. Call [`is_valid_time_format`] first when "zero
/// seconds" has to be told apart from "unparseable".
///
/// # Examples
/// ```
/// use guitartube::timecode::parse_time_to_seconds;
///
/// assert_eq!(parse_time_to_seconds("2:15"), 135);
/// assert_eq!(parse_time_to_seconds("1:00:00"), 3600);
/// assert_eq!(parse_time_to_seconds("2:75"), 0);
/// ```
pub fn parse_time_to_seconds(s: &str) -> u32 {
    match numeric_parts(s) {
        Some(parts) if in_range(&parts) => total_seconds(&parts),
        _ => 0,
    }
}

/// Format a number of seconds as `M:SS`, or `H:MM:SS` from one hour upwards.
///
/// Negative input formats as `"0:00"`.
///
/// # Examples
/// ```
/// use guitartube::timecode::format_seconds_to_time;
///
/// assert_eq!(format_seconds_to_time(-5), "0:00");
/// assert_eq!(format_seconds_to_time(65), "1:05");
/// assert_eq!(format_seconds_to_time(3605), "1:00:05");
/// ```
pub fn format_seconds_to_time(total_seconds: i64) -> String {
    if total_seconds < 0 {
        return "0:00".to_string();
    }

    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if total_seconds >= 3600 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

/// Produce a corrective message for a timestamp.
///
/// The message names the specific problem: missing separator, wrong number of
/// parts, a non-numeric part, or a minute/second overflow. Overflows propose
/// the carried-over equivalent (`"1:75"` suggests `"2:15"`).
///
/// # Examples
/// ```
/// use guitartube::timecode::time_format_suggestion;
///
/// assert!(time_format_suggestion("1:75").contains("2:15"));
/// assert!(time_format_suggestion("90").contains("1:30"));
/// ```
pub fn time_format_suggestion(s: &str) -> String {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return "Enter a time such as 1:30 (MM:SS) or 1:02:30 (H:MM:SS)".to_string();
    }

    if !trimmed.contains(':') {
        if trimmed.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(seconds) = trimmed.parse::<u32>() {
                if seconds <= MAX_TIMESTAMP_SECONDS {
                    return format!(
                        "Missing ':' separator. Did you mean {}?",
                        format_seconds_to_time(i64::from(seconds))
                    );
                }
            }
        }
        return "Missing ':' separator. Use MM:SS (e.g. 1:30) or H:MM:SS (e.g. 1:02:30)".to_string();
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return format!(
            "Expected 2 or 3 parts separated by ':', found {}. Use MM:SS or H:MM:SS",
            parts.len()
        );
    }

    if let Some(bad) = parts
        .iter()
        .find(|part| part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()))
    {
        return if bad.is_empty() {
            "Every part of the time needs a number, e.g. 1:30".to_string()
        } else {
            format!("'{}' is not a whole number. Use digits only, e.g. 1:30", bad)
        };
    }

    if s != trimmed {
        return format!("Remove the surrounding spaces: {}", trimmed);
    }

    let Some(values) = numeric_parts(trimmed) else {
        return "Time value is too large. Use MM:SS or H:MM:SS".to_string();
    };

    if in_range(&values) {
        return "Time format is valid".to_string();
    }

    if let [hours, _, _] = values.as_slice() {
        if *hours > MAX_HOURS {
            return format!("Hours cannot exceed {}", MAX_HOURS);
        }
    }

    let carried = match values.as_slice() {
        [minutes, seconds] => u64::from(*minutes) * 60 + u64::from(*seconds),
        [hours, minutes, seconds] => {
            u64::from(*hours) * 3600 + u64::from(*minutes) * 60 + u64::from(*seconds)
        }
        _ => 0,
    };

    if carried > u64::from(MAX_TIMESTAMP_SECONDS) {
        return format!("Time is longer than {}", format_seconds_to_time(i64::from(MAX_TIMESTAMP_SECONDS)));
    }

    format!(
        "Minutes and seconds must be between 0 and 59. Did you mean {}?",
        format_seconds_to_time(carried as i64)
    )
}
