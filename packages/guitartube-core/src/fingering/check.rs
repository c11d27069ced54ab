//! Diagram checks run before handing a diagram to a renderer
//!
//! The checks work on the JSON form of a diagram so that hand-edited or stored
//! configurations can be checked the same way as freshly converted ones.

use serde::Serialize;
use serde_json::Value;

use super::types::{ChordDiagram, STRING_COUNT};

/// Highest fret a diagram may show
pub const MAX_DIAGRAM_FRET: u64 = 24;

/// Errors block rendering; warnings do not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramCheck {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

fn is_diagram_fret(value: &Value) -> bool {
    match value {
        Value::String(s) => s == "x" || s == "o",
        Value::Number(n) => n.as_u64().is_some_and(|fret| fret <= MAX_DIAGRAM_FRET),
        _ => false,
    }
}

fn check_finger(index: usize, finger: &Value, errors: &mut Vec<String>) {
    let Some(entry) = finger.as_array().filter(|entry| entry.len() >= 2) else {
        errors.push(format!("Finger {} must have at least 2 elements", index));
        return;
    };

    let string_ok = entry[0]
        .as_u64()
        .is_some_and(|string| (1..=STRING_COUNT as u64).contains(&string));
    if !string_ok {
        errors.push(format!(
            "Finger {} has invalid string number {} (must be 1-{})",
            index, entry[0], STRING_COUNT
        ));
    }

    if !is_diagram_fret(&entry[1]) {
        errors.push(format!(
            "Finger {} has invalid fret value {} (must be 'x', 'o' or 0-{})",
            index, entry[1], MAX_DIAGRAM_FRET
        ));
    }
}

fn check_barre(index: usize, barre: &Value, errors: &mut Vec<String>) {
    for key in ["fromString", "toString", "fret"] {
        if barre.get(key).map_or(true, Value::is_null) {
            errors.push(format!("Barre {} is missing {}", index, key));
        }
    }
}

/// Check a diagram configuration.
///
/// # Examples
/// ```
/// use guitartube::fingering::validate_diagram;
/// use serde_json::json;
///
/// let check = validate_diagram(&json!({
///     "fingers": [[6, "x"], [5, 3, "3"], [7, 2]],
///     "barres": [],
/// }));
///
/// assert!(!check.is_valid);
/// assert_eq!(check.errors.len(), 1);
/// assert_eq!(check.warnings.len(), 1);
/// ```
pub fn validate_diagram(config: &Value) -> DiagramCheck {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    match config.get("fingers").and_then(Value::as_array) {
        Some(fingers) => {
            for (index, finger) in fingers.iter().enumerate() {
                check_finger(index, finger, &mut errors);
            }
        }
        None => errors.push("Missing or invalid fingers array".to_string()),
    }

    match config.get("barres") {
        None | Some(Value::Null) => {}
        Some(Value::Array(barres)) => {
            for (index, barre) in barres.iter().enumerate() {
                check_barre(index, barre, &mut errors);
            }
        }
        Some(_) => errors.push("barres must be an array".to_string()),
    }

    if !config.get("title").is_some_and(Value::is_string) {
        warnings.push("Missing or invalid title".to_string());
    }

    DiagramCheck {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

impl ChordDiagram {
    /// Check this diagram the way a stored configuration would be checked
    pub fn check(&self) -> DiagramCheck {
        match serde_json::to_value(self) {
            Ok(config) => validate_diagram(&config),
            Err(e) => DiagramCheck {
                is_valid: false,
                errors: vec![format!("Diagram could not be serialized: {}", e)],
                warnings: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clean_config() {
        let check = validate_diagram(&json!({
            "fingers": [[6, "x"], [5, 3, "3"], [4, 2, "2"], [3, 0], [2, 1, "1"], [1, "o"]],
            "barres": [],
            "title": "C",
            "position": 1,
        }));
        assert!(check.is_valid, "{:?}", check.errors);
        assert!(check.warnings.is_empty());
    }

    #[test]
    fn test_missing_fingers() {
        let check = validate_diagram(&json!({ "title": "C" }));
        assert!(!check.is_valid);
        assert_eq!(check.errors, vec!["Missing or invalid fingers array".to_string()]);

        let check = validate_diagram(&json!({ "fingers": "6x", "title": "C" }));
        assert!(!check.is_valid);
    }

    #[test]
    fn test_short_finger_entry() {
        let check = validate_diagram(&json!({ "fingers": [[6]], "title": "C" }));
        assert_eq!(check.errors, vec!["Finger 0 must have at least 2 elements".to_string()]);
    }

    #[test]
    fn test_string_number_range() {
        let check = validate_diagram(&json!({ "fingers": [[0, 1], [7, 1], [3, 1]], "title": "C" }));
        assert_eq!(check.errors.len(), 2);
    }

    #[test]
    fn test_fret_values() {
        let check = validate_diagram(&json!({
            "fingers": [[1, 24], [2, 25], [3, "X"], [4, -1], [5, 1.5], [6, "3"]],
            "title": "C",
        }));
        assert_eq!(check.errors.len(), 5, "{:?}", check.errors);
    }

    #[test]
    fn test_barre_missing_fields() {
        let check = validate_diagram(&json!({
            "fingers": [],
            "barres": [{ "fromString": 6, "fret": 1 }, { "toString": 1 }],
            "title": "F",
        }));
        assert_eq!(
            check.errors,
            vec![
                "Barre 0 is missing toString".to_string(),
                "Barre 1 is missing fromString".to_string(),
                "Barre 1 is missing fret".to_string(),
            ]
        );
    }

    #[test]
    fn test_title_warning_only() {
        let check = validate_diagram(&json!({ "fingers": [[1, 0]], "title": 7 }));
        assert!(check.is_valid);
        assert_eq!(check.warnings, vec!["Missing or invalid title".to_string()]);
    }
}
