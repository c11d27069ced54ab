use serde::Serialize;
use wasm_bindgen::prelude::*;

use guitartube::{CaptionInterval, ChordShape, GuitarTubeError};

#[derive(Serialize)]
struct BindingError {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

fn to_binding_error(e: GuitarTubeError) -> BindingError {
    match e {
        GuitarTubeError::InvalidShape { field, .. } => BindingError {
            message: e.to_string(),
            field: Some(field),
        },
        GuitarTubeError::SheetError(_) | GuitarTubeError::UnknownChord(_) => BindingError {
            message: e.to_string(),
            field: None,
        },
    }
}

fn error_value(e: GuitarTubeError) -> JsValue {
    let error = to_binding_error(e);
    match serde_json::to_string(&error) {
        Ok(json) => JsValue::from_str(&json),
        Err(_) => JsValue::from_str(&error.message),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Check a timestamp typed into the caption editor
#[wasm_bindgen]
pub fn is_valid_time_format(time: &str) -> bool {
    guitartube::is_valid_time_format(time)
}

/// Convert a timestamp to seconds (0 when invalid)
#[wasm_bindgen]
pub fn parse_time_to_seconds(time: &str) -> u32 {
    guitartube::parse_time_to_seconds(time)
}

/// Format seconds as M:SS or H:MM:SS
#[wasm_bindgen]
pub fn format_seconds_to_time(total_seconds: i64) -> String {
    guitartube::format_seconds_to_time(total_seconds)
}

/// Corrective message for a timestamp
#[wasm_bindgen]
pub fn time_format_suggestion(time: &str) -> String {
    guitartube::time_format_suggestion(time)
}

/// Validate a caption interval; returns a ValidationResult as JSON.
/// Missing times are reported as failures, never thrown.
#[wasm_bindgen]
pub fn validate_chord_times(
    start_time: Option<String>,
    end_time: Option<String>,
    video_duration_seconds: Option<f64>,
) -> Result<String, JsValue> {
    let interval = CaptionInterval { start_time, end_time };
    to_json(&guitartube::validate_chord_times(&interval, video_duration_seconds))
}

/// Convert a stored chord record (JSON) into a diagram object for the renderer
#[wasm_bindgen]
pub fn convert_to_diagram(shape_json: &str) -> Result<JsValue, JsValue> {
    let shape: ChordShape = serde_json::from_str(shape_json)
        .map_err(|e| error_value(GuitarTubeError::SheetError(e.to_string())))?;
    let diagram = guitartube::convert_to_diagram(&shape).map_err(error_value)?;
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    diagram.serialize(&serializer).map_err(JsValue::from)
}

/// Check a diagram configuration (JSON); returns { isValid, errors, warnings } as JSON
#[wasm_bindgen]
pub fn validate_diagram(config_json: &str) -> Result<String, JsValue> {
    let config: serde_json::Value = serde_json::from_str(config_json)
        .map_err(|e| error_value(GuitarTubeError::SheetError(e.to_string())))?;
    to_json(&guitartube::validate_diagram(&config))
}

/// Check a whole YAML lesson sheet. Chords missing from the sheet are taken
/// from the built-in chord library.
#[wasm_bindgen]
pub fn check_lesson(source: &str) -> Result<String, JsValue> {
    let mut sheet = guitartube::parse_sheet(source).map_err(error_value)?;
    for name in sheet.missing_shapes() {
        if let Ok(shape) = guitartube_chords::load_shape(&name) {
            sheet.chords.insert(name, shape);
        }
    }
    to_json(&guitartube::check_sheet(&sheet))
}

/// Diagram for a chord from the built-in library
#[wasm_bindgen]
pub fn chord_diagram(name: &str) -> Result<String, JsValue> {
    let diagram = guitartube_chords::chord_diagram(name).map_err(error_value)?;
    to_json(&diagram)
}

/// Names of all chords in the built-in library, as a JSON array
#[wasm_bindgen]
pub fn list_chords() -> String {
    serde_json::to_string(&guitartube_chords::list_chords()).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_chord_times_json() {
        let json = validate_chord_times(Some("1:00".into()), None, Some(30.0)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["isValid"], false);
        assert_eq!(value["failures"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_validate_diagram_json() {
        let json = validate_diagram(r#"{"fingers": [[1, 0]], "title": "E"}"#).unwrap();
        assert!(json.contains("\"isValid\":true"));
    }

    #[test]
    fn test_check_lesson_fills_shapes_from_library() {
        let source = "captions:\n  - chord: Am\n    start: \"0:01\"\n    end: \"0:03\"\n";
        let json = check_lesson(source).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["missingShapes"].as_array().unwrap().len(), 0);
        assert_eq!(value["diagrams"][0]["name"], "Am");
    }

    #[test]
    fn test_chord_diagram_and_list() {
        assert!(chord_diagram("F").unwrap().contains("\"fromString\":6"));
        assert!(list_chords().contains("\"Bm\""));
    }
}
