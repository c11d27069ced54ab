//! # Lesson Sheets
//!
//! A lesson sheet is a YAML document describing one annotated video: its
//! duration, the chord captions placed on its timeline, and the chord shapes
//! those captions refer to.
//!
//! ```yaml
//! title: Wonderwall intro
//! video-id: bx1Bh8ZvH84
//! duration: 258.5
//! chords:
//!   Em7:
//!     frets: [0, 2, 2, 0, 3, 3]
//!     fingering: [0, 1, 2, 0, 3, 4]
//! captions:
//!   - chord: Em7
//!     start: "0:05"
//!     end: "0:09"
//!     lyrics: Today is gonna be the day
//! ```
//!
//! Checking a sheet validates every caption interval against the video
//! duration and converts and checks every chord shape.
//!
//! ## Example
//! ```rust
//! use guitartube::lesson::{check_sheet, parse_sheet};
//!
//! let sheet = parse_sheet(r#"
//! duration: 30
//! captions:
//!   - chord: Em
//!     start: "0:05"
//!     end: "0:45"
//! "#)?;
//! let report = check_sheet(&sheet);
//!
//! assert!(!report.is_clean());
//! assert_eq!(report.missing_shapes, vec!["Em".to_string()]);
//! # Ok::<(), guitartube::GuitarTubeError>(())
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::captions::{validate_chord_times, CaptionInterval, ValidationResult};
use crate::error::GuitarTubeError;
use crate::fingering::{convert_to_diagram, ChordDiagram, ChordShape, DiagramCheck};
use crate::lenient;

/// Raw lesson sheet as written in YAML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct LessonSheet {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
    /// Video length in seconds; unknown or non-positive skips the end-of-video check
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub chords: BTreeMap<String, ChordShape>,
    #[serde(default)]
    pub captions: Vec<CaptionEntry>,
}

/// One chord caption on the video timeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptionEntry {
    #[serde(default)]
    pub chord: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub start: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,
}

impl CaptionEntry {
    pub fn interval(&self) -> CaptionInterval {
        CaptionInterval {
            start_time: self.start.clone(),
            end_time: self.end.clone(),
        }
    }
}

impl LessonSheet {
    /// Chord names used by captions that have no shape on this sheet
    pub fn missing_shapes(&self) -> Vec<String> {
        let used: BTreeSet<&str> = self
            .captions
            .iter()
            .filter_map(|c| c.chord.as_deref())
            .collect();
        used.into_iter()
            .filter(|name| !self.chords.contains_key(*name))
            .map(str::to_string)
            .collect()
    }
}

/// Timing check of one caption
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionReport {
    /// Position of the caption on the sheet (0-based)
    pub index: usize,
    pub chord: Option<String>,
    pub result: ValidationResult,
}

/// Conversion and check of one chord shape
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramReport {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagram: Option<ChordDiagram>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<DiagramCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DiagramReport {
    pub fn is_clean(&self) -> bool {
        self.error.is_none() && self.check.as_ref().is_some_and(|c| c.is_valid)
    }
}

/// Everything wrong (or right) with a lesson sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetReport {
    pub title: Option<String>,
    pub captions: Vec<CaptionReport>,
    pub diagrams: Vec<DiagramReport>,
    pub missing_shapes: Vec<String>,
}

impl SheetReport {
    pub fn is_clean(&self) -> bool {
        self.captions.iter().all(|c| c.result.is_valid)
            && self.diagrams.iter().all(DiagramReport::is_clean)
            && self.missing_shapes.is_empty()
    }

    pub fn invalid_caption_count(&self) -> usize {
        self.captions.iter().filter(|c| !c.result.is_valid).count()
    }
}

/// Parse a YAML lesson sheet.
///
/// # Errors
/// [`GuitarTubeError::SheetError`] when the document is not valid YAML or has
/// fields of the wrong type.
pub fn parse_sheet(source: &str) -> Result<LessonSheet, GuitarTubeError> {
    serde_yaml::from_str(source).map_err(|e| GuitarTubeError::SheetError(e.to_string()))
}

/// Parse a single YAML chord shape document.
pub fn parse_shape(source: &str) -> Result<ChordShape, GuitarTubeError> {
    serde_yaml::from_str(source).map_err(|e| GuitarTubeError::SheetError(e.to_string()))
}

fn diagram_report(name: &str, shape: &ChordShape) -> DiagramReport {
    // The sheet key names the chord unless the shape carries its own name
    let mut shape = shape.clone();
    if shape.chord_name.is_none() {
        shape.chord_name = Some(name.to_string());
    }

    match convert_to_diagram(&shape) {
        Ok(diagram) => {
            let check = diagram.check();
            DiagramReport {
                name: name.to_string(),
                diagram: Some(diagram),
                check: Some(check),
                error: None,
            }
        }
        Err(e) => {
            tracing::debug!(chord = name, error = %e, "chord shape rejected");
            DiagramReport {
                name: name.to_string(),
                diagram: None,
                check: None,
                error: Some(e.to_string()),
            }
        }
    }
}

/// Check every caption and chord shape on a sheet.
pub fn check_sheet(sheet: &LessonSheet) -> SheetReport {
    let captions = sheet
        .captions
        .iter()
        .enumerate()
        .map(|(index, caption)| CaptionReport {
            index,
            chord: caption.chord.clone(),
            result: validate_chord_times(&caption.interval(), sheet.duration),
        })
        .collect();

    let diagrams = sheet
        .chords
        .iter()
        .map(|(name, shape)| diagram_report(name, shape))
        .collect();

    SheetReport {
        title: sheet.title.clone(),
        captions,
        diagrams,
        missing_shapes: sheet.missing_shapes(),
    }
}
