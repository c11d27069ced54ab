pub mod captions;
pub mod error;
pub mod fingering;
mod lenient;
pub mod lesson;
pub mod timecode;

pub use captions::*;
pub use error::*;
pub use fingering::{convert_to_diagram, validate_diagram, ChordDiagram, ChordShape, DiagramCheck};
pub use lesson::{check_sheet, parse_shape, parse_sheet, LessonSheet, SheetReport};
pub use timecode::{format_seconds_to_time, is_valid_time_format, parse_time_to_seconds, time_format_suggestion};

/// Parse a YAML lesson sheet and check all of its captions and chord shapes.
/// This is the main entry point for the library.
pub fn check_lesson(source: &str) -> Result<SheetReport, GuitarTubeError> {
    let sheet = parse_sheet(source)?;
    Ok(check_sheet(&sheet))
}
