//! Chord shape to chord diagram conversion

use super::barre::detect_barres;
use super::position::calculate_position;
use super::types::{diagram_string, Barre, ChordDiagram, ChordShape, FingerPlacement, Fret, DEFAULT_TITLE, STRING_COUNT};
use crate::error::GuitarTubeError;

/// Turn each string into a diagram placement.
///
/// Muted strings become `[string, "x"]` and open strings `[string, 0]`. A fretted
/// string under one of `barres` is left out, since the bar already draws it.
/// Every other fretted string becomes `[string, fret, finger]`, or
/// `[string, fret]` when no finger is given.
pub fn convert_fingers(
    frets: &[Fret; STRING_COUNT],
    fingering: &[Option<String>; STRING_COUNT],
    barres: &[Barre],
) -> Vec<FingerPlacement> {
    frets
        .iter()
        .zip(fingering.iter())
        .enumerate()
        .filter_map(|(index, (fret, finger))| {
            let string = diagram_string(index);
            match fret {
                Fret::Muted => Some(FingerPlacement::muted(string)),
                Fret::Open => Some(FingerPlacement::open(string)),
                Fret::Fretted(fret) if barres.iter().any(|b| b.covers(string, *fret)) => None,
                Fret::Fretted(fret) => Some(FingerPlacement::fretted(string, *fret, finger.clone())),
            }
        })
        .collect()
}

/// Convert a chord shape into a diagram description.
///
/// # Pipeline
/// 1. Check both arrays hold exactly 6 strings
/// 2. Detect barres
/// 3. Place the remaining fingers, open and muted strings
/// 4. Pick the starting fret
///
/// The diagram is not checked here; run [`ChordDiagram::check`] before rendering.
///
/// # Example
/// ```rust
/// use guitartube::{convert_to_diagram, ChordShape};
///
/// let shape = ChordShape::new(["X", "3", "2", "0", "1", "0"], ["X", "3", "2", "0", "1", "0"]).with_name("C");
/// let diagram = convert_to_diagram(&shape)?;
///
/// assert_eq!(diagram.title, "C");
/// assert_eq!(diagram.position, 1);
/// assert!(diagram.barres.is_empty());
/// assert_eq!(diagram.fingers.len(), 6);
/// # Ok::<(), guitartube::GuitarTubeError>(())
/// ```
///
/// # Errors
/// Returns [`GuitarTubeError::InvalidShape`] if `frets` or `fingering` is not 6 long.
pub fn convert_to_diagram(shape: &ChordShape) -> Result<ChordDiagram, GuitarTubeError> {
    let frets = shape.parsed_frets()?;
    let fingering = shape.parsed_fingering()?;

    let barres = detect_barres(&frets, &fingering);
    let fingers = convert_fingers(&frets, &fingering, &barres);
    let position = calculate_position(&frets);

    Ok(ChordDiagram {
        fingers,
        barres,
        title: shape
            .chord_name
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        position,
    })
}
