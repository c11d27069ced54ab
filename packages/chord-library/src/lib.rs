//! Common guitar chord shapes, bundled into the binary at build time.
//!
//! Each shape lives in `shapes/<name>.yaml` and holds `frets` and `fingering`
//! in low-E-to-high-E order. Sharps are spelled `sharp` in file names
//! (`Fsharpm.yaml` is `F#m`).

use guitartube::{convert_to_diagram, parse_shape, ChordDiagram, ChordShape, GuitarTubeError};

include!(concat!(env!("OUT_DIR"), "/shapes.rs"));

/// A chord shape file with its name and content
#[derive(Debug, Clone)]
pub struct ChordEntry {
    pub name: String,
    pub content: String,
}

/// Get all embedded chord shape files
pub fn get_all_chords() -> Vec<ChordEntry> {
    SHAPES
        .iter()
        .map(|(name, content)| ChordEntry {
            name: name.to_string(),
            content: content.to_string(),
        })
        .collect()
}

/// Get a chord shape file by name
pub fn get_chord(name: &str) -> Option<ChordEntry> {
    SHAPES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(name, content)| ChordEntry {
            name: name.to_string(),
            content: content.to_string(),
        })
}

/// List all chord names
pub fn list_chords() -> Vec<&'static str> {
    SHAPES.iter().map(|(name, _)| *name).collect()
}

/// Load a chord shape by name, titled with the chord name.
///
/// # Errors
/// [`GuitarTubeError::UnknownChord`] if the library has no such chord, or
/// [`GuitarTubeError::SheetError`] if its file does not parse.
pub fn load_shape(name: &str) -> Result<ChordShape, GuitarTubeError> {
    let entry = get_chord(name).ok_or_else(|| GuitarTubeError::UnknownChord(name.to_string()))?;
    let shape = parse_shape(&entry.content)?;
    Ok(match shape.chord_name {
        Some(_) => shape,
        None => shape.with_name(entry.name),
    })
}

/// Load a chord shape by name and convert it to a diagram
pub fn chord_diagram(name: &str) -> Result<ChordDiagram, GuitarTubeError> {
    convert_to_diagram(&load_shape(name)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_library_is_not_empty() {
        assert!(list_chords().len() >= 10);
        assert!(list_chords().contains(&"F#m"));
    }

    #[test]
    fn test_every_shape_converts_and_checks_clean() {
        for name in list_chords() {
            let diagram = chord_diagram(name).unwrap_or_else(|e| panic!("{}: {}", name, e));
            let check = diagram.check();
            assert!(check.is_valid, "{}: {:?}", name, check.errors);
            assert!(check.warnings.is_empty(), "{}: {:?}", name, check.warnings);
            assert_eq!(diagram.title, name);
        }
    }

    #[test]
    fn test_f_major_is_a_full_barre() {
        let diagram = chord_diagram("F").unwrap();
        assert_eq!(diagram.barres.len(), 1);
        assert_eq!(diagram.barres[0].from_string, 6);
        assert_eq!(diagram.barres[0].to_string, 1);
        assert_eq!(diagram.barres[0].fret, 1);
    }

    #[test]
    fn test_b_flat_is_a_double_barre() {
        let diagram = chord_diagram("Bb").unwrap();
        assert_eq!(diagram.barres.len(), 2);
    }

    #[test]
    fn test_high_position_chord() {
        assert_eq!(chord_diagram("C8").unwrap().position, 8);
    }

    #[test]
    fn test_all_chords_match_names_and_parse() {
        let entries = get_all_chords();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, list_chords());
        for entry in &entries {
            let shape = parse_shape(&entry.content).unwrap_or_else(|e| panic!("{}: {}", entry.name, e));
            assert_eq!(shape.frets.len(), 6, "{}", entry.name);
        }
    }

    #[test]
    fn test_unknown_chord() {
        assert!(matches!(load_shape("H7"), Err(GuitarTubeError::UnknownChord(_))));
    }
}
