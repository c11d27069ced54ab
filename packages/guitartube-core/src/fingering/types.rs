//! Chord shape and chord diagram type definitions
//!
//! Input shapes index strings from the lowest-pitched (0, low E) to the
//! highest-pitched (5, high E). Diagrams number strings the other way round:
//! 6 is the lowest-pitched and 1 the highest-pitched.

use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::GuitarTubeError;
use crate::lenient;

/// Number of strings on the instrument
pub const STRING_COUNT: usize = 6;

/// Title used when a shape carries no chord name
pub const DEFAULT_TITLE: &str = "Unknown";

/// What one string does in a chord shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fret {
    /// Not played (`X`)
    Muted,
    /// Played unfretted (`0`)
    Open,
    /// Pressed at this fret (1 and up)
    Fretted(u32),
}

impl Fret {
    /// Read a fret token.
    ///
    /// `X`/`x` is muted, `0` is open, a positive integer is a fretted position.
    /// Anything else is treated as muted.
    pub fn parse(token: &str) -> Fret {
        let token = token.trim();
        if token.eq_ignore_ascii_case("x") {
            return Fret::Muted;
        }
        match token.parse::<u32>() {
            Ok(0) => Fret::Open,
            Ok(fret) => Fret::Fretted(fret),
            Err(_) => {
                tracing::debug!(token, "unreadable fret token treated as muted");
                Fret::Muted
            }
        }
    }

    pub fn fretted(&self) -> Option<u32> {
        match self {
            Fret::Fretted(fret) => Some(*fret),
            _ => None,
        }
    }
}

/// Read a finger token. `X`, `0` and empty tokens mean no finger.
pub fn parse_finger(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() || token == "0" || token.eq_ignore_ascii_case("x") {
        None
    } else {
        Some(token.to_string())
    }
}

/// Convert an input string index (0 = lowest pitch) to a diagram string number (6 = lowest pitch)
pub(crate) fn diagram_string(index: usize) -> u8 {
    (STRING_COUNT - index) as u8
}

/// A chord shape as stored per chord position record.
///
/// Only `frets`, `fingering` and `chord_name` are read; any other fields on the
/// stored record are ignored. Tokens may be strings or integers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChordShape {
    #[serde(deserialize_with = "lenient::text_list")]
    pub frets: Vec<String>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub fingering: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chord_name: Option<String>,
}

impl ChordShape {
    pub fn new<F, G, S, T>(frets: F, fingering: G) -> Self
    where
        F: IntoIterator<Item = S>,
        G: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            frets: frets.into_iter().map(Into::into).collect(),
            fingering: fingering.into_iter().map(Into::into).collect(),
            chord_name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.chord_name = Some(name.into());
        self
    }

    /// Parse the frets into a fixed 6-string array.
    ///
    /// # Errors
    /// [`GuitarTubeError::InvalidShape`] when `frets` is not exactly 6 long.
    pub fn parsed_frets(&self) -> Result<[Fret; STRING_COUNT], GuitarTubeError> {
        let frets = fixed_length("frets", &self.frets)?;
        Ok(std::array::from_fn(|i| Fret::parse(&frets[i])))
    }

    /// Parse the fingering into a fixed 6-string array.
    ///
    /// # Errors
    /// [`GuitarTubeError::InvalidShape`] when `fingering` is not exactly 6 long.
    pub fn parsed_fingering(&self) -> Result<[Option<String>; STRING_COUNT], GuitarTubeError> {
        let fingering = fixed_length("fingering", &self.fingering)?;
        Ok(std::array::from_fn(|i| parse_finger(&fingering[i])))
    }
}

fn fixed_length<'a>(
    field: &'static str,
    tokens: &'a [String],
) -> Result<&'a [String; STRING_COUNT], GuitarTubeError> {
    tokens.try_into().map_err(|_| GuitarTubeError::InvalidShape {
        field,
        expected: STRING_COUNT,
        found: tokens.len(),
    })
}

/// Fret value drawn on a diagram: `"x"`, `0`, or a fret number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramFret {
    Muted,
    Open,
    Fret(u32),
}

impl Serialize for DiagramFret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DiagramFret::Muted => serializer.serialize_str("x"),
            DiagramFret::Open => serializer.serialize_u32(0),
            DiagramFret::Fret(fret) => serializer.serialize_u32(*fret),
        }
    }
}

/// A single dot, open marker or mute marker on a diagram.
///
/// Serializes as `[string, fret]` or `[string, fret, finger]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerPlacement {
    pub string: u8,
    pub fret: DiagramFret,
    pub finger: Option<String>,
}

impl FingerPlacement {
    pub fn muted(string: u8) -> Self {
        Self { string, fret: DiagramFret::Muted, finger: None }
    }

    pub fn open(string: u8) -> Self {
        Self { string, fret: DiagramFret::Open, finger: None }
    }

    pub fn fretted(string: u8, fret: u32, finger: Option<String>) -> Self {
        Self { string, fret: DiagramFret::Fret(fret), finger }
    }
}

impl Serialize for FingerPlacement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.finger.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.string)?;
        seq.serialize_element(&self.fret)?;
        if let Some(finger) = &self.finger {
            seq.serialize_element(finger)?;
        }
        seq.end()
    }
}

/// One finger pressing a run of strings at the same fret.
///
/// `from_string >= to_string` in diagram numbering, so `from_string` is the
/// lower-pitched end of the bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Barre {
    pub from_string: u8,
    pub to_string: u8,
    pub fret: u32,
    pub text: String,
}

impl Barre {
    /// Whether the bar passes over `string` at `fret`
    pub fn covers(&self, string: u8, fret: u32) -> bool {
        self.fret == fret && (self.to_string..=self.from_string).contains(&string)
    }
}

/// Renderer-agnostic description of a chord diagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordDiagram {
    pub fingers: Vec<FingerPlacement>,
    pub barres: Vec<Barre>,
    pub title: String,
    pub position: u32,
}
