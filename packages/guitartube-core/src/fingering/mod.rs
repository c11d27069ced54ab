//! # Fingering Module
//!
//! Converts a 6-string chord shape into a renderer-agnostic chord diagram.
//!
//! ## Sub-modules
//! - `types` - ChordShape input, ChordDiagram output, Fret/FingerPlacement/Barre
//! - `barre` - Grouping fretted strings by finger and detecting barres
//! - `convert` - Individual placements and the full conversion
//! - `position` - Choosing the diagram's starting fret
//! - `check` - Checking a diagram configuration before rendering
//!
//! ## String Numbering
//! Shapes list strings from the lowest-pitched (index 0, low E) to the
//! highest-pitched (index 5, high E). Diagrams number them 6 (low E) down to
//! 1 (high E), so index `i` is drawn as string `6 - i`.
//!
//! ## Example
//! ```rust
//! use guitartube::fingering::convert_to_diagram;
//! use guitartube::ChordShape;
//!
//! // B minor, A shape barred at the 2nd fret
//! let shape = ChordShape::new(["X", "2", "4", "4", "3", "2"], ["X", "1", "3", "4", "2", "1"])
//!     .with_name("Bm");
//! let diagram = convert_to_diagram(&shape).unwrap();
//!
//! assert_eq!(diagram.barres.len(), 1);
//! assert_eq!(diagram.barres[0].from_string, 5);
//! assert_eq!(diagram.barres[0].to_string, 1);
//! assert_eq!(diagram.position, 1);
//! ```
//!
//! ## Failure Model
//! Arrays that are not 6 long are a hard error. Odd finger/fret combinations
//! degrade to "no barre" and are drawn as individual placements. Diagrams are
//! not self-checked; call [`ChordDiagram::check`] or [`validate_diagram`].

mod types;
mod barre;
mod convert;
mod position;
mod check;


pub use types::{
    parse_finger, Barre, ChordDiagram, ChordShape, DiagramFret, FingerPlacement, Fret,
    DEFAULT_TITLE, STRING_COUNT,
};
pub use barre::detect_barres;
pub use convert::{convert_fingers, convert_to_diagram};
pub use position::{calculate_position, NUT_POSITION_MAX_FRET};
pub use check::{validate_diagram, DiagramCheck, MAX_DIAGRAM_FRET};
