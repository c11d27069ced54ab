//! # Error Types
//!
//! This module defines the hard error type for the GuitarTube core.
//!
//! Only structural faults are errors. Caption timing problems and diagram shape
//! problems are reported as values ([`ValidationResult`](crate::ValidationResult),
//! [`DiagramCheck`](crate::DiagramCheck)) so callers can show every problem at once.
//!
//! ## Error Types
//! - `InvalidShape` - a chord shape whose `frets` or `fingering` is not 6 entries long
//! - `SheetError` - a lesson sheet or chord shape file that is not valid YAML
//! - `UnknownChord` - a chord name that has no shape
//!
//! ## Usage
//! ```rust
//! use guitartube::{convert_to_diagram, ChordShape, GuitarTubeError};
//!
//! let shape = ChordShape::new(["X", "3", "2"], ["X", "3", "2"]);
//! match convert_to_diagram(&shape) {
//!     Ok(diagram) => println!("{} barres", diagram.barres.len()),
//!     Err(GuitarTubeError::InvalidShape { field, found, .. }) => {
//!         eprintln!("{} has {} entries", field, found);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuitarTubeError {
    /// A chord shape array with the wrong number of strings.
    ///
    /// # Example
    /// ```
    /// # use guitartube::GuitarTubeError;
    /// let err = GuitarTubeError::InvalidShape {
    ///     field: "frets",
    ///     expected: 6,
    ///     found: 4,
    /// };
    /// assert_eq!(err.to_string(), "Invalid chord shape: frets must have 6 entries, found 4");
    /// ```
    #[error("Invalid chord shape: {field} must have {expected} entries, found {found}")]
    InvalidShape {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// Invalid lesson sheet or chord shape document.
    ///
    /// # Example
    /// ```
    /// # use guitartube::GuitarTubeError;
    /// let err = GuitarTubeError::SheetError("captions: invalid type".to_string());
    /// assert_eq!(err.to_string(), "Invalid lesson sheet: captions: invalid type");
    /// ```
    #[error("Invalid lesson sheet: {0}")]
    SheetError(String),

    /// Chord name with no known shape.
    ///
    /// # Example
    /// ```
    /// # use guitartube::GuitarTubeError;
    /// let err = GuitarTubeError::UnknownChord("H#m".to_string());
    /// assert_eq!(err.to_string(), "Unknown chord: H#m");
    /// ```
    #[error("Unknown chord: {0}")]
    UnknownChord(String),
}
