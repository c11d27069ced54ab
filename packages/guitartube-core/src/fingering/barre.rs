//! Barre detection
//!
//! Groups fretted strings by the finger pressing them. A finger that holds two
//! or more strings at one fret is drawn as a single bar across the whole range
//! between its outermost strings, the way chord charts draw barres.

use std::collections::BTreeMap;

use super::types::{diagram_string, Barre, Fret, STRING_COUNT};

/// Find every barre in a chord shape.
///
/// Muted and open strings, and strings without a finger, never take part in a
/// barre. A finger whose strings sit on different frets forms no barre; its
/// strings are left for individual placement, as are the strings of a finger
/// whose bar would overlap an earlier bar at the same fret. Barres come back
/// ordered by finger label.
///
/// # Examples
/// ```
/// use guitartube::fingering::{detect_barres, Fret};
///
/// // F major, E shape
/// let frets = [1, 3, 3, 2, 1, 1].map(Fret::Fretted);
/// let fingering = ["1", "3", "4", "2", "1", "1"].map(|f| Some(f.to_string()));
/// let barres = detect_barres(&frets, &fingering);
///
/// assert_eq!(barres.len(), 1);
/// assert_eq!((barres[0].from_string, barres[0].to_string, barres[0].fret), (6, 1, 1));
/// ```
pub fn detect_barres(frets: &[Fret; STRING_COUNT], fingering: &[Option<String>; STRING_COUNT]) -> Vec<Barre> {
    let mut groups: BTreeMap<&str, Vec<(u8, u32)>> = BTreeMap::new();

    for (index, (fret, finger)) in frets.iter().zip(fingering.iter()).enumerate() {
        let (Some(fret), Some(finger)) = (fret.fretted(), finger.as_deref()) else {
            continue;
        };
        groups.entry(finger).or_default().push((diagram_string(index), fret));
    }

    let mut barres = Vec::new();
    for (finger, members) in groups {
        if members.len() < 2 {
            continue;
        }

        let fret = members[0].1;
        if members.iter().any(|(_, f)| *f != fret) {
            tracing::debug!(finger, ?members, "finger spans several frets, no barre");
            continue;
        }

        let strings = members.iter().map(|(string, _)| *string);
        let (Some(low), Some(high)) = (strings.clone().min(), strings.max()) else {
            continue;
        };

        // Two bars at one fret may not share a string
        let overlaps = barres
            .iter()
            .any(|b: &Barre| b.fret == fret && b.to_string <= high && low <= b.from_string);
        if overlaps {
            tracing::debug!(finger, fret, "bar overlaps another bar at the same fret, no barre");
            continue;
        }

        barres.push(Barre {
            from_string: high,
            to_string: low,
            fret,
            text: finger.to_string(),
        });
    }

    barres
}
