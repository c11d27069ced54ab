//! Diagram starting fret

use super::types::{Fret, STRING_COUNT};

/// Chords whose lowest fretted position is at or below this fret are drawn from the nut
pub const NUT_POSITION_MAX_FRET: u32 = 5;

/// Pick the fret a diagram starts at.
///
/// Open chords and low-position chords start at the nut (`1`). Higher chords
/// start at their lowest fretted position.
///
/// # Examples
/// ```
/// use guitartube::fingering::{calculate_position, Fret};
///
/// let open = [Fret::Open; 6];
/// assert_eq!(calculate_position(&open), 1);
///
/// let high = [Fret::Muted, Fret::Fretted(7), Fret::Fretted(9), Fret::Fretted(9), Fret::Fretted(8), Fret::Fretted(7)];
/// assert_eq!(calculate_position(&high), 7);
/// ```
pub fn calculate_position(frets: &[Fret; STRING_COUNT]) -> u32 {
    match frets.iter().filter_map(Fret::fretted).min() {
        Some(min_fret) if min_fret > NUT_POSITION_MAX_FRET => min_fret,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_muted_or_open() {
        assert_eq!(calculate_position(&[Fret::Muted, Fret::Open, Fret::Open, Fret::Muted, Fret::Open, Fret::Open]), 1);
        assert_eq!(calculate_position(&[Fret::Muted; 6]), 1);
    }

    #[test]
    fn test_low_position_starts_at_nut() {
        let frets = [Fret::Muted, Fret::Fretted(3), Fret::Fretted(5), Fret::Fretted(5), Fret::Fretted(5), Fret::Fretted(3)];
        assert_eq!(calculate_position(&frets), 1);
    }

    #[test]
    fn test_boundary_fret() {
        let at_five = [Fret::Fretted(5), Fret::Fretted(7), Fret::Fretted(7), Fret::Fretted(6), Fret::Fretted(5), Fret::Fretted(5)];
        assert_eq!(calculate_position(&at_five), 1);

        let at_six = [Fret::Fretted(6), Fret::Fretted(8), Fret::Fretted(8), Fret::Fretted(7), Fret::Fretted(6), Fret::Fretted(6)];
        assert_eq!(calculate_position(&at_six), 6);
    }
}
