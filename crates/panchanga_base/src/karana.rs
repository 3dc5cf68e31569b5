//! Karana (half-tithi) classification.
//!
//! A karana is 6 degrees of Moon-minus-Sun elongation, two per tithi,
//! 60 per synodic month. Four karanas are fixed (they occur exactly once
//! per month); the remaining 56 slots cycle through seven movable names.
//!
//! Canonical slot layout:
//! - slot 0 → Kimstughna (fixed, straddles the new moon)
//! - slots 1..=56 → the movable seven, `(slot - 1) % 7`
//! - slots 57, 58, 59 → Shakuni, Chatushpada, Naga (fixed)

use crate::angle::{division_index, normalize_360};

/// Span of one karana: 360/60 = 6 degrees of elongation.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// The 11 karana names: seven movable, four fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// All 11 karana names (movable seven first, then the four fixed).
pub const ALL_KARANAS: [Karana; 11] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
    Karana::Shakuni,
    Karana::Chatushpada,
    Karana::Naga,
    Karana::Kimstughna,
];

/// The seven movable karanas in cycle order.
pub const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    /// Sanskrit name of the karana.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Whether this karana is one of the four fixed (sthira) ones.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }
}

/// Map a karana slot number (0..59) to its name.
///
/// Returns `None` for slots outside the synodic month; callers treat
/// that as an internal invariant violation.
pub fn karana_from_number(karana_number: u8) -> Option<Karana> {
    match karana_number {
        0 => Some(Karana::Kimstughna),
        1..=56 => Some(MOVABLE_KARANAS[(karana_number as usize - 1) % 7]),
        57 => Some(Karana::Shakuni),
        58 => Some(Karana::Chatushpada),
        59 => Some(Karana::Naga),
        _ => None,
    }
}

/// Result of karana classification from an elongation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaInfo {
    /// The karana name.
    pub karana: Karana,
    /// Slot number within the synodic month (0..59), two per tithi.
    pub karana_number: u8,
    /// Degrees elapsed within this karana [0, 6).
    pub degrees_in_karana: f64,
}

/// Classify the karana from Moon-minus-Sun elongation in degrees.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaInfo {
    let elong = normalize_360(elongation_deg);
    let karana_number = division_index(elong, 60);
    // division_index keeps the slot in 0..59, so the lookup cannot miss
    let karana = karana_from_number(karana_number).unwrap_or(Karana::Kimstughna);
    KaranaInfo {
        karana,
        karana_number,
        degrees_in_karana: elong - karana_number as f64 * KARANA_SEGMENT_DEG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_layout_totals_sixty() {
        // 1 leading fixed + 56 movable + 3 trailing fixed
        assert_eq!(karana_from_number(0), Some(Karana::Kimstughna));
        for n in 1..=56u8 {
            let k = karana_from_number(n).unwrap();
            assert!(!k.is_fixed(), "slot {n} must be movable");
            assert_eq!(k, MOVABLE_KARANAS[(n as usize - 1) % 7]);
        }
        assert_eq!(karana_from_number(57), Some(Karana::Shakuni));
        assert_eq!(karana_from_number(58), Some(Karana::Chatushpada));
        assert_eq!(karana_from_number(59), Some(Karana::Naga));
        assert_eq!(karana_from_number(60), None);
    }

    #[test]
    fn movable_cycle_starts_at_bava() {
        assert_eq!(karana_from_number(1), Some(Karana::Bava));
        assert_eq!(karana_from_number(7), Some(Karana::Vishti));
        assert_eq!(karana_from_number(8), Some(Karana::Bava));
        assert_eq!(karana_from_number(56), Some(Karana::Vishti));
    }

    #[test]
    fn zero_elongation_is_kimstughna() {
        let info = karana_from_elongation(0.0);
        assert_eq!(info.karana, Karana::Kimstughna);
        assert_eq!(info.karana_number, 0);
    }

    #[test]
    fn two_karanas_per_tithi() {
        // First half of Dwitiya (elongation 12..18) is slot 2
        let first = karana_from_elongation(13.0);
        assert_eq!(first.karana_number, 2);
        // Second half (18..24) is slot 3
        let second = karana_from_elongation(19.0);
        assert_eq!(second.karana_number, 3);
    }

    #[test]
    fn trailing_fixed_slots() {
        assert_eq!(karana_from_elongation(343.0).karana, Karana::Shakuni);
        assert_eq!(karana_from_elongation(349.0).karana, Karana::Chatushpada);
        assert_eq!(karana_from_elongation(355.0).karana, Karana::Naga);
    }

    #[test]
    fn full_circle_wraps_to_slot_0() {
        let info = karana_from_elongation(360.0);
        assert_eq!(info.karana_number, 0);
        assert_eq!(info.karana, Karana::Kimstughna);
    }

    #[test]
    fn names_nonempty() {
        for k in ALL_KARANAS {
            assert!(!k.name().is_empty());
        }
    }
}
