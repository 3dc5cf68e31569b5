//! Yoga classification: 27 divisions of the Sun+Moon longitude sum.
//!
//! Unlike the tithi elongation, the sum of longitudes does not cancel
//! the ayanamsha, so the caller must feed longitudes expressed in the
//! zodiac mode it wants the yoga for.

use crate::angle::{division_index, normalize_360};

/// Span of one yoga: 360/27 = 13.3333... degrees of the sum.
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;

/// The 27 yogas from Vishkumbha to Vaidhriti.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Yoga {
    Vishkumbha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

/// All 27 yogas in order (0 = Vishkumbha, 26 = Vaidhriti).
pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkumbha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    /// Sanskrit name of the yoga.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkumbha => "Vishkumbha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyan => "Variyan",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    /// 0-based index (Vishkumbha=0 .. Vaidhriti=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Lookup by 0-based index.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_YOGAS.get(index as usize).copied()
    }
}

/// Result of yoga classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaInfo {
    /// The yoga.
    pub yoga: Yoga,
    /// 0-based index (0 = Vishkumbha).
    pub yoga_index: u8,
    /// Degrees elapsed within this yoga [0, 13.333...).
    pub degrees_in_yoga: f64,
}

/// Classify the yoga from `sun_lon + moon_lon` (any angle; normalized here).
pub fn yoga_from_sum(sum_deg: f64) -> YogaInfo {
    let sum = normalize_360(sum_deg);
    let yoga_index = division_index(sum, 27);
    YogaInfo {
        yoga: ALL_YOGAS[yoga_index as usize],
        yoga_index,
        degrees_in_yoga: sum - yoga_index as f64 * YOGA_SEGMENT_DEG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_yogas_count_and_order() {
        assert_eq!(ALL_YOGAS.len(), 27);
        for (i, y) in ALL_YOGAS.iter().enumerate() {
            assert_eq!(y.index() as usize, i);
            assert_eq!(Yoga::from_index(i as u8), Some(*y));
        }
        assert_eq!(Yoga::from_index(27), None);
    }

    #[test]
    fn zero_sum_is_vishkumbha() {
        let info = yoga_from_sum(0.0);
        assert_eq!(info.yoga, Yoga::Vishkumbha);
        assert_eq!(info.yoga_index, 0);
    }

    #[test]
    fn sum_345_is_26th_yoga() {
        // 45 + 300 = 345 → floor(345 / 13.333...) = 25 → Indra (26th name)
        let info = yoga_from_sum(45.0 + 300.0);
        assert_eq!(info.yoga_index, 25);
        assert_eq!(info.yoga, Yoga::Indra);
    }

    #[test]
    fn sum_wraps_past_360() {
        // 406 wraps to 46 → floor(46 / 13.333...) = 3 → Saubhagya
        let info = yoga_from_sum(406.0);
        assert_eq!(info.yoga_index, 3);
        assert_eq!(info.yoga, Yoga::Saubhagya);
    }

    #[test]
    fn last_yoga_near_full_circle() {
        let info = yoga_from_sum(359.999);
        assert_eq!(info.yoga, Yoga::Vaidhriti);
        assert_eq!(info.yoga_index, 26);
    }

    #[test]
    fn names_nonempty() {
        for y in ALL_YOGAS {
            assert!(!y.name().is_empty());
        }
    }
}
