//! Tithi (lunar day) classification.
//!
//! A tithi is 12 degrees of Moon-minus-Sun elongation; 30 tithis make a
//! synodic month, split into two pakshas of 15. The same 15 names serve
//! both fortnights; the 15th slot reads Purnima in Shukla paksha and
//! Amavasya in Krishna paksha.

use crate::angle::{division_index, normalize_360};

/// Span of one tithi: 360/30 = 12 degrees of elongation.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Lunar fortnight: waxing (Shukla) or waning (Krishna).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    Shukla,
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 15 tithi names shared by both pakshas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tithi {
    Pratipada,
    Dwitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dwadashi,
    Trayodashi,
    Chaturdashi,
    PurnimaAmavasya,
}

/// All 15 tithi names in order (0 = Pratipada).
pub const ALL_TITHIS: [Tithi; 15] = [
    Tithi::Pratipada,
    Tithi::Dwitiya,
    Tithi::Tritiya,
    Tithi::Chaturthi,
    Tithi::Panchami,
    Tithi::Shashthi,
    Tithi::Saptami,
    Tithi::Ashtami,
    Tithi::Navami,
    Tithi::Dashami,
    Tithi::Ekadashi,
    Tithi::Dwadashi,
    Tithi::Trayodashi,
    Tithi::Chaturdashi,
    Tithi::PurnimaAmavasya,
];

impl Tithi {
    /// Table name; the 15th slot keeps the fused form used by the tables.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pratipada => "Pratipada",
            Self::Dwitiya => "Dwitiya",
            Self::Tritiya => "Tritiya",
            Self::Chaturthi => "Chaturthi",
            Self::Panchami => "Panchami",
            Self::Shashthi => "Shashthi",
            Self::Saptami => "Saptami",
            Self::Ashtami => "Ashtami",
            Self::Navami => "Navami",
            Self::Dashami => "Dashami",
            Self::Ekadashi => "Ekadashi",
            Self::Dwadashi => "Dwadashi",
            Self::Trayodashi => "Trayodashi",
            Self::Chaturdashi => "Chaturdashi",
            Self::PurnimaAmavasya => "Purnima/Amavasya",
        }
    }

    /// Name with the 15th slot resolved by paksha: Purnima ends the
    /// waxing fortnight, Amavasya the waning one.
    pub const fn display_name(self, paksha: Paksha) -> &'static str {
        match (self, paksha) {
            (Self::PurnimaAmavasya, Paksha::Shukla) => "Purnima",
            (Self::PurnimaAmavasya, Paksha::Krishna) => "Amavasya",
            _ => self.name(),
        }
    }

    /// 0-based index within the paksha (Pratipada=0 .. PurnimaAmavasya=14).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Lookup by 0-based paksha index.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_TITHIS.get(index as usize).copied()
    }
}

/// Result of tithi classification from an elongation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiInfo {
    /// Tithi name (shared 15-entry table).
    pub tithi: Tithi,
    /// 0-based index within the synodic month (0..29).
    pub tithi_index: u8,
    /// The fortnight this tithi belongs to.
    pub paksha: Paksha,
    /// 1-based number within the paksha (1..15).
    pub tithi_number: u8,
    /// Degrees elapsed within this tithi [0, 12).
    pub degrees_in_tithi: f64,
}

/// Classify the tithi from Moon-minus-Sun elongation in degrees.
///
/// Index 0-14 is Shukla paksha, 15-29 Krishna. The input may be any
/// angle; it is normalized first.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiInfo {
    let elong = normalize_360(elongation_deg);
    let tithi_index = division_index(elong, 30);
    let paksha = if tithi_index < 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    TithiInfo {
        tithi: ALL_TITHIS[(tithi_index % 15) as usize],
        tithi_index,
        paksha,
        tithi_number: tithi_index % 15 + 1,
        degrees_in_tithi: elong - tithi_index as f64 * TITHI_SEGMENT_DEG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_tithis_count_and_order() {
        assert_eq!(ALL_TITHIS.len(), 15);
        for (i, t) in ALL_TITHIS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
            assert_eq!(Tithi::from_index(i as u8), Some(*t));
        }
        assert_eq!(Tithi::from_index(15), None);
    }

    #[test]
    fn zero_elongation_is_shukla_pratipada() {
        let info = tithi_from_elongation(0.0);
        assert_eq!(info.tithi, Tithi::Pratipada);
        assert_eq!(info.tithi_index, 0);
        assert_eq!(info.paksha, Paksha::Shukla);
        assert_eq!(info.tithi_number, 1);
    }

    #[test]
    fn twelve_degrees_is_dwitiya() {
        let info = tithi_from_elongation(12.0);
        assert_eq!(info.tithi, Tithi::Dwitiya);
        assert_eq!(info.tithi_index, 1);
        assert_eq!(info.tithi_number, 2);
    }

    #[test]
    fn paksha_split_at_180() {
        let shukla = tithi_from_elongation(179.999);
        assert_eq!(shukla.paksha, Paksha::Shukla);
        assert_eq!(shukla.tithi_index, 14);
        assert_eq!(shukla.tithi, Tithi::PurnimaAmavasya);

        let krishna = tithi_from_elongation(180.0);
        assert_eq!(krishna.paksha, Paksha::Krishna);
        assert_eq!(krishna.tithi_index, 15);
        assert_eq!(krishna.tithi, Tithi::Pratipada);
        assert_eq!(krishna.tithi_number, 1);
    }

    #[test]
    fn last_tithi_before_new_moon() {
        let info = tithi_from_elongation(359.999);
        assert_eq!(info.tithi_index, 29);
        assert_eq!(info.paksha, Paksha::Krishna);
        assert_eq!(info.tithi, Tithi::PurnimaAmavasya);
    }

    #[test]
    fn full_circle_wraps_to_zero() {
        let info = tithi_from_elongation(360.0);
        assert_eq!(info.tithi_index, 0);
    }

    #[test]
    fn display_name_by_paksha() {
        assert_eq!(
            Tithi::PurnimaAmavasya.display_name(Paksha::Shukla),
            "Purnima"
        );
        assert_eq!(
            Tithi::PurnimaAmavasya.display_name(Paksha::Krishna),
            "Amavasya"
        );
        assert_eq!(Tithi::Ashtami.display_name(Paksha::Krishna), "Ashtami");
    }

    #[test]
    fn degrees_in_tithi() {
        let info = tithi_from_elongation(17.5);
        assert_eq!(info.tithi_index, 1);
        assert!((info.degrees_in_tithi - 5.5).abs() < 1e-12);
    }

    #[test]
    fn tiny_negative_elongation_keeps_degrees_in_range() {
        // An elongation 1 ulp below zero must not normalize to 360.0
        let info = tithi_from_elongation(-1e-14);
        assert_eq!(info.tithi_index, 0);
        assert!(
            (0.0..12.0).contains(&info.degrees_in_tithi),
            "degrees_in_tithi = {}",
            info.degrees_in_tithi
        );
    }
}
