//! Vikram Samvat era year.

/// Vikram Samvat year for a civil (Gregorian) year.
///
/// Fixed +57 offset. The real era changes year at a lunisolar new-year
/// boundary (Chaitra Pratipada or Kartika, by region), so dates early in
/// the civil year can be off by one; modeling the cutover is out of
/// scope here.
pub fn vikram_samvat_from_civil_year(civil_year: i32) -> i32 {
    civil_year + 57
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_57() {
        assert_eq!(vikram_samvat_from_civil_year(2024), 2081);
        assert_eq!(vikram_samvat_from_civil_year(1947), 2004);
    }

    #[test]
    fn negative_years_follow_same_offset() {
        assert_eq!(vikram_samvat_from_civil_year(-57), 0);
    }
}
