//! Year-in-words lookup for the execution clause.
//!
//! The indenture reads "in the year two thousand and <words>". Only the
//! years the form was drafted for are tabled; anything else yields an empty
//! string and the clause renders with a gap.

use tracing::warn;

/// First year with a tabled spelling.
pub const FIRST_TABLED_YEAR: i32 = 2024;

/// Last year with a tabled spelling.
pub const LAST_TABLED_YEAR: i32 = 2030;

/// Spelled-out trailing part of `year`, or `""` outside 2024–2030.
pub fn year_in_words(year: i32) -> &'static str {
    match year {
        2024 => "twenty four",
        2025 => "twenty five",
        2026 => "twenty six",
        2027 => "twenty seven",
        2028 => "twenty eight",
        2029 => "twenty nine",
        2030 => "thirty",
        _ => {
            warn!(
                year,
                "No spelling tabled for execution year (covers {}-{}); clause will be blank",
                FIRST_TABLED_YEAR,
                LAST_TABLED_YEAR
            );
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabled_years_map_to_words() {
        assert_eq!(year_in_words(2024), "twenty four");
        assert_eq!(year_in_words(2025), "twenty five");
        assert_eq!(year_in_words(2026), "twenty six");
        assert_eq!(year_in_words(2027), "twenty seven");
        assert_eq!(year_in_words(2028), "twenty eight");
        assert_eq!(year_in_words(2029), "twenty nine");
        assert_eq!(year_in_words(2030), "thirty");
    }

    #[test]
    fn untabled_years_fall_back_to_empty() {
        for year in [1999, 2023, 2031, 2100] {
            assert_eq!(year_in_words(year), "", "year {year}");
        }
    }

    #[test]
    fn every_year_in_range_is_tabled() {
        for year in FIRST_TABLED_YEAR..=LAST_TABLED_YEAR {
            assert!(!year_in_words(year).is_empty(), "year {year}");
        }
    }
}
