//! Letter grade scale
//!
//! Maps letter grades to their 4.0-scale value and 10-point equivalent.

/// One row of the grade scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeEntry {
    /// Letter grade (e.g., "B+")
    pub letter: &'static str,
    /// Value on the 4.0 scale
    pub value: f64,
    /// Equivalent on the 10-point scale
    pub ten_point: f64,
}

/// The grade scale, best grade first
pub const GRADE_SCALE: [GradeEntry; 9] = [
    GradeEntry { letter: "A+", value: 4.0, ten_point: 9.5 },
    GradeEntry { letter: "A", value: 4.0, ten_point: 9.0 },
    GradeEntry { letter: "B+", value: 3.5, ten_point: 8.0 },
    GradeEntry { letter: "B", value: 3.0, ten_point: 7.0 },
    GradeEntry { letter: "C+", value: 2.5, ten_point: 6.0 },
    GradeEntry { letter: "C", value: 2.0, ten_point: 5.0 },
    GradeEntry { letter: "D+", value: 1.5, ten_point: 4.0 },
    GradeEntry { letter: "D", value: 1.0, ten_point: 3.0 },
    GradeEntry { letter: "F", value: 0.0, ten_point: 0.0 },
];

/// Look up a letter grade (case-insensitive)
#[must_use]
pub fn by_letter(letter: &str) -> Option<&'static GradeEntry> {
    let letter = letter.trim();
    GRADE_SCALE
        .iter()
        .find(|entry| entry.letter.eq_ignore_ascii_case(letter))
}

/// First scale entry whose value equals `value` exactly.
///
/// `4.0` resolves to `A+`, the first row carrying that value.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn by_value(value: f64) -> Option<&'static GradeEntry> {
    GRADE_SCALE.iter().find(|entry| entry.value == value)
}

/// Display label for a numeric grade, e.g. `B+ (3.5)`; off-scale values show the number only
#[must_use]
pub fn label_for(value: f64) -> String {
    by_value(value).map_or_else(
        || format!("{value:.1}"),
        |entry| format!("{} ({:.1})", entry.letter, entry.value),
    )
}

/// Parse a grade given either as a letter (`B+`) or as a number on `[0.0, 4.0]`.
///
/// # Errors
/// Returns a message for unknown letters, non-numeric text, or numbers off the scale.
pub fn parse_grade(input: &str) -> Result<f64, String> {
    if let Some(entry) = by_letter(input) {
        return Ok(entry.value);
    }
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| format!("Unknown grade '{input}'. Use a letter (A+ .. F) or 0.0-4.0"))?;
    if (0.0..=4.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("Grade {value} is outside the 0.0-4.0 scale"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_is_descending() {
        for pair in GRADE_SCALE.windows(2) {
            assert!(pair[0].value >= pair[1].value);
            assert!(pair[0].ten_point > pair[1].ten_point);
        }
    }

    #[test]
    fn test_by_letter() {
        let entry = by_letter("b+").expect("B+ exists");
        assert!((entry.value - 3.5).abs() < f64::EPSILON);
        assert!((entry.ten_point - 8.0).abs() < f64::EPSILON);
        assert!(by_letter("E").is_none());
    }

    #[test]
    fn test_by_value_prefers_first_row() {
        assert_eq!(by_value(4.0).map(|e| e.letter), Some("A+"));
        assert_eq!(by_value(2.5).map(|e| e.letter), Some("C+"));
        assert!(by_value(3.7).is_none());
    }

    #[test]
    fn test_label_for() {
        assert_eq!(label_for(3.0), "B (3.0)");
        assert_eq!(label_for(3.3), "3.3");
    }

    #[test]
    fn test_parse_grade() {
        assert_eq!(parse_grade("A"), Ok(4.0));
        assert_eq!(parse_grade(" d+ "), Ok(1.5));
        assert_eq!(parse_grade("3.25"), Ok(3.25));
        assert!(parse_grade("4.1").is_err());
        assert!(parse_grade("-1").is_err());
        assert!(parse_grade("excellent").is_err());
    }
}
