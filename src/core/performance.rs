//! Performance classification of a GPA

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative performance tier, ordered from worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PerformanceTier {
    /// Below 1.0
    Poor,
    /// 1.0 and above
    Weak,
    /// 2.0 and above
    Average,
    /// 2.5 and above
    Good,
    /// 3.2 and above
    VeryGood,
    /// 3.6 and above
    Excellent,
}

impl PerformanceTier {
    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Weak => "Weak",
            Self::Average => "Average",
            Self::Good => "Good",
            Self::VeryGood => "Very Good",
            Self::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lower bounds, scanned highest first; anything below the last bound is `Poor`
pub const THRESHOLDS: [(f64, PerformanceTier); 5] = [
    (3.6, PerformanceTier::Excellent),
    (3.2, PerformanceTier::VeryGood),
    (2.5, PerformanceTier::Good),
    (2.0, PerformanceTier::Average),
    (1.0, PerformanceTier::Weak),
];

/// Classify a GPA into a performance tier.
///
/// Total over `f64`: values above 4 are `Excellent`, negative values and NaN are `Poor`.
#[must_use]
pub fn classify(gpa: f64) -> PerformanceTier {
    THRESHOLDS
        .iter()
        .find(|(threshold, _)| gpa >= *threshold)
        .map_or(PerformanceTier::Poor, |(_, tier)| *tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(3.6), PerformanceTier::Excellent);
        assert_eq!(classify(3.5999), PerformanceTier::VeryGood);
        assert_eq!(classify(3.2), PerformanceTier::VeryGood);
        assert_eq!(classify(2.5), PerformanceTier::Good);
        assert_eq!(classify(2.0), PerformanceTier::Average);
        assert_eq!(classify(1.0), PerformanceTier::Weak);
        assert_eq!(classify(0.999), PerformanceTier::Poor);
        assert_eq!(classify(0.0), PerformanceTier::Poor);
    }

    #[test]
    fn test_out_of_range_degrades_to_edges() {
        assert_eq!(classify(-1.0), PerformanceTier::Poor);
        assert_eq!(classify(4.5), PerformanceTier::Excellent);
        assert_eq!(classify(f64::INFINITY), PerformanceTier::Excellent);
        assert_eq!(classify(f64::NAN), PerformanceTier::Poor);
    }

    #[test]
    fn test_thresholds_strictly_decreasing() {
        for pair in THRESHOLDS.windows(2) {
            assert!(pair[0].0 > pair[1].0);
            assert!(pair[0].1 > pair[1].1);
        }
    }

    #[test]
    fn test_monotonic_over_grid() {
        let mut previous = classify(-0.5);
        for step in 0..=500 {
            let gpa = -0.5 + f64::from(step) * 0.01;
            let tier = classify(gpa);
            assert!(tier >= previous, "tier dropped at {gpa}");
            previous = tier;
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(PerformanceTier::VeryGood.to_string(), "Very Good");
        assert_eq!(PerformanceTier::Poor.label(), "Poor");
    }
}
