//! GPA aggregation, projection and per-semester grouping
//!
//! All functions here are pure: they read a snapshot of courses and return a
//! fresh value. Rounding is left to the display layer.

use crate::core::models::grade_scale::parse_grade;
use crate::core::models::Course;
use crate::core::performance::{classify, PerformanceTier};
use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Credit-weighted GPA over a set of courses
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct GpaResult {
    /// Weighted mean grade; `0.0` when no credits were counted
    pub gpa: f64,
    /// Sum of credits, widened so any number of `u32` credits fits
    pub total_credits: u64,
}

impl GpaResult {
    /// Total grade points (`gpa × total_credits`)
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_points(&self) -> f64 {
        self.gpa * self.total_credits as f64
    }

    /// Performance tier of this GPA
    #[must_use]
    pub fn tier(&self) -> PerformanceTier {
        classify(self.gpa)
    }

    #[allow(clippy::cast_precision_loss)]
    fn from_totals(points: f64, credits: u64) -> Self {
        let gpa = if credits > 0 {
            points / credits as f64
        } else {
            0.0
        };
        Self {
            gpa,
            total_credits: credits,
        }
    }
}

/// Aggregate courses into a cumulative GPA.
///
/// Courses with zero credits add nothing to either side of the ratio. An empty
/// input yields `{ gpa: 0.0, total_credits: 0 }`.
#[must_use]
pub fn aggregate<'a, I>(courses: I) -> GpaResult
where
    I: IntoIterator<Item = &'a Course>,
{
    let (points, credits) = courses
        .into_iter()
        .fold((0.0_f64, 0_u64), |(points, credits), course| {
            (
                points + course.points(),
                credits.saturating_add(u64::from(course.credits)),
            )
        });
    GpaResult::from_totals(points, credits)
}

/// A course that has not been taken yet, used by the simulator
#[derive(Debug, Clone, PartialEq)]
pub struct HypotheticalCourse {
    /// Label shown in the simulator
    pub name: String,
    /// Credit weight
    pub credits: u32,
    /// Expected grade on the 4.0 scale
    pub grade: f64,
}

impl Default for HypotheticalCourse {
    fn default() -> Self {
        Self {
            name: "New course".to_string(),
            credits: 3,
            grade: 4.0,
        }
    }
}

impl HypotheticalCourse {
    /// Create a hypothetical course
    #[must_use]
    pub fn new(name: impl Into<String>, credits: u32, grade: f64) -> Self {
        Self {
            name: name.into(),
            credits,
            grade,
        }
    }
}

impl FromStr for HypotheticalCourse {
    type Err = String;

    /// Parse `[NAME=]CREDITS[:GRADE]`, e.g. `4:A`, `Compilers=3:3.3` or `2`.
    ///
    /// A missing name or grade takes the [`Default`] value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut course = Self::default();
        let rest = match s.split_once('=') {
            Some((name, rest)) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(format!("Missing course name in '{s}'"));
                }
                course.name = name.to_string();
                rest
            }
            None => s,
        };

        let (credits, grade) = match rest.split_once(':') {
            Some((credits, grade)) => (credits, Some(grade)),
            None => (rest, None),
        };
        course.credits = credits
            .trim()
            .parse()
            .map_err(|_| format!("Invalid credits '{}' in '{s}'", credits.trim()))?;
        if let Some(grade) = grade {
            course.grade = parse_grade(grade)?;
        }
        Ok(course)
    }
}

/// Project a GPA as if `hypotheticals` were appended to the courses behind `base`.
///
/// Yields the same result as [`aggregate`] over the concatenated course list,
/// up to floating-point rounding of the recovered base points.
#[must_use]
pub fn project(base: &GpaResult, hypotheticals: &[HypotheticalCourse]) -> GpaResult {
    let (points, credits) = hypotheticals.iter().fold(
        (base.total_points(), base.total_credits),
        |(points, credits), course| {
            (
                points + course.grade * f64::from(course.credits),
                credits.saturating_add(u64::from(course.credits)),
            )
        },
    );
    GpaResult::from_totals(points, credits)
}

/// Group courses by exact semester label.
///
/// Groups are keyed in ascending label order; courses keep their input order
/// inside each group.
#[must_use]
pub fn group_by_semester(courses: &[Course]) -> BTreeMap<&str, Vec<&Course>> {
    let mut groups: BTreeMap<&str, Vec<&Course>> = BTreeMap::new();
    for course in courses {
        groups.entry(course.semester.as_str()).or_default().push(course);
    }
    groups
}

/// GPA of one semester
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterGpa {
    /// Semester label
    pub semester: String,
    /// Number of courses in the semester
    pub course_count: usize,
    /// Aggregate over the semester's courses
    pub result: GpaResult,
}

/// Per-semester GPA in ascending semester order
#[must_use]
pub fn semester_gpas(courses: &[Course]) -> Vec<SemesterGpa> {
    group_by_semester(courses)
        .into_iter()
        .map(|(semester, group)| SemesterGpa {
            semester: semester.to_string(),
            course_count: group.len(),
            result: aggregate(group),
        })
        .collect()
}
