//! Dashboard summary

use crate::core::gpa::{aggregate, semester_gpas, GpaResult, SemesterGpa};
use crate::core::models::{AcademicEvent, Course};
use crate::core::performance::PerformanceTier;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Minimum number of semesters before a GPA trend is shown
pub const MIN_TREND_SEMESTERS: usize = 2;

/// Everything the dashboard shows for one day
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard<'a> {
    /// Reference date ("today")
    pub today: NaiveDate,
    /// Cumulative GPA over all courses
    pub cpa: GpaResult,
    /// Tier of the cumulative GPA
    pub tier: PerformanceTier,
    /// Number of recorded courses, zero-credit ones included
    pub course_count: usize,
    /// Number of distinct semester labels
    pub semester_count: usize,
    /// Today's events, untimed ones first
    pub todays_events: Vec<&'a AcademicEvent>,
    /// Per-semester GPA in ascending label order
    pub trend: Vec<SemesterGpa>,
}

impl<'a> Dashboard<'a> {
    /// Build the dashboard for `today`
    #[must_use]
    pub fn build(courses: &[Course], events: &'a [AcademicEvent], today: NaiveDate) -> Self {
        let cpa = aggregate(courses);
        let semester_count = courses
            .iter()
            .map(|c| c.semester.as_str())
            .collect::<HashSet<_>>()
            .len();

        let mut todays_events: Vec<&AcademicEvent> =
            events.iter().filter(|e| e.date == today).collect();
        todays_events.sort_by_key(|e| e.time);

        Self {
            today,
            cpa,
            tier: cpa.tier(),
            course_count: courses.len(),
            semester_count,
            todays_events,
            trend: semester_gpas(courses),
        }
    }

    /// Whether enough semesters exist to draw a trend
    #[must_use]
    pub fn has_trend(&self) -> bool {
        self.trend.len() >= MIN_TREND_SEMESTERS
    }
}
