//! Report generation for the student dashboard
//!
//! Exports the dashboard summary, per-semester grade tables, the GPA trend and
//! the current week's schedule as Markdown or self-contained HTML.

pub mod formats;

use crate::core::dashboard::Dashboard;
use crate::core::gradebook::{semester_sections, SemesterSection};
use crate::core::models::{AcademicEvent, Course};
use crate::core::schedule::{week_view, DaySchedule};
use chrono::NaiveDate;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Aggregates everything a report template needs so the renderers stay free of
/// computation.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Dashboard summary for the report date
    pub dashboard: Dashboard<'a>,
    /// Semesters, newest label first
    pub sections: Vec<SemesterSection<'a>>,
    /// Week containing the report date; empty if it leaves the date range
    pub week: Vec<DaySchedule<'a>>,
}

impl<'a> ReportContext<'a> {
    /// Build a report context for `today`
    #[must_use]
    pub fn build(courses: &'a [Course], events: &'a [AcademicEvent], today: NaiveDate) -> Self {
        Self {
            dashboard: Dashboard::build(courses, events, today),
            sections: semester_sections(courses),
            week: week_view(events, today).unwrap_or_default(),
        }
    }

    /// Report date as `YYYY-MM-DD`
    #[must_use]
    pub fn date_label(&self) -> String {
        self.dashboard.today.format("%Y-%m-%d").to_string()
    }

    /// Cumulative GPA formatted to two decimals
    #[must_use]
    pub fn cpa_label(&self) -> String {
        format!("{:.2}", self.dashboard.cpa.gpa)
    }
}

/// Fill `{{name}}` placeholders in a single pass over `template`.
///
/// Substituted values are never rescanned, so user text that looks like a
/// placeholder comes out verbatim. Unknown placeholders are kept as written.
#[must_use]
pub fn fill_template(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 2..];
        let Some(end) = tail.find("}}") else {
            out.push_str(&rest[start..]);
            rest = "";
            break;
        };
        let name = &tail[..end];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &tail[end + 2..];
    }
    out.push_str(rest);
    out
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
