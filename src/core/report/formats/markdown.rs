//! Markdown report generator
//!
//! Renders the dashboard as plain Markdown tables, readable on GitHub or in
//! any editor preview.

use crate::core::get_version;
use crate::core::models::grade_scale::label_for;
use crate::core::report::{fill_template, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/dashboard.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let dash = &ctx.dashboard;
        let values = [
            ("date", ctx.date_label()),
            ("version", get_version().to_string()),
            ("cpa", ctx.cpa_label()),
            ("tier", dash.tier.label().to_string()),
            ("total_credits", dash.cpa.total_credits.to_string()),
            ("course_count", dash.course_count.to_string()),
            ("semester_count", dash.semester_count.to_string()),
            ("todays_events", Self::generate_todays_events(ctx)),
            ("gpa_trend", Self::generate_trend_table(ctx)),
            ("semester_tables", Self::generate_semester_tables(ctx)),
            ("week_schedule", Self::generate_week_table(ctx)),
        ];
        fill_template(MARKDOWN_TEMPLATE, &values)
    }

    fn generate_todays_events(ctx: &ReportContext) -> String {
        if ctx.dashboard.todays_events.is_empty() {
            return "_No events today._\n".to_string();
        }
        let mut list = String::new();
        for event in &ctx.dashboard.todays_events {
            let time = event.time_label().unwrap_or_else(|| "--:--".to_string());
            let _ = writeln!(
                list,
                "- `{time}` **{}** ({})",
                escape_cell(&event.title),
                event.kind
            );
        }
        list
    }

    fn generate_trend_table(ctx: &ReportContext) -> String {
        if !ctx.dashboard.has_trend() {
            return "_At least two semesters are needed to show a trend._\n".to_string();
        }
        let mut table = String::new();
        table.push_str("| Semester | GPA | Credits |\n");
        table.push_str("|---|---|---|\n");
        for point in &ctx.dashboard.trend {
            let _ = writeln!(
                table,
                "| {} | {:.2} | {} |",
                escape_cell(&point.semester),
                point.result.gpa,
                point.result.total_credits
            );
        }
        table
    }

    fn generate_semester_tables(ctx: &ReportContext) -> String {
        if ctx.sections.is_empty() {
            return "_No courses recorded yet._\n".to_string();
        }
        let mut out = String::new();
        for section in &ctx.sections {
            let _ = writeln!(
                out,
                "### {} (GPA {:.2})\n",
                escape_cell(section.semester),
                section.result.gpa
            );
            out.push_str("| Course | Credits | Grade |\n");
            out.push_str("|---|---|---|\n");
            for course in &section.courses {
                let _ = writeln!(
                    out,
                    "| {} | {} | {} |",
                    escape_cell(&course.name),
                    course.credits,
                    label_for(course.grade)
                );
            }
            out.push('\n');
        }
        out
    }

    fn generate_week_table(ctx: &ReportContext) -> String {
        let mut table = String::new();
        table.push_str("| Day | Events |\n");
        table.push_str("|---|---|\n");
        for day in &ctx.week {
            let events: Vec<String> = day
                .events
                .iter()
                .map(|e| {
                    e.time_label().map_or_else(
                        || format!("{} ({})", escape_cell(&e.title), e.kind),
                        |t| format!("{t} {} ({})", escape_cell(&e.title), e.kind),
                    )
                })
                .collect();
            let cell = if events.is_empty() {
                "-".to_string()
            } else {
                events.join("<br>")
            };
            let _ = writeln!(table, "| {} | {cell} |", day.date.format("%a %Y-%m-%d"));
        }
        table
    }
}

/// Escape text for a Markdown table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{AcademicEvent, Course, EventKind};
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 12).unwrap()
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("Lab | Theory"), "Lab \\| Theory");
        assert_eq!(escape_cell("plain"), "plain");
    }

    #[test]
    fn test_pipes_do_not_split_table_cells() {
        let courses = vec![Course::new("1", "Lab | Theory", 3, 4.0, "2024|1")];
        let ctx = ReportContext::build(&courses, &[], day());
        let md = MarkdownReporter::new().render(&ctx).unwrap();
        assert!(md.contains("| Lab \\| Theory | 3 |"));
        assert!(md.contains("### 2024\\|1"));
    }

    #[test]
    fn test_placeholder_like_titles_render_verbatim() {
        let courses = vec![Course::new("1", "{{week_schedule}}", 3, 4.0, "S1")];
        let events = vec![AcademicEvent {
            id: "e1".to_string(),
            title: "{{gpa_trend}}".to_string(),
            kind: EventKind::Exam,
            date: day(),
            time: None,
        }];
        let ctx = ReportContext::build(&courses, &events, day());
        let md = MarkdownReporter::new().render(&ctx).unwrap();
        assert!(md.contains("**{{gpa_trend}}**"));
        assert!(md.contains("| {{week_schedule}} | 3 |"));
        assert_eq!(md.matches("| Day | Events |").count(), 1);
        assert_eq!(md.matches("At least two semesters").count(), 1);
    }
}
