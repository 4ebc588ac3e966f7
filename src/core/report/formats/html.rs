//! HTML report generator
//!
//! Generates a self-contained HTML page (embedded CSS, no scripts). The GPA
//! trend is drawn as horizontal bars scaled to the 4.0 maximum.

use crate::core::get_version;
use crate::core::models::grade_scale::label_for;
use crate::core::models::AcademicEvent;
use crate::core::report::{fill_template, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/dashboard.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
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
            ("todays_count", dash.todays_events.len().to_string()),
            ("todays_events", Self::generate_todays_events(ctx)),
            ("gpa_trend", Self::generate_trend(ctx)),
            ("semester_tables", Self::generate_semester_tables(ctx)),
            ("week_schedule", Self::generate_week_rows(ctx)),
        ];
        fill_template(HTML_TEMPLATE, &values)
    }

    fn event_html(event: &AcademicEvent) -> String {
        let time = event
            .time_label()
            .map_or_else(String::new, |t| format!("<strong>{t}</strong> "));
        format!(
            "<div class=\"event event-{}\">{time}{} <span class=\"muted\">({})</span></div>",
            event.kind.as_str(),
            escape_html(&event.title),
            event.kind
        )
    }

    fn generate_todays_events(ctx: &ReportContext) -> String {
        if ctx.dashboard.todays_events.is_empty() {
            return "<p class=\"muted\">No events today. Take a rest!</p>".to_string();
        }
        let mut html = String::new();
        for event in &ctx.dashboard.todays_events {
            let _ = writeln!(html, "{}", Self::event_html(event));
        }
        html
    }

    fn generate_trend(ctx: &ReportContext) -> String {
        if !ctx.dashboard.has_trend() {
            return "<p class=\"muted\">At least two semesters are needed to show a trend.</p>"
                .to_string();
        }
        let mut html = String::new();
        html.push_str("<table>\n<thead><tr><th>Semester</th><th>GPA</th><th></th></tr></thead>\n<tbody>\n");
        for point in &ctx.dashboard.trend {
            let width = (point.result.gpa / 4.0 * 100.0).clamp(0.0, 100.0);
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td>{:.2}</td><td><div class=\"bar\" style=\"width: {width:.1}%\"></div></td></tr>",
                escape_html(&point.semester),
                point.result.gpa
            );
        }
        html.push_str("</tbody>\n</table>\n");
        html
    }

    fn generate_semester_tables(ctx: &ReportContext) -> String {
        if ctx.sections.is_empty() {
            return "<p class=\"muted\">No courses recorded yet.</p>".to_string();
        }
        let mut html = String::new();
        for section in &ctx.sections {
            let _ = writeln!(
                html,
                "<h3>{} <span class=\"muted\">GPA {:.2}</span></h3>",
                escape_html(section.semester),
                section.result.gpa
            );
            html.push_str("<table>\n<thead><tr><th>Course</th><th>Credits</th><th>Grade</th></tr></thead>\n<tbody>\n");
            for course in &section.courses {
                let _ = writeln!(
                    html,
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape_html(&course.name),
                    course.credits,
                    label_for(course.grade)
                );
            }
            html.push_str("</tbody>\n</table>\n");
        }
        html
    }

    fn generate_week_rows(ctx: &ReportContext) -> String {
        let mut html = String::new();
        for day in &ctx.week {
            let events: String = day.events.iter().map(|e| Self::event_html(e)).collect();
            let cell = if events.is_empty() {
                "<span class=\"muted\">-</span>".to_string()
            } else {
                events
            };
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td>{cell}</td></tr>",
                day.date.format("%a %Y-%m-%d")
            );
        }
        html
    }
}

/// Escape text for inclusion in HTML element content
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_like_titles_render_verbatim() {
        let day = chrono::NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let events = vec![AcademicEvent {
            id: "e1".to_string(),
            title: "{{semester_tables}}".to_string(),
            kind: crate::core::models::EventKind::Deadline,
            date: day,
            time: None,
        }];
        let ctx = ReportContext::build(&[], &events, day);
        let html = HtmlReporter::new().render(&ctx).unwrap();
        assert!(html.contains("{{semester_tables}} <span class=\"muted\">(Deadline)</span>"));
        assert_eq!(html.matches("No courses recorded yet.").count(), 1);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>R&D</b>"), "&lt;b&gt;R&amp;D&lt;/b&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
