//! Report command handler
//!
//! Exports the dashboard, grade tables and the current week as Markdown or HTML.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use student_planner::config::Config;
use student_planner::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use student_planner::store::Store;
use student_planner::{error, info};

/// Run the report command.
///
/// # Arguments
/// * `store` - Data store to read courses and events from
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html)
/// * `today` - Reference date for the dashboard and week
/// * `config` - Configuration containing the default reports directory
pub fn run(
    store: &Store,
    output_file: Option<&Path>,
    format_str: &str,
    today: NaiveDate,
    config: &Config,
) {
    match generate_report(store, output_file, format_str, today, config) {
        Ok(path) => println!("✓ Report generated: {}", path.display()),
        Err(err) => {
            error!("Report generation failed: {err}");
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn generate_report(
    store: &Store,
    output_file: Option<&Path>,
    format_str: &str,
    today: NaiveDate,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}"))?;

    let courses = store.load_courses();
    let events = store.load_events();
    let ctx = ReportContext::build(&courses, &events, today);

    let output_path = output_file.map_or_else(
        || default_output_path(Path::new(&config.paths.reports_dir), today, format),
        Path::to_path_buf,
    );

    let result = match format {
        ReportFormat::Markdown => MarkdownReporter::new().generate(&ctx, &output_path),
        ReportFormat::Html => HtmlReporter::new().generate(&ctx, &output_path),
    };
    result.map_err(|e| format!("✗ Failed to write {}: {e}", output_path.display()))?;

    info!(
        "Wrote {format} report with {} course(s) and {} event(s) to {}",
        courses.len(),
        events.len(),
        output_path.display()
    );
    Ok(output_path)
}

/// `<reports_dir>/report-YYYY-MM-DD.<ext>`
fn default_output_path(reports_dir: &Path, today: NaiveDate, format: ReportFormat) -> PathBuf {
    reports_dir.join(format!(
        "report-{}.{}",
        today.format("%Y-%m-%d"),
        format.extension()
    ))
}
