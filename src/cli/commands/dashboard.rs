//! Dashboard command handler

use chrono::NaiveDate;
use student_planner::dashboard::Dashboard;
use student_planner::store::Store;
use student_planner::verbose;

/// Width of a full 4.0 bar in the trend chart
const BAR_WIDTH: f64 = 40.0;

/// Print the dashboard for `today`
pub fn run(store: &Store, today: NaiveDate) {
    let courses = store.load_courses();
    let events = store.load_events();
    let dash = Dashboard::build(&courses, &events, today);

    println!("\n=== Student Planner: {} ===\n", today.format("%A %Y-%m-%d"));
    println!("CPA           {:.2} ({})", dash.cpa.gpa, dash.tier);
    println!("Credits       {}", dash.cpa.total_credits);
    println!(
        "Courses       {} across {} semester(s)",
        dash.course_count, dash.semester_count
    );
    verbose!("Data from     {}", store.data_dir().display());

    println!("\n--- Today's events ({}) ---", dash.todays_events.len());
    if dash.todays_events.is_empty() {
        println!("No events today. Take a rest!");
    }
    for event in &dash.todays_events {
        println!(
            "  {:>5}  {:<11} {}",
            event.time_label().unwrap_or_default(),
            event.kind.display_name(),
            event.title
        );
    }

    println!("\n--- GPA trend ---");
    if !dash.has_trend() {
        println!("At least two semesters are needed to show a trend.");
        return;
    }
    for point in &dash.trend {
        println!(
            "  {:<12} {:.2} {}",
            point.semester,
            point.result.gpa,
            bar(point.result.gpa)
        );
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn bar(gpa: f64) -> String {
    let len = (gpa.clamp(0.0, 4.0) / 4.0 * BAR_WIDTH).round() as usize;
    "#".repeat(len)
}
