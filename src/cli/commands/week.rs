//! Week command handler

use chrono::NaiveDate;
use student_planner::schedule::{shift_week, week_view, DaySchedule};
use student_planner::store::Store;

/// Print the Monday-to-Sunday week containing `date`, moved by `offset` weeks
pub fn run(store: &Store, date: NaiveDate, offset: i64) {
    let events = store.load_events();
    let Some(week) = shift_week(date, offset).and_then(|anchor| week_view(&events, anchor)) else {
        eprintln!("✗ Week {offset:+} from {date} is outside the supported date range");
        std::process::exit(1);
    };
    print_week(&week);
}

fn print_week(week: &[DaySchedule]) {
    if let (Some(first), Some(last)) = (week.first(), week.last()) {
        println!(
            "\n=== Week of {} to {} ===",
            first.date.format("%b %d"),
            last.date.format("%b %d, %Y")
        );
    }

    for day in week {
        println!("\n{}", day.date.format("%a %d"));
        if day.events.is_empty() {
            println!("  -");
        }
        for event in &day.events {
            println!(
                "  {:>5}  {:<11} {}",
                event.time_label().unwrap_or_default(),
                event.kind.display_name(),
                event.title
            );
        }
    }
}
