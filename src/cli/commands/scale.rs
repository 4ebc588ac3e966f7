//! Scale command handler

use student_planner::models::GRADE_SCALE;
use student_planner::performance::THRESHOLDS;

/// Print the grade scale and the performance thresholds
pub fn run() {
    println!("\n=== Grade scale ===\n");
    println!("  {:<6} {:>5} {:>9}", "Letter", "4.0", "10-point");
    for entry in &GRADE_SCALE {
        println!(
            "  {:<6} {:>5.1} {:>9.1}",
            entry.letter, entry.value, entry.ten_point
        );
    }

    println!("\n=== Performance ===\n");
    for (bound, tier) in &THRESHOLDS {
        println!("  {bound:.1}+  {tier}");
    }
    println!("  else  Poor");
}
