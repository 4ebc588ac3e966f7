//! Simulate command handler
//!
//! Projects the cumulative GPA with hypothetical courses added. Nothing is
//! written to the store.

use student_planner::gpa::{aggregate, project, HypotheticalCourse};
use student_planner::models::grade_scale::label_for;
use student_planner::store::Store;

/// Run the simulator with `specs` in `[NAME=]CREDITS[:GRADE]` form.
///
/// With no specs, a single default course (3 credits, 4.0) is simulated.
pub fn run(store: &Store, specs: &[String]) {
    let hypotheticals = match parse_specs(specs) {
        Ok(list) => list,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    let courses = store.load_courses();
    let base = aggregate(&courses);
    let projected = project(&base, &hypotheticals);

    println!("\n=== GPA simulator ===\n");
    println!(
        "Current   {:.2} over {} credits ({})",
        base.gpa,
        base.total_credits,
        base.tier()
    );
    println!();
    for course in &hypotheticals {
        println!(
            "  + {:<24} {:>3} cr  {}",
            course.name,
            course.credits,
            label_for(course.grade)
        );
    }
    println!();
    println!(
        "Projected {:.2} over {} credits ({}), {:+.2}",
        projected.gpa,
        projected.total_credits,
        projected.tier(),
        projected.gpa - base.gpa
    );
}

fn parse_specs(specs: &[String]) -> Result<Vec<HypotheticalCourse>, String> {
    if specs.is_empty() {
        return Ok(vec![HypotheticalCourse::default()]);
    }
    specs.iter().map(|spec| spec.parse()).collect()
}
