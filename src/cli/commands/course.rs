//! Course command handler
//!
//! Adds, lists and removes recorded courses. Every mutation is written back to
//! the store before reporting success.

use super::confirm;
use crate::args::CourseSubcommand;
use student_planner::gpa::aggregate;
use student_planner::gradebook::{add_course, remove_course, semester_sections};
use student_planner::models::grade_scale::{label_for, parse_grade};
use student_planner::models::CourseDraft;
use student_planner::store::Store;
use student_planner::{debug, error};

/// Dispatch course subcommands
pub fn run(subcommand: CourseSubcommand, store: &Store) {
    match subcommand {
        CourseSubcommand::Add {
            name,
            credits,
            grade,
            semester,
        } => handle_add(store, name, credits, &grade, semester),
        CourseSubcommand::List => handle_list(store),
        CourseSubcommand::Remove { id, yes } => handle_remove(store, &id, yes),
    }
}

fn handle_add(store: &Store, name: String, credits: u32, grade: &str, semester: String) {
    let grade = match parse_grade(grade) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    let mut courses = store.load_courses();
    let draft = CourseDraft {
        name,
        credits,
        grade,
        semester,
    };

    let added = match add_course(&mut courses, draft) {
        Ok(course) => course.clone(),
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = store.save_courses(&courses) {
        error!("Failed to save courses: {e}");
        eprintln!("✗ Failed to save courses: {e}");
        std::process::exit(1);
    }

    println!(
        "✓ Added {} ({} credits, {}) to {} [id {}]",
        added.name,
        added.credits,
        label_for(added.grade),
        added.semester,
        added.id
    );
}

fn handle_list(store: &Store) {
    let courses = store.load_courses();
    debug!("Listing {} course(s)", courses.len());

    if courses.is_empty() {
        println!("No courses recorded yet. Add one with `studentplanner course add`.");
        return;
    }

    for section in semester_sections(&courses) {
        println!(
            "\n=== {} === GPA {:.2} ({} credits)",
            section.semester, section.result.gpa, section.result.total_credits
        );
        for course in &section.courses {
            println!(
                "  {:<14} {:<32} {:>3} cr  {}",
                course.id,
                course.name,
                course.credits,
                label_for(course.grade)
            );
        }
    }

    let cpa = aggregate(&courses);
    println!(
        "\nCPA {:.2} over {} credits ({})",
        cpa.gpa,
        cpa.total_credits,
        cpa.tier()
    );
}

fn handle_remove(store: &Store, id: &str, yes: bool) {
    let mut courses = store.load_courses();
    let Some(course) = courses.iter().find(|c| c.id == id) else {
        eprintln!("✗ No course with id '{id}'");
        std::process::exit(1);
    };

    if !yes && !confirm(&format!("Delete course '{}'?", course.name)) {
        println!("✗ Delete cancelled");
        return;
    }

    remove_course(&mut courses, id);
    if let Err(e) = store.save_courses(&courses) {
        error!("Failed to save courses: {e}");
        eprintln!("✗ Failed to save courses: {e}");
        std::process::exit(1);
    }
    println!("✓ Removed course {id}");
}
