//! Integration tests for GPA aggregation, projection and classification

use student_planner::gpa::{aggregate, group_by_semester, project, semester_gpas, GpaResult, HypotheticalCourse};
use student_planner::models::Course;
use student_planner::performance::{classify, PerformanceTier};

const TOLERANCE: f64 = 1e-9;

fn course(id: &str, credits: u32, grade: f64, semester: &str) -> Course {
    Course::new(id, format!("Course {id}"), credits, grade, semester)
}

fn sample() -> Vec<Course> {
    vec![
        course("1", 3, 4.0, "2023-1"),
        course("2", 4, 3.0, "2023-1"),
        course("3", 2, 2.5, "2023-2"),
        course("4", 1, 1.0, "2024-1"),
        course("5", 3, 3.5, "2024-1"),
    ]
}

#[test]
fn empty_input_is_zero() {
    assert_eq!(aggregate(&[]), GpaResult::default());
    assert_eq!(classify(aggregate(&[]).gpa), PerformanceTier::Poor);
}

#[test]
fn end_to_end_very_good() {
    let courses = vec![course("a", 3, 4.0, "S1"), course("b", 4, 3.0, "S1")];
    let result = aggregate(&courses);
    assert_eq!(result.total_credits, 7);
    assert!((result.gpa - 24.0 / 7.0).abs() < TOLERANCE);
    assert_eq!(result.tier(), PerformanceTier::VeryGood);
}

#[test]
fn zero_credit_courses_do_not_change_result() {
    let base = sample();
    let mut padded = base.clone();
    padded.push(course("z1", 0, 0.0, "2024-1"));
    padded.insert(0, course("z2", 0, 4.0, "2099-9"));
    assert_eq!(aggregate(&base), aggregate(&padded));
}

#[test]
fn order_does_not_matter() {
    let courses = sample();
    let mut reversed = courses.clone();
    reversed.reverse();
    let a = aggregate(&courses);
    let b = aggregate(&reversed);
    assert_eq!(a.total_credits, b.total_credits);
    assert!((a.gpa - b.gpa).abs() < TOLERANCE);
}

#[test]
fn gpa_stays_within_grade_bounds() {
    let courses = sample();
    let result = aggregate(&courses);
    assert!(result.gpa >= 1.0 && result.gpa <= 4.0);
}

#[test]
fn projection_matches_aggregate_of_union() {
    let courses = sample();
    let extra = vec![
        HypotheticalCourse::new("Compilers", 4, 3.5),
        HypotheticalCourse::new("Seminar", 0, 0.0),
        HypotheticalCourse::default(),
    ];

    let projected = project(&aggregate(&courses), &extra);

    let mut union = courses;
    union.extend(
        extra
            .iter()
            .enumerate()
            .map(|(i, h)| course(&format!("h{i}"), h.credits, h.grade, "future")),
    );
    let direct = aggregate(&union);

    assert_eq!(projected.total_credits, direct.total_credits);
    assert!((projected.gpa - direct.gpa).abs() < TOLERANCE);
}

#[test]
fn projection_without_courses_is_identity() {
    let base = aggregate(&sample());
    assert_eq!(project(&base, &[]), base);
    assert_eq!(project(&GpaResult::default(), &[]), GpaResult::default());
}

#[test]
fn projection_from_empty_base() {
    let projected = project(&GpaResult::default(), &[HypotheticalCourse::default()]);
    assert_eq!(projected.total_credits, 3);
    assert!((projected.gpa - 4.0).abs() < TOLERANCE);
}

#[test]
fn better_grade_never_lowers_projection() {
    let base = aggregate(&sample());
    let low = project(&base, &[HypotheticalCourse::new("x", 3, 2.0)]);
    let high = project(&base, &[HypotheticalCourse::new("x", 3, 3.0)]);
    assert!(high.gpa >= low.gpa);
}

#[test]
fn tier_boundaries_are_inclusive() {
    let cases = [
        (3.6, PerformanceTier::Excellent),
        (3.59, PerformanceTier::VeryGood),
        (3.2, PerformanceTier::VeryGood),
        (3.19, PerformanceTier::Good),
        (2.5, PerformanceTier::Good),
        (2.49, PerformanceTier::Average),
        (2.0, PerformanceTier::Average),
        (1.99, PerformanceTier::Weak),
        (1.0, PerformanceTier::Weak),
        (0.99, PerformanceTier::Poor),
        (0.0, PerformanceTier::Poor),
    ];
    for (gpa, tier) in cases {
        assert_eq!(classify(gpa), tier, "gpa {gpa}");
    }
}

#[test]
fn semesters_are_independent() {
    let courses = sample();
    let gpas = semester_gpas(&courses);
    let labels: Vec<&str> = gpas.iter().map(|g| g.semester.as_str()).collect();
    assert_eq!(labels, vec!["2023-1", "2023-2", "2024-1"]);

    let mut changed = courses.clone();
    changed[4].grade = 0.0;
    let after = semester_gpas(&changed);
    assert_eq!(gpas[0], after[0]);
    assert_eq!(gpas[1], after[1]);
    assert_ne!(gpas[2], after[2]);
}

#[test]
fn semester_labels_group_exactly() {
    let courses = vec![course("1", 3, 4.0, "2024-1"), course("2", 3, 2.0, "2024-1 ")];
    assert_eq!(group_by_semester(&courses).len(), 2);
}

#[test]
fn out_of_range_gpa_is_classified_permissively() {
    assert_eq!(classify(-1.0), PerformanceTier::Poor);
    assert_eq!(classify(4.5), PerformanceTier::Excellent);
    assert_eq!(classify(3.5999), PerformanceTier::VeryGood);
}

#[test]
fn classifier_is_monotonic() {
    let mut previous = classify(-0.5);
    for step in 0..=90 {
        let tier = classify(f64::from(step) * 0.05 - 0.25);
        assert!(tier >= previous);
        previous = tier;
    }
}
