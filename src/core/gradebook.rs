//! Grade book operations over the course collection

use crate::core::gpa::{aggregate, group_by_semester, GpaResult};
use crate::core::models::{new_id, Course, CourseDraft};
use crate::info;

/// Validate a draft and append it as a new course.
///
/// # Errors
/// Returns the validation message when the draft is rejected; the collection
/// is left untouched.
pub fn add_course(courses: &mut Vec<Course>, draft: CourseDraft) -> Result<&Course, String> {
    add_course_with_id(courses, draft, new_id())
}

/// Same as [`add_course`] with a caller-chosen id.
///
/// # Errors
/// Returns the validation message when the draft is rejected.
pub fn add_course_with_id(
    courses: &mut Vec<Course>,
    draft: CourseDraft,
    id: String,
) -> Result<&Course, String> {
    draft.validate()?;
    let course = draft.into_course(id);
    info!(
        "Added course '{}' ({} credits) to {}",
        course.name, course.credits, course.semester
    );
    courses.push(course);
    Ok(&courses[courses.len() - 1])
}

/// Remove the course with `id`. Returns `true` if something was removed.
pub fn remove_course(courses: &mut Vec<Course>, id: &str) -> bool {
    let before = courses.len();
    courses.retain(|course| course.id != id);
    before != courses.len()
}

/// Courses of one semester with their GPA
#[derive(Debug, Clone, PartialEq)]
pub struct SemesterSection<'a> {
    /// Semester label
    pub semester: &'a str,
    /// Courses in input order
    pub courses: Vec<&'a Course>,
    /// Aggregate over `courses`
    pub result: GpaResult,
}

/// Semesters for the grade manager listing, newest label first
#[must_use]
pub fn semester_sections(courses: &[Course]) -> Vec<SemesterSection<'_>> {
    group_by_semester(courses)
        .into_iter()
        .rev()
        .map(|(semester, group)| SemesterSection {
            semester,
            result: aggregate(group.iter().copied()),
            courses: group,
        })
        .collect()
}
