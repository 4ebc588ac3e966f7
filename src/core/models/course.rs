//! Course model

use serde::{Deserialize, Serialize};

/// A completed course with its grade, as recorded in the grade book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Caller-generated identifier (timestamp-derived)
    pub id: String,

    /// Course name (e.g., "Linear Algebra")
    pub name: String,

    /// Credit weight
    pub credits: u32,

    /// Grade on the 4.0 scale
    pub grade: f64,

    /// Free-text semester label (e.g., "2024-1")
    pub semester: String,
}

impl Course {
    /// Create a new course
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        credits: u32,
        grade: f64,
        semester: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            credits,
            grade,
            semester: semester.into(),
        }
    }

    /// Grade points contributed by this course (`grade × credits`)
    #[must_use]
    pub fn points(&self) -> f64 {
        self.grade * f64::from(self.credits)
    }
}

/// Form input for a course that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct CourseDraft {
    /// Course name
    pub name: String,
    /// Credit weight
    pub credits: u32,
    /// Grade on the 4.0 scale
    pub grade: f64,
    /// Semester label
    pub semester: String,
}

impl Default for CourseDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            credits: 3,
            grade: 4.0,
            semester: String::new(),
        }
    }
}

impl CourseDraft {
    /// Check the draft the way the course form does.
    ///
    /// # Errors
    /// Returns a message when the name or semester is blank, the course carries
    /// no credits, or the grade is outside `[0.0, 4.0]`.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Course name must not be empty".to_string());
        }
        if self.credits == 0 {
            return Err("Credits must be greater than zero".to_string());
        }
        if self.semester.trim().is_empty() {
            return Err("Semester must not be empty".to_string());
        }
        if !(0.0..=4.0).contains(&self.grade) {
            return Err(format!("Grade {} is outside the 0.0-4.0 scale", self.grade));
        }
        Ok(())
    }

    /// Turn the draft into a stored course with the given id.
    ///
    /// Labels are stored as entered; semester grouping matches them exactly.
    #[must_use]
    pub fn into_course(self, id: String) -> Course {
        Course {
            id,
            name: self.name,
            credits: self.credits,
            grade: self.grade,
            semester: self.semester,
        }
    }
}
