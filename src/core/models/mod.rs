//! Data models for `StudentPlanner`

pub mod course;
pub mod event;
pub mod grade_scale;

pub use course::{Course, CourseDraft};
pub use event::{AcademicEvent, EventDraft, EventKind};
pub use grade_scale::{GradeEntry, GRADE_SCALE};

use std::sync::atomic::{AtomicI64, Ordering};

/// Last id handed out by [`new_id`] in this process
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generate a timestamp-derived record id.
///
/// Ids are the current Unix time in milliseconds, bumped by one when needed so
/// ids minted by one process are strictly increasing.
#[must_use]
pub fn new_id() -> String {
    let now = chrono::Utc::now().timestamp_millis();
    let mut last = LAST_ID.load(Ordering::SeqCst);
    loop {
        let next = now.max(last + 1);
        match LAST_ID.compare_exchange(last, next, Ordering::SeqCst, Ordering::SeqCst) {
            Ok(_) => return next.to_string(),
            Err(actual) => last = actual,
        }
    }
}
