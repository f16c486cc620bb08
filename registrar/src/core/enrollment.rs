//! Credit-cap rule check for course enrollment.

use crate::core::store::RecordStore;
use crate::error::RecordError;

/// Ceiling on a student's projected credit load.
pub const MAX_CREDIT_LOAD: u32 = 15;

/// Every already-enrolled course is assumed to cost exactly this many
/// credits, independent of what it was actually enrolled with.
pub const ASSUMED_CREDITS_PER_COURSE: u32 = 3;

/// Projected credit load if a request for `credits` were granted.
#[must_use]
pub fn projected_load(enrolled_count: usize, credits: u32) -> u32 {
    enrolled_count as u32 * ASSUMED_CREDITS_PER_COURSE + credits
}

/// Enroll a student in a course, enforcing the credit ceiling.
///
/// The check is recomputed from the current enrollment count on every call;
/// there is no persisted "blocked" state. On any failure the student's
/// enrollment list is untouched. Duplicate course codes are permitted and
/// enrollment order is preserved.
///
/// Fails with:
/// - [`RecordError::EmptyCourseCode`] for a blank course code (caller bug,
///   checked before lookup or mutation)
/// - [`RecordError::UnknownStudent`] if the id is not registered
/// - [`RecordError::CreditLimitExceeded`] if the projected load passes
///   [`MAX_CREDIT_LOAD`]
pub fn enroll(
    store: &mut RecordStore,
    student_id: &str,
    course_code: &str,
    credits: u32,
) -> Result<(), RecordError> {
    if course_code.trim().is_empty() {
        return Err(RecordError::EmptyCourseCode);
    }

    let student = store
        .get_mut(student_id)
        .ok_or_else(|| RecordError::UnknownStudent(student_id.to_string()))?;

    let projected = projected_load(student.enrolled_courses.len(), credits);
    if projected > MAX_CREDIT_LOAD {
        return Err(RecordError::CreditLimitExceeded {
            projected,
            limit: MAX_CREDIT_LOAD,
        });
    }

    student.enrolled_courses.push(course_code.to_string());
    Ok(())
}
