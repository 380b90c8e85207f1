use crate::normalize::map_course_code;

/// Whether a reservation row belongs in the eligibility submission.
///
/// Only the courses the insurer checks (`19`, `20`, `21`) are in scope.
pub fn is_in_scope(raw_course_code: &str) -> bool {
    map_course_code(raw_course_code).is_some()
}
