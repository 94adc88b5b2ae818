//! Form domain layer
//!
//! Type-safe model of the enrollment form: field identities, values,
//! error annotations, and the conditional section.

mod enrollment;
mod field;

pub use enrollment::{EnrollmentForm, PAST_WORK_NO, PAST_WORK_YES};
pub use field::{FieldId, FieldValue, FileInfo, FormField};
