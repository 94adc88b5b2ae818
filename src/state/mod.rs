//! Application state module

mod app_state;
mod forms;

pub use app_state::{AppState, View};
pub use forms::{
    EnrollmentForm, FieldId, FieldValue, FileInfo, FormField, PAST_WORK_NO, PAST_WORK_YES,
};
