//! Unified validation rule engine.
//!
//! One rule table keyed by field identity, evaluated by both the
//! per-field (blur) pass and the full-form (submit) pass, so the two can
//! never drift apart.

use crate::state::{EnrollmentForm, FieldId, FieldValue};
use crate::validate::validators::{age_on, is_valid_email, is_valid_url};
use chrono::{Local, NaiveDate};

/// Minimum applicant age in whole years
pub const MIN_APPLICANT_AGE: i32 = 16;

const REQUIRED_MESSAGE: &str = "This field is required";

/// Group-rule message for a required checkbox group
fn group_required_message(id: FieldId) -> &'static str {
    match id {
        FieldId::Languages => "Please select at least one language",
        FieldId::Teams => "Please select at least one team",
        _ => REQUIRED_MESSAGE,
    }
}

/// First failing rule for one field, or None when the field passes.
/// Empty non-required fields pass every rule.
fn rule_error(form: &EnrollmentForm, id: FieldId, today: NaiveDate) -> Option<String> {
    let field = form.field(id);

    if field.is_empty() {
        if field.required {
            let message = match field.value {
                FieldValue::Checks(_) => group_required_message(id),
                _ => REQUIRED_MESSAGE,
            };
            return Some(message.to_string());
        }
        return None;
    }

    // Identity-keyed rules, evaluated only when the field is non-empty
    let value = field.as_text().trim();
    match id {
        FieldId::Email if !is_valid_email(value) => {
            Some("Please enter a valid email address".to_string())
        }
        FieldId::Phone if value.chars().filter(|c| c.is_ascii_digit()).count() < 10 => {
            Some("Please enter a valid 10-digit phone number".to_string())
        }
        FieldId::Portfolio if !is_valid_url(value) => {
            Some("Please enter a valid URL".to_string())
        }
        FieldId::DateOfBirth => match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Err(_) => Some("Please enter a valid date (YYYY-MM-DD)".to_string()),
            Ok(birth) if age_on(birth, today) < MIN_APPLICANT_AGE => {
                Some("You must be at least 16 years old to apply".to_string())
            }
            Ok(_) => None,
        },
        _ => None,
    }
}

/// Validate one field against today's date, attaching or clearing its
/// inline error. Returns true when the field passes.
pub fn validate_field(form: &mut EnrollmentForm, id: FieldId) -> bool {
    validate_field_on(form, id, Local::now().date_naive())
}

/// Deterministic variant of [`validate_field`] for a fixed date
pub fn validate_field_on(form: &mut EnrollmentForm, id: FieldId, today: NaiveDate) -> bool {
    form.clear_error(id);
    match rule_error(form, id, today) {
        Some(message) => {
            tracing::debug!(field = id.name(), %message, "field validation failed");
            form.set_error(id, message);
            false
        }
        None => true,
    }
}

/// Validate the whole form: clear all prior errors, then run the rule
/// table over every field. Does not short-circuit; every failing field
/// keeps its error annotation. Returns true iff everything passed.
pub fn validate_form(form: &mut EnrollmentForm) -> bool {
    validate_form_on(form, Local::now().date_naive())
}

/// Deterministic variant of [`validate_form`] for a fixed date
pub fn validate_form_on(form: &mut EnrollmentForm, today: NaiveDate) -> bool {
    form.clear_all_errors();

    let ids: Vec<FieldId> = form.all_fields().iter().map(|f| f.id).collect();
    let mut is_valid = true;
    for id in ids {
        if !validate_field_on(form, id, today) {
            is_valid = false;
        }
    }
    is_valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldId, PAST_WORK_YES};
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    /// A form with every required field filled in acceptably
    fn filled_form() -> EnrollmentForm {
        let mut form = EnrollmentForm::new();
        form.field_mut(FieldId::FullName).set_text("Jane Shrestha".to_string());
        form.field_mut(FieldId::Email).set_text("jane@example.com".to_string());
        form.field_mut(FieldId::Phone).set_text("5551234567".to_string());
        form.field_mut(FieldId::DateOfBirth).set_text("2000-01-01".to_string());
        form.toggle_check(FieldId::Languages, 0);
        form.toggle_check(FieldId::Teams, 1);
        form.select_choice(FieldId::PastWork, "no");
        form
    }

    mod field_pass {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_required_empty_text_fails() {
            let mut form = EnrollmentForm::new();
            assert!(!validate_field_on(&mut form, FieldId::FullName, today()));
            assert_eq!(
                form.field(FieldId::FullName).error.as_deref(),
                Some("This field is required")
            );
        }

        #[test]
        fn test_empty_optional_field_passes_every_rule() {
            let mut form = EnrollmentForm::new();
            assert!(validate_field_on(&mut form, FieldId::Portfolio, today()));
            assert!(form.field(FieldId::Portfolio).error.is_none());
        }

        #[test]
        fn test_bad_email_attaches_format_error() {
            let mut form = EnrollmentForm::new();
            form.field_mut(FieldId::Email).set_text("not-an-email".to_string());
            assert!(!validate_field_on(&mut form, FieldId::Email, today()));
            assert_eq!(
                form.field(FieldId::Email).error.as_deref(),
                Some("Please enter a valid email address")
            );
        }

        #[test]
        fn test_validation_clears_stale_error_first() {
            let mut form = EnrollmentForm::new();
            form.set_error(FieldId::Email, "stale");
            form.field_mut(FieldId::Email).set_text("jane@example.com".to_string());
            assert!(validate_field_on(&mut form, FieldId::Email, today()));
            assert!(form.field(FieldId::Email).error.is_none());
        }

        #[test]
        fn test_short_phone_fails() {
            let mut form = EnrollmentForm::new();
            form.field_mut(FieldId::Phone).set_text("55512".to_string());
            assert!(!validate_field_on(&mut form, FieldId::Phone, today()));
        }

        #[test]
        fn test_bad_url_fails_good_url_passes() {
            let mut form = EnrollmentForm::new();
            form.field_mut(FieldId::Portfolio).set_text("not a url".to_string());
            assert!(!validate_field_on(&mut form, FieldId::Portfolio, today()));

            form.field_mut(FieldId::Portfolio)
                .set_text("https://example.com".to_string());
            assert!(validate_field_on(&mut form, FieldId::Portfolio, today()));
        }

        #[test]
        fn test_under_sixteen_fails_with_age_message() {
            let mut form = EnrollmentForm::new();
            form.field_mut(FieldId::DateOfBirth).set_text("2010-01-01".to_string());
            assert!(!validate_field_on(&mut form, FieldId::DateOfBirth, today()));
            assert_eq!(
                form.field(FieldId::DateOfBirth).error.as_deref(),
                Some("You must be at least 16 years old to apply")
            );
        }

        #[test]
        fn test_sixteenth_birthday_today_passes() {
            let mut form = EnrollmentForm::new();
            form.field_mut(FieldId::DateOfBirth).set_text("2008-06-15".to_string());
            assert!(validate_field_on(&mut form, FieldId::DateOfBirth, today()));
        }

        #[test]
        fn test_unparseable_date_fails() {
            let mut form = EnrollmentForm::new();
            form.field_mut(FieldId::DateOfBirth).set_text("15/06/2008".to_string());
            assert!(!validate_field_on(&mut form, FieldId::DateOfBirth, today()));
        }

        #[test]
        fn test_unselected_required_radio_fails() {
            let mut form = EnrollmentForm::new();
            assert!(!validate_field_on(&mut form, FieldId::PastWork, today()));
            assert_eq!(
                form.field(FieldId::PastWork).error.as_deref(),
                Some("This field is required")
            );
        }
    }

    mod form_pass {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_filled_form_passes() {
            let mut form = filled_form();
            assert!(validate_form_on(&mut form, today()));
            assert!(!form.has_field_errors());
        }

        #[test]
        fn test_no_language_checked_fails_with_group_error() {
            let mut form = filled_form();
            form.field_mut(FieldId::Languages).clear();
            assert!(!validate_form_on(&mut form, today()));
            assert_eq!(
                form.field(FieldId::Languages).error.as_deref(),
                Some("Please select at least one language")
            );
        }

        #[test]
        fn test_no_team_checked_fails_with_group_error() {
            let mut form = filled_form();
            form.field_mut(FieldId::Teams).clear();
            assert!(!validate_form_on(&mut form, today()));
            assert_eq!(
                form.field(FieldId::Teams).error.as_deref(),
                Some("Please select at least one team")
            );
        }

        #[test]
        fn test_collects_all_errors_without_short_circuit() {
            let mut form = EnrollmentForm::new();
            assert!(!validate_form_on(&mut form, today()));
            // Every required field should carry an annotation at once
            for id in [
                FieldId::FullName,
                FieldId::Email,
                FieldId::Phone,
                FieldId::DateOfBirth,
                FieldId::Languages,
                FieldId::Teams,
                FieldId::PastWork,
            ] {
                assert!(form.field(id).error.is_some(), "{id:?} missing error");
            }
        }

        #[test]
        fn test_full_pass_clears_previous_errors() {
            let mut form = filled_form();
            form.set_error(FieldId::FullName, "stale");
            assert!(validate_form_on(&mut form, today()));
            assert!(form.field(FieldId::FullName).error.is_none());
        }

        #[test]
        fn test_hidden_details_never_fails() {
            let mut form = filled_form();
            // Details hidden: not required, empty, must not block submission
            assert!(validate_form_on(&mut form, today()));
        }

        #[test]
        fn test_visible_empty_details_fails() {
            let mut form = filled_form();
            form.select_choice(FieldId::PastWork, PAST_WORK_YES);
            assert!(!validate_form_on(&mut form, today()));
            assert!(form.field(FieldId::PastWorkDetails).error.is_some());
        }
    }
}
