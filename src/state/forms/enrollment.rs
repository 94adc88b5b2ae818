//! The enrollment form model: field set, focus navigation, conditional
//! section, and inline error presentation.

use super::field::{FieldId, FieldValue, FileInfo, FormField};

/// Radio value that reveals the past-work details section
pub const PAST_WORK_YES: &str = "yes";
/// Radio value that hides it
pub const PAST_WORK_NO: &str = "no";

/// Checkbox options for the languages group
pub const LANGUAGE_OPTIONS: [&str; 4] = ["Nepali", "English", "Hindi", "Other"];
/// Checkbox options for the teams group
pub const TEAM_OPTIONS: [&str; 4] = ["Outreach", "Logistics", "Design", "Fundraising"];

/// One enrollment form instance.
///
/// Owns every field, the focus index, and the visibility of the
/// conditional past-work section. Constructed once per form; all lookups
/// go through [`FieldId`] rather than implicit global state.
#[derive(Debug, Clone)]
pub struct EnrollmentForm {
    fields: Vec<FormField>,
    /// Focus position over visible fields; the index one past the last
    /// visible field is the submit button.
    pub active_field_index: usize,
    details_visible: bool,
}

impl EnrollmentForm {
    pub fn new() -> Self {
        let fields = vec![
            FormField::text(FieldId::FullName, "Full Name", true, false),
            FormField::text(FieldId::Email, "Email", true, false),
            FormField::text(FieldId::Phone, "Phone (10 digits)", true, false),
            FormField::text(FieldId::DateOfBirth, "Date of Birth (YYYY-MM-DD)", true, false),
            FormField::text(FieldId::Portfolio, "Portfolio URL (optional)", false, false),
            FormField::file(FieldId::ProfilePicture, "Profile Picture (path, optional)"),
            FormField::checks(FieldId::Languages, "Languages", &LANGUAGE_OPTIONS, true),
            FormField::checks(FieldId::Teams, "Teams", &TEAM_OPTIONS, true),
            FormField::choice(FieldId::PastWork, "Past volunteer work?", true),
            FormField::text(FieldId::PastWorkDetails, "Describe your past work", false, true),
        ];
        Self {
            fields,
            active_field_index: 0,
            // No radio is pre-selected, so the section starts hidden
            details_visible: false,
        }
    }

    /// Whether the past-work details section is currently shown
    pub fn details_visible(&self) -> bool {
        self.details_visible
    }

    /// All fields in declaration order, including hidden ones
    pub fn all_fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Look up a field by identity
    pub fn field(&self, id: FieldId) -> &FormField {
        self.fields
            .iter()
            .find(|f| f.id == id)
            .unwrap_or_else(|| unreachable!("every FieldId is constructed in new()"))
    }

    /// Mutable field lookup
    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        self.fields
            .iter_mut()
            .find(|f| f.id == id)
            .unwrap_or_else(|| unreachable!("every FieldId is constructed in new()"))
    }

    /// Identities of the currently visible fields, in render order
    pub fn visible_ids(&self) -> Vec<FieldId> {
        self.fields
            .iter()
            .filter(|f| f.id != FieldId::PastWorkDetails || self.details_visible)
            .map(|f| f.id)
            .collect()
    }

    /// Number of focus stops: every visible field plus the submit button
    pub fn focus_count(&self) -> usize {
        self.visible_ids().len() + 1
    }

    /// Identity of the focused field, or None when the submit button has
    /// focus
    pub fn active_id(&self) -> Option<FieldId> {
        self.visible_ids().get(self.active_field_index).copied()
    }

    /// True when focus sits on the submit button
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == self.focus_count() - 1
    }

    /// Move focus to the next stop, wrapping past the submit button
    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.focus_count();
    }

    /// Move focus to the previous stop, wrapping
    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.focus_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    // --- Error presenter ---

    /// Attach an error annotation, replacing any existing one
    pub fn set_error(&mut self, id: FieldId, message: impl Into<String>) {
        self.field_mut(id).error = Some(message.into());
    }

    /// Remove the error annotation; no-op when none exists
    pub fn clear_error(&mut self, id: FieldId) {
        self.field_mut(id).error = None;
    }

    /// Clear every field's error state, used at the start of a full-form
    /// validation pass
    pub fn clear_all_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }

    /// True when any field carries an error annotation
    pub fn has_field_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    // --- Group interaction ---

    /// Select a radio option; for the past-work group this also syncs the
    /// conditional details section
    pub fn select_choice(&mut self, id: FieldId, choice: &str) {
        if let FieldValue::Choice(c) = &mut self.field_mut(id).value {
            *c = Some(choice.to_string());
        }
        if id == FieldId::PastWork {
            self.sync_details_section();
        }
    }

    /// Toggle the nth option of a checkbox group
    pub fn toggle_check(&mut self, id: FieldId, option_index: usize) {
        if let FieldValue::Checks(opts) = &mut self.field_mut(id).value {
            if let Some((_, checked)) = opts.get_mut(option_index) {
                *checked = !*checked;
            }
        }
    }

    /// Attach a picked file to the profile picture field
    pub fn attach_file(&mut self, info: FileInfo) {
        self.field_mut(FieldId::ProfilePicture).value = FieldValue::File(Some(info));
    }

    /// Clear the profile picture selection
    pub fn clear_file(&mut self) {
        self.field_mut(FieldId::ProfilePicture).value = FieldValue::File(None);
    }

    /// Keep the details section consistent with the past-work selection:
    /// never required while hidden, always emptied when hidden.
    fn sync_details_section(&mut self) {
        let visible = matches!(
            &self.field(FieldId::PastWork).value,
            FieldValue::Choice(Some(v)) if v == PAST_WORK_YES
        );
        self.details_visible = visible;
        let details = self.field_mut(FieldId::PastWorkDetails);
        details.required = visible;
        if !visible {
            details.clear();
            details.error = None;
        }
        // Hiding a field can shrink the focus range
        let max = self.focus_count() - 1;
        if self.active_field_index > max {
            self.active_field_index = max;
        }
    }
}

impl Default for EnrollmentForm {
    fn default() -> Self {
        Self::new()
    }
}
