//! Form field value objects

use serde::{Deserialize, Serialize};

/// Identity of each control in the enrollment form.
/// Mirrors the `name` attributes of the original markup contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FullName,
    Email,
    Phone,
    DateOfBirth,
    Portfolio,
    ProfilePicture,
    Languages,
    Teams,
    PastWork,
    PastWorkDetails,
}

impl FieldId {
    /// Markup-contract name for this field, used in the submission payload
    pub fn name(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::DateOfBirth => "dateOfBirth",
            Self::Portfolio => "portfolio",
            Self::ProfilePicture => "profilePicture",
            Self::Languages => "languages[]",
            Self::Teams => "teams[]",
            Self::PastWork => "pastWork",
            Self::PastWorkDetails => "pastWorkDetails",
        }
    }
}

/// Metadata for a picked upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub file_name: String,
    pub size: u64,
    /// Declared content type, e.g. "image/png"
    pub content_type: String,
}

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    /// Radio group: the selected option value, if any
    Choice(Option<String>),
    /// Checkbox group: (option value, checked) pairs
    Checks(Vec<(String, bool)>),
    File(Option<FileInfo>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// A single form control with its configuration, value, and error state
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub label: String,
    pub value: FieldValue,
    pub required: bool,
    /// Inline error annotation, rendered under the field when present
    pub error: Option<String>,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text-like field
    pub fn text(id: FieldId, label: &str, required: bool, is_multiline: bool) -> Self {
        Self {
            id,
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            required,
            error: None,
            is_multiline,
        }
    }

    /// Create a new radio group field
    pub fn choice(id: FieldId, label: &str, required: bool) -> Self {
        Self {
            id,
            label: label.to_string(),
            value: FieldValue::Choice(None),
            required,
            error: None,
            is_multiline: false,
        }
    }

    /// Create a new checkbox group field with the given option values
    pub fn checks(id: FieldId, label: &str, options: &[&str], required: bool) -> Self {
        Self {
            id,
            label: label.to_string(),
            value: FieldValue::Checks(options.iter().map(|o| (o.to_string(), false)).collect()),
            required,
            error: None,
            is_multiline: false,
        }
    }

    /// Create a new file field
    pub fn file(id: FieldId, label: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            value: FieldValue::File(None),
            required: false,
            error: None,
            is_multiline: false,
        }
    }

    /// Get the text value (empty for non-text fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// True when the field carries no value at all: empty trimmed text,
    /// no selected choice, no checked box, no picked file.
    pub fn is_empty(&self) -> bool {
        match &self.value {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Choice(c) => c.is_none(),
            FieldValue::Checks(opts) => !opts.iter().any(|(_, checked)| *checked),
            FieldValue::File(f) => f.is_none(),
        }
    }

    /// Push a character to a text value; ignored for other kinds
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from a text value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Clear the field value, leaving configuration intact
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice(c) => *c = None,
            FieldValue::Checks(opts) => {
                for (_, checked) in opts.iter_mut() {
                    *checked = false;
                }
            }
            FieldValue::File(f) => *f = None,
        }
    }

    /// Checked option values for a checkbox group (empty otherwise)
    pub fn checked_options(&self) -> Vec<String> {
        match &self.value {
            FieldValue::Checks(opts) => opts
                .iter()
                .filter(|(_, checked)| *checked)
                .map(|(value, _)| value.clone())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(c) => c.clone().unwrap_or_default(),
            FieldValue::Checks(opts) => opts
                .iter()
                .map(|(value, checked)| {
                    format!("[{}] {}", if *checked { "x" } else { " " }, value)
                })
                .collect::<Vec<_>>()
                .join("  "),
            FieldValue::File(f) => f
                .as_ref()
                .map(|f| format!("{} ({} bytes)", f.file_name, f.size))
                .unwrap_or_default(),
        }
    }
}
