use std::collections::BTreeMap;

use chrono::NaiveDate;
use email_address::EmailAddress;
use url::Url;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

const INVALID_DATE: &str = "Please enter a valid date";

/// Field-level validation messages, keyed by the form field name.
///
/// A later message for the same field replaces the earlier one, so the most
/// specific check should run last.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &str, message: &str) {
        self.0.insert(field.to_string(), message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }

    pub(crate) fn require(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.insert(field, message);
        }
    }

    /// Parses an optional date input; `required` carries the message used
    /// when the input is blank.
    pub(crate) fn date(
        &mut self,
        field: &str,
        raw: &str,
        required: Option<&str>,
    ) -> Option<NaiveDate> {
        let raw = raw.trim();
        if raw.is_empty() {
            if let Some(message) = required {
                self.insert(field, message);
            }
            return None;
        }

        match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                self.insert(field, INVALID_DATE);
                None
            }
        }
    }

    pub(crate) fn not_before(
        &mut self,
        field: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        message: &str,
    ) {
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                self.insert(field, message);
            }
        }
    }

    /// Blank is accepted; anything else must parse as an absolute URL.
    pub(crate) fn optional_url(&mut self, field: &str, raw: &str, message: &str) {
        let raw = raw.trim();
        if !raw.is_empty() && !is_valid_url(raw) {
            self.insert(field, message);
        }
    }

    pub(crate) fn optional_email(&mut self, field: &str, raw: &str, message: &str) {
        let raw = raw.trim();
        if !raw.is_empty() && !EmailAddress::is_valid(raw) {
            self.insert(field, message);
        }
    }
}

pub fn is_valid_url(raw: &str) -> bool {
    Url::parse(raw).is_ok()
}

/// Trimmed text, or `None` when the input was blank.
pub(crate) fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub(crate) fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}
