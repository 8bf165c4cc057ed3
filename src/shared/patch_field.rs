use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit partial-update semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep current value
// - Null: explicitly null => clear the field (only for optional fields)
// - Value(v): replace with v
//
// Serde behavior:
// - omitted field => Unset (because of #[serde(default)])
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Applies the patch to a required field. `Null` cannot clear a required
    /// value, so it behaves like `Unset`.
    pub fn apply_to(self, target: &mut T) {
        if let PatchField::Value(v) = self {
            *target = v;
        }
    }

    pub fn apply_to_optional(self, target: &mut Option<T>) {
        match self {
            PatchField::Unset => {}
            PatchField::Null => *target = None,
            PatchField::Value(v) => *target = Some(v),
        }
    }
}

impl<T> From<Option<T>> for PatchField<T> {
    /// `Some` sets the field, `None` clears it.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => PatchField::Value(v),
            None => PatchField::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default)]
        title: PatchField<String>,
        #[serde(default)]
        url: PatchField<String>,
    }

    #[test]
    fn omitted_null_and_value_deserialize_distinctly() {
        let body: Body = serde_json::from_str(r#"{ "url": null }"#).unwrap();
        assert!(body.title.is_unset());
        assert_eq!(body.url, PatchField::Null);

        let body: Body = serde_json::from_str(r#"{ "title": "New" }"#).unwrap();
        assert_eq!(body.title.as_value().map(String::as_str), Some("New"));
    }

    #[test]
    fn null_does_not_clear_required_field() {
        let mut title = "Kept".to_string();
        PatchField::Null.apply_to(&mut title);
        assert_eq!(title, "Kept");

        PatchField::Value("Replaced".to_string()).apply_to(&mut title);
        assert_eq!(title, "Replaced");
    }

    #[test]
    fn optional_field_can_be_cleared_or_kept() {
        let mut url = Some("https://example.com".to_string());
        PatchField::Unset.apply_to_optional(&mut url);
        assert!(url.is_some());

        PatchField::Null.apply_to_optional(&mut url);
        assert!(url.is_none());
    }
}
