//! Member record as submitted by the presentation layer.

use serde::{Deserialize, Serialize};

/// A club member record.
///
/// `None` means the value was never supplied; `Some("")` means it was
/// supplied empty. Several normalization steps treat the two differently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberRecord {
    /// Storage key. `0` until the record has been persisted.
    pub member_id: i32,
    /// Derived from the member's and spouse's names.
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub spouse_first_name: Option<String>,
    pub spouse_last_name: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    /// Two-letter province or state code.
    pub province_code: Option<String>,
    /// Canadian postal code or US zip code, depending on the province.
    pub postal_code: Option<String>,
    pub home_phone: Option<String>,
    pub email: Option<String>,
    pub year_joined: Option<i32>,
    pub comment: Option<String>,
    /// Excused from the volunteer duty requirement.
    pub task_exempt: Option<bool>,
    /// Member restricted communication to physical mail.
    pub use_canada_post: Option<bool>,
}

impl MemberRecord {
    /// True when the record has never been persisted.
    pub fn is_new(&self) -> bool {
        self.member_id == 0
    }

    /// Display name for reports, falling back to the raw names before the
    /// full name has been derived.
    pub fn display_name(&self) -> String {
        if let Some(full_name) = self.full_name.as_deref().filter(|s| !s.is_empty()) {
            return full_name.to_string();
        }
        let last = self.last_name.as_deref().unwrap_or("").trim();
        let first = self.first_name.as_deref().unwrap_or("").trim();
        match (last.is_empty(), first.is_empty()) {
            (true, true) => String::new(),
            (false, true) => last.to_string(),
            (true, false) => first.to_string(),
            (false, false) => format!("{last}, {first}"),
        }
    }
}

/// True when an optional text value is absent or empty.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_new() {
        let record = MemberRecord::default();
        assert!(record.is_new());
        assert_eq!(record.task_exempt, None);
        assert_eq!(record.use_canada_post, None);
    }

    #[test]
    fn test_display_name_prefers_full_name() {
        let record = MemberRecord {
            full_name: Some("Smith, John & Jane".to_string()),
            first_name: Some("John".to_string()),
            last_name: Some("Smith".to_string()),
            ..MemberRecord::default()
        };
        assert_eq!(record.display_name(), "Smith, John & Jane");
    }

    #[test]
    fn test_display_name_from_raw_names() {
        let record = MemberRecord {
            first_name: Some(" john ".to_string()),
            last_name: Some("smith".to_string()),
            ..MemberRecord::default()
        };
        assert_eq!(record.display_name(), "smith, john");

        let only_last = MemberRecord {
            last_name: Some("Smith".to_string()),
            ..MemberRecord::default()
        };
        assert_eq!(only_last.display_name(), "Smith");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(!is_blank(Some(" ")));
        assert!(!is_blank(Some("x")));
    }
}
