//! Member field identifiers.

use serde::{Deserialize, Serialize};

/// A field of [`MemberRecord`](crate::MemberRecord).
///
/// Validation failures are scoped to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MemberField {
    MemberId,
    FullName,
    FirstName,
    LastName,
    SpouseFirstName,
    SpouseLastName,
    Street,
    City,
    ProvinceCode,
    PostalCode,
    HomePhone,
    Email,
    YearJoined,
    Comment,
    TaskExempt,
    UseCanadaPost,
}

impl MemberField {
    /// All fields in record order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::MemberId,
            Self::FullName,
            Self::FirstName,
            Self::LastName,
            Self::SpouseFirstName,
            Self::SpouseLastName,
            Self::Street,
            Self::City,
            Self::ProvinceCode,
            Self::PostalCode,
            Self::HomePhone,
            Self::Email,
            Self::YearJoined,
            Self::Comment,
            Self::TaskExempt,
            Self::UseCanadaPost,
        ]
    }

    /// Serialized field name, as used by the presentation layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MemberId => "memberId",
            Self::FullName => "fullName",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::SpouseFirstName => "spouseFirstName",
            Self::SpouseLastName => "spouseLastName",
            Self::Street => "street",
            Self::City => "city",
            Self::ProvinceCode => "provinceCode",
            Self::PostalCode => "postalCode",
            Self::HomePhone => "homePhone",
            Self::Email => "email",
            Self::YearJoined => "yearJoined",
            Self::Comment => "comment",
            Self::TaskExempt => "taskExempt",
            Self::UseCanadaPost => "useCanadaPost",
        }
    }

    /// Human-readable label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::MemberId => "Member Id",
            Self::FullName => "Full Name",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::SpouseFirstName => "Spouse First Name",
            Self::SpouseLastName => "Spouse Last Name",
            Self::Street => "Street Address",
            Self::City => "City",
            Self::ProvinceCode => "Province Code",
            Self::PostalCode => "Postal Code",
            Self::HomePhone => "Home Phone",
            Self::Email => "Email",
            Self::YearJoined => "Year Joined",
            Self::Comment => "Comments",
            Self::TaskExempt => "Task Exempt?",
            Self::UseCanadaPost => "Use Canada Post?",
        }
    }

    /// Parse a serialized field name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|field| field.name().eq_ignore_ascii_case(s.trim()))
    }
}

impl std::fmt::Display for MemberField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_name() {
        for field in MemberField::all() {
            assert_eq!(MemberField::parse(field.name()), Some(*field));
        }
        assert_eq!(MemberField::parse(" PROVINCECODE "), Some(MemberField::ProvinceCode));
        assert_eq!(MemberField::parse("nickname"), None);
    }

    #[test]
    fn test_serde_uses_field_name() {
        let json = serde_json::to_string(&MemberField::HomePhone).unwrap();
        assert_eq!(json, "\"homePhone\"");
    }
}
