//! Validation failure types.
//!
//! Each variant carries only the data its message needs. Every failure is
//! scoped to exactly one [`MemberField`].

use sail_model::MemberField;
use serde::{Deserialize, Serialize};

/// A field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationFailure {
    // Presence
    /// Annotated-required field is absent or blank
    Required { field: MemberField },

    // Address
    /// Province code has no row in the reference table
    ProvinceNotOnFile { code: String },
    /// Province lookup could not be performed
    ProvinceLookupFailed { message: String },
    /// Canadian postal code does not match `A1A 1A1`
    PostalCodeFormat,
    /// US zip code does not have 5 or 9 digits
    ZipCodeFormat,
    /// Postal code supplied without a province to interpret it
    ProvinceRequiredForPostalCode,

    // Contact
    /// Home phone does not reduce to ten digits
    PhoneLength { digits: usize },
    /// Email address is malformed
    EmailFormat,

    // Membership
    /// New record without a join year
    YearJoinedMissing,
    /// Join year after the current year
    YearJoinedInFuture { year: i32, current_year: i32 },

    // Communication preference
    /// Email needed because the member accepts electronic communication
    EmailRequired,
    /// Mailing address field needed because the member uses Canada Post
    CanadaPostFieldRequired { field: MemberField },
}

impl ValidationFailure {
    /// Field the failure is attached to.
    pub fn field(&self) -> MemberField {
        match self {
            Self::Required { field } => *field,
            Self::ProvinceNotOnFile { .. } => MemberField::ProvinceCode,
            Self::ProvinceLookupFailed { .. } => MemberField::ProvinceCode,
            Self::PostalCodeFormat => MemberField::PostalCode,
            Self::ZipCodeFormat => MemberField::PostalCode,
            Self::ProvinceRequiredForPostalCode => MemberField::ProvinceCode,
            Self::PhoneLength { .. } => MemberField::HomePhone,
            Self::EmailFormat => MemberField::Email,
            Self::YearJoinedMissing => MemberField::YearJoined,
            Self::YearJoinedInFuture { .. } => MemberField::YearJoined,
            Self::EmailRequired => MemberField::Email,
            Self::CanadaPostFieldRequired { field } => *field,
        }
    }

    /// Stable identifier for machine consumers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Required { .. } => "required",
            Self::ProvinceNotOnFile { .. } => "province_not_on_file",
            Self::ProvinceLookupFailed { .. } => "province_lookup_failed",
            Self::PostalCodeFormat => "postal_code_format",
            Self::ZipCodeFormat => "zip_code_format",
            Self::ProvinceRequiredForPostalCode => "province_required_for_postal_code",
            Self::PhoneLength { .. } => "phone_length",
            Self::EmailFormat => "email_format",
            Self::YearJoinedMissing => "year_joined_missing",
            Self::YearJoinedInFuture { .. } => "year_joined_in_future",
            Self::EmailRequired => "email_required",
            Self::CanadaPostFieldRequired { .. } => "canada_post_field_required",
        }
    }

    /// Message shown next to the field.
    pub fn message(&self) -> String {
        match self {
            Self::Required { field } => format!("The {} field is required.", field.label()),
            Self::ProvinceNotOnFile { .. } => "This province code is not on file".to_string(),
            Self::ProvinceLookupFailed { message } => message.clone(),
            Self::PostalCodeFormat => "The postal code must be in format A1A 1A1".to_string(),
            Self::ZipCodeFormat => "This zip code must contain 5 or 9 digits".to_string(),
            Self::ProvinceRequiredForPostalCode => {
                "The province/state code is required to validate the postal/zip code".to_string()
            }
            Self::PhoneLength { .. } => "The phone number must be 10 digits long".to_string(),
            Self::EmailFormat => "The Email address is in incorrect format".to_string(),
            Self::YearJoinedMissing => "Year Joined cannot be empty for a new record".to_string(),
            Self::YearJoinedInFuture { .. } => {
                "The year the member joined the club cannot be in the future".to_string()
            }
            Self::EmailRequired => "Email address is required unless member has restricted \
                                    communication to Canada Post"
                .to_string(),
            Self::CanadaPostFieldRequired { field } => {
                format!(
                    "Member wants to use Canada Post - {} is required",
                    canada_post_label(*field)
                )
            }
        }
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field(), self.message())
    }
}

fn canada_post_label(field: MemberField) -> &'static str {
    match field {
        MemberField::City => "City/Town",
        other => other.label(),
    }
}
