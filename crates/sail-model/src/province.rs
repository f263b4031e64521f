//! Province and state reference entries.

use serde::{Deserialize, Serialize};

/// Country a province or state belongs to.
///
/// Only Canada and the United States have postal-code rules; any other
/// country code is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    Canada,
    UnitedStates,
    Other(String),
}

impl Country {
    /// Map a two-letter country code.
    pub fn from_code(code: &str) -> Self {
        match code {
            "CA" => Self::Canada,
            "US" => Self::UnitedStates,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Canada => "CA",
            Self::UnitedStates => "US",
            Self::Other(code) => code,
        }
    }
}

/// A province or state row from the reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvinceOrState {
    /// Two-letter code, the table's primary key.
    pub code: String,
    /// Display name.
    pub name: String,
    /// `"CA"` or `"US"`.
    pub country_code: String,
}

impl ProvinceOrState {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            country_code: country_code.into(),
        }
    }

    pub fn country(&self) -> Country {
        Country::from_code(&self.country_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_from_code() {
        assert_eq!(Country::from_code("CA"), Country::Canada);
        assert_eq!(Country::from_code("US"), Country::UnitedStates);
        assert_eq!(Country::from_code("MX"), Country::Other("MX".to_string()));
        // Codes are matched exactly
        assert_eq!(Country::from_code("ca"), Country::Other("ca".to_string()));
    }

    #[test]
    fn test_province_country() {
        let ontario = ProvinceOrState::new("ON", "Ontario", "CA");
        assert_eq!(ontario.country(), Country::Canada);
        assert_eq!(ontario.country().code(), "CA");
    }
}
