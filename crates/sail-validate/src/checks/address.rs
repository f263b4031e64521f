//! Province resolution and postal code formatting.

use sail_model::{Country, MemberRecord, is_blank};
use sail_normalization::{
    format_canadian_postal_code, validate_and_format_us_zip, validate_canadian_postal_code,
};

use crate::failure::ValidationFailure;
use crate::lookup::ProvinceLookup;

/// Resolve the province code and normalize the postal code for its country.
///
/// Performs at most one lookup. When the province cannot be resolved the
/// postal code is left as submitted.
pub fn check<L>(record: &mut MemberRecord, lookup: &L) -> Vec<ValidationFailure>
where
    L: ProvinceLookup + ?Sized,
{
    let mut failures = Vec::new();

    let Some(code) = record
        .province_code
        .as_deref()
        .filter(|code| !code.is_empty())
        .map(str::to_uppercase)
    else {
        if !is_blank(record.postal_code.as_deref()) {
            failures.push(ValidationFailure::ProvinceRequiredForPostalCode);
        }
        return failures;
    };
    record.province_code = Some(code.clone());

    let country = match lookup.lookup(&code) {
        Ok(Some(province)) => Some(province.country()),
        Ok(None) => {
            tracing::debug!(province = %code, "Province code not on file");
            failures.push(ValidationFailure::ProvinceNotOnFile { code });
            None
        }
        Err(error) => {
            tracing::warn!(province = %code, %error, "Province lookup failed");
            failures.push(ValidationFailure::ProvinceLookupFailed {
                message: error.to_string(),
            });
            None
        }
    };

    match country {
        Some(Country::Canada) => {
            if validate_canadian_postal_code(record.postal_code.as_deref()) {
                record.postal_code = format_canadian_postal_code(record.postal_code.as_deref());
            } else {
                failures.push(ValidationFailure::PostalCodeFormat);
            }
        }
        Some(Country::UnitedStates) => {
            let (valid, zip) = validate_and_format_us_zip(record.postal_code.as_deref());
            if valid {
                record.postal_code = Some(zip);
            } else {
                failures.push(ValidationFailure::ZipCodeFormat);
            }
        }
        Some(Country::Other(country_code)) => {
            tracing::debug!(%country_code, "No postal format rules for country");
        }
        None => {}
    }

    failures
}

#[cfg(test)]
mod tests {
    use sail_model::ProvinceOrState;

    use super::*;
    use crate::lookup::{LookupError, lookup_fn};

    fn record(province: Option<&str>, postal: Option<&str>) -> MemberRecord {
        MemberRecord {
            province_code: province.map(String::from),
            postal_code: postal.map(String::from),
            ..MemberRecord::default()
        }
    }

    fn table(code: &str) -> Result<Option<ProvinceOrState>, LookupError> {
        Ok(match code {
            "ON" => Some(ProvinceOrState::new("ON", "Ontario", "CA")),
            "NY" => Some(ProvinceOrState::new("NY", "New York", "US")),
            "XX" => Some(ProvinceOrState::new("XX", "Elsewhere", "MX")),
            _ => None,
        })
    }

    #[test]
    fn test_canadian_postal_code_is_formatted() {
        let mut member = record(Some("on"), Some("k1a0b1"));
        let failures = check(&mut member, &lookup_fn(table));
        assert!(failures.is_empty());
        assert_eq!(member.province_code.as_deref(), Some("ON"));
        assert_eq!(member.postal_code.as_deref(), Some("K1A 0B1"));
    }

    #[test]
    fn test_canadian_postal_code_rejected() {
        let mut member = record(Some("ON"), Some("D1A0B1"));
        let failures = check(&mut member, &lookup_fn(table));
        assert_eq!(failures, vec![ValidationFailure::PostalCodeFormat]);
        assert_eq!(member.postal_code.as_deref(), Some("D1A0B1"));
    }

    #[test]
    fn test_us_zip_is_formatted() {
        let mut member = record(Some("NY"), Some("123456789"));
        let failures = check(&mut member, &lookup_fn(table));
        assert!(failures.is_empty());
        assert_eq!(member.postal_code.as_deref(), Some("12345-6789"));
    }

    #[test]
    fn test_us_zip_rejected_keeps_input() {
        let mut member = record(Some("NY"), Some("1234567"));
        let failures = check(&mut member, &lookup_fn(table));
        assert_eq!(failures, vec![ValidationFailure::ZipCodeFormat]);
        assert_eq!(member.postal_code.as_deref(), Some("1234567"));
    }

    #[test]
    fn test_absent_zip_becomes_empty() {
        let mut member = record(Some("NY"), None);
        assert!(check(&mut member, &lookup_fn(table)).is_empty());
        assert_eq!(member.postal_code.as_deref(), Some(""));
    }

    #[test]
    fn test_other_country_skips_postal_rules() {
        let mut member = record(Some("XX"), Some("anything"));
        assert!(check(&mut member, &lookup_fn(table)).is_empty());
        assert_eq!(member.postal_code.as_deref(), Some("anything"));
    }

    #[test]
    fn test_unknown_province() {
        let mut member = record(Some("zz"), Some("K1A0B1"));
        let failures = check(&mut member, &lookup_fn(table));
        assert_eq!(
            failures,
            vec![ValidationFailure::ProvinceNotOnFile {
                code: "ZZ".to_string()
            }]
        );
        assert_eq!(member.postal_code.as_deref(), Some("K1A0B1"));
    }

    #[test]
    fn test_lookup_error_becomes_failure() {
        let mut member = record(Some("ON"), Some("bad"));
        let failures = check(
            &mut member,
            &lookup_fn(|_| Err(LookupError::new("timeout expired"))),
        );
        assert_eq!(
            failures,
            vec![ValidationFailure::ProvinceLookupFailed {
                message: "timeout expired".to_string()
            }]
        );
    }

    #[test]
    fn test_postal_code_without_province() {
        let mut member = record(Some(""), Some("K1A0B1"));
        let failures = check(&mut member, &lookup_fn(table));
        assert_eq!(failures, vec![ValidationFailure::ProvinceRequiredForPostalCode]);

        let mut empty = record(None, Some(""));
        assert!(check(&mut empty, &lookup_fn(table)).is_empty());
    }
}
