//! Member record validation for the sailing club registry.
//!
//! Takes a raw member record as submitted, normalizes its text fields,
//! derives the listing name, resolves the province against reference data
//! and reports every field-level failure in a fixed, deterministic order.
//!
//! # Rule order
//!
//! 1. Trim province code, email and comment
//! 2. Capitalize names, street and city
//! 3. Derive the full name
//! 4. Resolve the province and format the postal/zip code
//! 5. Reformat the home phone
//! 6. Check the email format
//! 7. Require a join year on new records
//! 8. Reject join years in the future
//! 9. Default the task-exempt and Canada Post flags
//! 10. Require email or a full mailing address, per communication preference
//!
//! Failures are returned, never raised. Errors from the province lookup are
//! turned into a failure on the province code and the remaining rules still
//! run.
//!
//! # Example
//!
//! ```
//! use sail_model::{MemberRecord, ProvinceOrState};
//! use sail_validate::{MemberValidator, lookup_fn};
//!
//! let provinces = lookup_fn(|code| {
//!     Ok((code == "ON").then(|| ProvinceOrState::new("ON", "Ontario", "CA")))
//! });
//! let validator = MemberValidator::new(provinces).with_current_year(2024);
//!
//! let mut record = MemberRecord {
//!     first_name: Some("john".into()),
//!     last_name: Some("SMITH".into()),
//!     province_code: Some("on".into()),
//!     postal_code: Some("k1a0b1".into()),
//!     home_phone: Some("(416) 555-1234".into()),
//!     email: Some("john@example.com".into()),
//!     year_joined: Some(2019),
//!     ..MemberRecord::default()
//! };
//!
//! let failures = validator.validate(&mut record);
//!
//! assert!(failures.is_empty());
//! assert_eq!(record.full_name.as_deref(), Some("Smith, John"));
//! assert_eq!(record.postal_code.as_deref(), Some("K1A 0B1"));
//! assert_eq!(record.home_phone.as_deref(), Some("416-555-1234"));
//! ```

pub mod checks;
mod failure;
mod lookup;
mod report;
mod validator;

pub use checks::email::{EMAIL_REGEX, is_valid_email};
pub use checks::names::derive_full_name;
pub use checks::presence::REQUIRED_FIELDS;
pub use failure::ValidationFailure;
pub use lookup::{FnLookup, LookupError, ProvinceLookup, lookup_fn};
pub use report::{FailureEntry, ValidationReport};
pub use validator::{MemberValidator, ValidatorOptions, check_presence, validate_member};
