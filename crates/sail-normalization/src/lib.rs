//! Member record normalization functions.
//!
//! Stateless string transformations used by the member validator:
//!
//! - **Text**: word capitalization and digit extraction
//! - **Postal codes**: Canadian postal code checks/formatting, US zip codes
//! - **Phone numbers**: dash notation for 10-digit numbers
//!
//! `None` input models a value that was never supplied. Each function
//! documents how it treats absence; the asymmetries are intentional and
//! callers rely on them.
//!
//! # Example
//!
//! ```
//! use sail_normalization::{capitalize, extract_digits, format_phone_number};
//!
//! assert_eq!(capitalize(Some("mc DONALD  smith")), "Mc Donald Smith");
//!
//! let digits = extract_digits(Some("(416) 555-1234")).unwrap_or_default();
//! assert_eq!(format_phone_number(&digits).as_deref(), Some("416-555-1234"));
//! ```

mod phone;
mod postal;
mod text;

pub use phone::{PHONE_DIGITS, format_phone_number};
pub use postal::{
    CANADIAN_POSTAL_CODE_REGEX, format_canadian_postal_code, validate_and_format_us_zip,
    validate_canadian_postal_code,
};
pub use text::{capitalize, extract_digits};
