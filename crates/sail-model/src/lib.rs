//! Data model types for the sailing club member registry.
//!
//! This crate holds the plain data carried between the validation engine,
//! the reference tables and the command-line front end:
//!
//! - [`member`]: the submitted member record
//! - [`field`]: field identifiers and their display labels
//! - [`province`]: province/state reference entries and their country
//!
//! # Example
//!
//! ```
//! use sail_model::{MemberField, MemberRecord};
//!
//! let record = MemberRecord {
//!     first_name: Some("john".to_string()),
//!     last_name: Some("smith".to_string()),
//!     ..MemberRecord::default()
//! };
//!
//! assert!(record.is_new());
//! assert_eq!(MemberField::ProvinceCode.label(), "Province Code");
//! ```

pub mod field;
pub mod member;
pub mod province;

pub use field::MemberField;
pub use member::{MemberRecord, is_blank};
pub use province::{Country, ProvinceOrState};
