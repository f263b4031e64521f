//! Province and state reference data.
//!
//! Loads the province table the member validator resolves codes against.
//! A table of Canadian provinces and territories, US states and the
//! District of Columbia is bundled; deployments can supply their own CSV
//! with `ProvinceCode`, `Name` and `CountryCode` columns.
//!
//! # Example
//!
//! ```
//! use sail_reference::default_catalog;
//! use sail_validate::ProvinceLookup;
//!
//! let catalog = default_catalog().unwrap();
//! let ontario = catalog.lookup("ON").unwrap().unwrap();
//! assert_eq!(ontario.country_code, "CA");
//! ```

mod catalog;
mod error;
mod loader;

pub use catalog::ProvinceCatalog;
pub use error::{ReferenceError, Result};
pub use loader::{default_catalog, load_or_default, load_provinces, parse_provinces};
