//! Individual member checks.
//!
//! Each check normalizes the fields it owns and returns the failures it
//! found. The validator runs them in a fixed order because later checks
//! read values earlier ones normalized.

pub mod address;
pub mod contact;
pub mod email;
pub mod membership;
pub mod names;
pub mod phone;
pub mod presence;
