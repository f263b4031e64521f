//! Province reference lookup.
//!
//! The validator never reaches for a database on its own. Callers hand it
//! a [`ProvinceLookup`] backed by whatever store holds the province table.

use std::sync::Arc;

use sail_model::ProvinceOrState;
use thiserror::Error;

/// The province store could not answer.
///
/// Distinct from "not found", which is `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct LookupError {
    message: String,
}

impl LookupError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Read-only access to the province/state table.
pub trait ProvinceLookup {
    /// Find a province by its code.
    ///
    /// Matching is case-sensitive; the validator upper-cases codes before
    /// asking.
    fn lookup(&self, code: &str) -> Result<Option<ProvinceOrState>, LookupError>;
}

impl<T: ProvinceLookup + ?Sized> ProvinceLookup for &T {
    fn lookup(&self, code: &str) -> Result<Option<ProvinceOrState>, LookupError> {
        (**self).lookup(code)
    }
}

impl<T: ProvinceLookup + ?Sized> ProvinceLookup for Box<T> {
    fn lookup(&self, code: &str) -> Result<Option<ProvinceOrState>, LookupError> {
        (**self).lookup(code)
    }
}

impl<T: ProvinceLookup + ?Sized> ProvinceLookup for Arc<T> {
    fn lookup(&self, code: &str) -> Result<Option<ProvinceOrState>, LookupError> {
        (**self).lookup(code)
    }
}

/// Adapts a closure into a [`ProvinceLookup`].
#[derive(Debug, Clone)]
pub struct FnLookup<F>(F);

impl<F> ProvinceLookup for FnLookup<F>
where
    F: Fn(&str) -> Result<Option<ProvinceOrState>, LookupError>,
{
    fn lookup(&self, code: &str) -> Result<Option<ProvinceOrState>, LookupError> {
        (self.0)(code)
    }
}

/// Build a lookup from a closure, typically a test fake.
///
/// ```
/// use sail_model::ProvinceOrState;
/// use sail_validate::{ProvinceLookup, lookup_fn};
///
/// let lookup = lookup_fn(|code| {
///     Ok((code == "ON").then(|| ProvinceOrState::new("ON", "Ontario", "CA")))
/// });
///
/// assert!(lookup.lookup("ON").unwrap().is_some());
/// assert!(lookup.lookup("on").unwrap().is_none());
/// ```
pub fn lookup_fn<F>(f: F) -> FnLookup<F>
where
    F: Fn(&str) -> Result<Option<ProvinceOrState>, LookupError>,
{
    FnLookup(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_displays_message() {
        let error = LookupError::new("database offline");
        assert_eq!(error.to_string(), "database offline");
        assert_eq!(error.message(), "database offline");
    }

    #[test]
    fn test_boxed_and_shared_lookups_delegate() {
        let boxed: Box<dyn ProvinceLookup> = Box::new(lookup_fn(|_| Err(LookupError::new("down"))));
        assert_eq!(boxed.lookup("ON"), Err(LookupError::new("down")));

        let shared = Arc::new(lookup_fn(|code| {
            Ok(Some(ProvinceOrState::new(code, "Somewhere", "CA")))
        }));
        let found = shared.lookup("NB").unwrap();
        assert_eq!(found.map(|p| p.code), Some("NB".to_string()));
    }
}
