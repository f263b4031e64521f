//! In-memory province table.

use std::collections::BTreeMap;

use sail_model::{Country, ProvinceOrState};
use sail_validate::{LookupError, ProvinceLookup};

/// Province and state rows indexed by code.
///
/// Lookups are exact: `"on"` does not find Ontario.
#[derive(Debug, Clone, Default)]
pub struct ProvinceCatalog {
    provinces: BTreeMap<String, ProvinceOrState>,
}

impl ProvinceCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            provinces: BTreeMap::new(),
        }
    }

    /// Insert a row, returning the row it replaced.
    pub fn insert(&mut self, province: ProvinceOrState) -> Option<ProvinceOrState> {
        self.provinces.insert(province.code.clone(), province)
    }

    /// Get a row by code.
    pub fn get(&self, code: &str) -> Option<&ProvinceOrState> {
        self.provinces.get(code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.provinces.contains_key(code)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.provinces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty()
    }

    /// Iterate rows in code order.
    pub fn iter(&self) -> impl Iterator<Item = &ProvinceOrState> {
        self.provinces.values()
    }

    /// Rows ordered by display name, as offered in selection lists.
    pub fn sorted_by_name(&self) -> Vec<&ProvinceOrState> {
        let mut rows: Vec<&ProvinceOrState> = self.provinces.values().collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.code.cmp(&b.code)));
        rows
    }

    /// Rows belonging to one country, ordered by display name.
    pub fn by_country(&self, country: &Country) -> Vec<&ProvinceOrState> {
        self.sorted_by_name()
            .into_iter()
            .filter(|p| &p.country() == country)
            .collect()
    }
}

impl FromIterator<ProvinceOrState> for ProvinceCatalog {
    fn from_iter<I: IntoIterator<Item = ProvinceOrState>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for province in iter {
            catalog.insert(province);
        }
        catalog
    }
}

impl ProvinceLookup for ProvinceCatalog {
    fn lookup(&self, code: &str) -> Result<Option<ProvinceOrState>, LookupError> {
        Ok(self.get(code).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ProvinceCatalog {
        [
            ProvinceOrState::new("ON", "Ontario", "CA"),
            ProvinceOrState::new("AK", "Alaska", "US"),
            ProvinceOrState::new("AB", "Alberta", "CA"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog = catalog();
        assert_eq!(
            catalog.lookup("ON").unwrap().map(|p| p.name),
            Some("Ontario".to_string())
        );
        assert_eq!(catalog.lookup("on").unwrap(), None);
        assert_eq!(catalog.lookup("QC").unwrap(), None);
    }

    #[test]
    fn test_iter_in_code_order() {
        let catalog = catalog();
        let codes: Vec<&str> = catalog.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["AB", "AK", "ON"]);
    }

    #[test]
    fn test_sorted_by_name() {
        let catalog = catalog();
        let names: Vec<&str> = catalog
            .sorted_by_name()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alaska", "Alberta", "Ontario"]);
    }

    #[test]
    fn test_by_country() {
        let catalog = catalog();
        let codes: Vec<&str> = catalog
            .by_country(&Country::Canada)
            .iter()
            .map(|p| p.code.as_str())
            .collect();
        assert_eq!(codes, vec!["AB", "ON"]);
    }

    #[test]
    fn test_insert_replaces() {
        let mut catalog = catalog();
        let old = catalog.insert(ProvinceOrState::new("ON", "Upper Canada", "CA"));
        assert_eq!(old.map(|p| p.name), Some("Ontario".to_string()));
        assert_eq!(catalog.len(), 3);
    }
}
