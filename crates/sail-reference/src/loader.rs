//! CSV loader for the province table.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sail_model::ProvinceOrState;

use crate::catalog::ProvinceCatalog;
use crate::error::{ReferenceError, Result};

/// Bundled table of Canadian provinces and territories, US states and DC.
const DEFAULT_PROVINCES_CSV: &str = include_str!("../data/provinces.csv");

const CODE_COLUMN: &str = "ProvinceCode";
const NAME_COLUMN: &str = "Name";
const COUNTRY_COLUMN: &str = "CountryCode";

/// Load the province table from a CSV file.
///
/// The file needs `ProvinceCode`, `Name` and `CountryCode` columns, in any
/// order. Rows with a blank code are skipped.
pub fn load_provinces(path: &Path) -> Result<ProvinceCatalog> {
    let file = File::open(path).map_err(|source| ReferenceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_provinces(file)?;
    tracing::info!(
        path = %path.display(),
        provinces = catalog.len(),
        "Loaded province table"
    );
    Ok(catalog)
}

/// Parse a province table from any CSV source.
pub fn parse_provinces<R: Read>(source: R) -> Result<ProvinceCatalog> {
    let mut reader = csv::Reader::from_reader(source);
    let headers = reader.headers()?.clone();

    let code_idx = find_column(&headers, CODE_COLUMN)?;
    let name_idx = find_column(&headers, NAME_COLUMN)?;
    let country_idx = find_column(&headers, COUNTRY_COLUMN)?;

    let mut catalog = ProvinceCatalog::new();

    for result in reader.records() {
        let record = result?;

        let code = record.get(code_idx).unwrap_or("").trim().to_string();
        if code.is_empty() {
            continue;
        }

        let name = record.get(name_idx).unwrap_or("").trim().to_string();
        let country_code = record.get(country_idx).unwrap_or("").trim().to_string();
        if country_code.is_empty() {
            return Err(ReferenceError::MissingCountry { code });
        }

        if catalog.contains(&code) {
            let line = record.position().map_or(0, csv::Position::line);
            return Err(ReferenceError::DuplicateCode { code, line });
        }

        catalog.insert(ProvinceOrState {
            code,
            name,
            country_code,
        });
    }

    Ok(catalog)
}

/// The bundled province table.
pub fn default_catalog() -> Result<ProvinceCatalog> {
    parse_provinces(DEFAULT_PROVINCES_CSV.as_bytes())
}

/// Load from `path` when given, otherwise fall back to the bundled table.
pub fn load_or_default(path: Option<&Path>) -> Result<ProvinceCatalog> {
    match path {
        Some(path) => load_provinces(path),
        None => {
            let catalog = default_catalog()?;
            tracing::debug!(provinces = catalog.len(), "Using bundled province table");
            Ok(catalog)
        }
    }
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| ReferenceError::MissingColumn(name.to_string()))
}

#[cfg(test)]
mod tests {
    use sail_model::Country;

    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = default_catalog().expect("bundled table parses");
        assert_eq!(catalog.len(), 64);
        assert_eq!(catalog.by_country(&Country::Canada).len(), 13);
        assert_eq!(catalog.by_country(&Country::UnitedStates).len(), 51);
        assert_eq!(catalog.get("QC").map(|p| p.name.as_str()), Some("Quebec"));
    }

    #[test]
    fn test_columns_in_any_order() {
        let csv = "CountryCode,ProvinceCode,Name\nCA,NS,Nova Scotia\n";
        let catalog = parse_provinces(csv.as_bytes()).unwrap();
        assert_eq!(
            catalog.get("NS"),
            Some(&ProvinceOrState::new("NS", "Nova Scotia", "CA"))
        );
    }

    #[test]
    fn test_blank_codes_are_skipped() {
        let csv = "ProvinceCode,Name,CountryCode\n,Nowhere,CA\nPE,Prince Edward Island,CA\n";
        let catalog = parse_provinces(csv.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_missing_column() {
        let csv = "ProvinceCode,Name\nON,Ontario\n";
        let error = parse_provinces(csv.as_bytes()).unwrap_err();
        assert!(matches!(error, ReferenceError::MissingColumn(ref col) if col == "CountryCode"));
    }

    #[test]
    fn test_duplicate_code() {
        let csv = "ProvinceCode,Name,CountryCode\nON,Ontario,CA\nON,Ontario Again,CA\n";
        let error = parse_provinces(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            error,
            ReferenceError::DuplicateCode { ref code, line: 3 } if code == "ON"
        ));
    }

    #[test]
    fn test_missing_country() {
        let csv = "ProvinceCode,Name,CountryCode\nON,Ontario,\n";
        let error = parse_provinces(csv.as_bytes()).unwrap_err();
        assert_eq!(error.to_string(), "Province ON has no country code");
    }
}
