use anyhow::{Context, Result};
use sail_model::{Country, ProvinceOrState};
use sail_reference::load_or_default;
use sail_validate::{MemberValidator, ValidatorOptions};
use tracing::info_span;

use crate::cli::{CountryArg, ProvincesArgs, ValidateArgs};
use sail_cli::pipeline::{ValidationRun, read_members, validate_records, write_members};

pub fn run_validate(args: &ValidateArgs) -> Result<ValidationRun> {
    let span = info_span!("validate", input = %args.input.display());
    let _guard = span.enter();

    let catalog = load_or_default(args.provinces.as_deref()).context("load province table")?;
    let records = read_members(&args.input)?;

    let validator = MemberValidator::new(catalog).with_options(ValidatorOptions {
        current_year: args.current_year,
    });
    let run = validate_records(&validator, records);

    if let Some(output) = &args.output {
        write_members(output, &run.records)?;
    }
    Ok(run)
}

pub fn run_provinces(args: &ProvincesArgs) -> Result<Vec<ProvinceOrState>> {
    let catalog = load_or_default(args.provinces.as_deref()).context("load province table")?;
    let rows = match args.country {
        Some(country) => catalog.by_country(&country_from_arg(country)),
        None => catalog.sorted_by_name(),
    };
    Ok(rows.into_iter().cloned().collect())
}

fn country_from_arg(country: CountryArg) -> Country {
    match country {
        CountryArg::Ca => Country::Canada,
        CountryArg::Us => Country::UnitedStates,
    }
}
