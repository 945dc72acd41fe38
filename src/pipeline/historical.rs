use tracing::info;

use crate::config::{Config, REGION9_COUNTIES};
use crate::extract::{series, ExtractError};
use crate::model::{
    CountyHistoricalRecord, YearSeries, ESTIMATE_END_YEAR, PROJECTION_START_YEAR, SERIES_END_YEAR,
    SERIES_START_YEAR,
};
use crate::workbook::CountyWorkbook;

use super::{recover, DomainFailure, PipelineRun, HEADER_ROW};

/// Run the historical pipeline over the fixed county list.
pub fn run(config: &Config) -> PipelineRun<CountyHistoricalRecord> {
    let mut records = Vec::with_capacity(REGION9_COUNTIES.len());
    let mut failures = Vec::new();

    for county in REGION9_COUNTIES {
        info!("Extracting historical data for {}", county);
        let workbook = CountyWorkbook::new(config.workbook_path(county), county);
        records.push(county_record(&workbook, &mut failures));
    }

    PipelineRun { records, failures }
}

/// Assemble one county's historical record. Failed domains come back as
/// empty series and are noted in `failures`.
pub fn county_record(
    workbook: &CountyWorkbook,
    failures: &mut Vec<DomainFailure>,
) -> CountyHistoricalRecord {
    let county = workbook.county();

    let population = recover(
        failures,
        county,
        "population data",
        population_series(workbook),
    );
    let estimates = recover(
        failures,
        county,
        "household data",
        household_estimates(workbook),
    );
    let projections = recover(
        failures,
        county,
        "household projections",
        household_projections(workbook),
    );
    let jobs = recover(failures, county, "jobs data", jobs_series(workbook));

    CountyHistoricalRecord {
        county: county.to_string(),
        population,
        households: merge_household_series(estimates, projections),
        jobs,
    }
}

// The population sheet carries the full estimate-plus-forecast window.
fn population_series(workbook: &CountyWorkbook) -> Result<YearSeries, ExtractError> {
    let table = workbook.sheet("SDO Population", HEADER_ROW)?;
    series::first_row_series(&table, SERIES_START_YEAR, SERIES_END_YEAR)
}

fn household_estimates(workbook: &CountyWorkbook) -> Result<YearSeries, ExtractError> {
    let table = workbook.sheet("SDO Household Estimate", HEADER_ROW)?;
    series::first_row_series(&table, SERIES_START_YEAR, ESTIMATE_END_YEAR)
}

fn household_projections(workbook: &CountyWorkbook) -> Result<YearSeries, ExtractError> {
    let table = workbook.sheet("SDO Household Projections", HEADER_ROW)?;
    series::first_row_series(&table, PROJECTION_START_YEAR, SERIES_END_YEAR)
}

fn jobs_series(workbook: &CountyWorkbook) -> Result<YearSeries, ExtractError> {
    let table = workbook.sheet("SDO Jobs by Sector Estimates", HEADER_ROW)?;
    series::total_row_series(&table, SERIES_START_YEAR, ESTIMATE_END_YEAR)
}

/// Pointwise union of the household estimate and projection series. The
/// windows do not overlap in delivered workbooks, but if they ever do the
/// projection value wins.
pub(crate) fn merge_household_series(
    estimates: YearSeries,
    projections: YearSeries,
) -> YearSeries {
    let mut merged = estimates;
    merged.extend(projections);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series_of(pairs: &[(&str, Option<i64>)]) -> YearSeries {
        pairs
            .iter()
            .map(|(year, value)| (year.to_string(), *value))
            .collect()
    }

    #[test]
    fn test_merge_unions_disjoint_windows() {
        let estimates = series_of(&[("2022", Some(5600)), ("2023", Some(5700))]);
        let projections = series_of(&[("2024", Some(5800)), ("2025", None)]);
        let merged = merge_household_series(estimates, projections);
        assert_eq!(merged.len(), 4);
        assert_eq!(merged.get("2022"), Some(&Some(5600)));
        assert_eq!(merged.get("2025"), Some(&None));
    }

    #[test]
    fn test_merge_prefers_projections_on_overlap() {
        let estimates = series_of(&[("2024", Some(5750))]);
        let projections = series_of(&[("2024", Some(5800))]);
        let merged = merge_household_series(estimates, projections);
        assert_eq!(merged.get("2024"), Some(&Some(5800)));
    }

    #[test]
    fn test_merge_of_empty_sides_is_the_other_side() {
        let estimates = series_of(&[("2013", Some(4000))]);
        let merged = merge_household_series(estimates.clone(), YearSeries::new());
        assert_eq!(merged, estimates);
        let merged = merge_household_series(YearSeries::new(), YearSeries::new());
        assert!(merged.is_empty());
    }
}
