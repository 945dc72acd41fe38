// Tests for the per-county pipeline recovery boundary
// A missing or malformed workbook must cost only its own domains, never the batch

use county_data_extractor::config::{Config, REGION9_COUNTIES};
use county_data_extractor::model::Cohort;
use county_data_extractor::pipeline::{comprehensive, historical};

fn missing_data_config() -> Config {
    Config::new("/nonexistent/county-data", "/nonexistent/output")
}

#[test]
fn test_historical_run_survives_missing_workbooks() {
    let run = historical::run(&missing_data_config());

    assert_eq!(run.records.len(), REGION9_COUNTIES.len());
    for record in &run.records {
        assert!(record.population.is_empty());
        assert!(record.households.is_empty());
        assert!(record.jobs.is_empty());
    }

    // Four domains per county: population, household estimates,
    // household projections, jobs.
    assert_eq!(run.failures.len(), 4 * REGION9_COUNTIES.len());
}

#[test]
fn test_comprehensive_run_survives_missing_workbooks() {
    let run = comprehensive::run(&missing_data_config());

    assert_eq!(run.records.len(), REGION9_COUNTIES.len());
    for record in &run.records {
        assert!(record.wages_by_sector.is_empty());
        assert!(record.job_projections.is_empty());
        assert!(record.commute_county.is_empty());
        assert!(record.year_built.is_empty());
        assert!(record.overcrowding.is_empty());
        assert!(record.unit_types.is_empty());
        assert!(record.income_categories.is_empty());
    }

    // Eight domains per county.
    assert_eq!(run.failures.len(), 8 * REGION9_COUNTIES.len());
}

#[test]
fn test_failed_age_distribution_keeps_its_fixed_shape() {
    let run = comprehensive::run(&missing_data_config());

    // Even with nothing extracted, every cohort series spans 2013-2033.
    for record in &run.records {
        for cohort in [
            Cohort::Age0To17,
            Cohort::Age18To24,
            Cohort::Age25To44,
            Cohort::Age45To64,
            Cohort::Age65To74,
            Cohort::Age75Plus,
        ] {
            let series = record.age_distribution.series(cohort);
            assert_eq!(series.len(), 21);
            assert!(series.values().all(Option::is_none));
            assert_eq!(series.keys().next().map(String::as_str), Some("2013"));
            assert_eq!(series.keys().last().map(String::as_str), Some("2033"));
        }
    }
}

#[test]
fn test_records_stay_in_county_order() {
    let historical_run = historical::run(&missing_data_config());
    let counties: Vec<&str> = historical_run
        .records
        .iter()
        .map(|r| r.county.as_str())
        .collect();
    assert_eq!(counties, REGION9_COUNTIES);

    let comprehensive_run = comprehensive::run(&missing_data_config());
    let counties: Vec<&str> = comprehensive_run
        .records
        .iter()
        .map(|r| r.county.as_str())
        .collect();
    assert_eq!(counties, REGION9_COUNTIES);
}

#[test]
fn test_failures_name_county_and_domain() {
    let run = historical::run(&missing_data_config());

    let first = &run.failures[0];
    assert_eq!(first.county, "Archuleta County");
    assert_eq!(first.domain, "population data");
    assert!(first.error.to_string().contains("Failed to open workbook"));

    // Every county reports the same four domains, in extraction order.
    let archuleta_domains: Vec<&str> = run
        .failures
        .iter()
        .filter(|f| f.county == "Archuleta County")
        .map(|f| f.domain)
        .collect();
    assert_eq!(
        archuleta_domains,
        vec![
            "population data",
            "household data",
            "household projections",
            "jobs data"
        ]
    );
}

#[test]
fn test_repeated_runs_are_deterministic() {
    let first = historical::run(&missing_data_config());
    let second = historical::run(&missing_data_config());

    let first_json = serde_json::to_string(&first.records).unwrap();
    let second_json = serde_json::to_string(&second.records).unwrap();
    assert_eq!(first_json, second_json);

    let first = comprehensive::run(&missing_data_config());
    let second = comprehensive::run(&missing_data_config());
    let first_json = serde_json::to_string(&first.records).unwrap();
    let second_json = serde_json::to_string(&second.records).unwrap();
    assert_eq!(first_json, second_json);
}
