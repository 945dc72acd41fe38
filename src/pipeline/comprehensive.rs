use tracing::info;

use crate::config::{Config, REGION9_COUNTIES};
use crate::extract::income::EXCLUDED_INCOME_COLUMNS;
use crate::extract::{age, commute, housing, income, sectors, ExtractError};
use crate::model::{
    AgeDistribution, CategoryTable, CommuteRecord, CountyComprehensiveRecord, IncomeTable,
    SectorProjections, SectorWages,
};
use crate::workbook::CountyWorkbook;

use super::{recover, DomainFailure, PipelineRun, HEADER_ROW};

/// Run the comprehensive pipeline over the fixed county list.
pub fn run(config: &Config) -> PipelineRun<CountyComprehensiveRecord> {
    let mut records = Vec::with_capacity(REGION9_COUNTIES.len());
    let mut failures = Vec::new();

    for county in REGION9_COUNTIES {
        info!("Extracting comprehensive data for {}", county);
        let workbook = CountyWorkbook::new(config.workbook_path(county), county);
        records.push(county_record(&workbook, &mut failures));
    }

    PipelineRun { records, failures }
}

/// Assemble one county's comprehensive record across all eight domains.
/// Each domain recovers independently, so a malformed sheet costs only its
/// own section.
pub fn county_record(
    workbook: &CountyWorkbook,
    failures: &mut Vec<DomainFailure>,
) -> CountyComprehensiveRecord {
    let county = workbook.county();

    CountyComprehensiveRecord {
        county: county.to_string(),
        wages_by_sector: recover(failures, county, "wage data", wages(workbook)),
        job_projections: recover(failures, county, "job projections", projections(workbook)),
        age_distribution: recover(
            failures,
            county,
            "age distribution",
            age_distribution(workbook),
        ),
        commute_county: recover(
            failures,
            county,
            "commute county data",
            commute_records(workbook),
        ),
        year_built: recover(
            failures,
            county,
            "year built data",
            tenure(workbook, "ACS Tenure by Year Built", "YEAR BUILT"),
        ),
        overcrowding: recover(
            failures,
            county,
            "overcrowding data",
            tenure(workbook, "ACS Tenure by Overcrowding", "OCCUPANTS PER ROOM"),
        ),
        unit_types: recover(
            failures,
            county,
            "unit types",
            tenure(workbook, "ACS Tenure by Units", "UNITS IN STRUCTURE"),
        ),
        income_categories: recover(
            failures,
            county,
            "income categories",
            income_table(workbook),
        ),
    }
}

fn wages(workbook: &CountyWorkbook) -> Result<Vec<SectorWages>, ExtractError> {
    let table = workbook.sheet("SDO Jobs and Wage", HEADER_ROW)?;
    Ok(sectors::wages(&table))
}

fn projections(workbook: &CountyWorkbook) -> Result<Vec<SectorProjections>, ExtractError> {
    let table = workbook.sheet("SDO Job Projections", HEADER_ROW)?;
    Ok(sectors::projections(&table))
}

fn age_distribution(workbook: &CountyWorkbook) -> Result<AgeDistribution, ExtractError> {
    let table = workbook.sheet("SDO Age Distribution", HEADER_ROW)?;
    Ok(age::distribution(&table))
}

fn commute_records(workbook: &CountyWorkbook) -> Result<Vec<CommuteRecord>, ExtractError> {
    let table = workbook.sheet("ACS Commute County", HEADER_ROW)?;
    Ok(commute::commute(&table))
}

fn tenure(
    workbook: &CountyWorkbook,
    sheet: &str,
    label_column: &str,
) -> Result<CategoryTable, ExtractError> {
    let table = workbook.sheet(sheet, HEADER_ROW)?;
    Ok(housing::tenure_table(&table, label_column))
}

fn income_table(workbook: &CountyWorkbook) -> Result<IncomeTable, ExtractError> {
    let table = workbook.sheet("ACS Income Categories", HEADER_ROW)?;
    Ok(income::income_categories(&table, &EXCLUDED_INCOME_COLUMNS))
}
