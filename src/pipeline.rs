// Per-county batch pipelines.
//
// Both pipelines walk the fixed county list, pull each domain out of the
// county's workbook, and collect records for the module writer. A domain
// that fails never aborts the batch: it downgrades to the domain's empty
// value and is reported at the end of the run.

pub mod comprehensive;
pub mod historical;

use tracing::warn;

use crate::extract::ExtractError;

/// Zero-based header row shared by every SDO/ACS sheet in the County Data
/// Tables workbooks: four title rows, then the column headers.
pub const HEADER_ROW: usize = 4;

/// One domain that could not be extracted for one county.
#[derive(Debug)]
pub struct DomainFailure {
    pub county: String,
    pub domain: &'static str,
    pub error: ExtractError,
}

/// Outcome of a pipeline run: records in county-list order plus every
/// domain failure that was downgraded along the way.
#[derive(Debug)]
pub struct PipelineRun<T> {
    pub records: Vec<T>,
    pub failures: Vec<DomainFailure>,
}

/// Recovery boundary around one domain extraction. On failure the domain's
/// empty value stands in, a warning is logged, and the failure is recorded
/// for the run summary.
pub fn recover<T: Default>(
    failures: &mut Vec<DomainFailure>,
    county: &str,
    domain: &'static str,
    result: Result<T, ExtractError>,
) -> T {
    match result {
        Ok(value) => value,
        Err(error) => {
            warn!("Could not extract {} for {}: {}", domain, county, error);
            failures.push(DomainFailure {
                county: county.to_string(),
                domain,
                error,
            });
            T::default()
        }
    }
}
