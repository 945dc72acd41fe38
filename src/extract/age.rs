use crate::model::{AgeDistribution, Cohort, SERIES_END_YEAR, SERIES_START_YEAR};
use crate::workbook::SheetTable;

use super::series::row_year_series;

// Ordered label rules, first match wins. Both the worded and hyphenated
// spellings appear in delivered workbooks; matching is case-insensitive.
const COHORT_RULES: [(&str, Cohort); 12] = [
    ("0 to 17", Cohort::Age0To17),
    ("0-17", Cohort::Age0To17),
    ("18 to 24", Cohort::Age18To24),
    ("18-24", Cohort::Age18To24),
    ("25 to 44", Cohort::Age25To44),
    ("25-44", Cohort::Age25To44),
    ("45 to 64", Cohort::Age45To64),
    ("45-64", Cohort::Age45To64),
    ("65 to 74", Cohort::Age65To74),
    ("65-74", Cohort::Age65To74),
    ("75 plus", Cohort::Age75Plus),
    ("75+", Cohort::Age75Plus),
];

/// Classify a free-text age band label into one of the six cohorts.
pub fn classify_label(label: &str) -> Option<Cohort> {
    let lowered = label.to_lowercase();
    COHORT_RULES
        .iter()
        .find(|(pattern, _)| lowered.contains(pattern))
        .map(|&(_, cohort)| cohort)
}

/// Population by age from "SDO Age Distribution": one row per age band,
/// year columns 2013-2033.
///
/// The result always has the full six-cohort, 21-year shape. Rows with
/// unrecognized labels are ignored, and when a cohort's row appears twice
/// the later row wins.
pub fn distribution(table: &SheetTable) -> AgeDistribution {
    let mut distribution = AgeDistribution::default();

    for row in table.rows() {
        let label = match row.text("AGE") {
            Some(label) => label,
            None => continue,
        };
        let cohort = match classify_label(&label) {
            Some(cohort) => cohort,
            None => continue,
        };
        *distribution.series_mut(cohort) =
            row_year_series(&row, SERIES_START_YEAR, SERIES_END_YEAR);
    }

    distribution
}
