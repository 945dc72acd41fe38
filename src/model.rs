use std::collections::BTreeMap;

use calamine::Data;
use serde::Serialize;
use serde_json::{json, Map as JsonMap, Value as JsonValue};

// Fixed SDO reporting windows shared by every sheet.
pub const SERIES_START_YEAR: i32 = 2013;
pub const ESTIMATE_END_YEAR: i32 = 2023;
pub const PROJECTION_START_YEAR: i32 = 2024;
pub const SERIES_END_YEAR: i32 = 2033;

/// Year-keyed series over one of the SDO windows. Four-digit year keys sort
/// the same lexicographically and numerically, so a BTreeMap keeps the
/// serialized order chronological.
pub type YearSeries = BTreeMap<String, Option<i64>>;

/// A series with every year in the window present and null.
pub fn null_year_series(start_year: i32, end_year: i32) -> YearSeries {
    (start_year..=end_year)
        .map(|year| (year.to_string(), None))
        .collect()
}

/// Sector identifier as it appears in the sheet. Usually a numeric code but
/// some workbooks carry text, so both shapes survive into the output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectorId {
    Number(f64),
    Text(String),
}

impl SectorId {
    pub fn from_cell(cell: Option<&Data>) -> Option<SectorId> {
        match cell? {
            Data::Float(f) => Some(SectorId::Number(*f)),
            Data::Int(i) => Some(SectorId::Number(*i as f64)),
            Data::String(s) if !s.trim().is_empty() => Some(SectorId::Text(s.trim().to_string())),
            _ => None,
        }
    }
}

/// Average wage per sector for the five published years. A sector only
/// appears when its 2023 wage is present; earlier years may be null.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorWages {
    pub sector_id: Option<SectorId>,
    pub sector_name: String,
    pub wage_2023: Option<f64>,
    pub wage_2022: Option<f64>,
    pub wage_2021: Option<f64>,
    pub wage_2020: Option<f64>,
    pub wage_2019: Option<f64>,
}

/// Forecast job counts per sector, 2024-2033. Every year key is present;
/// a missing forecast is an explicit null rather than an omitted key.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorProjections {
    pub sector_id: Option<SectorId>,
    pub sector_name: String,
    pub projections: YearSeries,
}

/// The six age cohorts the dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cohort {
    Age0To17,
    Age18To24,
    Age25To44,
    Age45To64,
    Age65To74,
    Age75Plus,
}

/// Population by age cohort, each a full 2013-2033 series. The shape is
/// fixed: all six cohorts are always present, with nulls wherever the sheet
/// had no usable row.
#[derive(Debug, Clone, Serialize)]
pub struct AgeDistribution {
    #[serde(rename = "0-17")]
    pub age_0_17: YearSeries,
    #[serde(rename = "18-24")]
    pub age_18_24: YearSeries,
    #[serde(rename = "25-44")]
    pub age_25_44: YearSeries,
    #[serde(rename = "45-64")]
    pub age_45_64: YearSeries,
    #[serde(rename = "65-74")]
    pub age_65_74: YearSeries,
    #[serde(rename = "75+")]
    pub age_75_plus: YearSeries,
}

impl Default for AgeDistribution {
    fn default() -> Self {
        AgeDistribution {
            age_0_17: null_year_series(SERIES_START_YEAR, SERIES_END_YEAR),
            age_18_24: null_year_series(SERIES_START_YEAR, SERIES_END_YEAR),
            age_25_44: null_year_series(SERIES_START_YEAR, SERIES_END_YEAR),
            age_45_64: null_year_series(SERIES_START_YEAR, SERIES_END_YEAR),
            age_65_74: null_year_series(SERIES_START_YEAR, SERIES_END_YEAR),
            age_75_plus: null_year_series(SERIES_START_YEAR, SERIES_END_YEAR),
        }
    }
}

impl AgeDistribution {
    pub fn series(&self, cohort: Cohort) -> &YearSeries {
        match cohort {
            Cohort::Age0To17 => &self.age_0_17,
            Cohort::Age18To24 => &self.age_18_24,
            Cohort::Age25To44 => &self.age_25_44,
            Cohort::Age45To64 => &self.age_45_64,
            Cohort::Age65To74 => &self.age_65_74,
            Cohort::Age75Plus => &self.age_75_plus,
        }
    }

    pub fn series_mut(&mut self, cohort: Cohort) -> &mut YearSeries {
        match cohort {
            Cohort::Age0To17 => &mut self.age_0_17,
            Cohort::Age18To24 => &mut self.age_18_24,
            Cohort::Age25To44 => &mut self.age_25_44,
            Cohort::Age45To64 => &mut self.age_45_64,
            Cohort::Age65To74 => &mut self.age_65_74,
            Cohort::Age75Plus => &mut self.age_75_plus,
        }
    }
}

/// Where a county's residents work. Only rows with a positive worker count
/// are kept.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommuteRecord {
    pub work_location: String,
    pub workers: i64,
    pub percentage: Option<f64>,
}

/// Owner/renter/total triple for one housing category row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TenureBreakdown {
    pub owner: Option<f64>,
    pub renter: Option<f64>,
    pub total: Option<f64>,
}

impl From<TenureBreakdown> for JsonValue {
    fn from(breakdown: TenureBreakdown) -> Self {
        json!({
            "owner": breakdown.owner,
            "renter": breakdown.renter,
            "total": breakdown.total,
        })
    }
}

/// Category label -> tenure triple, in worksheet row order. Labels are kept
/// verbatim; an empty label is a legal key.
pub type CategoryTable = JsonMap<String, JsonValue>;

/// Income bracket -> period-labeled household counts, both levels in
/// worksheet order.
pub type IncomeTable = JsonMap<String, JsonValue>;

// Generated-module record shapes
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyHistoricalRecord {
    pub county: String,
    pub population: YearSeries,
    pub households: YearSeries,
    pub jobs: YearSeries,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyComprehensiveRecord {
    pub county: String,
    pub wages_by_sector: Vec<SectorWages>,
    pub job_projections: Vec<SectorProjections>,
    pub age_distribution: AgeDistribution,
    pub commute_county: Vec<CommuteRecord>,
    pub year_built: CategoryTable,
    pub overcrowding: CategoryTable,
    pub unit_types: CategoryTable,
    pub income_categories: IncomeTable,
}
