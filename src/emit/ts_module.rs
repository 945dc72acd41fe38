use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use crate::model::{CountyComprehensiveRecord, CountyHistoricalRecord};

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write module: {0}")]
    Write(#[from] std::io::Error),
}

pub const HISTORICAL_MODULE: &str = "region9-historical.ts";
pub const COMPREHENSIVE_MODULE: &str = "region9-comprehensive.ts";

const HISTORICAL_INTERFACES: &str = r#"export interface TimeSeriesData {
  [year: string]: number | null;
}

export interface CountyHistoricalData {
  county: string;
  population: TimeSeriesData; // 2013-2033
  households: TimeSeriesData; // 2013-2033
  jobs: TimeSeriesData; // 2013-2023
}
"#;

const COMPREHENSIVE_INTERFACES: &str = r#"export interface WageBySector {
  sectorId: number | string | null;
  sectorName: string;
  wage2023: number | null;
  wage2022: number | null;
  wage2021: number | null;
  wage2020: number | null;
  wage2019: number | null;
}

export interface JobProjectionBySector {
  sectorId: number | string | null;
  sectorName: string;
  projections: { [year: string]: number | null };
}

export interface AgeDistribution {
  '0-17': { [year: string]: number | null };
  '18-24': { [year: string]: number | null };
  '25-44': { [year: string]: number | null };
  '45-64': { [year: string]: number | null };
  '65-74': { [year: string]: number | null };
  '75+': { [year: string]: number | null };
}

export interface CommuteData {
  workLocation: string;
  workers: number;
  percentage: number | null;
}

export interface CountyComprehensiveData {
  county: string;
  wagesBySector: WageBySector[];
  jobProjections: JobProjectionBySector[];
  ageDistribution: AgeDistribution;
  commuteCounty: CommuteData[];
  yearBuilt: any;
  overcrowding: any;
  unitTypes: any;
  incomeCategories: any;
}
"#;

/// Render the historical module: header, interfaces, and the
/// `REGION_9_HISTORICAL_DATA` constant.
pub fn render_historical_module(
    records: &[CountyHistoricalRecord],
) -> Result<String, EmitError> {
    render_module(
        historical_header(),
        HISTORICAL_INTERFACES,
        "export const REGION_9_HISTORICAL_DATA: CountyHistoricalData[] =",
        records,
    )
}

/// Render the comprehensive module: header, interfaces, and the
/// `REGION_9_COMPREHENSIVE_DATA` constant.
pub fn render_comprehensive_module(
    records: &[CountyComprehensiveRecord],
) -> Result<String, EmitError> {
    render_module(
        comprehensive_header(),
        COMPREHENSIVE_INTERFACES,
        "export const REGION_9_COMPREHENSIVE_DATA: CountyComprehensiveData[] =",
        records,
    )
}

pub fn write_historical_module(
    dir: &Path,
    records: &[CountyHistoricalRecord],
) -> Result<PathBuf, EmitError> {
    let rendered = render_historical_module(records)?;
    write_module(dir, HISTORICAL_MODULE, &rendered)
}

pub fn write_comprehensive_module(
    dir: &Path,
    records: &[CountyComprehensiveRecord],
) -> Result<PathBuf, EmitError> {
    let rendered = render_comprehensive_module(records)?;
    write_module(dir, COMPREHENSIVE_MODULE, &rendered)
}

fn write_module(dir: &Path, file_name: &str, rendered: &str) -> Result<PathBuf, EmitError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, rendered)?;
    Ok(path)
}

// The payload is plain JSON, valid TypeScript as an array initializer. Keys
// stay quoted and the indent is two spaces, matching the dashboard's other
// generated modules.
fn render_module<T: Serialize>(
    header: String,
    interfaces: &str,
    declaration: &str,
    records: &[T],
) -> Result<String, EmitError> {
    let payload = serde_json::to_string_pretty(records)?;
    let mut module = String::with_capacity(
        header.len() + interfaces.len() + declaration.len() + payload.len() + 8,
    );
    module.push_str(&header);
    module.push('\n');
    module.push_str(interfaces);
    module.push('\n');
    module.push_str(declaration);
    module.push('\n');
    module.push_str(&payload);
    module.push_str(";\n");
    Ok(module)
}

fn historical_header() -> String {
    format!(
        r#"/**
 * Region 9 Historical Time-Series Data
 *
 * Contains historical data (2013-2033) for population, households, and jobs
 * from Colorado State Demography Office (SDO).
 *
 * Generated automatically from County Data Tables Excel files
 * Generation Date: {}
 * Vintage: SDO 2023
 */
"#,
        Utc::now().format("%B %Y")
    )
}

fn comprehensive_header() -> String {
    format!(
        r#"/**
 * Region 9 Comprehensive Data
 *
 * Contains comprehensive data including:
 * - Wages by sector
 * - Job projections by sector
 * - Age distribution time-series
 * - Commuting patterns
 * - Housing quality indicators (year built, overcrowding, unit types)
 * - Income distribution trends
 *
 * Generated automatically from County Data Tables Excel files
 * Generation Date: {}
 * Vintage: SDO 2023, ACS 2019-2023
 */
"#,
        Utc::now().format("%B %Y")
    )
}
