use crate::clean::clean_integer;
use crate::model::YearSeries;
use crate::workbook::{RowView, SheetTable};

use super::ExtractError;

/// Read the year columns `start_year..=end_year` from one row. Every year
/// in the window gets a key; absent columns and unparseable cells become
/// explicit nulls.
pub fn row_year_series(row: &RowView<'_>, start_year: i32, end_year: i32) -> YearSeries {
    (start_year..=end_year)
        .map(|year| (year.to_string(), clean_integer(row.cell(&year.to_string()))))
        .collect()
}

/// Year series from the first data row, where the SDO summary sheets keep
/// their county-wide totals.
pub fn first_row_series(
    table: &SheetTable,
    start_year: i32,
    end_year: i32,
) -> Result<YearSeries, ExtractError> {
    let row = match table.first_row() {
        Some(row) => row,
        None => {
            return Err(ExtractError::MissingRow {
                sheet: table.sheet().to_string(),
                label: "county total",
            })
        }
    };
    Ok(row_year_series(&row, start_year, end_year))
}

/// Year series from the first row whose NAME mentions "Total", the
/// all-sectors line in "SDO Jobs by Sector Estimates".
pub fn total_row_series(
    table: &SheetTable,
    start_year: i32,
    end_year: i32,
) -> Result<YearSeries, ExtractError> {
    let row = table
        .rows()
        .find(|row| row.text("NAME").map_or(false, |name| name.contains("Total")));
    let row = match row {
        Some(row) => row,
        None => {
            return Err(ExtractError::MissingRow {
                sheet: table.sheet().to_string(),
                label: "sector total",
            })
        }
    };
    Ok(row_year_series(&row, start_year, end_year))
}
