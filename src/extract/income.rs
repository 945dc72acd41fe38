use serde_json::{Map as JsonMap, Value as JsonValue};

use crate::clean::clean_integer;
use crate::model::IncomeTable;
use crate::workbook::SheetTable;

/// The income sheet's bracket label column.
pub const INCOME_BRACKET_COLUMN: &str = "HOUSEHOLD INCOME";

/// Columns never treated as survey periods: the bracket label itself and
/// the sheet's leading placeholder column.
pub const EXCLUDED_INCOME_COLUMNS: [&str; 2] = [INCOME_BRACKET_COLUMN, "Unnamed: 0"];

/// Household counts by income bracket from "ACS Income Categories".
///
/// The survey-period columns vary between workbook deliveries, so they are
/// introspected from the sheet's own headers: every column except the
/// excluded ones counts as a period. Values that fail to parse are omitted
/// from the bracket rather than written as null.
pub fn income_categories(table: &SheetTable, excluded_columns: &[&str]) -> IncomeTable {
    let mut brackets = IncomeTable::new();

    for row in table.rows() {
        let bracket = match row.label(INCOME_BRACKET_COLUMN) {
            Some(bracket) => bracket,
            None => continue,
        };

        let mut periods = JsonMap::new();
        for column in table.columns() {
            if excluded_columns.contains(&column.as_str()) {
                continue;
            }
            if let Some(value) = clean_integer(row.cell(column)) {
                periods.insert(column.clone(), JsonValue::from(value));
            }
        }

        brackets.insert(bracket, JsonValue::Object(periods));
    }

    brackets
}
