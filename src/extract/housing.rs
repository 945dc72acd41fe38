use serde_json::Value as JsonValue;

use crate::clean::clean_number;
use crate::model::{CategoryTable, TenureBreakdown};
use crate::workbook::SheetTable;

/// One ACS tenure table: category label -> owner/renter/total triple.
///
/// The three housing-quality sheets share a layout and differ only in the
/// label column ("YEAR BUILT", "OCCUPANTS PER ROOM", "UNITS IN STRUCTURE").
/// Labels become keys verbatim: an empty string is a legal key, and when a
/// label repeats the later row overwrites the earlier one in place.
pub fn tenure_table(table: &SheetTable, label_column: &str) -> CategoryTable {
    let mut categories = CategoryTable::new();

    for row in table.rows() {
        let label = match row.label(label_column) {
            Some(label) => label,
            None => continue,
        };
        let breakdown = TenureBreakdown {
            owner: clean_number(row.cell("Owner Occupied")),
            renter: clean_number(row.cell("Renter Occupied")),
            total: clean_number(row.cell("Total")),
        };
        categories.insert(label, JsonValue::from(breakdown));
    }

    categories
}
