use crate::clean::clean_number;
use crate::model::CommuteRecord;
use crate::workbook::SheetTable;

/// Commute destinations from "ACS Commute County": where a county's
/// residents work.
///
/// Rows without a positive worker count carry no signal (suppressed cells
/// and zero-flow destinations both) and are dropped rather than zeroed.
/// Records are ordered by worker count, largest first; the sort is stable,
/// so destinations with equal counts keep their sheet order.
pub fn commute(table: &SheetTable) -> Vec<CommuteRecord> {
    let mut records = Vec::new();

    for row in table.rows() {
        let work_location = match row.text("NAME") {
            Some(name) => name,
            None => continue,
        };
        let workers = match clean_number(row.cell("Workers")) {
            Some(workers) if workers > 0.0 => workers as i64,
            _ => continue,
        };
        records.push(CommuteRecord {
            work_location,
            workers,
            percentage: clean_number(row.cell("Percent")),
        });
    }

    records.sort_by(|a, b| b.workers.cmp(&a.workers));
    records
}
