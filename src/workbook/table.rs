use std::collections::HashMap;

use calamine::{Data, Range};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Failed to open workbook: {0}")]
    WorkbookOpen(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Sheet '{sheet}' has no row {row} to use as a header")]
    HeaderOutOfRange { sheet: String, row: usize },
}

/// One worksheet sliced at its header row: named columns over the data rows
/// below.
///
/// Column names come from the header row's text. Numeric headers render as
/// plain years ("2023", never "2023.0") and blank headers get positional
/// "Unnamed: {index}" names so placeholder columns stay addressable. When a
/// header repeats, the leftmost column wins.
#[derive(Debug, Clone)]
pub struct SheetTable {
    sheet: String,
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<Data>>,
}

impl SheetTable {
    pub fn from_range(
        sheet: &str,
        range: &Range<Data>,
        header_row: usize,
    ) -> Result<Self, SheetError> {
        let rows = range.rows().map(|row| row.to_vec()).collect();
        Self::from_rows(sheet, rows, header_row)
    }

    /// Build a table from raw rows. Row `header_row` (zero-based) supplies
    /// the column names; everything above it is discarded as title block.
    pub fn from_rows(
        sheet: &str,
        mut all_rows: Vec<Vec<Data>>,
        header_row: usize,
    ) -> Result<Self, SheetError> {
        let header = all_rows
            .get(header_row)
            .cloned()
            .ok_or_else(|| SheetError::HeaderOutOfRange {
                sheet: sheet.to_string(),
                row: header_row,
            })?;
        let rows = all_rows.split_off(header_row + 1);

        let width = rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(header.len());
        let mut columns = Vec::with_capacity(width);
        for position in 0..width {
            columns.push(header_name(header.get(position), position));
        }

        let mut index = HashMap::with_capacity(columns.len());
        for (position, name) in columns.iter().enumerate() {
            index.entry(name.clone()).or_insert(position);
        }

        Ok(SheetTable {
            sheet: sheet.to_string(),
            columns,
            index,
            rows,
        })
    }

    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    /// Column names in sheet order, synthesized names included.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> + '_ {
        self.rows.iter().map(move |cells| RowView { table: self, cells })
    }

    /// The first data row below the header, where the SDO summary sheets
    /// keep their county totals.
    pub fn first_row(&self) -> Option<RowView<'_>> {
        self.rows.first().map(|cells| RowView { table: self, cells })
    }
}

/// One data row with column-name access. Missing columns and short rows
/// read as absent cells, never as errors.
#[derive(Clone, Copy)]
pub struct RowView<'a> {
    table: &'a SheetTable,
    cells: &'a [Data],
}

impl<'a> RowView<'a> {
    /// Raw cell under a named column, if the sheet has that column and the
    /// row reaches it.
    pub fn cell(&self, column: &str) -> Option<&'a Data> {
        let position = *self.table.index.get(column)?;
        self.cells.get(position)
    }

    /// Verbatim text of a cell, for use as an output key. Empty strings are
    /// legal labels; only blank cells and non-text variants are `None`.
    pub fn label(&self, column: &str) -> Option<String> {
        cell_text(self.cell(column)?)
    }

    /// Trimmed text of a cell; `None` when missing or whitespace-only.
    pub fn text(&self, column: &str) -> Option<String> {
        let text = self.label(column)?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

// Text rendering shared by headers and labels: strings as-is, whole-number
// cells as plain integers so year columns read "2023" rather than "2023.0".
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => Some(s.clone()),
        Data::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(format!("{f:.0}")),
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        _ => None,
    }
}

fn header_name(cell: Option<&Data>, position: usize) -> String {
    match cell.and_then(cell_text) {
        Some(name) if !name.trim().is_empty() => name.trim().to_string(),
        _ => format!("Unnamed: {position}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> Data {
        Data::String(value.to_string())
    }

    fn sample_table() -> SheetTable {
        SheetTable::from_rows(
            "SDO Population",
            vec![
                vec![s("Region 9 Population Estimates")],
                vec![],
                vec![s("State Demography Office")],
                vec![],
                vec![s("NAME"), Data::Empty, Data::Float(2013.0), Data::Float(2014.0)],
                vec![s("Archuleta County"), s("x"), Data::Float(12250.0), s("12,450")],
                vec![s("Totals"), Data::Empty, Data::Float(99999.0)],
            ],
            4,
        )
        .unwrap()
    }

    #[test]
    fn test_header_row_splits_title_block_from_data() {
        let table = sample_table();
        assert_eq!(table.rows().count(), 2);
        assert_eq!(table.columns(), &["NAME", "Unnamed: 1", "2013", "2014"]);
    }

    #[test]
    fn test_numeric_headers_render_as_plain_years() {
        let table = sample_table();
        let first = table.first_row().unwrap();
        assert_eq!(first.cell("2013"), Some(&Data::Float(12250.0)));
        assert_eq!(first.cell("2014"), Some(&Data::String("12,450".to_string())));
    }

    #[test]
    fn test_missing_columns_and_short_rows_read_as_absent() {
        let table = sample_table();
        let rows: Vec<RowView> = table.rows().collect();
        assert_eq!(rows[0].cell("2031"), None);
        assert_eq!(rows[1].cell("2014"), None);
    }

    #[test]
    fn test_header_out_of_range_is_an_error() {
        let result = SheetTable::from_rows("SDO Population", vec![vec![s("only row")]], 4);
        assert!(matches!(
            result,
            Err(SheetError::HeaderOutOfRange { row: 4, .. })
        ));
    }

    #[test]
    fn test_duplicate_headers_resolve_to_leftmost_column() {
        let table = SheetTable::from_rows(
            "SDO Jobs",
            vec![
                vec![s("NAME"), s("2023"), s("2023")],
                vec![s("Total"), Data::Float(1.0), Data::Float(2.0)],
            ],
            0,
        )
        .unwrap();
        let row = table.first_row().unwrap();
        assert_eq!(row.cell("2023"), Some(&Data::Float(1.0)));
    }

    #[test]
    fn test_label_keeps_empty_strings_but_text_does_not() {
        let table = SheetTable::from_rows(
            "ACS Tenure by Units",
            vec![
                vec![s("UNITS IN STRUCTURE"), s("Total")],
                vec![s(""), Data::Float(10.0)],
                vec![Data::Empty, Data::Float(20.0)],
            ],
            0,
        )
        .unwrap();
        let rows: Vec<RowView> = table.rows().collect();
        assert_eq!(rows[0].label("UNITS IN STRUCTURE"), Some(String::new()));
        assert_eq!(rows[0].text("UNITS IN STRUCTURE"), None);
        assert_eq!(rows[1].label("UNITS IN STRUCTURE"), None);
    }

    #[test]
    fn test_wider_data_rows_get_synthesized_columns() {
        let table = SheetTable::from_rows(
            "ACS Income Categories",
            vec![
                vec![s("HOUSEHOLD INCOME")],
                vec![s("Less than $25,000"), Data::Float(500.0)],
            ],
            0,
        )
        .unwrap();
        assert_eq!(table.columns(), &["HOUSEHOLD INCOME", "Unnamed: 1"]);
        let row = table.first_row().unwrap();
        assert_eq!(row.cell("Unnamed: 1"), Some(&Data::Float(500.0)));
    }
}
