use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use calamine::{open_workbook, Reader, Xlsx};
use tracing::debug;

use super::table::{SheetError, SheetTable};

/// Handle to one county's "County Data Tables" workbook.
///
/// Opening is deferred to [`sheet`](CountyWorkbook::sheet) and each call
/// reopens the file. The workbooks are small and every sheet is read at
/// most once per run, so holding the parsed file open buys nothing.
#[derive(Debug, Clone)]
pub struct CountyWorkbook {
    path: PathBuf,
    county: String,
}

impl CountyWorkbook {
    pub fn new(path: impl Into<PathBuf>, county: impl Into<String>) -> Self {
        CountyWorkbook {
            path: path.into(),
            county: county.into(),
        }
    }

    pub fn county(&self) -> &str {
        &self.county
    }

    /// Open the named sheet and slice it at `header_row` (zero-based).
    pub fn sheet(&self, name: &str, header_row: usize) -> Result<SheetTable, SheetError> {
        debug!("Opening sheet '{}' in {}", name, self.path.display());

        let mut workbook: Xlsx<BufReader<File>> = match open_workbook(&self.path) {
            Ok(wb) => wb,
            Err(e) => return Err(SheetError::WorkbookOpen(e.to_string())),
        };

        let range = match workbook.worksheet_range(name) {
            Ok(range) => range,
            Err(_) => return Err(SheetError::SheetNotFound(name.to_string())),
        };

        SheetTable::from_range(name, &range, header_row)
    }
}
