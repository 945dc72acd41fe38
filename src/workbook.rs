// County Data Tables workbook access
//
// Every SDO/ACS sheet in the delivered workbooks follows the same layout:
// a multi-row title block, one header row, then data rows. This module
// opens workbooks and slices sheets into header-addressed tables so the
// extraction code never deals in raw cell coordinates.

pub mod reader;
pub mod table;

pub use reader::CountyWorkbook;
pub use table::{RowView, SheetError, SheetTable};
