// Row normalizers: header-addressed sheet tables -> dashboard records.
//
// One submodule per sheet family. Extractors are pure functions over
// SheetTable, so tests can drive them from literal rows instead of
// workbook fixtures.

pub mod age;
pub mod commute;
pub mod housing;
pub mod income;
pub mod sectors;
pub mod series;

use thiserror::Error;

use crate::workbook::SheetError;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("{0}")]
    Sheet(#[from] SheetError),

    #[error("Sheet '{sheet}' has no {label} row")]
    MissingRow { sheet: String, label: &'static str },
}
