use std::path::PathBuf;

/// The five Region 9 counties, in the order they appear in the generated
/// data modules.
pub const REGION9_COUNTIES: [&str; 5] = [
    "Archuleta County",
    "Dolores County",
    "La Plata County",
    "Montezuma County",
    "San Juan County",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Config {
            data_dir: data_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Path of one county's source workbook. The delivered files repeat the
    /// word "County" ("Archuleta County County Data Tables.xlsx") because the
    /// upstream export appends "County Data Tables" to the full county name.
    pub fn workbook_path(&self, county: &str) -> PathBuf {
        self.data_dir.join(format!("{county} County Data Tables.xlsx"))
    }
}
