use crate::clean::clean_currency;
use crate::model::{
    SectorId, SectorProjections, SectorWages, PROJECTION_START_YEAR, SERIES_END_YEAR,
};
use crate::workbook::SheetTable;

use super::series::row_year_series;

/// Wage rows from "SDO Jobs and Wage": one record per sector for the five
/// published years.
///
/// Subtotal rows (any SECTOR NAME mentioning "Total") are skipped, and a
/// sector without a 2023 wage is dropped entirely: 2023 is the anchor year,
/// and a blank there means the sector's figures are unpublished or
/// suppressed, not zero.
pub fn wages(table: &SheetTable) -> Vec<SectorWages> {
    let mut sectors = Vec::new();

    for row in table.rows() {
        let sector_name = match row.text("SECTOR NAME") {
            Some(name) => name,
            None => continue,
        };
        if sector_name.contains("Total") {
            continue;
        }

        let record = SectorWages {
            sector_id: SectorId::from_cell(row.cell("SECTOR ID")),
            sector_name,
            wage_2023: clean_currency(row.cell("2023")),
            wage_2022: clean_currency(row.cell("2022")),
            wage_2021: clean_currency(row.cell("2021")),
            wage_2020: clean_currency(row.cell("2020")),
            wage_2019: clean_currency(row.cell("2019")),
        };

        if record.wage_2023.is_some() {
            sectors.push(record);
        }
    }

    sectors
}

/// Projection rows from "SDO Job Projections": forecast job counts per
/// sector for 2024-2033. Unlike wages there is no anchor year; a sector row
/// is kept even when every forecast is null.
pub fn projections(table: &SheetTable) -> Vec<SectorProjections> {
    let mut sectors = Vec::new();

    for row in table.rows() {
        let sector_name = match row.text("SECTOR NAME") {
            Some(name) => name,
            None => continue,
        };
        if sector_name.contains("Total") {
            continue;
        }

        sectors.push(SectorProjections {
            sector_id: SectorId::from_cell(row.cell("SECTOR ID")),
            sector_name,
            projections: row_year_series(&row, PROJECTION_START_YEAR, SERIES_END_YEAR),
        });
    }

    sectors
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::Data;

    fn s(value: &str) -> Data {
        Data::String(value.to_string())
    }

    fn wage_table() -> SheetTable {
        SheetTable::from_rows(
            "SDO Jobs and Wage",
            vec![
                vec![
                    s("SECTOR ID"),
                    s("SECTOR NAME"),
                    s("2023"),
                    s("2022"),
                    s("2021"),
                    s("2020"),
                    s("2019"),
                ],
                vec![
                    s("1"),
                    s("Agriculture"),
                    s("$45,000"),
                    s("$43,500"),
                    Data::Empty,
                    s("$41,000"),
                    s("$40,250"),
                ],
                vec![
                    s("2"),
                    s("Mining"),
                    Data::Empty,
                    s("$90,000"),
                    s("$88,000"),
                    s("$85,000"),
                    s("$82,000"),
                ],
                vec![
                    s("0"),
                    s("Total, All Industries"),
                    s("$60,000"),
                    s("$58,000"),
                    s("$56,000"),
                    s("$54,000"),
                    s("$52,000"),
                ],
                vec![Data::Empty, Data::Empty, s("$1"), s("$1"), s("$1"), s("$1"), s("$1")],
                vec![
                    Data::Float(3.0),
                    s("Construction"),
                    Data::Float(79023.0),
                    Data::Float(76500.0),
                    Data::Float(74000.0),
                    Data::Float(71000.0),
                    Data::Float(68500.0),
                ],
            ],
            0,
        )
        .unwrap()
    }

    #[test]
    fn test_wages_skip_totals_and_blank_names() {
        let sectors = wages(&wage_table());
        let names: Vec<&str> = sectors.iter().map(|s| s.sector_name.as_str()).collect();
        assert_eq!(names, vec!["Agriculture", "Construction"]);
    }

    #[test]
    fn test_wages_require_the_anchor_year() {
        let sectors = wages(&wage_table());
        assert!(sectors.iter().all(|s| s.wage_2023.is_some()));
        // Mining has wages for 2019-2022 but none for 2023, so it is gone.
        assert!(!sectors.iter().any(|s| s.sector_name == "Mining"));
    }

    #[test]
    fn test_wages_keep_nulls_in_earlier_years() {
        let sectors = wages(&wage_table());
        let agriculture = &sectors[0];
        assert_eq!(agriculture.wage_2023, Some(45000.0));
        assert_eq!(agriculture.wage_2021, None);
    }

    #[test]
    fn test_wages_carry_sector_ids_as_found() {
        let sectors = wages(&wage_table());
        assert_eq!(sectors[0].sector_id, Some(SectorId::Text("1".to_string())));
        assert_eq!(sectors[1].sector_id, Some(SectorId::Number(3.0)));
    }

    #[test]
    fn test_projections_cover_the_full_forecast_window() {
        let table = SheetTable::from_rows(
            "SDO Job Projections",
            vec![
                vec![s("SECTOR ID"), s("SECTOR NAME"), s("2024"), s("2025")],
                vec![s("1"), s("Agriculture"), s("1,200"), Data::Empty],
            ],
            0,
        )
        .unwrap();
        let sectors = projections(&table);
        assert_eq!(sectors.len(), 1);
        let series = &sectors[0].projections;
        assert_eq!(series.len(), 10);
        assert_eq!(series.get("2024"), Some(&Some(1200)));
        assert_eq!(series.get("2025"), Some(&None));
        assert_eq!(series.get("2033"), Some(&None));
    }

    #[test]
    fn test_projections_keep_all_null_sectors() {
        let table = SheetTable::from_rows(
            "SDO Job Projections",
            vec![vec![s("SECTOR NAME")], vec![s("Utilities")]],
            0,
        )
        .unwrap();
        let sectors = projections(&table);
        assert_eq!(sectors.len(), 1);
        assert!(sectors[0].projections.values().all(Option::is_none));
    }
}
