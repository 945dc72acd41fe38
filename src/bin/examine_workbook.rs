use std::env;

use calamine::{open_workbook_auto, DataType, Reader};

use county_data_extractor::pipeline::HEADER_ROW;
use county_data_extractor::workbook::SheetTable;

// Inspection tool for new County Data Tables deliveries: dumps sheet names,
// the raw title block, and the header-indexed view the extractors will see,
// so header-row and column drift is visible before an extraction run.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let file_path = if args.len() > 1 {
        &args[1]
    } else {
        "data/Archuleta County County Data Tables.xlsx"
    };

    println!("Opening workbook: {file_path}");
    let mut workbook = open_workbook_auto(file_path)?;

    println!("\nSheet names:");
    for (i, name) in workbook.sheet_names().iter().enumerate() {
        println!("  {i}: {name}");
    }

    // Allow specifying which sheet to examine
    let sheet_name = if args.len() > 2 {
        args[2].clone()
    } else {
        "SDO Population".to_string()
    };

    println!("\n\nExamining sheet: {sheet_name}");
    println!("{}", "=".repeat(100));

    let range = workbook.worksheet_range(&sheet_name)?;
    println!("Dimensions: {:?}", range.get_size());

    println!("\nTitle block (rows above the header):");
    for (row_idx, row) in range.rows().enumerate().take(HEADER_ROW) {
        let rendered: Vec<String> = row
            .iter()
            .take(12)
            .map(|cell| {
                if cell.is_empty() {
                    "[empty]".to_string()
                } else {
                    format!("[{cell}]")
                }
            })
            .collect();
        println!("Row {row_idx:2}: {}", rendered.join(" "));
    }

    let table = SheetTable::from_range(&sheet_name, &range, HEADER_ROW)?;

    println!("\nColumns as the extractors address them:");
    for (position, column) in table.columns().iter().enumerate() {
        println!("  {position:3}: {column}");
    }

    println!("\nFirst data rows (showing first 12 columns):");
    println!("{}", "=".repeat(100));
    for (row_idx, row) in table.rows().enumerate().take(10) {
        let rendered: Vec<String> = table
            .columns()
            .iter()
            .take(12)
            .map(|column| match row.cell(column) {
                Some(cell) if !cell.is_empty() => format!("[{cell}]"),
                _ => "[empty]".to_string(),
            })
            .collect();
        println!("Row {row_idx:2}: {}", rendered.join(" "));
    }

    Ok(())
}
