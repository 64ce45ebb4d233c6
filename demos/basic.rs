//! Demo script for the closure-scoped workbook builder.
//!
//! Run with: cargo run --example basic

use chrono::NaiveDate;
use sheetwright::{workbook, CellContent, Formula};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Workbook Builder Demo ===\n");

    let mut built = workbook(|wb| {
        wb.sheet(Some("People"), None, |sheet| {
            sheet.row(None, |row| row.cells(["Name", "Age", "Member"]))?;
            sheet.row(None, |row| {
                row.cell("Ada", None)?;
                row.cell(36, None)?;
                row.cell(true, None)
            })?;
            sheet.row(None, |row| {
                row.cell("Grace", None)?;
                row.cell(45, None)?;
                row.cell(false, None)
            })
        })?;

        wb.sheet(Some("Kinds"), None, |sheet| {
            sheet.row(None, |row| {
                row.cells(["float", "date", "formula", "blank", "char"])
            })?;
            sheet.row(None, |row| {
                row.cell(3.25, None)?;
                row.cell(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), None)?;
                row.cell(Formula::new("A2*2"), None)?;
                row.blank(None)?;
                row.cell(CellContent::text('x'), None)
            })
        })
    })?;

    println!("Built {} sheets", built.worksheets_mut().len());

    let path = env::temp_dir().join("basic_demo.xlsx");
    built.save(&path)?;
    println!("Saved workbook to: {}", path.display());

    Ok(())
}
