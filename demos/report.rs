//! Demo script for a styled report: header formats, zebra striping
//! driven by row indices, a formula total, and a formatted date column.
//!
//! Run with: cargo run --example report

use chrono::NaiveDate;
use sheetwright::{workbook_with_style, Color, Format, FormatBorder, Formula};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Styled Report Demo ===\n");

    let base = Format::new().set_font_name("Calibri").set_font_size(11);
    let header = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4F81BD))
        .set_font_color(Color::White);
    let stripe = Format::new().set_background_color(Color::RGB(0xDCE6F1));
    let money = Format::new().set_num_format("#,##0.00");
    let day = Format::new().set_num_format("yyyy-mm-dd");
    let total = Format::new().set_bold().set_border_top(FormatBorder::Double);

    let orders = [
        ("Widget", 2, 19.99, NaiveDate::from_ymd_opt(2024, 1, 12).unwrap()),
        ("Gadget", 1, 29.99, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
        ("Gizmo", 5, 9.99, NaiveDate::from_ymd_opt(2024, 2, 2).unwrap()),
    ];

    let mut built = workbook_with_style(&base, |wb| {
        wb.sheet(Some("Orders"), None, |sheet| {
            sheet.row(Some(&header), |row| {
                row.cells(["Product", "Qty", "Unit Price", "Ordered"])
            })?;

            for (product, qty, price, ordered) in orders {
                sheet.row(None, |row| {
                    // Shade alternating rows from the assigned index.
                    let shade = (row.index() % 2 == 0).then_some(&stripe);
                    row.cell(product, shade)?;
                    row.cell(qty, shade)?;
                    row.cell(price, Some(&money))?;
                    row.cell(ordered, Some(&day))
                })?;
            }

            sheet.empty_row();
            sheet.row(None, |row| {
                row.cell("Total", Some(&total))?;
                row.blank(Some(&total))?;
                row.cell(Formula::new("SUMPRODUCT(B2:B4,C2:C4)"), Some(&total))?;
                row.blank(Some(&total))
            })
        })
    })?;

    let path = env::temp_dir().join("report_demo.xlsx");
    built.save(&path)?;
    println!("Saved report to: {}", path.display());

    Ok(())
}
