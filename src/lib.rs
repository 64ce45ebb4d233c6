//! Closure-scoped builder for XLSX workbooks
//!
//! A thin, declarative layer over [`rust_xlsxwriter`]: nested scopes build a
//! workbook top-down (workbook → sheet → row → cell), writing eagerly into
//! the engine as each call happens. Rows and cells occupy strictly
//! increasing indices in call order, and styles inherit downward until a
//! scope overrides them. The API is write-once and append-only; there is no
//! document model to mutate afterwards, only the engine workbook to save.
//!
//! # Examples
//!
//! ## Building and saving a workbook
//!
//! ```no_run
//! use sheetwright::workbook;
//!
//! let mut workbook = workbook(|wb| {
//!     wb.sheet(Some("People"), None, |sheet| {
//!         sheet.row(None, |row| row.cells(["Name", "Age"]))?;
//!         sheet.row(None, |row| {
//!             row.cell("Ada", None)?;
//!             row.cell(36, None)
//!         })
//!     })
//! })?;
//!
//! workbook.save("people.xlsx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Content types
//!
//! Cell content is an explicit union; conversions pick the cell type at
//! the call site, so nothing is ever guessed from a string:
//!
//! ```
//! use chrono::NaiveDate;
//! use sheetwright::{workbook, CellContent, Formula};
//!
//! let mut workbook = workbook(|wb| {
//!     wb.sheet(None, None, |sheet| {
//!         sheet.row(None, |row| {
//!             row.cell("label", None)?;                    // text
//!             row.cell(12.5, None)?;                       // number
//!             row.cell(true, None)?;                       // boolean
//!             row.cell(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), None)?;
//!             row.cell(Formula::new("B1*2"), None)?;       // formula
//!             row.cell(CellContent::Empty, None)           // blank
//!         })
//!     })
//! })?;
//!
//! let bytes = workbook.save_to_buffer()?;
//! assert!(!bytes.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Styles
//!
//! Styles are engine [`Format`] values. A style passed to `sheet`, `row`,
//! or `cell` overrides the inherited default for that node and everything
//! below it; with no style anywhere, engine defaults apply:
//!
//! ```
//! use sheetwright::{workbook_with_style, Format};
//!
//! let base = Format::new().set_font_name("Courier New");
//! let bold = Format::new().set_bold();
//!
//! let workbook = workbook_with_style(&base, |wb| {
//!     wb.sheet(None, None, |sheet| {
//!         sheet.row(Some(&bold), |row| row.cell("Header", None))?;
//!         sheet.row(None, |row| row.cell("body text", None))
//!     })
//! })?;
//! # drop(workbook);
//! # Ok::<(), sheetwright::BuildError>(())
//! ```
//!
//! # Dates and time zones
//!
//! Naive [`chrono`] values (`NaiveDate`, `NaiveDateTime`) are written
//! as-is: cells store wall-clock serial numbers, so no time zone is
//! involved. Zone-aware values are canonicalized to an instant and
//! rendered in the system's local time zone at write time, so the cell
//! a given instant produces depends on the machine building the file.
//! Date cells display as plain numbers unless a date-formatted style is
//! applied, e.g. `Format::new().set_num_format("yyyy-mm-dd")`.

mod builder;
mod cell;
mod content;
mod error;

/// Re-export builder entry points and scope types.
pub use builder::{save_xlsx, workbook, workbook_with_style, RowScope, SheetScope, WorkbookScope};
/// Re-export cell content types.
pub use content::{CellContent, Formula};
/// Re-export error types.
pub use error::{BuildError, Result};
/// Re-export the engine types that appear in this crate's API.
pub use rust_xlsxwriter::{
    ColNum, Color, Format, FormatAlign, FormatBorder, RowNum, Workbook, Worksheet,
};
