use crate::cell::write_content;
use crate::content::CellContent;
use crate::error::{BuildError, Result};
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet, XlsxError};
use std::path::Path;

/// Build a workbook by running `configure` against a fresh root scope.
///
/// Returns the populated engine workbook; the caller decides how to
/// serialize it (`save`, `save_to_buffer`, ...).
///
/// # Errors
///
/// Returns the first engine error raised inside `configure`; sheets and
/// cells written before the failure are not rolled back.
pub fn workbook<F>(configure: F) -> Result<Workbook>
where
    F: FnOnce(&mut WorkbookScope) -> Result<()>,
{
    let mut workbook = Workbook::new();
    let mut scope = WorkbookScope {
        workbook: &mut workbook,
        style: None,
        used_names: Vec::new(),
    };
    configure(&mut scope)?;
    Ok(workbook)
}

/// Build a workbook with a default style inherited by every sheet, row,
/// and cell that does not override it.
///
/// # Errors
///
/// Returns the first engine error raised inside `configure`.
pub fn workbook_with_style<F>(style: &Format, configure: F) -> Result<Workbook>
where
    F: FnOnce(&mut WorkbookScope) -> Result<()>,
{
    let mut workbook = Workbook::new();
    let mut scope = WorkbookScope {
        workbook: &mut workbook,
        style: Some(style.clone()),
        used_names: Vec::new(),
    };
    configure(&mut scope)?;
    Ok(workbook)
}

/// Build a workbook and save it to `path` in one call.
///
/// # Errors
///
/// Returns the first engine error raised inside `configure`, or
/// [`BuildError::Save`] if serialization fails.
pub fn save_xlsx<P, F>(path: P, configure: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut WorkbookScope) -> Result<()>,
{
    let mut workbook = workbook(configure)?;
    workbook
        .save(path.as_ref())
        .map_err(|source| BuildError::Save { source })?;
    Ok(())
}

/// Two-level style override: an explicit style wins, else the inherited
/// default applies, else none.
fn effective_style<'a>(
    explicit: Option<&'a Format>,
    inherited: Option<&'a Format>,
) -> Option<&'a Format> {
    explicit.or(inherited)
}

/// Root scope; creates sheets.
///
/// Obtained from [`workbook`] or [`workbook_with_style`]. Only
/// child-creation methods are exposed, so writes always flow
/// workbook → sheet → row → cell.
pub struct WorkbookScope<'a> {
    workbook: &'a mut Workbook,
    style: Option<Format>,
    // Lowercased names of every sheet created so far; the engine only
    // discovers collisions at save time.
    used_names: Vec<String>,
}

impl WorkbookScope<'_> {
    /// Append one sheet and run `configure` against its scope.
    ///
    /// With `name: None` the engine auto-names the sheet (`Sheet1`,
    /// `Sheet2`, ...). The sheet's default style is `style`, or this
    /// workbook's style when `style` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Sheet`] if the name is invalid (blank, too
    /// long, bad characters) or already used in this workbook in any
    /// letter case, or whatever `configure` raises.
    pub fn sheet<F>(
        &mut self,
        name: Option<&str>,
        style: Option<&Format>,
        configure: F,
    ) -> Result<()>
    where
        F: FnOnce(&mut SheetScope) -> Result<()>,
    {
        let style = effective_style(style, self.style.as_ref()).cloned();
        let worksheet = self.workbook.add_worksheet();
        if let Some(name) = name {
            worksheet.set_name(name).map_err(|source| BuildError::Sheet {
                name: name.to_string(),
                source,
            })?;
        }

        // `set_name` validates a name in isolation; the engine notices
        // collisions only at save time, comparing case-insensitively.
        let assigned = worksheet.name();
        let key = assigned.to_lowercase();
        if self.used_names.contains(&key) {
            return Err(BuildError::Sheet {
                name: assigned.clone(),
                source: XlsxError::SheetnameReused(assigned),
            });
        }
        self.used_names.push(key);

        let mut scope = SheetScope {
            worksheet,
            style,
            next_row: 0,
        };
        configure(&mut scope)
    }

    /// The underlying engine workbook, for operations outside the
    /// builder's scope. Writes made through it are not index-tracked,
    /// and sheets added through it are invisible to the duplicate-name
    /// check.
    pub fn workbook_mut(&mut self) -> &mut Workbook {
        self.workbook
    }
}

/// Scope over one sheet; creates rows at strictly increasing indices.
pub struct SheetScope<'a> {
    worksheet: &'a mut Worksheet,
    style: Option<Format>,
    next_row: RowNum,
}

impl SheetScope<'_> {
    /// Create the next row and run `configure` against its scope.
    ///
    /// Rows occupy indices `0, 1, 2, ...` in call order. The row's default
    /// style is `style`, or this sheet's style when `style` is `None`.
    ///
    /// # Errors
    ///
    /// Returns whatever `configure` raises.
    pub fn row<F>(&mut self, style: Option<&Format>, configure: F) -> Result<()>
    where
        F: FnOnce(&mut RowScope) -> Result<()>,
    {
        let row = self.next_row;
        self.next_row += 1;
        let style = effective_style(style, self.style.as_ref()).cloned();

        let mut scope = RowScope {
            worksheet: &mut *self.worksheet,
            row,
            style,
            next_col: 0,
        };
        configure(&mut scope)
    }

    /// Consume the next row index without writing any cells.
    ///
    /// The index is spent exactly as if [`row`](Self::row) had been
    /// called with an empty body; following rows land one lower.
    pub fn empty_row(&mut self) {
        self.next_row += 1;
    }

    /// The underlying engine worksheet, for operations outside the
    /// builder's scope (column widths, merged ranges, ...). Writes made
    /// through it are not index-tracked.
    pub fn worksheet_mut(&mut self) -> &mut Worksheet {
        self.worksheet
    }
}

/// Scope over one row; writes cells at strictly increasing indices.
pub struct RowScope<'a> {
    worksheet: &'a mut Worksheet,
    row: RowNum,
    style: Option<Format>,
    next_col: ColNum,
}

impl RowScope<'_> {
    /// Write the next cell of this row.
    ///
    /// Cells occupy indices `0, 1, 2, ...` in call order; there is no way
    /// to skip an index or overwrite an earlier cell. The applied style
    /// is `style`, or this row's style when `style` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Cell`] if the engine rejects the write
    /// (for instance past Excel's row or column limits).
    pub fn cell(&mut self, content: impl Into<CellContent>, style: Option<&Format>) -> Result<()> {
        let col = self.next_col;
        self.next_col += 1;
        let style = effective_style(style, self.style.as_ref());

        write_content(self.worksheet, self.row, col, &content.into(), style).map_err(|source| {
            BuildError::Cell {
                row: self.row,
                col,
                source,
            }
        })
    }

    /// Write one unstyled cell per element, in iterator order.
    ///
    /// # Errors
    ///
    /// Returns the first failing write, leaving earlier cells in place.
    pub fn cells<I>(&mut self, contents: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<CellContent>,
    {
        for content in contents {
            self.cell(content, None)?;
        }
        Ok(())
    }

    /// Write a blank cell, consuming the next cell index.
    ///
    /// With a style the engine materializes a formatted blank; without
    /// one the index is spent and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Cell`] if the engine rejects the write.
    pub fn blank(&mut self, style: Option<&Format>) -> Result<()> {
        self.cell(CellContent::Empty, style)
    }

    /// The fixed index this row writes to.
    #[must_use]
    pub fn index(&self) -> RowNum {
        self.row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_indices_advance_in_call_order() {
        let mut worksheet = Worksheet::new();
        let mut sheet = SheetScope {
            worksheet: &mut worksheet,
            style: None,
            next_row: 0,
        };

        let mut seen = Vec::new();
        sheet
            .row(None, |row| {
                seen.push(row.index());
                Ok(())
            })
            .unwrap();
        sheet.empty_row();
        sheet
            .row(None, |row| {
                seen.push(row.index());
                Ok(())
            })
            .unwrap();

        // The empty row spent index 1.
        assert_eq!(seen, vec![0, 2]);
        assert_eq!(sheet.next_row, 3);
    }

    #[test]
    fn test_cell_indices_count_blanks() {
        let mut worksheet = Worksheet::new();
        let mut row = RowScope {
            worksheet: &mut worksheet,
            row: 0,
            style: None,
            next_col: 0,
        };

        row.cell("a", None).unwrap();
        row.blank(None).unwrap();
        row.cell("b", None).unwrap();

        assert_eq!(row.next_col, 3);
    }

    #[test]
    fn test_effective_style_precedence() {
        let explicit = Format::new().set_bold();
        let inherited = Format::new().set_italic();

        let chosen = effective_style(Some(&explicit), Some(&inherited)).unwrap();
        assert!(std::ptr::eq(chosen, &explicit));

        let fallback = effective_style(None, Some(&inherited)).unwrap();
        assert!(std::ptr::eq(fallback, &inherited));

        assert!(effective_style(None, None).is_none());
    }

    #[test]
    fn test_style_inheritance_threads_down() {
        let workbook_style = Format::new().set_bold();
        let override_style = Format::new().set_italic();

        workbook_with_style(&workbook_style, |wb| {
            wb.sheet(None, None, |sheet| {
                sheet.row(None, |row| {
                    assert_eq!(row.style.as_ref(), Some(&workbook_style));
                    Ok(())
                })?;
                sheet.row(Some(&override_style), |row| {
                    assert_eq!(row.style.as_ref(), Some(&override_style));
                    Ok(())
                })
            })?;
            wb.sheet(None, Some(&override_style), |sheet| {
                sheet.row(None, |row| {
                    assert_eq!(row.style.as_ref(), Some(&override_style));
                    Ok(())
                })
            })
        })
        .unwrap();
    }

    #[test]
    fn test_duplicate_sheet_name_is_rejected() {
        let result = workbook(|wb| {
            wb.sheet(Some("Data"), None, |_| Ok(()))?;
            wb.sheet(Some("Data"), None, |_| Ok(()))
        });

        assert!(matches!(
            result,
            Err(BuildError::Sheet { name, .. }) if name == "Data"
        ));
    }

    #[test]
    fn test_duplicate_sheet_name_ignores_case() {
        let result = workbook(|wb| {
            wb.sheet(Some("Data"), None, |_| Ok(()))?;
            wb.sheet(Some("data"), None, |_| Ok(()))
        });

        assert!(matches!(
            result,
            Err(BuildError::Sheet { name, .. }) if name == "data"
        ));
    }

    #[test]
    fn test_auto_name_collision_is_rejected() {
        // The second sheet auto-names itself "Sheet2".
        let result = workbook(|wb| {
            wb.sheet(Some("Sheet2"), None, |_| Ok(()))?;
            wb.sheet(None, None, |_| Ok(()))
        });

        assert!(matches!(
            result,
            Err(BuildError::Sheet { name, .. }) if name == "Sheet2"
        ));
    }

    #[test]
    fn test_cell_error_carries_coordinates() {
        let result = workbook(|wb| {
            wb.sheet(None, None, |sheet| {
                sheet.row(None, |row| {
                    // Burn through every legal column, then one more.
                    for _ in 0..16_384 {
                        row.cell(1, None)?;
                    }
                    row.cell(1, None)
                })
            })
        });

        assert!(matches!(
            result,
            Err(BuildError::Cell { row: 0, col: 16_384, .. })
        ));
    }
}
