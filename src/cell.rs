use crate::content::CellContent;
use chrono::Local;
use rust_xlsxwriter::{ColNum, Format, RowNum, Worksheet, XlsxError};

/// Write one resolved `(content, style)` pair to the worksheet.
///
/// Exactly one engine write per call, selected by the content variant.
/// Errors are returned raw; the calling scope attaches the coordinates.
pub(crate) fn write_content(
    worksheet: &mut Worksheet,
    row: RowNum,
    col: ColNum,
    content: &CellContent,
    style: Option<&Format>,
) -> Result<(), XlsxError> {
    match content {
        CellContent::Empty => {
            // An unformatted blank has no representation in the file
            // format; the engine only materializes blanks that carry a
            // format.
            if let Some(format) = style {
                worksheet.write_blank(row, col, format)?;
            }
        }
        CellContent::Formula(formula) => match style {
            Some(format) => {
                worksheet.write_formula_with_format(
                    row,
                    col,
                    formula.expression.as_str(),
                    format,
                )?;
            }
            None => {
                worksheet.write_formula(row, col, formula.expression.as_str())?;
            }
        },
        CellContent::Bool(b) => match style {
            Some(format) => {
                worksheet.write_boolean_with_format(row, col, *b, format)?;
            }
            None => {
                worksheet.write_boolean(row, col, *b)?;
            }
        },
        // Note: Excel stores all numbers as f64, so integers > 2^53
        // (9,007,199,254,740,992) may lose precision
        CellContent::Int(i) => match style {
            Some(format) => {
                worksheet.write_number_with_format(row, col, *i as f64, format)?;
            }
            None => {
                worksheet.write_number(row, col, *i as f64)?;
            }
        },
        CellContent::Float(x) => match style {
            Some(format) => {
                worksheet.write_number_with_format(row, col, *x, format)?;
            }
            None => {
                worksheet.write_number(row, col, *x)?;
            }
        },
        CellContent::Date(d) => match style {
            Some(format) => {
                worksheet.write_datetime_with_format(row, col, d, format)?;
            }
            None => {
                worksheet.write_datetime(row, col, d)?;
            }
        },
        CellContent::DateTime(dt) => match style {
            Some(format) => {
                worksheet.write_datetime_with_format(row, col, dt, format)?;
            }
            None => {
                worksheet.write_datetime(row, col, dt)?;
            }
        },
        CellContent::Instant(t) => {
            // Cells store wall-clock serials, so the instant is rendered
            // in whatever zone the building machine is set to.
            let wall_clock = t.with_timezone(&Local).naive_local();
            match style {
                Some(format) => {
                    worksheet.write_datetime_with_format(row, col, &wall_clock, format)?;
                }
                None => {
                    worksheet.write_datetime(row, col, &wall_clock)?;
                }
            }
        }
        CellContent::Text(s) => match style {
            Some(format) => {
                worksheet.write_string_with_format(row, col, s, format)?;
            }
            None => {
                worksheet.write_string(row, col, s)?;
            }
        },
    }

    Ok(())
}
