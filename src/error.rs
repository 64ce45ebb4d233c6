use rust_xlsxwriter::{ColNum, RowNum, XlsxError};
use thiserror::Error;

/// Errors that can occur while building a workbook
///
/// Every variant wraps an engine error and identifies the node whose
/// creation the engine rejected. The builder itself has no failure modes
/// of its own: content resolution is total, and index bookkeeping cannot
/// go out of range before the engine refuses the write.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("sheet {name:?}: {source}")]
    Sheet { name: String, source: XlsxError },

    #[error("cell at row {row}, column {col}: {source}")]
    Cell {
        row: RowNum,
        col: ColNum,
        source: XlsxError,
    },

    #[error("save workbook: {source}")]
    Save { source: XlsxError },
}

pub type Result<T> = std::result::Result<T, BuildError>;
