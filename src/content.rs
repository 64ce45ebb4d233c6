use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;
use std::fmt;

/// Marks a string as a formula expression rather than literal text.
///
/// The expression is written to the cell unevaluated; recalculation is
/// the spreadsheet application's job. A leading `=` is accepted and
/// stripped by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Formula {
    pub expression: String,
}

impl Formula {
    /// Create a formula from an expression string.
    #[must_use]
    pub fn new(expression: impl Into<String>) -> Self {
        Formula {
            expression: expression.into(),
        }
    }
}

/// Content of a single cell, resolved to a concrete cell type
///
/// Each variant maps to exactly one engine write, so a value can never
/// satisfy two resolution branches. Conversions from primitive types,
/// strings, chrono values, and `Option` construct the variant at the
/// call site.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellContent {
    /// No value; produces a blank cell.
    Empty,
    /// A formula expression, written unevaluated.
    Formula(Formula),
    Bool(bool),
    Int(i64),
    Float(f64),
    /// A calendar date, anchored to midnight.
    Date(NaiveDate),
    /// A wall-clock date and time, carrying no time zone.
    DateTime(NaiveDateTime),
    /// An absolute instant. Rendered in the system's local time zone at
    /// write time, so the cell value depends on the machine's zone.
    Instant(DateTime<Utc>),
    Text(String),
}

impl CellContent {
    /// Create a formula cell content.
    #[must_use]
    pub fn formula(expression: impl Into<String>) -> Self {
        CellContent::Formula(Formula::new(expression))
    }

    /// Create text content from any displayable value.
    ///
    /// This is the catch-all for types without a dedicated conversion:
    /// the value's canonical string form becomes the cell text.
    #[must_use]
    pub fn text(value: impl ToString) -> Self {
        CellContent::Text(value.to_string())
    }
}

impl Default for CellContent {
    fn default() -> Self {
        CellContent::Empty
    }
}

impl fmt::Display for CellContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellContent::Empty => Ok(()),
            CellContent::Formula(formula) => write!(f, "{}", formula.expression),
            CellContent::Bool(b) => write!(f, "{b}"),
            CellContent::Int(i) => write!(f, "{i}"),
            CellContent::Float(x) => write!(f, "{x}"),
            CellContent::Date(d) => write!(f, "{d}"),
            CellContent::DateTime(dt) => write!(f, "{dt}"),
            CellContent::Instant(t) => write!(f, "{t}"),
            CellContent::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<Formula> for CellContent {
    fn from(formula: Formula) -> Self {
        CellContent::Formula(formula)
    }
}

impl From<bool> for CellContent {
    fn from(b: bool) -> Self {
        CellContent::Bool(b)
    }
}

impl From<i64> for CellContent {
    fn from(i: i64) -> Self {
        CellContent::Int(i)
    }
}

impl From<i32> for CellContent {
    fn from(i: i32) -> Self {
        CellContent::Int(i64::from(i))
    }
}

impl From<f64> for CellContent {
    fn from(x: f64) -> Self {
        CellContent::Float(x)
    }
}

impl From<f32> for CellContent {
    fn from(x: f32) -> Self {
        CellContent::Float(f64::from(x))
    }
}

impl From<String> for CellContent {
    fn from(s: String) -> Self {
        CellContent::Text(s)
    }
}

impl From<&str> for CellContent {
    fn from(s: &str) -> Self {
        CellContent::Text(s.to_string())
    }
}

impl From<NaiveDate> for CellContent {
    fn from(d: NaiveDate) -> Self {
        CellContent::Date(d)
    }
}

impl From<NaiveDateTime> for CellContent {
    fn from(dt: NaiveDateTime) -> Self {
        CellContent::DateTime(dt)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CellContent {
    fn from(t: DateTime<Tz>) -> Self {
        CellContent::Instant(t.with_timezone(&Utc))
    }
}

impl<T: Into<CellContent>> From<Option<T>> for CellContent {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellContent::Empty,
        }
    }
}
