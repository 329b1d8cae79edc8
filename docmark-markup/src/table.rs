//! Markdown table insertion
//!
//! A table request is typed by the author as `C:R` (columns, rows). The text is
//! checked by [`validate`], which distinguishes three outcomes:
//!
//! - [`Validation::Valid`]: the request can be rendered
//! - [`Validation::Invalid`]: the request parses but breaks a rule; the author
//!   is told why through the [`Notifier`]
//! - [`Validation::Malformed`]: one of the fields is not an integer at all; the
//!   request is dropped without a message
//!
//! [`render`] then produces a pipe table skeleton with labelled header and row
//! cells, ready to be inserted as-is.

use crate::host::Notifier;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::num::IntErrorKind;

pub const MAX_COLUMNS: i64 = 4;
pub const MAX_ROWS: i64 = 50;

/// Every cell of a generated table has this many characters between pipes.
const CELL_WIDTH: usize = 9;

static INTEGER_FIELD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d*$").expect("valid regex"));

/// Dimensions of a table that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub columns: usize,
    pub rows: usize,
}

/// Why a well-formed table request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Not exactly two `:`-separated fields, or a field with no digits
    MalformedCountSyntax,
    NonPositiveDimension,
    TooManyColumns,
    TooManyRows,
}

impl InvalidReason {
    /// Message shown to the author.
    pub fn message(&self) -> &'static str {
        match self {
            InvalidReason::MalformedCountSyntax => {
                "Please input the number of columns and rows as C:R e.g. 3:4"
            }
            InvalidReason::NonPositiveDimension => {
                "The number of rows or columns can't be zero or negative."
            }
            InvalidReason::TooManyColumns => "You can only insert up to four columns via docmark.",
            InvalidReason::TooManyRows => "You can only insert up to 50 rows via docmark.",
        }
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Valid(TableSpec),
    Invalid(InvalidReason),
    Malformed,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid(_))
    }

    pub fn spec(&self) -> Option<TableSpec> {
        match self {
            Validation::Valid(spec) => Some(*spec),
            _ => None,
        }
    }
}

/// Parse one field that already matched [`INTEGER_FIELD`].
///
/// `None` stands for "not a number" (empty string or a lone `-`). Values too
/// large for `i64` saturate so they still fail the size checks.
fn parse_field(text: &str) -> Option<i64> {
    match text.parse::<i64>() {
        Ok(value) => Some(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Check a table request.
///
/// `field_count` is the number of fields the raw `C:R` text was split into;
/// `col_text` and `row_text` are the first two of them. Invalid requests are
/// reported through `notifier` before returning.
pub fn validate(
    field_count: usize,
    col_text: &str,
    row_text: &str,
    notifier: &mut dyn Notifier,
) -> Validation {
    log::debug!("table request: fields={field_count} columns={col_text:?} rows={row_text:?}");
    if !INTEGER_FIELD.is_match(col_text) || !INTEGER_FIELD.is_match(row_text) {
        return Validation::Malformed;
    }

    let columns = parse_field(col_text);
    let rows = parse_field(row_text);

    let reason = match (columns, rows) {
        (Some(columns), Some(rows)) if field_count == 2 => {
            if columns <= 0 || rows <= 0 {
                InvalidReason::NonPositiveDimension
            } else if columns > MAX_COLUMNS {
                InvalidReason::TooManyColumns
            } else if rows > MAX_ROWS {
                InvalidReason::TooManyRows
            } else {
                return Validation::Valid(TableSpec {
                    columns: columns as usize,
                    rows: rows as usize,
                });
            }
        }
        _ => InvalidReason::MalformedCountSyntax,
    };

    notifier.warn(reason.message());
    Validation::Invalid(reason)
}

/// Split raw `C:R` text and validate it.
pub fn parse_table_request(text: &str, notifier: &mut dyn Notifier) -> Validation {
    let fields: Vec<&str> = text.split(':').collect();
    let col_text = fields.first().copied().unwrap_or_default();
    let row_text = fields.get(1).copied().unwrap_or_default();
    validate(fields.len(), col_text, row_text, notifier)
}

/// Render a table skeleton with `columns` columns and `rows` body rows.
///
/// Callers are expected to have validated the dimensions; both must be at
/// least one.
pub fn render(columns: usize, rows: usize) -> String {
    let mut table = String::new();

    for column in 1..=columns {
        push_cell(&mut table, &format!("Column{column}"));
    }
    table.push_str("|\n");

    for _ in 0..columns {
        table.push('|');
        table.push_str(&"-".repeat(CELL_WIDTH));
    }
    table.push_str("|\n");

    for row in 1..=rows {
        push_cell(&mut table, &format!("Row{row}"));
        for _ in 1..columns {
            push_cell(&mut table, "");
        }
        table.push_str("|\n");
    }

    table
}

fn push_cell(table: &mut String, label: &str) {
    table.push('|');
    table.push_str(&format!("{label:<width$}", width = CELL_WIDTH));
}

impl TableSpec {
    pub fn render(&self) -> String {
        render(self.columns, self.rows)
    }
}
