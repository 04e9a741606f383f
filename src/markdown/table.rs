//! Pipe table rendering.
//!
//! Every rendered row (header, alignment markers, data) has exactly the same
//! number of cells: the larger of the header width and the widest row.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::{TableBlock, Value};

use super::escape::{format_cell_text, format_table_cell};

/// Column alignment in a pipe table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Marker written in the delimiter row.
    pub fn marker(self) -> &'static str {
        match self {
            Alignment::Left => "---",
            Alignment::Center => ":---:",
            Alignment::Right => "---:",
        }
    }
}

impl FromStr for Alignment {
    type Err = Error;

    /// Parse an alignment token, ignoring ASCII case.
    fn from_str(token: &str) -> Result<Self> {
        match token.to_ascii_lowercase().as_str() {
            "l" | "left" => Ok(Alignment::Left),
            "c" | "center" => Ok(Alignment::Center),
            "r" | "right" => Ok(Alignment::Right),
            _ => Err(Error::InvalidAlignment(token.to_string())),
        }
    }
}

/// Number of columns the table renders with.
///
/// Fails with [`Error::EmptyTable`] when neither headers nor rows have any cell.
pub fn column_count(table: &TableBlock) -> Result<usize> {
    let widest_row = table.rows.iter().map(Vec::len).max().unwrap_or(0);
    match table.headers.len().max(widest_row) {
        0 => Err(Error::EmptyTable),
        n => Ok(n),
    }
}

/// Resolve alignment tokens to exactly `width` entries.
///
/// Missing entries default to left; extra entries are dropped. Every supplied
/// token is validated, including the ones that get dropped.
pub fn normalize_alignment(align: Option<&[String]>, width: usize) -> Result<Vec<Alignment>> {
    let Some(tokens) = align else {
        return Ok(vec![Alignment::Left; width]);
    };
    let mut parsed = tokens
        .iter()
        .map(|token| token.parse::<Alignment>())
        .collect::<Result<Vec<Alignment>>>()?;
    parsed.resize(width, Alignment::Left);
    Ok(parsed)
}

/// Render a table block.
pub(crate) fn render_table(table: &TableBlock) -> Result<String> {
    let width = column_count(table)?;
    let align = normalize_alignment(table.align.as_deref(), width)?;

    let mut lines = Vec::with_capacity(table.rows.len() + 2);
    lines.push(format_row(header_cells(&table.headers, width)));
    lines.push(format_row(align.iter().map(|a| a.marker().to_string())));
    for row in &table.rows {
        lines.push(format_row(row_cells(row, width)));
    }

    Ok(lines.join("\n"))
}

fn header_cells(headers: &[String], width: usize) -> impl Iterator<Item = String> + '_ {
    headers
        .iter()
        .map(|h| format_cell_text(h))
        .chain(std::iter::repeat(String::new()))
        .take(width)
}

fn row_cells(row: &[Value], width: usize) -> impl Iterator<Item = String> + '_ {
    row.iter()
        .map(format_table_cell)
        .chain(std::iter::repeat(String::new()))
        .take(width)
}

fn format_row(cells: impl Iterator<Item = String>) -> String {
    let cells: Vec<String> = cells.collect();
    format!("| {} |", cells.join(" | "))
}
