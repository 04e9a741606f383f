//! Append-only document builder.
//!
//! [`Doc`] validates arguments, normalizes text and pushes block values.
//! Blocks are never edited or removed once appended.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::io::save_markdown;
use crate::markdown::{self, normalize_newlines};
use crate::model::{
    Block, CodeBlock, Heading, ListBlock, ListItem, Paragraph, TableBlock, Value,
};

/// One table row as supplied by the caller.
///
/// All rows of a table must have the same shape: either positional cells or
/// named fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// Cells in column order.
    Cells(Vec<Value>),
    /// Cells keyed by header name.
    Fields(BTreeMap<String, Value>),
}

impl Row {
    /// Build a positional row.
    pub fn cells<I, T>(cells: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Row::Cells(cells.into_iter().map(Into::into).collect())
    }

    /// Build a row of named fields.
    pub fn fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Row::Fields(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<T: Into<Value>> From<Vec<T>> for Row {
    fn from(cells: Vec<T>) -> Self {
        Row::cells(cells)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Row {
    fn from(cells: [T; N]) -> Self {
        Row::cells(cells)
    }
}

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for Row {
    fn from(fields: BTreeMap<K, V>) -> Self {
        Row::fields(fields)
    }
}

impl<K: Into<String>, V: Into<Value>, S> From<HashMap<K, V, S>> for Row {
    fn from(fields: HashMap<K, V, S>) -> Self {
        Row::fields(fields)
    }
}

/// Table contents and options passed to [`Doc::table`].
///
/// # Examples
///
/// ```
/// use simdoc::{Doc, Table};
///
/// let mut doc = Doc::new();
/// doc.table(
///     Table::new([[1, 2], [3, 4]])
///         .with_headers(["a", "b"])
///         .with_align(["left", "right"]),
/// )
/// .unwrap();
/// assert_eq!(
///     doc.to_markdown().unwrap(),
///     "| a | b |\n| --- | ---: |\n| 1 | 2 |\n| 3 | 4 |\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<Row>,
    pub headers: Option<Vec<String>>,
    pub align: Option<Vec<String>>,
}

impl Table {
    /// Create a table from rows, with default headers and alignment.
    pub fn new<I, R>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Row>,
    {
        Self {
            rows: rows.into_iter().map(Into::into).collect(),
            headers: None,
            align: None,
        }
    }

    /// Set explicit headers. An empty list means "use the defaults".
    pub fn with_headers<I, T>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        self.headers = Some(
            headers
                .into_iter()
                .map(|h| {
                    let value: Value = h.into();
                    value.as_str().to_string()
                })
                .collect(),
        );
        self
    }

    /// Set per-column alignment tokens (`left`/`center`/`right`, `l`/`c`/`r`).
    pub fn with_align<I, T>(mut self, align: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.align = Some(align.into_iter().map(Into::into).collect());
        self
    }
}

/// Append-only document builder.
///
/// # Examples
///
/// ```
/// use simdoc::Doc;
///
/// let mut doc = Doc::new();
/// doc.h1("Title");
/// doc.p("A\nB");
/// doc.hr();
/// assert_eq!(doc.to_markdown().unwrap(), "# Title\n\nA\nB\n\n---\n");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Doc {
    blocks: Vec<Block>,
}

impl Doc {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of blocks appended so far.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Alias for [`Doc::len`].
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Append a heading.
    ///
    /// Line breaks in `text` are collapsed to spaces. Fails with
    /// [`Error::InvalidHeadingLevel`] unless `level` is 1 through 6.
    pub fn heading(&mut self, level: u8, text: impl Into<Value>) -> Result<()> {
        if !(1..=6).contains(&level) {
            return Err(Error::InvalidHeadingLevel(level));
        }
        self.push_valid_heading(level, text);
        Ok(())
    }

    /// Alias for [`Doc::heading`].
    pub fn h(&mut self, level: u8, text: impl Into<Value>) -> Result<()> {
        self.heading(level, text)
    }

    pub fn h1(&mut self, text: impl Into<Value>) {
        self.push_valid_heading(1, text);
    }

    pub fn h2(&mut self, text: impl Into<Value>) {
        self.push_valid_heading(2, text);
    }

    pub fn h3(&mut self, text: impl Into<Value>) {
        self.push_valid_heading(3, text);
    }

    pub fn h4(&mut self, text: impl Into<Value>) {
        self.push_valid_heading(4, text);
    }

    pub fn h5(&mut self, text: impl Into<Value>) {
        self.push_valid_heading(5, text);
    }

    pub fn h6(&mut self, text: impl Into<Value>) {
        self.push_valid_heading(6, text);
    }

    fn push_valid_heading(&mut self, level: u8, text: impl Into<Value>) {
        let value: Value = text.into();
        let text = normalize_newlines(value.as_str()).replace('\n', " ");
        self.blocks.push(Block::Heading(Heading { level, text }));
    }

    /// Append a paragraph.
    ///
    /// Internal newlines are kept. Blank or whitespace-only text appends
    /// nothing.
    pub fn paragraph(&mut self, text: impl Into<Value>) {
        let value: Value = text.into();
        let text = normalize_newlines(value.as_str());
        if text.trim().is_empty() {
            tracing::debug!("skipping blank paragraph");
            return;
        }
        self.blocks.push(Block::Paragraph(Paragraph {
            text: text.into_owned(),
        }));
    }

    /// Alias for [`Doc::paragraph`].
    pub fn p(&mut self, text: impl Into<Value>) {
        self.paragraph(text);
    }

    /// Append an unordered (`-`) list. Nested sub-lists are unordered too.
    pub fn unordered_list<I, T>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<ListItem>,
    {
        self.push_list(false, items);
    }

    /// Alias for [`Doc::unordered_list`].
    pub fn ul<I, T>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<ListItem>,
    {
        self.unordered_list(items);
    }

    /// Append an ordered (`1.`) list. Nested sub-lists are ordered too.
    pub fn ordered_list<I, T>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<ListItem>,
    {
        self.push_list(true, items);
    }

    /// Alias for [`Doc::ordered_list`].
    pub fn ol<I, T>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<ListItem>,
    {
        self.ordered_list(items);
    }

    fn push_list<I, T>(&mut self, ordered: bool, items: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<ListItem>,
    {
        let items = items.into_iter().map(Into::into).collect();
        self.blocks.push(Block::List(ListBlock { ordered, items }));
    }

    /// Append a fenced code block with an optional language tag.
    pub fn code(&mut self, text: impl Into<Value>, lang: Option<&str>) {
        let value: Value = text.into();
        let text = normalize_newlines(value.as_str()).into_owned();
        self.blocks.push(Block::Code(CodeBlock {
            text,
            lang: lang.map(str::to_string),
        }));
    }

    /// Append a table.
    ///
    /// Rows must all be [`Row::Cells`] or all [`Row::Fields`]; a mix fails
    /// with [`Error::MixedTableRows`]. Without explicit headers, field rows
    /// use the sorted union of their keys and cell rows get blank headers as
    /// wide as the widest row.
    pub fn table(&mut self, table: Table) -> Result<()> {
        let Table {
            rows,
            headers,
            align,
        } = table;
        let headers = headers.filter(|h| !h.is_empty());
        let align = align.filter(|a| !a.is_empty());

        let by_field = matches!(rows.first(), Some(Row::Fields(_)));
        let (headers, rows) = if by_field {
            normalize_field_rows(rows, headers)?
        } else {
            normalize_cell_rows(rows, headers)?
        };

        self.blocks.push(Block::Table(TableBlock {
            headers,
            rows,
            align,
        }));
        Ok(())
    }

    /// Append a horizontal rule.
    pub fn horizontal_rule(&mut self) {
        self.blocks.push(Block::Rule);
    }

    /// Alias for [`Doc::horizontal_rule`].
    pub fn hr(&mut self) {
        self.horizontal_rule();
    }

    /// Render the document to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        markdown::render(&self.blocks)
    }

    /// Render the document and write it to `path`, creating parent
    /// directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let text = self.to_markdown()?;
        save_markdown(&text, path)
    }
}

impl fmt::Debug for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Doc")
            .field("blocks", &self.blocks.len())
            .finish()
    }
}

type NormalizedRows = (Vec<String>, Vec<Vec<Value>>);

fn normalize_field_rows(rows: Vec<Row>, headers: Option<Vec<String>>) -> Result<NormalizedRows> {
    let mut field_rows = Vec::with_capacity(rows.len());
    for row in rows {
        match row {
            Row::Fields(fields) => field_rows.push(fields),
            Row::Cells(_) => return Err(Error::MixedTableRows),
        }
    }

    let headers = headers.unwrap_or_else(|| {
        let keys: BTreeSet<&String> = field_rows.iter().flat_map(|row| row.keys()).collect();
        keys.into_iter().cloned().collect()
    });

    let rows = field_rows
        .into_iter()
        .map(|fields| {
            headers
                .iter()
                .map(|header| fields.get(header).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    Ok((headers, rows))
}

fn normalize_cell_rows(rows: Vec<Row>, headers: Option<Vec<String>>) -> Result<NormalizedRows> {
    let mut cell_rows = Vec::with_capacity(rows.len());
    for row in rows {
        match row {
            Row::Cells(cells) => cell_rows.push(cells),
            Row::Fields(_) => return Err(Error::MixedTableRows),
        }
    }

    let headers = headers.unwrap_or_else(|| {
        let width = cell_rows.iter().map(Vec::len).max().unwrap_or(0);
        vec![String::new(); width]
    });

    Ok((headers, cell_rows))
}
