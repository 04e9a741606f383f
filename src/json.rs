//! JSON document descriptions.
//!
//! A description is an object with a `blocks` array. Each block is tagged by
//! `type`:
//!
//! ```json
//! {
//!   "blocks": [
//!     { "type": "heading", "level": 1, "text": "Title" },
//!     { "type": "paragraph", "text": "Body" },
//!     { "type": "list", "ordered": false, "items": ["a", ["b", "c"]] },
//!     { "type": "code", "text": "fn main() {}", "lang": "rust" },
//!     { "type": "table", "rows": [{ "a": 1 }], "align": ["right"] },
//!     { "type": "rule" }
//!   ]
//! }
//! ```
//!
//! Blocks are appended through [`Doc`], so the same validation applies as
//! for the builder API.

use std::io::Read;

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::doc::{Doc, Row, Table};
use crate::error::{Error, Result};
use crate::model::{ListItem, Value};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DocumentDesc {
    #[serde(default)]
    blocks: Vec<BlockDesc>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum BlockDesc {
    Heading {
        level: u8,
        #[serde(default)]
        text: JsonValue,
    },
    Paragraph {
        #[serde(default)]
        text: JsonValue,
    },
    List {
        #[serde(default)]
        ordered: bool,
        #[serde(default)]
        items: Option<Vec<JsonValue>>,
    },
    Code {
        #[serde(default)]
        text: JsonValue,
        #[serde(default)]
        lang: Option<String>,
    },
    Table {
        #[serde(default)]
        rows: Option<Vec<JsonValue>>,
        #[serde(default)]
        headers: Option<Vec<JsonValue>>,
        #[serde(default)]
        align: Option<Vec<String>>,
    },
    #[serde(alias = "hr")]
    Rule,
}

impl Doc {
    /// Build a document from a JSON description.
    ///
    /// # Examples
    ///
    /// ```
    /// use simdoc::Doc;
    ///
    /// let doc = Doc::from_json_str(
    ///     r#"{"blocks": [{"type": "heading", "level": 2, "text": "Hi"}, {"type": "rule"}]}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(doc.to_markdown().unwrap(), "## Hi\n\n---\n");
    /// ```
    pub fn from_json_str(json: &str) -> Result<Doc> {
        let desc: DocumentDesc = serde_json::from_str(json)?;
        build(desc)
    }

    /// Build a document from a JSON description read from `reader`.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Doc> {
        let desc: DocumentDesc = serde_json::from_reader(reader)?;
        build(desc)
    }
}

fn build(desc: DocumentDesc) -> Result<Doc> {
    let mut doc = Doc::new();
    for block in desc.blocks {
        append(&mut doc, block)?;
    }
    Ok(doc)
}

fn append(doc: &mut Doc, block: BlockDesc) -> Result<()> {
    match block {
        BlockDesc::Heading { level, text } => doc.heading(level, to_value(&text))?,
        BlockDesc::Paragraph { text } => doc.paragraph(to_value(&text)),
        BlockDesc::List { ordered, items } => {
            let items: Vec<ListItem> = items
                .ok_or(Error::MissingListItems)?
                .iter()
                .map(to_item)
                .collect();
            if ordered {
                doc.ordered_list(items);
            } else {
                doc.unordered_list(items);
            }
        }
        BlockDesc::Code { text, lang } => doc.code(to_value(&text), lang.as_deref()),
        BlockDesc::Table {
            rows,
            headers,
            align,
        } => {
            let rows = rows
                .ok_or(Error::MissingTableRows)?
                .iter()
                .map(to_row)
                .collect::<Result<Vec<Row>>>()?;
            let mut table = Table::new(rows);
            if let Some(headers) = headers {
                table = table.with_headers(headers.iter().map(to_value));
            }
            if let Some(align) = align {
                table = table.with_align(align);
            }
            doc.table(table)?;
        }
        BlockDesc::Rule => doc.horizontal_rule(),
    }
    Ok(())
}

/// Convert a JSON value to its display form.
///
/// `null` is empty, strings are used as-is, everything else is written as
/// compact JSON.
fn to_value(json: &JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::EMPTY,
        JsonValue::String(s) => Value::text(s.as_str()),
        other => Value::text(other.to_string()),
    }
}

fn to_item(json: &JsonValue) -> ListItem {
    match json {
        JsonValue::Array(items) => ListItem::Nested(items.iter().map(to_item).collect()),
        other => ListItem::Item(to_value(other)),
    }
}

fn to_row(json: &JsonValue) -> Result<Row> {
    match json {
        JsonValue::Array(cells) => Ok(Row::cells(cells.iter().map(to_value))),
        JsonValue::Object(fields) => Ok(Row::fields(
            fields.iter().map(|(k, v)| (k.as_str(), to_value(v))),
        )),
        other => Err(Error::InvalidTableRow(other.to_string())),
    }
}
