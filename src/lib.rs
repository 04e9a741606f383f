//! # simdoc
//!
//! A small builder for structured documents that renders to Markdown.
//!
//! ## Features
//!
//! - Headings, paragraphs, nested lists, fenced code, pipe tables and rules
//! - Code fences sized to safely contain any backtick run in the body
//! - Table cells escaped structurally, with columns padded to a common width
//! - Deterministic output: the same blocks always render to the same text
//!
//! ## Quick Start
//!
//! ```
//! use simdoc::{Doc, ListItem, Table};
//!
//! let mut doc = Doc::new();
//! doc.h1("Report");
//! doc.p("Generated for the weekly sync.");
//! doc.ul(vec![
//!     ListItem::from("alpha"),
//!     ListItem::nested(["beta", "gamma"]),
//! ]);
//! doc.code("let x = 1;", Some("rust"));
//! doc.table(Table::new([["a", "1"], ["b", "2"]]).with_headers(["name", "count"]))
//!     .unwrap();
//! doc.hr();
//!
//! let markdown = doc.to_markdown().unwrap();
//! assert!(markdown.starts_with("# Report\n\n"));
//! ```
//!
//! ## Saving
//!
//! ```no_run
//! use simdoc::Doc;
//!
//! let mut doc = Doc::new();
//! doc.h1("Notes");
//! let path = doc.save("out/notes.md").unwrap();
//! println!("wrote {}", path.display());
//! ```

pub mod doc;
pub mod error;
pub mod io;
pub mod markdown;
pub mod model;

#[cfg(feature = "json")]
pub mod json;

pub use doc::{Doc, Row, Table};
pub use error::{Error, Result};
pub use io::{save_markdown, write_markdown};
pub use markdown::render;
pub use model::{Block, CodeBlock, Heading, ListBlock, ListItem, Paragraph, TableBlock, Value};
