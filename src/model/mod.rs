//! Block data model.
//!
//! Blocks are plain immutable values. They are created once by the
//! [`Doc`](crate::Doc) builder and never edited afterwards; rendering only
//! reads them.

mod block;
mod value;

pub use block::{Block, CodeBlock, Heading, ListBlock, ListItem, Paragraph, TableBlock};
pub use value::Value;
