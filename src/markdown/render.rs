//! Block sequence → Markdown rendering.
//!
//! Each block renders to one fragment. Fragments are joined with a blank
//! line and the document ends with a single newline. No I/O is performed
//! here; see [`crate::io`] for writing the result out.

use crate::error::Result;
use crate::model::{Block, CodeBlock, Heading, ListBlock, ListItem};

use super::escape::{normalize_newlines, select_code_fence};
use super::table::render_table;

/// Marker used for every ordered list item, at every depth.
///
/// Items are not numbered; Markdown renderers number `1.` sequences
/// themselves.
const ORDERED_MARKER: &str = "1.";
const UNORDERED_MARKER: &str = "-";
const INDENT: &str = "  ";

/// Render a block sequence to a Markdown document.
///
/// Returns `"\n"` for an empty sequence. Nothing is returned on failure:
/// either every block renders or the first error is reported.
///
/// # Examples
///
/// ```
/// use simdoc::markdown::render;
/// use simdoc::{Block, Heading};
///
/// let blocks = vec![
///     Block::Heading(Heading { level: 1, text: "Title".into() }),
///     Block::Rule,
/// ];
/// assert_eq!(render(&blocks).unwrap(), "# Title\n\n---\n");
/// assert_eq!(render(&[]).unwrap(), "\n");
/// ```
pub fn render(blocks: &[Block]) -> Result<String> {
    tracing::debug!(blocks = blocks.len(), "rendering markdown");

    let fragments = blocks
        .iter()
        .map(render_block)
        .collect::<Result<Vec<String>>>()?;

    let mut output = fragments.join("\n\n");
    output.push('\n');
    Ok(output)
}

/// Render a single block to its fragment, without separators.
pub fn render_block(block: &Block) -> Result<String> {
    tracing::trace!(kind = block.kind(), "rendering block");

    let fragment = match block {
        Block::Heading(heading) => render_heading(heading),
        Block::Paragraph(paragraph) => paragraph.text.clone(),
        Block::List(list) => render_list(list),
        Block::Code(code) => render_code(code),
        Block::Table(table) => render_table(table)?,
        Block::Rule => "---".to_string(),
    };
    Ok(fragment)
}

fn render_heading(heading: &Heading) -> String {
    format!("{} {}", "#".repeat(usize::from(heading.level)), heading.text)
}

fn render_list(list: &ListBlock) -> String {
    let mut lines = Vec::new();
    render_list_items(&list.items, list.ordered, 0, &mut lines);
    lines.join("\n")
}

fn render_list_items(items: &[ListItem], ordered: bool, level: usize, lines: &mut Vec<String>) {
    let indent = INDENT.repeat(level);
    let marker = if ordered { ORDERED_MARKER } else { UNORDERED_MARKER };

    for item in items {
        match item {
            ListItem::Nested(children) => {
                render_list_items(children, ordered, level + 1, lines);
            }
            ListItem::Item(value) => {
                let text = normalize_newlines(value.as_str());
                // Continuation lines line up with the text after the marker.
                let text = if text.contains('\n') {
                    text.replace('\n', &format!("\n{indent}{INDENT}"))
                } else {
                    text.into_owned()
                };
                lines.push(format!("{indent}{marker} {text}"));
            }
        }
    }
}

fn render_code(code: &CodeBlock) -> String {
    let fence = select_code_fence(&code.text);
    let lang = code.lang.as_deref().unwrap_or("");
    let closing_newline = if code.text.ends_with('\n') { "" } else { "\n" };
    format!("{fence}{lang}\n{}{closing_newline}{fence}", code.text)
}
