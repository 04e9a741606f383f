//! Markdown generation from the block model.
//!
//! - [`escape`]: newline normalization, pipe escaping, fence length selection
//! - [`table`]: alignment parsing and column normalization for pipe tables
//! - [`render`]: per-block renderers and the document-level entry point
//!
//! ## Design Notes
//!
//! - **Dynamic code fence length**: code blocks use a backtick fence one
//!   longer than the longest backtick run in the body (minimum three)
//! - **Structural escaping only**: table cells escape `|` and turn line
//!   breaks into `<br>`; everything else is passed through so callers keep
//!   control over inline formatting
//! - **Ordered lists**: every item uses the literal `1.` marker and relies
//!   on the consumer to number the sequence

mod escape;
mod render;
mod table;

pub use escape::{
    MIN_FENCE_LENGTH, calculate_fence_length, escape_pipes, format_cell_text, format_table_cell,
    longest_backtick_run, normalize_newlines, select_code_fence,
};
pub use render::{render, render_block};
pub use table::{Alignment, column_count, normalize_alignment};
