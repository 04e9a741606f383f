//! Block variants that make up a document.

use super::Value;

/// One discrete unit of document content.
///
/// The set of variants is closed; the renderer matches on it exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(Heading),
    Paragraph(Paragraph),
    List(ListBlock),
    Code(CodeBlock),
    Table(TableBlock),
    /// Horizontal rule.
    Rule,
}

impl Block {
    /// Short name of the variant, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading(_) => "heading",
            Block::Paragraph(_) => "paragraph",
            Block::List(_) => "list",
            Block::Code(_) => "code",
            Block::Table(_) => "table",
            Block::Rule => "rule",
        }
    }
}

/// Section heading. `text` is always a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading level, 1 through 6.
    pub level: u8,
    pub text: String,
}

/// Paragraph of text; internal newlines are kept as line breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub text: String,
}

/// Ordered or unordered list, possibly nested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBlock {
    pub ordered: bool,
    pub items: Vec<ListItem>,
}

/// Entry in a [`ListBlock`]: a single item or a nested sub-list.
///
/// Nested lists inherit the `ordered` flag of the list that contains them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Item(Value),
    Nested(Vec<ListItem>),
}

impl ListItem {
    /// Build a nested sub-list from anything convertible to list items.
    ///
    /// ```
    /// use simdoc::ListItem;
    ///
    /// let items = vec![
    ///     ListItem::from("alpha"),
    ///     ListItem::nested(["beta", "gamma"]),
    /// ];
    /// assert_eq!(items.len(), 2);
    /// ```
    pub fn nested<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ListItem>,
    {
        ListItem::Nested(items.into_iter().map(Into::into).collect())
    }
}

impl From<Value> for ListItem {
    fn from(value: Value) -> Self {
        ListItem::Item(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for ListItem {
    fn from(value: Option<T>) -> Self {
        ListItem::Item(value.into())
    }
}

impl From<Vec<ListItem>> for ListItem {
    fn from(items: Vec<ListItem>) -> Self {
        ListItem::Nested(items)
    }
}

macro_rules! impl_item_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ListItem {
                fn from(value: $ty) -> Self {
                    ListItem::Item(Value::from(value))
                }
            }
        )*
    };
}

impl_item_from!(
    &str, String, &String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64, bool, char,
);

/// Fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// Raw code with `\n` line endings.
    pub text: String,
    /// Info string written right after the opening fence.
    pub lang: Option<String>,
}

/// Table with rows already aligned to `headers` by the builder.
///
/// Rows may still be shorter or longer than `headers`; the renderer pads or
/// truncates everything to a common column count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    /// Raw alignment tokens (`left`/`center`/`right` or `l`/`c`/`r`),
    /// validated at render time.
    pub align: Option<Vec<String>>,
}
