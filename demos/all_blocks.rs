//! Build a document using every block kind and save it next to the crate.
//!
//! Run with: cargo run --example all_blocks

use std::path::Path;

use simdoc::{Doc, ListItem, Row, Table, Value};

fn build_document() -> simdoc::Result<Doc> {
    let mut doc = Doc::new();

    doc.h1("Simple Document - All Blocks Example");
    doc.hr();

    doc.h2("Headings");
    doc.h1("Level 1");
    doc.h2("Level 2");
    doc.heading(2, "Heading via heading(level, text) - Level is 2 here")?;
    doc.h3("Level 3");
    doc.h4("Level 4");
    doc.h5("Level 5");
    doc.h6("Level 6");
    doc.hr();

    doc.h2("Text");
    doc.p("Paragraphs preserve\ninternal newlines.");
    doc.p("Inline styling: this should be **bold** and this *italics* and this ***both***.");
    doc.hr();

    doc.h2("Lists");
    doc.h3("Unordered");
    doc.ul(vec![
        ListItem::from("alpha"),
        ListItem::nested(["beta", "gamma"]),
        ListItem::from("delta"),
    ]);
    doc.h3("Ordered");
    doc.ol(vec![
        ListItem::from("one"),
        ListItem::nested(["two", "three"]),
        ListItem::from("four"),
    ]);
    doc.hr();

    doc.h2("Code Blocks");
    doc.h3("Nested Fence");
    doc.code("line1\n```\nline2", Some("bash"));
    doc.h3("Rust Hello World");
    doc.code("fn main() {\n    println!(\"Hello World!\");\n}\n", Some("rust"));
    doc.hr();

    doc.h2("Tables");
    doc.h3("Escaping");
    doc.table(
        Table::new([
            Row::fields([("b", Value::from("x|y")), ("a", Value::from("1\n2"))]),
            Row::fields([("a", Value::EMPTY), ("b", Value::from("ok"))]),
        ])
        .with_headers(["a", "b"])
        .with_align(["left", "right"]),
    )?;
    doc.h3("Simple");
    doc.table(Table::new([[1, 2], [3, 4]]).with_headers(["a", "b"]))?;
    doc.hr();

    doc.h2("Horizontal Bar");
    doc.hr();

    Ok(doc)
}

fn main() -> simdoc::Result<()> {
    let doc = build_document()?;
    let output = Path::new(env!("CARGO_MANIFEST_DIR")).join("target").join("all_blocks.md");
    let written = doc.save(&output)?;
    println!("Wrote {} blocks to {}", doc.len(), written.display());
    Ok(())
}
