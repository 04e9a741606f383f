//! Benchmarks for Markdown rendering.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use simdoc::markdown::calculate_fence_length;
use simdoc::{Doc, ListItem, Row, Table, Value};

/// Build a document with a mix of every block kind.
fn sample_doc(sections: usize) -> Doc {
    let mut doc = Doc::new();
    doc.h1("Benchmark Report");

    for i in 0..sections {
        doc.h2(format!("Section {i}"));
        doc.p("Some introductory text\nspanning two lines.");
        doc.ul(vec![
            ListItem::from("alpha"),
            ListItem::nested(["beta", "gamma\nwrapped"]),
            ListItem::from("delta"),
        ]);
        doc.code("fn main() {\n    println!(\"```\");\n}\n", Some("rust"));
        let rows = (0..20).map(|r| {
            Row::fields([
                ("id", Value::from(r)),
                ("name", Value::from(format!("row|{r}"))),
                ("note", Value::from("multi\nline")),
            ])
        });
        doc.table(Table::new(rows).with_align(["r", "l", "c"]))
            .expect("valid table");
        doc.hr();
    }

    doc
}

fn bench_render(c: &mut Criterion) {
    let doc = sample_doc(50);
    c.bench_function("render_50_sections", |b| {
        b.iter(|| doc.to_markdown().unwrap());
    });
}

fn bench_fence_length(c: &mut Criterion) {
    let text = "let s = \"``\";\n".repeat(2_000) + "````";
    c.bench_function("calculate_fence_length", |b| {
        b.iter(|| calculate_fence_length(std::hint::black_box(&text)));
    });
}

criterion_group!(benches, bench_render, bench_fence_length);
criterion_main!(benches);
