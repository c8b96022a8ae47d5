use criterion::{black_box, criterion_group, criterion_main, Criterion};
use minixml::{analyzer::parsers::element, analyzer::Parser, parse_document};

fn nested_document(depth: usize, width: usize) -> String {
    let mut doc = String::new();
    for _ in 0..depth {
        doc.push_str("<node kind=\"branch\">\n");
        for i in 0..width {
            doc.push_str(&format!("  <leaf index=\"{}\" label=\"item\"/>\n", i));
        }
    }
    for _ in 0..depth {
        doc.push_str("</node>\n");
    }
    doc
}

fn bench_parse(c: &mut Criterion) {
    let small = r#"<top label="Top"><semi-bottom label="Bottom"/><middle><bottom label="Another bottom"/></middle></top>"#;
    let large = nested_document(20, 10);

    c.bench_function("parse small document", |b| {
        b.iter(|| parse_document(black_box(small)))
    });
    c.bench_function("parse nested document", |b| {
        b.iter(|| parse_document(black_box(&large)))
    });
    c.bench_function("reuse element parser", |b| {
        let parser = element();
        b.iter(|| parser.parse(black_box(small)))
    });
}

// ベンチマークグループの定義
criterion_group!(benches, bench_parse);
criterion_main!(benches);
