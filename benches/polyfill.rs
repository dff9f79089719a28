//! Benchmarks for the polyfill pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use logical_polyfill::{Stylesheet, ToCss, polyfill};

/// A stylesheet mixing static, guarded and untouched declarations.
fn sample_stylesheet(rules: usize) -> String {
    let mut css = String::from("@import url(\"base.css\");\n");
    for i in 0..rules {
        css.push_str(&format!(
            ".card-{i} {{ margin-inline: {i}px; padding-block: 1em 2em; color: #333; \
             border-inline-start: 1px solid red; inset-inline-end: {i}px; \
             border-start-start-radius: 4px; }}\n"
        ));
        if i % 10 == 0 {
            css.push_str(&format!(
                "@media (min-width: {i}0px) {{ .rtl-{i} {{ direction: rtl; inset-block: 0; }} }}\n"
            ));
        }
    }
    css
}

// ============================================================================
// Pipeline Benchmarks
// ============================================================================

fn bench_parse(c: &mut Criterion) {
    let css = sample_stylesheet(500);
    c.bench_function("parse", |b| {
        b.iter(|| Stylesheet::parse(&css));
    });
}

fn bench_serialize(c: &mut Criterion) {
    let sheet = Stylesheet::parse(&sample_stylesheet(500));
    c.bench_function("serialize", |b| {
        b.iter(|| sheet.to_css_string());
    });
}

fn bench_polyfill(c: &mut Criterion) {
    let mut group = c.benchmark_group("polyfill");
    for rules in [10, 100, 1000] {
        let css = sample_stylesheet(rules);
        group.bench_function(format!("{rules}_rules"), |b| {
            b.iter(|| polyfill(&css));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_serialize, bench_polyfill);
criterion_main!(benches);
