//! Conversion benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use quire_core::{markdown_to_latex, HeadingMode};

fn sample_chapter() -> String {
    let section = "## Section\n\n\
        Some **bold** text, some *italic* text and `inline_code()`.\n\
        See [the docs](https://example.com/a_b?x=1&y=2) for 100% of the details.\n\n\
        - first item\n- second item\n  - nested item\n\n\
        ```rust\nfn main() { println!(\"{}\", 1); }\n```\n\n---\n\n";
    format!("# Chapter\n\n{}", section.repeat(50))
}

fn conversion_benchmark(c: &mut Criterion) {
    let chapter = sample_chapter();
    c.bench_function("markdown_to_latex chapter", |b| {
        b.iter(|| {
            markdown_to_latex(
                std::hint::black_box(&chapter),
                HeadingMode::Numbered,
            )
        })
    });
}

criterion_group!(benches, conversion_benchmark);
criterion_main!(benches);
