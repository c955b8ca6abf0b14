//! Benchmarks for compiling and composing docs pages.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pgdocs_renderer::{Scope, compile};
use pgdocs_site::{DocStore, PageComposer, SiteSettings};
use pgdocs_storage::MockStorage;

/// Generate a docs page with headings, notes and tab groups.
fn generate_doc(sections: usize, paragraphs_per_section: usize) -> String {
    let mut md = String::with_capacity(sections * paragraphs_per_section * 200);
    md.push_str("---\ntitle: Benchmark\ncategory: General\npackage: \"@mdi/js\"\n---\n");
    md.push_str("# Benchmark\n\n");

    for i in 0..sections {
        md.push_str(&format!("## Section {i}\n\n"));
        for j in 0..paragraphs_per_section {
            md.push_str(&format!(
                "Paragraph {j} of section {i} uses :meta[package] with **bold** text.\n\n"
            ));
        }
        md.push_str(":::note{type=\"tip\"}\nA tip.\n:::\n\n");
        md.push_str(":::tabs\n:::tab[npm]\n```sh\nnpm i @mdi/js\n```\n:::\n:::tab[yarn]\n```sh\nyarn add @mdi/js\n```\n:::\n:::\n\n");
    }
    md
}

fn bench_compile(c: &mut Criterion) {
    let scope = Scope::new().with("package", "@mdi/js");
    let mut group = c.benchmark_group("compile_by_size");

    for (sections, paragraphs) in [(5, 2), (20, 3), (50, 5)] {
        let markdown = generate_doc(sections, paragraphs);

        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("markdown", format!("{sections}s_{paragraphs}p")),
            &markdown,
            |b, md| b.iter(|| compile(md, &scope)),
        );
    }

    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let storage = MockStorage::new().with_doc("bench", generate_doc(20, 3));
    let store = DocStore::new(Arc::new(storage));
    let composer = PageComposer::new(SiteSettings::default());

    c.bench_function("compose_page_20_sections", |b| {
        b.iter(|| {
            let (doc, compiled) = store.get_doc_with_content("bench").unwrap();
            composer.compose(&doc, compiled).to_html()
        });
    });
}

criterion_group!(benches, bench_compile, bench_compose);
criterion_main!(benches);
