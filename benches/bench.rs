//! Criterion benchmarks for Waypost.
//!
//! Covers the two ranking paths:
//! - Search scoring across a populated content index
//! - Related-content matching by category/tag overlap

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use std::hint::black_box;
use waypost::document::{Category, Document, DocumentKind, Tag, Taxonomy};
use waypost::index::ContentIndex;
use waypost::related::RelatedMatcher;
use waypost::search::{SearchRequest, Searcher};

const TITLE_WORDS: &[&str] = &[
    "brushing", "flossing", "whitening", "cavities", "gums", "enamel", "braces", "checkup",
    "sensitivity", "plaque", "fluoride", "diet", "children", "habits", "routine", "guide",
];

fn taxonomy() -> Taxonomy {
    let categories = ["oral-health", "health", "membership"]
        .into_iter()
        .map(|key| Category {
            key: key.to_string(),
            name: key.to_string(),
            description: String::new(),
        })
        .collect();
    let tags = ["prevention", "treatment", "symptoms", "children", "nutrition", "tips"]
        .into_iter()
        .map(|key| Tag {
            key: key.to_string(),
            name: key.to_string(),
        })
        .collect();
    Taxonomy::new(categories, tags)
}

/// Generate a populated index for benchmarking.
fn generate_index(count: usize) -> ContentIndex {
    let taxonomy = taxonomy();
    let mut rng = StdRng::seed_from_u64(42);
    let categories = ["oral-health", "health", "membership"];
    let tags = ["prevention", "treatment", "symptoms", "children", "nutrition", "tips"];

    let mut builder = ContentIndex::builder().taxonomy(taxonomy);
    for i in 0..count {
        let title: Vec<&str> = TITLE_WORDS.choose_multiple(&mut rng, 3).copied().collect();
        let doc_tags: Vec<&str> = tags.choose_multiple(&mut rng, 2).copied().collect();
        let doc = Document::builder(format!("post-{i}"))
            .title(title.join(" "))
            .description(format!("Article about {}", title.join(" and ")))
            .href(format!("/blog/post-{i}"))
            .kind(DocumentKind::Blog)
            .category(*categories.choose(&mut rng).unwrap())
            .tags(doc_tags)
            .build()
            .unwrap();
        builder = builder.add_document(doc);
    }
    builder.build().unwrap()
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for &size in &[100usize, 1000] {
        let index = generate_index(size);
        let searcher = Searcher::new(&index);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("rank_{size}_docs"), |b| {
            b.iter(|| {
                let results = searcher.search(black_box(&SearchRequest::new("flossing guide")));
                black_box(results.total_hits)
            })
        });
    }

    group.finish();
}

fn bench_related(c: &mut Criterion) {
    let mut group = c.benchmark_group("related");

    let index = generate_index(1000);
    let matcher = RelatedMatcher::new(&index);
    let reference = index.get("post-0").unwrap();
    group.throughput(Throughput::Elements(1000));
    group.bench_function("match_1000_docs", |b| {
        b.iter(|| {
            let hits = matcher.related(black_box(reference));
            black_box(hits.len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_search, bench_related);
criterion_main!(benches);
