use std::hint::black_box;

use codelab_catalog::filters::parse_filter;
use codelab_catalog::models::CatalogEntry;
use codelab_catalog::query::{QueryState, recompute};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Generate synthetic catalog entries
fn generate_entries(num_entries: usize) -> Vec<CatalogEntry> {
    (0..num_entries)
        .map(|i| {
            serde_json::from_value(serde_json::json!({
                "id": format!("lab-{}", i),
                "title": format!("Codelab {}", i),
                "summary": format!("Learn topic {} step by step", i % 50),
                "categories": [format!("Category {}", i % 5)],
                "tags": [format!("tag-{}", i % 20), "beginner"],
                "authors": [format!("Author {}", i % 30)],
                "duration": (i % 120) as u64,
                "updated": format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1),
            }))
            .unwrap()
        })
        .collect()
}

fn bench_filter_application(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_application");

    // Facet filter only (exact value membership)
    for size in [1_000, 10_000, 50_000].iter() {
        let entries = generate_entries(*size);
        let selections = parse_filter("category:\"Category 1\" tag:tag-3 tag:tag-4").unwrap();
        let state = QueryState::default().with_selections(selections);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("facet_filter", size), size, |b, _| {
            b.iter(|| recompute(black_box(&entries), black_box(&state)).total_results);
        });
    }

    // Text search (substring over the joined fields)
    for size in [1_000, 10_000, 50_000].iter() {
        let entries = generate_entries(*size);
        let state = QueryState::default().with_search("topic 7");

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("text_search", size), size, |b, _| {
            b.iter(|| recompute(black_box(&entries), black_box(&state)).total_results);
        });
    }

    // Search, facets and a date sort together
    for size in [1_000, 10_000, 50_000].iter() {
        let entries = generate_entries(*size);
        let state = QueryState::default()
            .with_search("learn")
            .with_selections(parse_filter("tag:beginner").unwrap())
            .with_sort("updated-desc");

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("combined", size), size, |b, _| {
            b.iter(|| recompute(black_box(&entries), black_box(&state)).total_results);
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter_application);
criterion_main!(benches);
