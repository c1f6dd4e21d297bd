//! Benchmarks for page resolution and tree localization.

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use verso_i18n::{Catalogs, LabelResolver, Locale};
use verso_site::{Site, SiteConfig, VersionTagSet};
use verso_storage::{Document, DocumentIndex};

const VERSIONS: [&str; 3] = ["v1.2", "v1.1", "v1.0"];

/// Create a corpus with `topics` nodes, each published in every version.
fn create_site(topics: usize) -> Site {
    let mut documents = vec![Document::new("", "Home"), Document::new("nodes", "Node Library")];
    for i in 0..topics {
        let path = format!("nodes/topic-{i}");
        documents.push(Document::new(&path, format!("Geometry Nodes {i}")));
        for version in VERSIONS {
            documents.push(Document::new(format!("{version}/{path}"), format!("Geometry Nodes {i}")));
        }
    }

    let resolver = LabelResolver::new("en".parse().unwrap(), Catalogs::bundled().unwrap());
    let versions = VersionTagSet::new("latest", VERSIONS).unwrap();
    Site::new(
        Arc::new(DocumentIndex::from_documents(documents)),
        resolver,
        SiteConfig::new(versions),
    )
}

fn bench_resolve(c: &mut Criterion) {
    let site = create_site(200);
    let en: Locale = "en".parse().unwrap();
    let zh: Locale = "zh".parse().unwrap();

    let mut group = c.benchmark_group("resolve");

    group.bench_function("latest_native", |b| {
        b.iter(|| site.resolve("/docs/nodes/topic-100", &en));
    });

    group.bench_function("versioned_localized", |b| {
        b.iter(|| site.resolve("/docs/v1.0/nodes/topic-100", &zh));
    });

    group.bench_function("not_found", |b| {
        b.iter(|| site.resolve("/docs/v1.0/nodes/missing", &zh));
    });

    group.finish();
}

fn bench_navigation(c: &mut Criterion) {
    let zh: Locale = "zh".parse().unwrap();

    let mut group = c.benchmark_group("navigation_localized");

    for topics in [10, 100, 1000] {
        let site = create_site(topics);
        let latest = site.versions().latest().clone();
        group.bench_with_input(BenchmarkId::from_parameter(topics), &topics, |b, _| {
            b.iter(|| site.navigation(&latest, &zh));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_navigation);
criterion_main!(benches);
