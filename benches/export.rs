//! Benchmarks for streaming EAD export.
//!
//! Run with: cargo bench

use std::hint::black_box;
use std::io;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use findaid::model::{Container, Date, Instance, Note};
use findaid::{ArchivalObject, EadConfig, EadExporter, Resource};

fn component(index: usize) -> ArchivalObject {
    let mut object = ArchivalObject::new(format!("ref{index}")).with_title(format!(
        "Folder {index}: correspondence &amp; <emph>papers</emph>"
    ));
    object.component_id = Some(format!("{index}"));
    object.dates.push(Date {
        begin: Some("1900".into()),
        end: Some("1950".into()),
        date_type: Some("inclusive".into()),
        ..Default::default()
    });
    object.notes.push(Note::new(
        "scopecontent",
        "Letters & <emph render=\"italic\">diaries</emph> from the family.",
    ));
    object.instances.push(Instance {
        instance_type: Some("mixed_materials".into()),
        container: Some(Container {
            type_1: Some("Box".into()),
            indicator_1: Some(format!("{}", index / 20 + 1)),
            type_2: Some("Folder".into()),
            indicator_2: Some(format!("{index}")),
            ..Default::default()
        }),
        ..Default::default()
    });
    object
}

/// One series holding `width` folders.
fn wide_tree(width: usize) -> Resource {
    let mut series = ArchivalObject::new("series").with_title("Series 1");
    series.children = (0..width).map(component).collect();
    Resource {
        title: Some("Wide collection".into()),
        identifier: vec!["MS".into(), "1".into()],
        children: vec![series],
        ..Default::default()
    }
}

/// A single chain `depth` components deep.
fn deep_tree(depth: usize) -> Resource {
    let mut node = component(depth);
    for index in (0..depth).rev() {
        node = component(index).with_child(node);
    }
    Resource {
        title: Some("Deep collection".into()),
        children: vec![node],
        ..Default::default()
    }
}

fn exporter() -> EadExporter {
    EadExporter::new().with_config(EadConfig {
        creation_date: Some("2024-01-01T00:00:00Z".into()),
        ..Default::default()
    })
}

fn bench_wide(c: &mut Criterion) {
    let resource = wide_tree(5_000);
    let exporter = exporter();

    let mut group = c.benchmark_group("export_wide");
    group.throughput(Throughput::Elements(resource.descendant_count() as u64));
    group.bench_function("5000_folders", |b| {
        b.iter(|| {
            exporter
                .export(black_box(&resource), &mut io::sink())
                .unwrap()
        });
    });
    group.finish();
}

fn bench_deep(c: &mut Criterion) {
    let resource = deep_tree(500);
    let exporter = exporter();

    let mut group = c.benchmark_group("export_deep");
    group.throughput(Throughput::Elements(resource.descendant_count() as u64));
    group.bench_function("500_levels", |b| {
        b.iter(|| {
            exporter
                .export(black_box(&resource), &mut io::sink())
                .unwrap()
        });
    });
    group.finish();
}

fn bench_first_chunk(c: &mut Criterion) {
    let resource = wide_tree(5_000);
    let exporter = exporter();

    c.bench_function("first_chunk", |b| {
        b.iter(|| exporter.stream(black_box(&resource)).next());
    });
}

criterion_group!(benches, bench_wide, bench_deep, bench_first_chunk);
criterion_main!(benches);
