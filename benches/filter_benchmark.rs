//! Performance benchmarks for filtering and folder tree building
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dashport::filter::{filter_items, FilterState, FolderSelector};
use dashport::folder_tree::{build_folder_tree, dashboard_count};
use dashport::models::{Dashboard, Folder};

/// Folders nested in chains of `depth` under a handful of roots
fn generate_folders(count: usize, depth: usize) -> Vec<Folder> {
    (0..count)
        .map(|i| {
            let folder = Folder::new(i as i64 + 1, format!("f{}", i), format!("Folder {}", i))
                .with_dashboard_count((i % 7) as u32);
            if i % depth == 0 {
                folder
            } else {
                folder.with_parent(format!("f{}", i - 1))
            }
        })
        .collect()
}

fn generate_dashboards(count: usize, folders: usize) -> Vec<Dashboard> {
    (0..count)
        .map(|i| {
            Dashboard::new(
                format!("d{}", i),
                format!("Service {} overview", i),
                (i % (folders + 1)) as i64,
            )
            .with_tags([format!("team-{}", i % 13), "prod".to_string()])
        })
        .collect()
}

fn bench_filter_items(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_items");

    for size in [100, 1_000, 10_000].iter() {
        let items = generate_dashboards(*size, 50);
        group.throughput(Throughput::Elements(*size as u64));

        let states = [
            ("all", FilterState::new(FolderSelector::All, "")),
            ("folder", FilterState::new(FolderSelector::folder_id(7), "")),
            ("query", FilterState::new(FolderSelector::All, "TEAM-3")),
            ("both", FilterState::new(FolderSelector::folder_id(7), "overview")),
        ];
        for (name, state) in states.iter() {
            group.bench_with_input(
                BenchmarkId::new(*name, size),
                &items,
                |b, items| b.iter(|| black_box(filter_items(black_box(items), state))),
            );
        }
    }

    group.finish();
}

fn bench_build_folder_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_folder_tree");

    for (size, depth) in [(50, 3), (500, 5), (2_000, 10)].iter() {
        let folders = generate_folders(*size, *depth);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_folders_depth_{}", size, depth)),
            &folders,
            |b, folders| {
                b.iter(|| {
                    black_box(build_folder_tree(
                        black_box(folders),
                        dashboard_count,
                        &FolderSelector::All,
                    ))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_filter_items, bench_build_folder_tree);
criterion_main!(benches);
