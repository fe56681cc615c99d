use criterion::{black_box, criterion_group, criterion_main, Criterion};
use memorytable::{Record, Table};

#[derive(Debug, Clone, Record)]
#[record(key(fields(source, target), getter = endpoints))]
#[record(key(fields(source)))]
pub struct Edge {
    source: u32,
    target: u32,
}

fn fully_connected(nodes: u32) -> Table<Edge> {
    (0..nodes)
        .flat_map(|source| (0..nodes).map(move |target| Edge { source, target }))
        .collect()
}

pub fn intersect_fully_connected(c: &mut Criterion) {
    let left = fully_connected(100);
    let right = left.filter(|edge| edge.source % 2 == 0);

    c.bench_function("intersect_fully_connected", |b| {
        b.iter(|| black_box(left.intersection(&right, Edge::endpoints)))
    });

    c.bench_function("diff_fully_connected", |b| {
        b.iter(|| black_box(left.diff(&right, Edge::endpoints)))
    });
}

pub fn group_fully_connected(c: &mut Criterion) {
    let table = fully_connected(100);

    c.bench_function("group_fully_connected", |b| {
        b.iter(|| black_box(table.group_by(Edge::by_source)))
    });

    c.bench_function("unique_fully_connected", |b| {
        b.iter(|| black_box(table.unique(Edge::by_source)))
    });
}

criterion_group!(benches, intersect_fully_connected, group_fully_connected);
criterion_main!(benches);
