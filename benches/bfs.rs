use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazesolver::{find_path, presets, Cell, Dims, Graph, Maze};

const DIMS: Dims = Dims(300, 300);

pub fn build_graph(c: &mut Criterion) {
    c.bench_function("build_graph", |b| b.iter(|| Graph::build(black_box(DIMS))));
}

pub fn bfs_open_grid(c: &mut Criterion) {
    let maze = Maze::empty(DIMS, Cell(0, 0), Cell(DIMS.0 - 1, DIMS.1 - 1)).unwrap();
    let graph = Graph::build(DIMS);

    c.bench_function("bfs_open_grid", |b| {
        b.iter(|| find_path(black_box(&maze), &graph, maze.start(), maze.end()))
    });
}

pub fn bfs_presets(c: &mut Criterion) {
    let mazes: Vec<_> = (0..presets::PRESET_COUNT)
        .map(|i| presets::preset(i).unwrap())
        .collect();
    let graph = Graph::build(presets::DEFAULT_SIZE);

    c.bench_function("bfs_presets", |b| {
        b.iter(|| {
            for maze in &mazes {
                let _ = find_path(black_box(maze), &graph, maze.start(), maze.end());
            }
        })
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = build_graph, bfs_open_grid, bfs_presets}
criterion_main!(benches);
