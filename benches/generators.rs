use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use glyph_mazes::{
    generators,
    grid::Grid,
    units::{ColumnsCount, RowsCount},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn grid_32() -> Grid {
    Grid::new(RowsCount(32), ColumnsCount(32))
}

fn bench_binary_maze_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(32);

    c.bench_function("binary_maze_32", move |b| {
        b.iter_batched(grid_32,
                       |mut g| generators::binary_tree(&mut g, &mut rng),
                       BatchSize::SmallInput)
    });
}

fn bench_sidewinder_maze_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(32);

    c.bench_function("sidewinder_maze_32", move |b| {
        b.iter_batched(grid_32,
                       |mut g| generators::sidewinder(&mut g, &mut rng),
                       BatchSize::SmallInput)
    });
}

criterion_group!(benches, bench_binary_maze_32, bench_sidewinder_maze_32);
criterion_main!(benches);
