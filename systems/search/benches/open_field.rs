use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mopsolver_core::{CellState, Grid};
use mopsolver_system_search::solve;

fn open_field(side: u32) -> Grid {
    let cell_count = usize::try_from(side * side).unwrap();
    Grid::new(side, side, vec![CellState::Open; cell_count]).unwrap()
}

fn bench_open_field(c: &mut Criterion, side: u32) {
    let grid = open_field(side);

    c.bench_function(&format!("open_field_{side}"), |b| {
        b.iter(|| {
            let outcome = solve(black_box(&grid)).unwrap();
            assert!(outcome.solution().is_some());
        })
    });
}

pub fn field_small(c: &mut Criterion) {
    bench_open_field(c, 64);
}

pub fn field_medium(c: &mut Criterion) {
    bench_open_field(c, 256);
}

pub fn field_large(c: &mut Criterion) {
    bench_open_field(c, 1024);
}

criterion_group!(benches, field_small, field_medium, field_large);
criterion_main!(benches);
