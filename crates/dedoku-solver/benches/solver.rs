//! Benchmarks for rule applications and full solves.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use dedoku_core::{CellId, ContainerKind, Digit, DigitSet, Grid};
use dedoku_solver::{
    Solver,
    rule::{attempt_resolve, forced_placement, refine_exclusions},
};

const EASY_PUZZLE: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

fn naked_single_grid() -> Grid {
    let mut grid = Grid::from_seed([0; 81]);
    let mut excluded = DigitSet::FULL;
    excluded.remove(Digit::D1);
    grid.exclude(CellId::new(0), excluded);
    grid
}

fn hidden_single_grid() -> Grid {
    let mut grid = Grid::from_seed([0; 81]);
    for column in 0..9 {
        if column != 1 {
            grid.exclude(CellId::new(column), DigitSet::from_iter([Digit::D2]));
        }
    }
    grid
}

fn band_force_grid() -> Grid {
    let mut seed = [0; 81];
    seed[0] = 5;
    seed[9 + 3] = 5;
    let row2 = [1, 2, 3, 4, 6, 7, 0, 8, 9];
    for (offset, value) in row2.into_iter().enumerate() {
        seed[18 + offset] = value;
    }
    Grid::from_seed(seed)
}

fn bench_refine_exclusions(c: &mut Criterion) {
    let grid: Grid = EASY_PUZZLE.parse().unwrap();

    c.bench_function("refine_exclusions", |b| {
        b.iter_batched_ref(
            || hint::black_box(grid.clone()),
            |grid| refine_exclusions(grid, CellId::new(2)),
            BatchSize::SmallInput,
        );
    });
}

fn bench_attempt_resolve(c: &mut Criterion) {
    let grids = [
        ("naked_single", naked_single_grid()),
        ("hidden_single", hidden_single_grid()),
        ("empty", Grid::from_seed([0; 81])),
    ];

    for (param, grid) in grids {
        c.bench_with_input(
            BenchmarkId::new("attempt_resolve", param),
            &grid,
            |b, grid| {
                b.iter_batched_ref(
                    || hint::black_box(grid.clone()),
                    |grid| {
                        let target = match param {
                            "hidden_single" => CellId::new(1),
                            _ => CellId::new(0),
                        };
                        let solved = attempt_resolve(grid, target);
                        hint::black_box(solved)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_forced_placement(c: &mut Criterion) {
    let grid = band_force_grid();

    c.bench_function("forced_placement", |b| {
        b.iter_batched_ref(
            || hint::black_box(grid.clone()),
            |grid| {
                let placed = forced_placement(grid, CellId::new(0), ContainerKind::Row);
                hint::black_box(placed)
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_solve(c: &mut Criterion) {
    let easy: Grid = EASY_PUZZLE.parse().unwrap();
    let blank = Grid::from_seed([0; 81]);

    c.bench_with_input(BenchmarkId::new("solve", "easy"), &easy, |b, grid| {
        b.iter_batched_ref(
            || hint::black_box(grid.clone()),
            |grid| {
                let outcome = Solver::new().solve(grid);
                hint::black_box(outcome)
            },
            BatchSize::SmallInput,
        );
    });

    // Budget burn on a grid with no deductions, at a reduced limit
    let solver = Solver::new().with_pass_limit(50);
    c.bench_with_input(BenchmarkId::new("solve", "blank_50"), &blank, |b, grid| {
        b.iter_batched_ref(
            || hint::black_box(grid.clone()),
            |grid| {
                let outcome = solver.solve(grid);
                hint::black_box(outcome)
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_refine_exclusions,
    bench_attempt_resolve,
    bench_forced_placement,
    bench_solve,
);
criterion_main!(benches);
