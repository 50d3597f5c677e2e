//! Move Generation Benchmarks
//!
//! Performance benchmarks for the hover-time query path using Criterion.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tilechess::core::JumpSettings;
use tilechess::rendering::{apply_move_hints, QuadraticCurve};
use tilechess::{Board, PieceColor, PieceType};

fn bench_valid_moves_single_pawn(c: &mut Criterion) {
    let board = Board::with_pieces(&[
        (PieceType::Pawn, PieceColor::White, (3, 1)),
        (PieceType::Pawn, PieceColor::Black, (4, 2)),
    ])
    .unwrap();

    c.bench_function("valid_moves_single_pawn", |b| {
        b.iter(|| black_box(board.valid_moves_at(3, 1)))
    });
}

fn bench_valid_moves_all_pawns(c: &mut Criterion) {
    let board = Board::standard();

    c.bench_function("valid_moves_standard_all_pawns", |b| {
        b.iter(|| {
            let total: usize = (0..8)
                .flat_map(|x| [(x, 1), (x, 6)])
                .filter_map(|(x, y)| board.valid_moves_at(x, y).ok())
                .map(|set| set.len())
                .sum();
            black_box(total)
        })
    });
}

fn bench_apply_move_hints(c: &mut Criterion) {
    let mut board = Board::standard();
    let set = board.valid_moves_at(4, 1).unwrap();

    c.bench_function("apply_move_hints", |b| {
        b.iter(|| apply_move_hints(black_box(&mut board), &set))
    });
}

fn bench_curve_sampling(c: &mut Criterion) {
    let settings = JumpSettings::default();
    let curve = QuadraticCurve::new(
        bevy::math::Vec3::new(-3.5, 20.0, -2.5),
        bevy::math::Vec3::new(-3.5, 20.0, -0.5),
        settings.jump_height,
    );

    c.bench_function("curve_sample_jump_steps", |b| {
        b.iter(|| black_box(curve.sample(settings.jump_steps)))
    });
}

criterion_group!(
    benches,
    bench_valid_moves_single_pawn,
    bench_valid_moves_all_pawns,
    bench_apply_move_hints,
    bench_curve_sampling
);
criterion_main!(benches);
