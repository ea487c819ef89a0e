use criterion::{black_box, criterion_group, criterion_main, Criterion};
use questvault_logic::path::PathCurve;

fn bench_pose(c: &mut Criterion) {
    let curve = PathCurve::adventure_default();

    c.bench_function("pose_mid_path", |b| b.iter(|| curve.pose(black_box(0.37))));

    c.bench_function("pose_frame_sweep", |b| {
        b.iter(|| {
            // A 60-frame sweep of the whole arc, the per-second render cost.
            for i in 0..60u32 {
                black_box(curve.pose(i as f32 / 59.0));
            }
        })
    });
}

criterion_group!(benches, bench_pose);
criterion_main!(benches);
