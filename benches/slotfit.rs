use criterion::{criterion_group, criterion_main, Criterion};
use slotfit::{
    compute_gaps, detect, AutoSnapController, DetectConfig, Hole, InteractionState, PhotoTransform,
    PixelView,
};
use std::hint::black_box;

const MAGENTA: [u8; 4] = [255, 0, 255, 255];

fn make_template(width: usize, height: usize, holes: &[(usize, usize, usize, usize)]) -> Vec<u8> {
    let mut data = vec![255u8; width * height * 4];
    for &(x, y, w, h) in holes {
        for row in y..y + h {
            for col in x..x + w {
                let idx = (row * width + col) * 4;
                data[idx..idx + 4].copy_from_slice(&MAGENTA);
            }
        }
    }
    data
}

fn bench_detect(c: &mut Criterion) {
    let width = 1200;
    let height = 1800;
    let data = make_template(
        width,
        height,
        &[
            (60, 60, 500, 700),
            (640, 60, 500, 700),
            (60, 840, 1080, 900),
        ],
    );
    let view = PixelView::from_slice(&data, width, height).unwrap();
    let cfg = DetectConfig::default();

    c.bench_function("detect_1200x1800_3holes", |b| {
        b.iter(|| detect(black_box(view), black_box(&cfg)).unwrap())
    });
}

fn bench_snap_tick(c: &mut Criterion) {
    let hole = Hole {
        id: 0,
        x: 60,
        y: 60,
        width: 1080,
        height: 1680,
    };
    let transform = PhotoTransform {
        scale: 1.0,
        center_x: -0.1,
        center_y: 0.5,
    };
    let idle = InteractionState::default();

    c.bench_function("gaps_analytic", |b| {
        b.iter(|| compute_gaps(black_box(&hole), black_box(&transform), black_box(1.5)).unwrap())
    });

    c.bench_function("snap_tick_nudge", |b| {
        let mut snap = AutoSnapController::new();
        b.iter(|| {
            snap.tick(
                black_box(&hole),
                black_box(&transform),
                black_box(1.5),
                black_box(&idle),
                black_box(10_000),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_detect, bench_snap_tick);
criterion_main!(benches);
