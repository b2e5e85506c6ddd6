use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slidetoggle_testing::{immediate_veto, ToggleHarness};
use slidetoggle_ui::{SlideToggleConfig, ToggleState};

const DRAG_DISTANCES: &[f32] = &[5.0, 40.0, 100.0];

fn drag_release_settle(distance: f32) -> ToggleState {
    let harness = ToggleHarness::new(SlideToggleConfig::default()).expect("default config");
    harness.drag_through(&[20.0, distance]);
    harness.settle();
    harness.toggle().state()
}

fn vetoed_release(distance: f32) -> ToggleState {
    let harness = ToggleHarness::new(SlideToggleConfig::default()).expect("default config");
    harness.toggle().set_on_open_before(immediate_veto(true));
    harness.drag_by(distance);
    harness.settle();
    harness.toggle().state()
}

fn bench_drag_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_release_settle");
    for &distance in DRAG_DISTANCES {
        group.bench_with_input(
            BenchmarkId::from_parameter(distance),
            &distance,
            |b, &distance| b.iter(|| black_box(drag_release_settle(black_box(distance)))),
        );
    }
    group.finish();

    c.bench_function("vetoed_release", |b| {
        b.iter(|| black_box(vetoed_release(black_box(60.0))))
    });
}

criterion_group!(benches, bench_drag_settle);
criterion_main!(benches);
