use criterion::{Criterion, black_box, criterion_group, criterion_main};
use deep_fractal_explorer::{
    ExplorerController, FrameUniforms, InputEvent, PointerButton, ScreenSize, UniformBlock,
    ViewState, split,
};

fn bench_split(c: &mut Criterion) {
    c.bench_function("split_f64", |b| {
        b.iter(|| split(black_box(-0.743_643_887_037_158_7)))
    });
}

fn bench_export(c: &mut Criterion) {
    let view = ViewState::default();
    let screen = ScreenSize {
        width: 2560,
        height: 1440,
    };

    c.bench_function("frame_uniforms_export", |b| {
        b.iter(|| FrameUniforms::export(black_box(&view), black_box(screen)))
    });

    let uniforms = FrameUniforms::export(&view, screen);
    c.bench_function("uniform_block_pack", |b| {
        b.iter(|| UniformBlock::from(black_box(&uniforms)))
    });
}

fn bench_drag_frame(c: &mut Criterion) {
    let events: Vec<InputEvent> = std::iter::once(InputEvent::ButtonPressed {
        button: PointerButton::Left,
        x: 0,
        y: 0,
    })
    .chain((1..=64).map(|step| InputEvent::PointerMoved { x: -step, y: step }))
    .chain(std::iter::once(InputEvent::Scrolled { delta: -1.0 }))
    .collect();

    c.bench_function("drag_frame_64_moves", |b| {
        b.iter(|| {
            let mut controller = ExplorerController::default();
            let mut frames: Vec<FrameUniforms> = Vec::with_capacity(1);
            controller
                .run_frame(black_box(events.iter().copied()), &mut frames)
                .unwrap();
            frames
        })
    });
}

criterion_group!(benches, bench_split, bench_export, bench_drag_frame);
criterion_main!(benches);
