use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use tui_flappy::core::{spawn, GameState, Pipe};
use tui_flappy::term::{GameView, Viewport};
use tui_flappy::types::{InputEvent, BIRD_START_Y};

fn bench_advance(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("advance_tick", |b| {
        b.iter(|| {
            // Flap on the way down so the session never ends.
            let events = if state.bird.y >= BIRD_START_Y {
                vec![InputEvent::Flap]
            } else {
                Vec::new()
            };
            state.advance(black_box(&events));
        })
    });
}

fn bench_pipe_generation(c: &mut Criterion) {
    let mut rng = Pcg32::seed_from_u64(12345);

    c.bench_function("generate_pipe_pair", |b| {
        b.iter(|| spawn::generate_pipe_pair(black_box(&mut rng)))
    });
}

fn bench_power_up_placement(c: &mut Criterion) {
    let mut rng = Pcg32::seed_from_u64(12345);
    let pipes: Vec<Pipe> = (0..3)
        .map(|_| spawn::generate_pipe_pair(&mut rng))
        .collect();

    c.bench_function("generate_power_up", |b| {
        b.iter(|| spawn::generate_power_up(black_box(&mut rng), black_box(&pipes)))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    for _ in 0..120 {
        let events = if state.bird.y >= BIRD_START_Y {
            vec![InputEvent::Flap]
        } else {
            Vec::new()
        };
        state.advance(&events);
    }
    let view = GameView::new();

    c.bench_function("render_80x24", |b| {
        b.iter(|| view.render(black_box(&state), Viewport::new(80, 24)))
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_pipe_generation,
    bench_power_up_placement,
    bench_render
);
criterion_main!(benches);
