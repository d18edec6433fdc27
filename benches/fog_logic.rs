use criterion::{black_box, criterion_group, criterion_main, Criterion};
use maze_fog::core::{FogOfWarGrid, Maze, MazeSession, SessionConfig, SightArea};
use maze_fog::term::{FogLayer, FrameBuffer, MazeView, Viewport};
use maze_fog::types::{Direction, MazeAction, VISIBLE};

fn bench_fog_update(c: &mut Criterion) {
    let mut fog = FogOfWarGrid::new(128, 128);
    let mut layer = FogLayer::new(128, 128);
    fog.set_visibility(&|x: i32, y: i32| (x - 64).pow(2) + (y - 64).pow(2) < 400, VISIBLE);

    c.bench_function("fog_update_128x128", |b| {
        b.iter(|| {
            fog.clear_visibility(VISIBLE);
            fog.set_visibility(&|x: i32, _: i32| x < 64, VISIBLE);
            fog.update(black_box(0.016), 2.0, &mut layer);
        })
    });
}

fn bench_sight_sweep(c: &mut Criterion) {
    let maze = Maze::generate(63, 63, 12345).unwrap();
    let mut fog = FogOfWarGrid::new(maze.width(), maze.height());

    c.bench_function("sight_sweep_r6", |b| {
        b.iter(|| {
            let sight = SightArea::new(&maze, black_box((31, 31)), 6);
            fog.set_visibility(&sight, VISIBLE);
        })
    });
}

fn bench_maze_generate(c: &mut Criterion) {
    c.bench_function("maze_generate_63x63", |b| {
        b.iter(|| Maze::generate(63, 63, black_box(12345)))
    });
}

fn bench_session_step(c: &mut Criterion) {
    let mut session = MazeSession::new(SessionConfig::default()).unwrap();
    let mut layer = FogLayer::new(session.maze().width(), session.maze().height());
    let mut i = 0usize;

    c.bench_function("session_step_and_tick", |b| {
        b.iter(|| {
            i = i.wrapping_add(1);
            let _ = session.apply_action(MazeAction::Move(Direction::ALL[i % 4]));
            session.tick(16, &mut layer);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut session = MazeSession::new(SessionConfig::default()).unwrap();
    let mut layer = FogLayer::new(session.maze().width(), session.maze().height());
    session.tick(1000, &mut layer);
    let view = MazeView::default();
    let viewport = Viewport::new(100, 30);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("maze_view_render_into", |b| {
        b.iter(|| {
            view.render_into(&session, &layer, black_box(viewport), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_fog_update,
    bench_sight_sweep,
    bench_maze_generate,
    bench_session_step,
    bench_render
);
criterion_main!(benches);
