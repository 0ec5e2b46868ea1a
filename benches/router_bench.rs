use criterion::{criterion_group, criterion_main, Criterion};
use grid_util::point::Point;
use rand::prelude::*;
use std::hint::black_box;
use vault_mapper::{Command, Direction, Router, Session};

/// Explores a session with a seeded random walk and returns it.
fn explored_session(steps: usize, seed: u64) -> Session {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = Session::new();
    session
        .apply(Command::Move(Direction::South))
        .expect("fresh session accepts an entry direction");
    for _ in 0..steps {
        let direction = *Direction::ALL.choose(&mut rng).unwrap();
        if rng.gen_bool(0.1) {
            let _ = session.apply(Command::ToggleLink(direction));
        } else {
            let _ = session.apply(Command::Move(direction));
        }
    }
    session
}

fn router_bench(c: &mut Criterion) {
    let router = Router::new();
    for steps in [100, 1000] {
        let session = explored_session(steps, 7);
        let rooms = session.rooms();
        c.bench_function(
            format!("route after {steps} steps ({} rooms)", rooms.len()).as_str(),
            |b| b.iter(|| black_box(router.find_route(rooms, session.player()))),
        );
    }
    let empty = Session::new();
    c.bench_function("route across unknown rooms", |b| {
        b.iter(|| black_box(router.find_route(empty.rooms(), Point::new(30, -30))))
    });
}

criterion_group!(benches, router_bench);
criterion_main!(benches);
