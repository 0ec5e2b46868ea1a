//! Fuzzes the map session with random command sequences and checks after every command that
//! the room table, the breadcrumb trail and the route stay consistent.
use grid_util::point::Point;
use rand::prelude::*;
use vault_mapper::grid::{in_bounds, step};
use vault_mapper::{
    origin, Annotation, Command, Direction, Passages, RouterConfig, Session, HISTORY_CAPACITY,
};

fn random_command(rng: &mut StdRng) -> Command {
    let direction = *Direction::ALL.choose(rng).unwrap();
    match rng.gen_range(0..20) {
        0..=13 => Command::Move(direction),
        14..=15 => Command::ToggleLink(direction),
        16 => Command::ToggleAnnotation(Annotation::Avoid),
        17 => Command::ToggleAnnotation(Annotation::Important1),
        18 => Command::ToggleAnnotation(Annotation::Important2),
        _ => Command::ZoomIn,
    }
}

fn snapshot(session: &Session) -> Vec<(Point, Passages)> {
    session
        .rooms()
        .iter()
        .map(|room| (room.position, room.passages))
        .collect()
}

fn check_route(session: &Session) {
    let route = session.route();
    if route.is_empty() {
        return;
    }
    assert!(route.len() as u32 <= RouterConfig::default().initial_max_length);
    let waypoints = route.waypoints();
    assert_eq!(waypoints[0], origin());
    assert_eq!(*waypoints.last().unwrap(), session.player());
    for (&direction, window) in route.steps().iter().zip(waypoints.windows(2)) {
        assert_eq!(step(&window[0], direction), window[1]);
        // The router walks towards the portal, so the passage back must be open.
        let back = session.rooms().passages_at(&window[1]);
        if !back.is_open(direction.opposite()) {
            println!("{}", session);
        }
        assert!(back.is_open(direction.opposite()));
    }
}

#[test]
fn fuzz_sessions() {
    const N_SESSIONS: usize = 40;
    const N_COMMANDS: usize = 120;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_SESSIONS {
        let mut session = Session::new();
        let entry = *Direction::ALL.choose(&mut rng).unwrap();
        session.apply(Command::Move(entry)).unwrap();
        for _ in 0..N_COMMANDS {
            let command = random_command(&mut rng);
            let before = snapshot(&session);
            let history_before = session.history().len();
            let result = session.apply(command);

            match (command, result) {
                (_, Err(_)) => assert_eq!(snapshot(&session), before),
                (Command::Move(_), Ok(_)) => {
                    // Discovery only narrows rooms that were already known.
                    let after = snapshot(&session);
                    for ((p_before, passages_before), (p_after, passages_after)) in
                        before.iter().zip(&after)
                    {
                        assert_eq!(p_before, p_after);
                        assert!(passages_before.contains(*passages_after));
                    }
                    let latest = session.history().latest().unwrap();
                    assert_eq!(latest.position, session.player());
                    assert_eq!(
                        session.history().len(),
                        (history_before + 1).min(HISTORY_CAPACITY)
                    );
                }
                _ => {}
            }
            assert!(session.history().len() <= HISTORY_CAPACITY);
            assert!(session.rooms().iter().all(|room| in_bounds(&room.position)));
            assert!(session.current_room().is_some());
            assert!(session.rooms().get(&origin()).unwrap().is_portal());
            check_route(&session);
        }
    }
}
