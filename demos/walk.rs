use vault_mapper::{Annotation, Command, Direction, Session};

// In this example the player enters the vault heading south, walks a short hook and marks a
// room as important. After every move the route back to the portal is recomputed. The map is
// printed with
// - P marks the portal
// - @ marks the player
// - * marks the route back
// - 1 marks the important room
// - # marks a visited room and ? a room seen but not visited

fn main() {
    env_logger::init();
    let mut session = Session::new();
    let mut commands = vec![Command::Move(Direction::South)];
    commands.extend(
        [
            Direction::South,
            Direction::South,
            Direction::East,
            Direction::North,
        ]
        .map(Command::Move),
    );
    commands.push(Command::ToggleAnnotation(Annotation::Important1));
    commands.push(Command::Move(Direction::East));
    for command in commands {
        match session.apply(command) {
            Ok(effect) => println!("{:?}: {:?}", command, effect),
            Err(rejected) => println!("{:?} rejected: {}", command, rejected),
        }
    }
    println!("{}", session);
    println!("Route from the portal: {:?}", session.route().steps());
    println!("Breadcrumbs:");
    for crumb in session.history().iter() {
        println!("{} (from {:?})", crumb.position, crumb.arrived_from);
    }
}
