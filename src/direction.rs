use bitflags::bitflags;
use grid_util::point::Point;

/// One of the four passage directions out of a room. North points towards negative `y`,
/// south towards positive `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    South,
    East,
    North,
    West,
}

impl Direction {
    /// All directions in the order the router expands them.
    pub const ALL: [Direction; 4] = [
        Direction::South,
        Direction::East,
        Direction::North,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::North => Direction::South,
            Direction::West => Direction::East,
        }
    }

    /// Unit grid offset of a single step in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::North => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// The passage bit belonging to this direction.
    pub fn passage(self) -> Passages {
        match self {
            Direction::South => Passages::SOUTH,
            Direction::East => Passages::EAST,
            Direction::North => Passages::NORTH,
            Direction::West => Passages::WEST,
        }
    }

    /// Direction of the unit step leading from `from` to `to`, if the two are cardinal neighbours.
    pub fn between(from: &Point, to: &Point) -> Option<Direction> {
        let delta = (to.x - from.x, to.y - from.y);
        Direction::ALL.into_iter().find(|d| d.delta() == delta)
    }
}

bitflags! {
    /// Open passages of a room. A set bit means the room can be left in that direction.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Passages: u8 {
        const SOUTH = 0x1;
        const EAST = 0x2;
        const NORTH = 0x4;
        const WEST = 0x8;
    }
}

impl Passages {
    pub fn is_open(self, direction: Direction) -> bool {
        self.contains(direction.passage())
    }
}

/// Rooms that have not been constrained yet are assumed to be open on all sides.
impl Default for Passages {
    fn default() -> Self {
        Passages::all()
    }
}

impl From<Direction> for Passages {
    fn from(direction: Direction) -> Self {
        direction.passage()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            let (dx, dy) = dir.delta();
            assert_eq!(dir.opposite().delta(), (-dx, -dy));
        }
    }

    #[test]
    fn passage_bits_match_layout() {
        assert_eq!(Passages::all().bits(), 0xF);
        assert_eq!(Passages::default(), Passages::all());
        assert_eq!(Passages::from(Direction::North).bits(), 0x4);
        assert!(Passages::SOUTH.is_open(Direction::South));
        assert!(!Passages::SOUTH.is_open(Direction::North));
    }

    #[test]
    fn between_neighbours() {
        let a = Point::new(3, 3);
        assert_eq!(Direction::between(&a, &Point::new(3, 4)), Some(Direction::South));
        assert_eq!(Direction::between(&a, &Point::new(2, 3)), Some(Direction::West));
        assert_eq!(Direction::between(&a, &Point::new(4, 4)), None);
    }
}
