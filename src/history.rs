use grid_util::point::Point;

use crate::direction::Direction;
use crate::HISTORY_CAPACITY;

/// A single step of the player: the room entered and the direction leading back to the room
/// it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    pub position: Point,
    pub arrived_from: Direction,
}

/// Ring buffer of the last [HISTORY_CAPACITY] player moves. Once full, every push overwrites
/// the oldest entry.
#[derive(Clone, Debug, Default)]
pub struct PathHistory {
    entries: Vec<Breadcrumb>,
    head: usize,
}

impl PathHistory {
    pub fn new() -> PathHistory {
        PathHistory {
            entries: Vec::with_capacity(HISTORY_CAPACITY),
            head: 0,
        }
    }

    pub fn push(&mut self, position: Point, arrived_from: Direction) {
        let crumb = Breadcrumb {
            position,
            arrived_from,
        };
        if self.entries.len() < HISTORY_CAPACITY {
            self.entries.push(crumb);
        } else {
            self.entries[self.head] = crumb;
            self.head = (self.head + 1) % HISTORY_CAPACITY;
        }
    }

    pub fn reset(&mut self) {
        self.entries.clear();
        self.head = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Breadcrumb> + '_ {
        let (newer, older) = self.entries.split_at(self.head);
        older.iter().chain(newer)
    }

    pub fn latest(&self) -> Option<&Breadcrumb> {
        self.iter().last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(history: &PathHistory) -> Vec<i32> {
        history.iter().map(|c| c.position.x).collect()
    }

    #[test]
    fn grows_until_full() {
        let mut history = PathHistory::new();
        assert!(history.is_empty());
        for x in 0..4 {
            history.push(Point::new(x, 0), Direction::West);
        }
        assert_eq!(history.len(), 4);
        assert_eq!(positions(&history), vec![0, 1, 2, 3]);
        assert_eq!(history.latest().unwrap().position, Point::new(3, 0));
    }

    #[test]
    fn overwrites_oldest_when_full() {
        let mut history = PathHistory::new();
        for x in 0..11 {
            history.push(Point::new(x, 0), Direction::West);
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(positions(&history), (1..11).collect::<Vec<_>>());

        for x in 11..25 {
            history.push(Point::new(x, 0), Direction::West);
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(positions(&history), (15..25).collect::<Vec<_>>());
    }

    #[test]
    fn reset_empties() {
        let mut history = PathHistory::new();
        for x in 0..13 {
            history.push(Point::new(x, 0), Direction::North);
        }
        history.reset();
        assert!(history.is_empty());
        assert_eq!(history.iter().count(), 0);
        history.push(Point::new(7, 7), Direction::South);
        assert_eq!(positions(&history), vec![7]);
    }
}
