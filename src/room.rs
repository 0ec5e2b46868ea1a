use core::fmt;
use grid_util::point::Point;

use crate::direction::Passages;

/// User annotation of a room. Only one annotation is held at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Annotation {
    #[default]
    None,
    /// The origin room. Assigned once when the map is initialized.
    Portal,
    /// Penalized (never blocked) by the router.
    Avoid,
    Important1,
    Important2,
}

/// A discovered room of the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Room {
    pub position: Point,
    pub passages: Passages,
    pub annotation: Annotation,
    pub visited: bool,
}

impl Room {
    pub fn new(position: Point, passages: Passages, annotation: Annotation, visited: bool) -> Room {
        Room {
            position,
            passages,
            annotation,
            visited,
        }
    }

    /// A room known only by inference: open on all sides, unannotated and unvisited.
    pub fn undiscovered(position: Point) -> Room {
        Room::new(position, Passages::all(), Annotation::None, false)
    }

    pub fn is_portal(&self) -> bool {
        self.annotation == Annotation::Portal
    }

    /// Character used for the room in text renderings of the map.
    pub fn glyph(&self) -> char {
        match self.annotation {
            Annotation::Portal => 'P',
            Annotation::Avoid => 'x',
            Annotation::Important1 => '1',
            Annotation::Important2 => '2',
            Annotation::None if self.visited => '#',
            Annotation::None => '?',
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} [{:04b}] {:?}{}",
            self.position,
            self.passages.bits(),
            self.annotation,
            if self.visited { " visited" } else { "" }
        )
    }
}
