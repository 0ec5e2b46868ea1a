use core::fmt;
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexMap;
use itertools::Itertools;
use log::debug;

use crate::direction::{Direction, Passages};
use crate::error::Rejected;
use crate::grid::{self, room_id, RoomId};
use crate::room::{Annotation, Room};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// [RoomTable] holds every room discovered so far, keyed by [RoomId]. Rooms are only ever added
/// or narrowed between resets. Iteration follows discovery order.
#[derive(Clone, Debug, Default)]
pub struct RoomTable {
    rooms: FxIndexMap<RoomId, Room>,
}

impl RoomTable {
    pub fn new() -> RoomTable {
        RoomTable::default()
    }
    pub fn len(&self) -> usize {
        self.rooms.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
    pub fn clear(&mut self) {
        self.rooms.clear();
    }
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }
    pub fn contains(&self, point: &Point) -> bool {
        grid::in_bounds(point) && self.rooms.contains_key(&room_id(point))
    }

    /// Looks up the room at `point`. Coordinates outside the grid are never present.
    pub fn get(&self, point: &Point) -> Option<&Room> {
        if !grid::in_bounds(point) {
            return None;
        }
        self.rooms.get(&room_id(point))
    }
    pub fn get_mut(&mut self, point: &Point) -> Option<&mut Room> {
        if !grid::in_bounds(point) {
            return None;
        }
        self.rooms.get_mut(&room_id(point))
    }

    /// Passages out of `point`, assuming an undiscovered room is open on all sides.
    pub fn passages_at(&self, point: &Point) -> Passages {
        self.get(point).map_or(Passages::all(), |room| room.passages)
    }

    /// Inserts a room unless one is already known at `position`, in which case nothing changes.
    /// Returns whether the room was inserted.
    pub fn add_room(
        &mut self,
        position: Point,
        passages: Passages,
        annotation: Annotation,
        visited: bool,
    ) -> bool {
        debug_assert!(grid::in_bounds(&position));
        let id = room_id(&position);
        if self.rooms.contains_key(&id) {
            return false;
        }
        self.rooms.insert(id, Room::new(position, passages, annotation, visited));
        true
    }

    /// Marks the room at `position` as visited, discovering it first if needed.
    pub fn mark_visited(&mut self, position: Point) -> Result<(), Rejected> {
        if !grid::in_bounds(&position) {
            return Err(Rejected::OutOfBounds);
        }
        self.rooms
            .entry(room_id(&position))
            .or_insert_with(|| Room::undiscovered(position))
            .visited = true;
        Ok(())
    }

    /// Discovers the eight rooms around `position`. Unknown cardinal neighbours start out open
    /// except where the border or a missing passage of `position` closes them; known ones are
    /// only ever narrowed. Diagonal neighbours are only constrained by the border.
    pub fn add_surrounding(&mut self, position: Point) {
        let passages = self.passages_at(&position);
        for around in position.moore_neighborhood() {
            if !grid::in_bounds(&around) {
                continue;
            }
            let mut open = grid::border_mask(&around);
            if let Some(direction) = Direction::between(&position, &around) {
                if !passages.is_open(direction) {
                    open.remove(direction.opposite().passage());
                }
            }
            self.rooms
                .entry(room_id(&around))
                .and_modify(|room| room.passages &= open)
                .or_insert_with(|| Room::new(around, open, Annotation::None, false));
        }
    }

    /// Flips the passage out of `position` towards `direction` together with the matching
    /// passage of the room it leads to. Refused when either room is the portal.
    pub fn toggle_link(&mut self, position: Point, direction: Direction) -> Result<(), Rejected> {
        if !grid::in_bounds(&position) {
            return Err(Rejected::OutOfBounds);
        }
        let facing = grid::neighbour(&position, direction).ok_or(Rejected::OutOfBounds)?;
        if [position, facing]
            .iter()
            .any(|p| self.get(p).is_some_and(Room::is_portal))
        {
            return Err(Rejected::PortalRoom);
        }
        for (point, dir) in [(position, direction), (facing, direction.opposite())] {
            self.rooms
                .entry(room_id(&point))
                .or_insert_with(|| Room::undiscovered(point))
                .passages
                .toggle(dir.passage());
        }
        debug!("Toggled link {:?} between {} and {}", direction, position, facing);
        Ok(())
    }

    /// Smallest rectangle `(min, max)` containing every known room.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let (min_x, max_x) = self.iter().map(|r| r.position.x).minmax().into_option()?;
        let (min_y, max_y) = self.iter().map(|r| r.position.y).minmax().into_option()?;
        Some((Point::new(min_x, min_y), Point::new(max_x, max_y)))
    }

    /// Writes the known part of the map, one character per room. `overlay` may replace the
    /// character of any cell.
    pub(crate) fn write_map<F>(&self, f: &mut fmt::Formatter, overlay: F) -> fmt::Result
    where
        F: Fn(&Point) -> Option<char>,
    {
        let Some((min, max)) = self.bounds() else {
            return Ok(());
        };
        for y in min.y..=max.y {
            let row = (min.x..=max.x)
                .map(|x| {
                    let p = Point::new(x, y);
                    overlay(&p)
                        .or_else(|| self.get(&p).map(Room::glyph))
                        .unwrap_or(' ')
                })
                .collect::<String>();
            writeln!(f, "{}", row.trim_end())?;
        }
        Ok(())
    }
}

impl fmt::Display for RoomTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_map(f, |_| None)
    }
}
