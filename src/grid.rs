//! Addressing of the bounded room grid. Every room lives on a coordinate in
//! `[-RADIUS, RADIUS]` on both axes and is keyed by a dense [RoomId].
use grid_util::point::Point;

use crate::direction::{Direction, Passages};
use crate::RADIUS;

/// Rooms along one axis of the grid.
pub const GRID_SIDE: i32 = RADIUS * 2 + 1;

/// Dense scalar key of a room coordinate. Only meaningful as a lookup key.
pub type RoomId = u32;

/// The portal room every route leads back to.
pub fn origin() -> Point {
    Point::new(0, 0)
}

pub fn in_bounds(point: &Point) -> bool {
    point.x.abs() <= RADIUS && point.y.abs() <= RADIUS
}

/// Maps a coordinate to its [RoomId]. The coordinate must be [in_bounds]; the result for
/// anything else is unspecified.
pub fn room_id(point: &Point) -> RoomId {
    debug_assert!(in_bounds(point), "{} lies outside the room grid", point);
    ((point.x + RADIUS) + (point.y + RADIUS) * GRID_SIDE) as RoomId
}

/// Inverse of [room_id].
pub fn room_point(id: RoomId) -> Point {
    let id = id as i32;
    Point::new(id % GRID_SIDE - RADIUS, id / GRID_SIDE - RADIUS)
}

/// Unchecked single step from `point`.
pub fn step(point: &Point, direction: Direction) -> Point {
    let (dx, dy) = direction.delta();
    Point::new(point.x + dx, point.y + dy)
}

/// Single step from `point`, or [None] if it would leave the grid.
pub fn neighbour(point: &Point, direction: Direction) -> Option<Point> {
    Some(step(point, direction)).filter(in_bounds)
}

/// Passages the grid border leaves open at `point`: a room on the border cannot open outwards.
pub fn border_mask(point: &Point) -> Passages {
    let mut mask = Passages::all();
    if point.y == RADIUS {
        mask.remove(Passages::SOUTH);
    }
    if point.x == RADIUS {
        mask.remove(Passages::EAST);
    }
    if point.y == -RADIUS {
        mask.remove(Passages::NORTH);
    }
    if point.x == -RADIUS {
        mask.remove(Passages::WEST);
    }
    mask
}

/// Squared euclidean distance, the base of the routing heuristic.
pub fn squared_distance(p1: &Point, p2: &Point) -> u32 {
    let dx = (p1.x - p2.x) as i64;
    let dy = (p1.y - p2.y) as i64;
    (dx * dx + dy * dy) as u32
}
