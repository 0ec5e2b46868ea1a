use grid_util::point::Point;
use log::debug;

use crate::astar::astar_portal;
use crate::config::RouterConfig;
use crate::direction::Direction;
use crate::grid::{self, origin};
use crate::room::Annotation;
use crate::room_table::RoomTable;

/// A route between the portal and the player, stored as unit steps leading from the portal
/// towards the player. Empty when the player stands on the portal or no route is known.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Route {
    steps: Vec<Direction>,
}

impl Route {
    pub fn steps(&self) -> &[Direction] {
        &self.steps
    }
    pub fn len(&self) -> usize {
        self.steps.len()
    }
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
    pub fn clear(&mut self) {
        self.steps.clear();
    }
    /// Rooms along the route, starting at the portal and ending in the player's room.
    pub fn waypoints(&self) -> Vec<Point> {
        let mut current = origin();
        let mut points = Vec::with_capacity(self.steps.len() + 1);
        points.push(current);
        for &direction in &self.steps {
            current = grid::step(&current, direction);
            points.push(current);
        }
        points
    }
}

impl From<Vec<Direction>> for Route {
    fn from(steps: Vec<Direction>) -> Route {
        Route { steps }
    }
}

/// Computes routes back to the portal over the known map. Undiscovered rooms are assumed to
/// be open on all sides and are traversed at a penalty.
#[derive(Clone, Debug, Default)]
pub struct Router {
    pub config: RouterConfig,
}

impl Router {
    pub fn new() -> Router {
        Router::default()
    }

    pub fn with_config(config: RouterConfig) -> Router {
        Router { config }
    }

    /// Multiplier of the heuristic of the room at `point`.
    pub fn scale(&self, rooms: &RoomTable, point: &Point) -> f32 {
        match rooms.get(point) {
            Some(room) if room.annotation == Annotation::Avoid => self.config.avoid_scale,
            Some(room) if !room.visited => self.config.unvisited_scale,
            Some(_) => self.config.visited_scale,
            None => self.config.undiscovered_scale,
        }
    }

    /// Computes the route from `start` back to the portal.
    pub fn find_route(&self, rooms: &RoomTable, start: Point) -> Route {
        let goal = origin();
        if start == goal {
            return Route::default();
        }
        let result = astar_portal(
            start,
            goal,
            self.config.initial_max_length,
            |p| rooms.passages_at(p),
            |p| self.scale(rooms, p),
        );
        let route = Route::from(result.steps.unwrap_or_default());
        debug!(
            "Route from {} has {} steps ({} rooms expanded)",
            start,
            route.len(),
            result.expanded
        );
        route
    }
}
