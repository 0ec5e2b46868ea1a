use core::fmt;
use grid_util::point::Point;
use log::{debug, info};

use crate::config::SessionConfig;
use crate::direction::{Direction, Passages};
use crate::error::Rejected;
use crate::grid::{self, origin};
use crate::history::PathHistory;
use crate::room::{Annotation, Room};
use crate::room_table::RoomTable;
use crate::router::{Route, Router};
use crate::view::View;

/// Whether the entry direction out of the portal still has to be picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    PickDirection,
    Exploring,
}

/// [Session] owns the whole map state of one run: the known rooms, the player, the breadcrumb
/// trail and the route back to the portal. Every command runs to completion, route included,
/// before returning. A rejected command changes nothing.
#[derive(Clone, Debug)]
pub struct Session {
    router: Router,
    rooms: RoomTable,
    history: PathHistory,
    player: Point,
    phase: Phase,
    route: Route,
    view: View,
}

impl Default for Session {
    fn default() -> Session {
        Session::with_config(SessionConfig::default())
    }
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    pub fn with_config(config: SessionConfig) -> Session {
        Session {
            router: Router::with_config(config.router),
            rooms: RoomTable::new(),
            history: PathHistory::new(),
            player: origin(),
            phase: Phase::PickDirection,
            route: Route::default(),
            view: View::new(config.view),
        }
    }

    /// Seeds the map with the portal room, open only towards `entry`, and discovers its
    /// surroundings.
    pub fn initialize_map(&mut self, entry: Passages) -> Result<(), Rejected> {
        if self.phase == Phase::Exploring {
            return Err(Rejected::AlreadyInitialized);
        }
        self.rooms.add_room(origin(), entry, Annotation::Portal, true);
        self.rooms.add_surrounding(origin());
        self.phase = Phase::Exploring;
        self.recompute_route();
        info!("Map initialized with portal exits {:04b}", entry.bits());
        Ok(())
    }

    /// Forgets the map and returns to picking an entry direction.
    pub fn reset_map(&mut self) {
        self.rooms.clear();
        self.history.reset();
        self.player = origin();
        self.phase = Phase::PickDirection;
        self.route.clear();
        self.view.reset();
        info!("Map reset");
    }

    /// Moves the player one room in `direction` if the current room has an open passage there.
    pub fn move_player(&mut self, direction: Direction) -> Result<(), Rejected> {
        self.ensure_exploring()?;
        let target = grid::neighbour(&self.player, direction).ok_or(Rejected::OutOfBounds)?;
        if !self.rooms.passages_at(&self.player).is_open(direction) {
            debug!("Move {:?} from {} blocked", direction, self.player);
            return Err(Rejected::PassageClosed);
        }
        self.rooms.mark_visited(target)?;
        self.player = target;
        self.history.push(target, direction.opposite());
        self.rooms.add_surrounding(target);
        self.recompute_route();
        debug!("Moved {:?} to {}", direction, target);
        Ok(())
    }

    /// Opens or closes the passage between the player's room and the room in `direction`.
    pub fn toggle_room_link(&mut self, direction: Direction) -> Result<(), Rejected> {
        self.ensure_exploring()?;
        self.rooms.toggle_link(self.player, direction)?;
        self.recompute_route();
        Ok(())
    }

    /// Toggles `kind` on the player's room: set if the room carries another annotation,
    /// cleared if it already carries `kind`. [Annotation::None] clears the room.
    pub fn toggle_annotation(&mut self, kind: Annotation) -> Result<(), Rejected> {
        self.ensure_exploring()?;
        if kind == Annotation::Portal {
            return Err(Rejected::ReservedAnnotation);
        }
        let player = self.player;
        let room = self
            .rooms
            .get_mut(&player)
            .ok_or(Rejected::DirectionNotPicked)?;
        if room.is_portal() {
            return Err(Rejected::PortalRoom);
        }
        room.annotation = if room.annotation == kind {
            Annotation::None
        } else {
            kind
        };
        debug!("Room {} annotated {:?}", player, room.annotation);
        self.recompute_route();
        Ok(())
    }

    pub fn rooms(&self) -> &RoomTable {
        &self.rooms
    }
    pub fn history(&self) -> &PathHistory {
        &self.history
    }
    pub fn route(&self) -> &Route {
        &self.route
    }
    pub fn player(&self) -> Point {
        self.player
    }
    pub fn origin(&self) -> Point {
        origin()
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn view(&self) -> &View {
        &self.view
    }
    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }
    pub fn current_room(&self) -> Option<&Room> {
        self.rooms.get(&self.player)
    }

    /// Room the view is centred on: the portal while it is being viewed, the player otherwise.
    pub fn focus(&self) -> Point {
        if self.view.viewing_portal() {
            origin()
        } else {
            self.player
        }
    }

    fn ensure_exploring(&self) -> Result<(), Rejected> {
        if self.phase == Phase::PickDirection {
            return Err(Rejected::DirectionNotPicked);
        }
        if self.view.viewing_portal() {
            return Err(Rejected::ViewingPortal);
        }
        Ok(())
    }

    fn recompute_route(&mut self) {
        self.route = self.router.find_route(&self.rooms, self.player);
    }
}

/// Draws the known map with the player as `@` and the route back to the portal as `*`.
impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let waypoints = self.route.waypoints();
        let trail = waypoints
            .get(1..waypoints.len().saturating_sub(1))
            .unwrap_or_default();
        self.rooms.write_map(f, |p| {
            if *p == self.player {
                Some('@')
            } else if trail.contains(p) {
                Some('*')
            } else {
                None
            }
        })
    }
}
