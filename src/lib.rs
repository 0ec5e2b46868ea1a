//! # vault_mapper
//!
//! Map state and portal routing for exploring a grid of vault rooms connected by passages in
//! the four cardinal directions. The crate tracks which rooms have been discovered and which
//! passages they have, lets the user annotate rooms and computes a route from the player back
//! to the portal room at the origin.
//!
//! Rooms next to a visited room are discovered optimistically: they start open on all sides
//! and are narrowed as walls are observed. The router treats rooms it knows nothing about as
//! open but expensive, so it can suggest routes through unexplored parts of the map.
//!
//! Drawing, windowing and input capture are left to the caller, which drives a [Session]
//! with [Command]s and reads back the [RoomTable], [PathHistory] and [Route].
mod astar;
pub mod command;
pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod history;
pub mod room;
pub mod room_table;
pub mod router;
pub mod session;
pub mod view;

pub use command::{Command, Effect, ParseCommandError};
pub use config::{RouterConfig, SessionConfig, ViewConfig};
pub use direction::{Direction, Passages};
pub use error::Rejected;
pub use grid::{origin, room_id, RoomId};
pub use history::{Breadcrumb, PathHistory};
pub use room::{Annotation, Room};
pub use room_table::RoomTable;
pub use router::{Route, Router};
pub use session::{Phase, Session};
pub use view::View;

/// Rooms reachable from the portal along either axis. The grid spans `[-RADIUS, RADIUS]`.
pub const RADIUS: i32 = 200;
/// Number of player moves kept for the breadcrumb trail.
pub const HISTORY_CAPACITY: usize = 10;
