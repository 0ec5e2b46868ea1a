//! Discrete commands issued by the input layer, mirroring the overlay's key bindings:
//! arrows move (or pick the entry direction), alt+arrows toggle links, page down / page up /
//! end toggle the important and avoid marks, alt+end resets, alt+page keys zoom and holding
//! home shows the portal room.
use log::debug;
use std::str::FromStr;
use thiserror::Error;

use crate::direction::Direction;
use crate::error::Rejected;
use crate::room::Annotation;
use crate::session::{Phase, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    ToggleLink(Direction),
    ToggleAnnotation(Annotation),
    Reset,
    ZoomIn,
    ZoomOut,
    HoldPortalView,
    ReleasePortalView,
}

/// What an accepted command changed, so the caller knows what to redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    Initialized,
    Moved,
    Relinked,
    Annotated,
    Reset,
    Zoomed(u32),
    ViewChanged,
}

impl Session {
    /// Dispatches `command` to the matching map operation. While the entry direction has not
    /// been picked, a move picks it and initializes the map.
    pub fn apply(&mut self, command: Command) -> Result<Effect, Rejected> {
        let result = match command {
            Command::Move(direction) if self.phase() == Phase::PickDirection => self
                .initialize_map(direction.passage())
                .map(|_| Effect::Initialized),
            Command::Move(direction) => self.move_player(direction).map(|_| Effect::Moved),
            Command::ToggleLink(direction) => {
                self.toggle_room_link(direction).map(|_| Effect::Relinked)
            }
            Command::ToggleAnnotation(kind) => {
                self.toggle_annotation(kind).map(|_| Effect::Annotated)
            }
            Command::Reset => self.require_map_view().map(|_| {
                self.reset_map();
                Effect::Reset
            }),
            Command::ZoomIn => self
                .require_player_view()
                .and_then(|_| self.view_mut().zoom_in())
                .map(Effect::Zoomed),
            Command::ZoomOut => self
                .require_player_view()
                .and_then(|_| self.view_mut().zoom_out())
                .map(Effect::Zoomed),
            Command::HoldPortalView => self.require_picked().map(|_| {
                self.view_mut().set_viewing_portal(true);
                Effect::ViewChanged
            }),
            Command::ReleasePortalView => {
                self.view_mut().set_viewing_portal(false);
                Ok(Effect::ViewChanged)
            }
        };
        debug!("{:?} -> {:?}", command, result);
        result
    }

    fn require_picked(&self) -> Result<(), Rejected> {
        match self.phase() {
            Phase::PickDirection => Err(Rejected::DirectionNotPicked),
            Phase::Exploring => Ok(()),
        }
    }

    fn require_player_view(&self) -> Result<(), Rejected> {
        if self.view().viewing_portal() {
            Err(Rejected::ViewingPortal)
        } else {
            Ok(())
        }
    }

    fn require_map_view(&self) -> Result<(), Rejected> {
        self.require_picked()?;
        self.require_player_view()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown direction '{0}'")]
    UnknownDirection(String),
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
}

impl FromStr for Direction {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "s" | "south" | "down" => Ok(Direction::South),
            "e" | "east" | "right" => Ok(Direction::East),
            "n" | "north" | "up" => Ok(Direction::North),
            "w" | "west" | "left" => Ok(Direction::West),
            _ => Err(ParseCommandError::UnknownDirection(s.to_owned())),
        }
    }
}

/// Parses the console form of a command, e.g. `n`, `link w`, `avoid`, `+`.
impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let head = words.next().ok_or(ParseCommandError::Empty)?;
        let command = match head.to_ascii_lowercase().as_str() {
            "link" => {
                let direction = words
                    .next()
                    .ok_or_else(|| ParseCommandError::UnknownDirection(String::new()))?;
                Command::ToggleLink(direction.parse()?)
            }
            "avoid" => Command::ToggleAnnotation(Annotation::Avoid),
            "imp1" | "important1" => Command::ToggleAnnotation(Annotation::Important1),
            "imp2" | "important2" => Command::ToggleAnnotation(Annotation::Important2),
            "clear" => Command::ToggleAnnotation(Annotation::None),
            "reset" => Command::Reset,
            "+" | "zoom-in" => Command::ZoomIn,
            "-" | "zoom-out" => Command::ZoomOut,
            "portal" => Command::HoldPortalView,
            "back" => Command::ReleasePortalView,
            other => match other.parse::<Direction>() {
                Ok(direction) => Command::Move(direction),
                Err(_) => return Err(ParseCommandError::UnknownCommand(head.to_owned())),
            },
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_util::point::Point;

    #[test]
    fn first_move_picks_direction() {
        let mut session = Session::new();
        assert_eq!(session.apply(Command::Move(Direction::East)), Ok(Effect::Initialized));
        assert_eq!(session.player(), session.origin());
        assert_eq!(session.apply(Command::Move(Direction::East)), Ok(Effect::Moved));
        assert_eq!(session.player(), Point::new(1, 0));
        assert_eq!(
            session.apply(Command::Move(Direction::North)),
            Ok(Effect::Moved)
        );
    }

    #[test]
    fn reset_only_while_exploring() {
        let mut session = Session::new();
        assert_eq!(session.apply(Command::Reset), Err(Rejected::DirectionNotPicked));
        session.apply(Command::Move(Direction::South)).unwrap();
        session.apply(Command::HoldPortalView).unwrap();
        assert_eq!(session.apply(Command::Reset), Err(Rejected::ViewingPortal));
        assert_eq!(session.apply(Command::ZoomIn), Err(Rejected::ViewingPortal));
        session.apply(Command::ReleasePortalView).unwrap();
        assert_eq!(session.apply(Command::Reset), Ok(Effect::Reset));
        assert_eq!(session.phase(), Phase::PickDirection);
    }

    #[test]
    fn zoom_works_before_picking() {
        let mut session = Session::new();
        assert_eq!(session.apply(Command::ZoomOut), Ok(Effect::Zoomed(5)));
        assert_eq!(session.apply(Command::HoldPortalView), Err(Rejected::DirectionNotPicked));
    }

    #[test]
    fn parse_commands() {
        assert_eq!("n".parse::<Command>(), Ok(Command::Move(Direction::North)));
        assert_eq!("Left".parse::<Command>(), Ok(Command::Move(Direction::West)));
        assert_eq!("link s".parse::<Command>(), Ok(Command::ToggleLink(Direction::South)));
        assert_eq!("avoid".parse::<Command>(), Ok(Command::ToggleAnnotation(Annotation::Avoid)));
        assert_eq!("+".parse::<Command>(), Ok(Command::ZoomIn));
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "link up-ish".parse::<Command>(),
            Err(ParseCommandError::UnknownDirection("up-ish".to_owned()))
        );
        assert_eq!(
            "jump".parse::<Command>(),
            Err(ParseCommandError::UnknownCommand("jump".to_owned()))
        );
    }
}
