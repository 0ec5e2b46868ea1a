use thiserror::Error;

/// Why a command was refused. A refused command leaves the session untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Rejected {
    #[error("target room lies outside the grid")]
    OutOfBounds,
    #[error("no open passage in that direction")]
    PassageClosed,
    #[error("the portal room cannot be edited")]
    PortalRoom,
    #[error("the portal annotation cannot be assigned by hand")]
    ReservedAnnotation,
    #[error("no entry direction has been picked yet")]
    DirectionNotPicked,
    #[error("the map has already been initialized")]
    AlreadyInitialized,
    #[error("not available while viewing the portal room")]
    ViewingPortal,
    #[error("zoom is already at its limit")]
    ZoomLimit,
}
