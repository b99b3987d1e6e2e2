use crate::lobby::ConnectionId;
use chess_engine::MoveError;
use thiserror::Error;

/// Errors returned by [`Lobby`](crate::Lobby) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LobbyError {
    #[error("connection {0} has no game")]
    NoSession(ConnectionId),

    #[error("games can only be started in the game room")]
    NotInGameRoom,

    #[error(transparent)]
    Move(#[from] MoveError),
}
