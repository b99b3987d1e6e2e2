//! Session layer for chess games against the computer.
//!
//! - [`Lobby`] - registry of games keyed by connection id
//! - [`LobbyConfig`] - game room and thinking delay, loaded from TOML
//! - [`SessionView`] - serializable snapshot for rendering

mod config;
mod error;
mod lobby;
mod view;

pub use config::{ConfigError, LobbyConfig, Room};
pub use error::LobbyError;
pub use lobby::{ConnectionId, Lobby};
pub use view::SessionView;
