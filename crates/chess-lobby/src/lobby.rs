//! Session registry.
//!
//! Each connection owns at most one [`GameSession`]. Sessions live in a map
//! keyed by connection id and are shared as `Arc<Mutex<_>>`, so work on one
//! session never waits on another. The thinking delay before the computer's
//! reply is awaited by the submitting task alone with the session unlocked;
//! during it the session reports that it is the computer's turn.

use crate::config::{LobbyConfig, Room};
use crate::error::LobbyError;
use crate::view::SessionView;
use chess_engine::{human_is_white_for_slot, start_game, EndReason, GameSession, MoveOutcome};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

/// Identifies a player's connection.
pub type ConnectionId = u64;

#[derive(Clone)]
struct Entry {
    session: Arc<Mutex<GameSession>>,
    origin_room: Room,
}

/// All running games, one per connection.
pub struct Lobby {
    config: LobbyConfig,
    sessions: RwLock<HashMap<ConnectionId, Entry>>,
}

impl Lobby {
    pub fn new(config: LobbyConfig) -> Self {
        Lobby {
            config,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &LobbyConfig {
        &self.config
    }

    /// Starts a game for `conn`, replacing any game it already had.
    ///
    /// The player in connection slot `slot` plays White if the slot is even.
    /// A Black player gets the computer's opening move straight away.
    pub async fn start_game(
        &self,
        conn: ConnectionId,
        slot: usize,
        room: Room,
    ) -> Result<SessionView, LobbyError> {
        if room != self.config.game_room {
            return Err(LobbyError::NotInGameRoom);
        }

        let human_is_white = human_is_white_for_slot(slot);
        let session = start_game(human_is_white);
        let view = SessionView::new(&session, room);
        let entry = Entry {
            session: Arc::new(Mutex::new(session)),
            origin_room: room,
        };

        let previous = self.sessions.write().await.insert(conn, entry);
        if let Some(previous) = previous {
            previous.session.lock().await.abandon();
            debug!(conn, "replaced previous game");
        }
        info!(conn, human_is_white, "game started");
        Ok(view)
    }

    /// Plays the human's move, waits out the thinking delay and plays the
    /// computer's reply.
    ///
    /// If the game ends during the delay (resignation, quit, leaving the
    /// room) the outcome reports that ending and no reply is played.
    pub async fn submit_move(
        &self,
        conn: ConnectionId,
        text: &str,
    ) -> Result<MoveOutcome, LobbyError> {
        let session = self.entry(conn).await?.session;

        let human_move = match session.lock().await.play_human_move(text)? {
            MoveOutcome::Applied { human_move, .. } => human_move,
            ended @ MoveOutcome::GameEnded { .. } => {
                info!(conn, "game ended by player move");
                return Ok(ended);
            }
        };

        tokio::time::sleep(self.config.thinking_delay()).await;

        let mut session = session.lock().await;
        if let Some(reason) = session.end_reason() {
            debug!(conn, %reason, "game ended before the reply");
            return Ok(MoveOutcome::GameEnded {
                human_move,
                opponent_move: None,
                reason,
            });
        }

        let reply = session.play_opponent_move()?;
        Ok(match reply.ended {
            Some(reason) => {
                info!(conn, %reason, "game ended by opponent move");
                MoveOutcome::GameEnded {
                    human_move,
                    opponent_move: Some(reply.description),
                    reason,
                }
            }
            None => MoveOutcome::Applied {
                human_move,
                opponent_move: Some(reply.description),
            },
        })
    }

    /// Resigns and removes `conn`'s game. A finished game keeps its
    /// first result.
    pub async fn resign(&self, conn: ConnectionId) -> Result<EndReason, LobbyError> {
        let entry = self.remove(conn).await?;
        let reason = entry.session.lock().await.resign();
        info!(conn, %reason, "game resigned");
        Ok(reason)
    }

    /// Leaves `conn`'s game. An unfinished game counts as abandoned.
    pub async fn quit(&self, conn: ConnectionId) -> Result<EndReason, LobbyError> {
        let entry = self.remove(conn).await?;
        let reason = entry.session.lock().await.abandon();
        info!(conn, %reason, "game closed");
        Ok(reason)
    }

    /// Tells the lobby that `conn`'s player is now in `room`.
    ///
    /// Leaving the room the game started in abandons the game. Returns the
    /// end reason if a game was dropped.
    pub async fn player_moved(&self, conn: ConnectionId, room: Room) -> Option<EndReason> {
        let entry = {
            let mut sessions = self.sessions.write().await;
            let left = sessions
                .get(&conn)
                .is_some_and(|entry| entry.origin_room != room);
            if !left {
                return None;
            }
            sessions.remove(&conn)?
        };
        let reason = entry.session.lock().await.abandon();
        info!(conn, ?room, %reason, "player left the game room");
        Some(reason)
    }

    /// Snapshot of `conn`'s game.
    pub async fn view(&self, conn: ConnectionId) -> Option<SessionView> {
        let entry = self.entry(conn).await.ok()?;
        let session = entry.session.lock().await;
        Some(SessionView::new(&session, entry.origin_room))
    }

    /// Connections with a registered game, finished or not, in id order.
    pub async fn active_sessions(&self) -> Vec<ConnectionId> {
        let mut conns: Vec<_> = self.sessions.read().await.keys().copied().collect();
        conns.sort_unstable();
        conns
    }

    async fn entry(&self, conn: ConnectionId) -> Result<Entry, LobbyError> {
        self.sessions
            .read()
            .await
            .get(&conn)
            .cloned()
            .ok_or(LobbyError::NoSession(conn))
    }

    async fn remove(&self, conn: ConnectionId) -> Result<Entry, LobbyError> {
        self.sessions
            .write()
            .await
            .remove(&conn)
            .ok_or(LobbyError::NoSession(conn))
    }
}
