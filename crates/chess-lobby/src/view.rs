//! Serializable snapshots of a session for rendering.

use crate::config::Room;
use chess_engine::{format_elapsed, GameSession};
use serde::Serialize;

/// Everything a front end needs to draw one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    /// Piece codes for squares a1..h8 (0 empty, 1-6 White, 7-12 Black).
    pub squares: Vec<u8>,
    /// Text board, rank 8 first.
    pub diagram: String,
    pub human_is_white: bool,
    pub black_to_move: bool,
    pub ply_count: u32,
    pub last_human_move: Option<String>,
    pub last_opponent_move: Option<String>,
    pub ended: bool,
    pub end_reason: Option<String>,
    /// Game clock as `MM:SS`.
    pub elapsed: String,
    pub origin_room: Room,
}

impl SessionView {
    pub fn new(session: &GameSession, origin_room: Room) -> Self {
        SessionView {
            squares: session.board().codes().to_vec(),
            diagram: session.board().diagram(),
            human_is_white: session.human_is_white(),
            black_to_move: session.black_to_move(),
            ply_count: session.ply_count(),
            last_human_move: session.last_human_move().map(str::to_owned),
            last_opponent_move: session.last_opponent_move().map(str::to_owned),
            ended: session.is_ended(),
            end_reason: session.end_reason().map(|r| r.to_string()),
            elapsed: format_elapsed(session.elapsed()),
            origin_room,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_of_new_game() {
        let session = GameSession::new(true);
        let view = SessionView::new(&session, [1, 2, 3]);
        assert_eq!(view.squares.len(), 64);
        assert_eq!(view.squares[0], 4);
        assert_eq!(view.squares[4], 6);
        assert_eq!(view.squares[60], 12);
        assert!(view.diagram.starts_with("8 rnbqkbnr"));
        assert_eq!(view.ply_count, 0);
        assert!(!view.ended);
        assert_eq!(view.end_reason, None);
        assert_eq!(view.elapsed, "00:00");
    }

    #[test]
    fn json_shape() {
        let mut session = GameSession::new(true);
        session.submit_move("e4").unwrap();
        session.resign();
        let json: serde_json::Value =
            serde_json::from_str(&SessionView::new(&session, [0, 0, 0]).to_json().unwrap())
                .unwrap();
        assert_eq!(json["ply_count"], 1);
        assert_eq!(json["last_human_move"], "Pawn to e4");
        assert_eq!(json["ended"], true);
        assert_eq!(json["end_reason"], "resignation");
        assert_eq!(json["origin_room"], serde_json::json!([0, 0, 0]));
        assert_eq!(json["squares"].as_array().map(Vec::len), Some(64));
    }
}
