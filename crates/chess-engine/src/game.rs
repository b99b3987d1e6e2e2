//! Game session state machine.
//!
//! A [`GameSession`] owns one board and mediates every player input:
//! parse, resolve against the board, validate, apply, check for the end of
//! the game, and then let the computer reply.
//!
//! Move submission is split in two so a session layer can pause between
//! the human move and the reply:
//! - [`GameSession::play_human_move`] applies the human's move
//! - [`GameSession::play_opponent_move`] applies the computer's reply
//!
//! [`GameSession::submit_move`] runs both back to back. While the reply is
//! pending it is the computer's turn and further human moves are rejected
//! with [`MoveError::NotYourTurn`].

use crate::error::MoveError;
use crate::notation::{describe_move, parse, resolve};
use crate::opponent::{GreedyOpponent, Opponent};
use crate::rules::{terminal_state, Terminal};
use chess_core::{Board, Color, Move};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Checkmate,
    Stalemate,
    Resignation,
    Abandoned,
}

impl EndReason {
    fn from_terminal(terminal: Terminal) -> Option<Self> {
        match terminal {
            Terminal::Ongoing => None,
            Terminal::Checkmate => Some(EndReason::Checkmate),
            Terminal::Stalemate => Some(EndReason::Stalemate),
        }
    }
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            EndReason::Checkmate => "checkmate",
            EndReason::Stalemate => "stalemate",
            EndReason::Resignation => "resignation",
            EndReason::Abandoned => "abandoned",
        };
        write!(f, "{}", reason)
    }
}

/// Result of an accepted move submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game goes on. `opponent_move` is `None` while the reply is still
    /// pending.
    Applied {
        human_move: String,
        opponent_move: Option<String>,
    },
    /// The game is over after these moves.
    GameEnded {
        human_move: String,
        opponent_move: Option<String>,
        reason: EndReason,
    },
}

/// The computer's reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpponentReply {
    pub mv: Move,
    pub description: String,
    /// Set when the reply ends the game.
    pub ended: Option<EndReason>,
}

/// Returns true if the player in connection slot `slot` plays White (even
/// slots do).
pub fn human_is_white_for_slot(slot: usize) -> bool {
    slot % 2 == 0
}

/// Starts a game from the standard position.
///
/// When the human plays Black the computer's first move is already made,
/// so the returned session is waiting on the human.
pub fn start_game(human_is_white: bool) -> GameSession {
    let mut session = GameSession::new(human_is_white);
    if session.is_opponent_turn() {
        // A fresh position always has a reply.
        let _ = session.play_opponent_move();
    }
    session
}

/// Formats an elapsed game time as `MM:SS`. Minutes are not wrapped at 60.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// One human player's game against the computer.
#[derive(Debug, Clone)]
pub struct GameSession<O = GreedyOpponent> {
    board: Board,
    human_is_white: bool,
    black_to_move: bool,
    /// Human moves made. Only the human's moves are counted.
    ply_count: u32,
    end_reason: Option<EndReason>,
    last_human_move: Option<String>,
    last_opponent_move: Option<String>,
    started_at: Instant,
    opponent: O,
}

impl GameSession<GreedyOpponent> {
    /// Creates a session from the standard position with White to move.
    ///
    /// Unlike [`start_game`], this does not make the computer's opening move
    /// when the human plays Black.
    pub fn new(human_is_white: bool) -> Self {
        Self::with_opponent(human_is_white, GreedyOpponent)
    }

    /// Creates a session from an arbitrary board.
    pub fn from_position(board: Board, human_is_white: bool, black_to_move: bool) -> Self {
        let mut session = Self::new(human_is_white);
        session.board = board;
        session.black_to_move = black_to_move;
        session
    }
}

impl<O: Opponent> GameSession<O> {
    /// Creates a session from the standard position with a custom opponent.
    pub fn with_opponent(human_is_white: bool, opponent: O) -> Self {
        GameSession {
            board: Board::startpos(),
            human_is_white,
            black_to_move: false,
            ply_count: 0,
            end_reason: None,
            last_human_move: None,
            last_opponent_move: None,
            started_at: Instant::now(),
            opponent,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn black_to_move(&self) -> bool {
        self.black_to_move
    }

    pub fn side_to_move(&self) -> Color {
        Color::from_black_to_move(self.black_to_move)
    }

    pub fn human_is_white(&self) -> bool {
        self.human_is_white
    }

    pub fn human_color(&self) -> Color {
        if self.human_is_white {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn ply_count(&self) -> u32 {
        self.ply_count
    }

    pub fn last_human_move(&self) -> Option<&str> {
        self.last_human_move.as_deref()
    }

    pub fn last_opponent_move(&self) -> Option<&str> {
        self.last_opponent_move.as_deref()
    }

    pub fn is_ended(&self) -> bool {
        self.end_reason.is_some()
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    /// The side that won, if the game ended in checkmate or resignation.
    pub fn winner(&self) -> Option<Color> {
        match self.end_reason? {
            EndReason::Checkmate => Some(self.side_to_move().opposite()),
            EndReason::Resignation => Some(self.human_color().opposite()),
            EndReason::Stalemate | EndReason::Abandoned => None,
        }
    }

    /// True when the human may move.
    pub fn is_human_turn(&self) -> bool {
        !self.is_ended() && self.side_to_move() == self.human_color()
    }

    /// True when the computer's reply is pending.
    pub fn is_opponent_turn(&self) -> bool {
        !self.is_ended() && self.side_to_move() != self.human_color()
    }

    /// Time since the session was created.
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Applies the human's move and checks whether it ends the game.
    ///
    /// On success it is the computer's turn unless the game ended. On any
    /// error the session is unchanged.
    pub fn play_human_move(&mut self, text: &str) -> Result<MoveOutcome, MoveError> {
        if self.is_ended() {
            return Err(MoveError::GameAlreadyEnded);
        }
        if !self.is_human_turn() {
            return Err(MoveError::NotYourTurn);
        }

        let us = self.human_color();
        let parsed = parse(text)?;
        let m = resolve(&self.board, parsed, us)?;

        let description = self.apply(m);
        self.ply_count += 1;
        self.last_human_move = Some(description.clone());
        debug!(mv = %m, ply = self.ply_count, "human move applied");

        let terminal = terminal_state(&self.board, us.opposite());
        match EndReason::from_terminal(terminal) {
            Some(reason) => {
                self.finish(reason);
                Ok(MoveOutcome::GameEnded {
                    human_move: description,
                    opponent_move: None,
                    reason,
                })
            }
            None => Ok(MoveOutcome::Applied {
                human_move: description,
                opponent_move: None,
            }),
        }
    }

    /// Lets the computer reply and checks whether the reply ends the game.
    ///
    /// # Panics
    ///
    /// Panics if the opponent finds no move. The game would already have
    /// ended in checkmate or stalemate, so this is a broken invariant rather
    /// than a user error.
    pub fn play_opponent_move(&mut self) -> Result<OpponentReply, MoveError> {
        if self.is_ended() {
            return Err(MoveError::GameAlreadyEnded);
        }
        if !self.is_opponent_turn() {
            return Err(MoveError::NotYourTurn);
        }

        let them = self.side_to_move();
        let m = self
            .opponent
            .select_move(&self.board, them)
            .expect("opponent found no move in an ongoing game");

        let description = self.apply(m);
        self.last_opponent_move = Some(description.clone());
        debug!(mv = %m, "opponent move applied");

        let ended = EndReason::from_terminal(terminal_state(&self.board, them.opposite()));
        if let Some(reason) = ended {
            self.finish(reason);
        }
        Ok(OpponentReply {
            mv: m,
            description,
            ended,
        })
    }

    /// Plays the human's move and, if the game continues, the computer's
    /// reply.
    pub fn submit_move(&mut self, text: &str) -> Result<MoveOutcome, MoveError> {
        let human_move = match self.play_human_move(text)? {
            MoveOutcome::Applied { human_move, .. } => human_move,
            ended @ MoveOutcome::GameEnded { .. } => return Ok(ended),
        };

        let reply = self.play_opponent_move()?;
        Ok(match reply.ended {
            Some(reason) => MoveOutcome::GameEnded {
                human_move,
                opponent_move: Some(reply.description),
                reason,
            },
            None => MoveOutcome::Applied {
                human_move,
                opponent_move: Some(reply.description),
            },
        })
    }

    /// Ends the game by resignation. A game that already ended keeps its
    /// first reason.
    pub fn resign(&mut self) -> EndReason {
        if !self.is_ended() {
            self.finish(EndReason::Resignation);
        }
        self.end_reason.unwrap_or(EndReason::Resignation)
    }

    /// Ends the game because the player walked away. A game that already
    /// ended keeps its first reason.
    pub fn abandon(&mut self) -> EndReason {
        if !self.is_ended() {
            self.finish(EndReason::Abandoned);
        }
        self.end_reason.unwrap_or(EndReason::Abandoned)
    }

    fn apply(&mut self, m: Move) -> String {
        let description = describe_move(&self.board, m);
        self.board.apply_move(m);
        self.black_to_move = !self.black_to_move;
        description
    }

    fn finish(&mut self, reason: EndReason) {
        self.end_reason = Some(reason);
        info!(
            %reason,
            ply = self.ply_count,
            elapsed = %format_elapsed(self.elapsed()),
            "game ended"
        );
    }
}
