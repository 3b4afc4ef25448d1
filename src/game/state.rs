use crate::game::board::{Board, Column, Position};
use crate::game::player::{Player, PlayerNum, Players};
use crate::game::token::{TokenArena, TokenId};
use crate::game::win::{self, WinningLine};
use crate::messages::{Snapshot, TokenPlaced};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum MoveRejected {
    #[error("Column {column} is outside the board")]
    OutOfRange { column: usize },
    #[error("Column {column} is full")]
    ColumnFull { column: usize },
    #[error("Game is not accepting input")]
    NotAcceptingInput,
}

#[derive(Error, Debug)]
#[error("No drop is being resolved")]
pub struct NoPendingDrop;

#[derive(Serialize, Copy, Clone, Debug, PartialEq)]
pub struct MoveAccepted {
    pub player: PlayerNum,
    pub token: TokenId,
    pub target: Position,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub enum Phase {
    WaitingForInput,
    Resolving { pending: MoveAccepted },
    GameOver(GameResult),
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub enum GameResult {
    Win {
        player: PlayerNum,
        name: String,
        line: Vec<Position>,
    },
    Exhausted {
        player: PlayerNum,
        name: String,
    },
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win { name, .. } => {
                write!(f, "Congratulations to {} for winning.", name)
            }
            GameResult::Exhausted { name, .. } => {
                write!(f, "Game Over. {} is out of tokens.", name)
            }
        }
    }
}

// Presentation adapters implement whichever notifications they render.
pub trait GameObserver {
    fn token_placed(&mut self, _placed: &TokenPlaced) {}
    fn state_changed(&mut self, _snapshot: &Snapshot) {}
    fn game_over(&mut self, _result: &GameResult) {}
}

#[derive(Debug)]
pub struct Game {
    board: Board,
    tokens: TokenArena,
    players: Players,
    phase: Phase,
    selected: Column,
    winning: Vec<WinningLine>,
}

impl Game {
    pub fn new() -> Self {
        let tokens = TokenArena::new();
        let players = Players::new(
            [
                Player::new(
                    "Player 1".to_string(),
                    "#e15258".to_string(),
                    tokens.pool(PlayerNum::P1),
                ),
                Player::new(
                    "Player 2".to_string(),
                    "#e59a13".to_string(),
                    tokens.pool(PlayerNum::P2),
                ),
            ],
            PlayerNum::P1,
        );
        Game {
            board: Board::new(),
            tokens,
            players,
            phase: Phase::WaitingForInput,
            selected: Column::default(),
            winning: Vec::new(),
        }
    }

    // Stage a drop for the active player without touching the board. The
    // token is not taken from the pool until the drop is completed.
    pub fn request_drop(&mut self, column: usize) -> Result<MoveAccepted, MoveRejected> {
        if !self.is_accepting_input() {
            warn!("Drop requested in phase {:?}", self.phase);
            return Err(MoveRejected::NotAcceptingInput);
        }
        let target_column = match Column::new(column) {
            Some(target_column) => target_column,
            None => {
                warn!("Invalid column: {}", column);
                return Err(MoveRejected::OutOfRange { column });
            }
        };
        let target = match self.board.drop_target(target_column) {
            Some(target) => target,
            None => {
                warn!("Column {} is full", column);
                return Err(MoveRejected::ColumnFull { column });
            }
        };
        let player = self.players.active_num();
        // The turn handover never leaves the active player with an empty pool
        let token = self.players[player].next_token().unwrap();
        let accepted = MoveAccepted {
            player,
            token,
            target,
        };
        self.phase = Phase::Resolving { pending: accepted };
        info!(
            "Accepted drop by {:?} into column {}, row {}",
            player,
            column,
            target.row()
        );
        Ok(accepted)
    }

    // Land the pending drop and hand the turn over, or end the game if the
    // drop completed a line or emptied the last pool.
    pub fn complete_drop(&mut self, observer: &mut impl GameObserver) -> Result<(), NoPendingDrop> {
        let pending = match &self.phase {
            Phase::Resolving { pending } => *pending,
            _ => return Err(NoPendingDrop),
        };
        // The staged token is still at the front of the pool
        let token = self.players[pending.player].take_next_token().unwrap();
        self.board.mark(pending.target, token);
        info!(
            "Placed token {} at column {}, row {}",
            token.get(),
            pending.target.column(),
            pending.target.row()
        );
        observer.token_placed(&TokenPlaced {
            token: self.tokens[token],
            position: pending.target,
        });

        let lines = win::winning_lines(&self.board, &self.tokens, pending.player);
        if !lines.is_empty() {
            self.winning = lines;
            let result = GameResult::Win {
                player: pending.player,
                name: self.players[pending.player].name().to_string(),
                line: win::flatten_lines(&self.winning),
            };
            info!("Game over: {}", result);
            self.phase = Phase::GameOver(result.clone());
            observer.state_changed(&self.snapshot());
            observer.game_over(&result);
            return Ok(());
        }

        self.players.switch_active();
        let next = self.players.active_num();
        if !self.players[next].has_tokens_remaining() {
            let result = GameResult::Exhausted {
                player: next,
                name: self.players[next].name().to_string(),
            };
            info!("Game over: {}", result);
            self.phase = Phase::GameOver(result.clone());
            observer.state_changed(&self.snapshot());
            observer.game_over(&result);
            return Ok(());
        }

        self.selected = Column::default();
        self.phase = Phase::WaitingForInput;
        observer.state_changed(&self.snapshot());
        Ok(())
    }

    pub fn selected_column(&self) -> usize {
        self.selected.get()
    }

    // The cursor only moves while input is open; at the edges it stays put
    pub fn select_left(&mut self) -> usize {
        if self.is_accepting_input() {
            if let Some(column) = self.selected.get().checked_sub(1).and_then(Column::new) {
                self.selected = column;
            }
        }
        self.selected.get()
    }

    pub fn select_right(&mut self) -> usize {
        if self.is_accepting_input() {
            if let Some(column) = Column::new(self.selected.get() + 1) {
                self.selected = column;
            }
        }
        self.selected.get()
    }

    pub fn drop_selected(&mut self) -> Result<MoveAccepted, MoveRejected> {
        self.request_drop(self.selected.get())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            tokens: self.tokens.clone(),
            active_player: self.players.active_num(),
            remaining_tokens: [
                self.players[PlayerNum::P1].remaining_count(),
                self.players[PlayerNum::P2].remaining_count(),
            ],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tokens(&self) -> &TokenArena {
        &self.tokens
    }

    pub fn player(&self, num: PlayerNum) -> &Player {
        &self.players[num]
    }

    pub fn active_player(&self) -> PlayerNum {
        self.players.active_num()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_accepting_input(&self) -> bool {
        matches!(self.phase, Phase::WaitingForInput)
    }

    pub fn winning_lines(&self) -> &[WinningLine] {
        &self.winning
    }

    pub fn result(&self) -> Option<&GameResult> {
        match &self.phase {
            Phase::GameOver(result) => Some(result),
            _ => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
