mod board;
mod player;
mod state;
mod token;
mod win;

pub use board::{Board, Column, Position, Space, COLUMNS, ROWS};
pub use player::{Player, PlayerNum, Players, PoolExhausted};
pub use state::{Game, GameObserver, GameResult, MoveAccepted, MoveRejected, NoPendingDrop, Phase};
pub use token::{Token, TokenArena, TokenId, TOKENS_PER_PLAYER};
pub use win::{Direction, WinningLine};
