use crate::game::{Board, PlayerNum, Position, Token, TokenArena};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub board: Board,
    pub tokens: TokenArena,
    pub active_player: PlayerNum,
    pub remaining_tokens: [usize; 2],
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct TokenPlaced {
    pub token: Token,
    pub position: Position,
}
