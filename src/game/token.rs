pub use self::token_id::{TokenId, TOKEN_COUNT};

use crate::game::player::PlayerNum;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::ops::Index;

pub const TOKENS_PER_PLAYER: usize = TOKEN_COUNT / 2;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Token {
    id: TokenId,
    owner: PlayerNum,
}

impl Token {
    pub fn id(&self) -> TokenId {
        self.id
    }

    pub fn owner(&self) -> PlayerNum {
        self.owner
    }
}

// Every token is minted up front; P1 owns the first half of the arena and
// P2 the rest.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TokenArena(Vec<Token>);

impl TokenArena {
    pub fn new() -> Self {
        let tokens = (0..TOKEN_COUNT)
            .filter_map(TokenId::new)
            .map(|id| {
                let owner = if id.get() < TOKENS_PER_PLAYER {
                    PlayerNum::P1
                } else {
                    PlayerNum::P2
                };
                Token { id, owner }
            })
            .collect();
        TokenArena(tokens)
    }

    // A player's tokens in the order they will be dropped
    pub fn pool(&self, num: PlayerNum) -> VecDeque<TokenId> {
        self.0
            .iter()
            .filter(|token| token.owner == num)
            .map(|token| token.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for TokenArena {
    fn default() -> Self {
        TokenArena::new()
    }
}

impl Index<TokenId> for TokenArena {
    type Output = Token;

    fn index(&self, id: TokenId) -> &Self::Output {
        &self.0[id.get()]
    }
}

mod token_id {
    use crate::game::board::{COLUMNS, ROWS};
    use serde::{Deserialize, Serialize};

    pub const TOKEN_COUNT: usize = COLUMNS * ROWS;

    #[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
    pub struct TokenId(usize);

    impl TokenId {
        // Enforce that the id indexes into the token arena
        pub fn new(id: usize) -> Option<Self> {
            if id < TOKEN_COUNT {
                Some(TokenId(id))
            } else {
                None
            }
        }

        pub fn get(&self) -> usize {
            self.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_token_id() {
        let invalid_id = TokenId::new(TOKEN_COUNT);
        assert!(invalid_id.is_none());

        let min_valid_id = TokenId::new(0);
        assert!(min_valid_id.is_some());

        let max_valid_id = TokenId::new(TOKEN_COUNT - 1);
        assert!(max_valid_id.is_some());
    }

    #[test]
    fn test_mint_arena() {
        let tokens = TokenArena::new();
        assert_eq!(tokens.len(), TOKEN_COUNT);

        let p1_pool = tokens.pool(PlayerNum::P1);
        let p2_pool = tokens.pool(PlayerNum::P2);
        assert_eq!(p1_pool.len(), TOKENS_PER_PLAYER);
        assert_eq!(p2_pool.len(), TOKENS_PER_PLAYER);

        for id in &p1_pool {
            assert_eq!(tokens[*id].owner(), PlayerNum::P1);
            assert_eq!(tokens[*id].id(), *id);
        }
        for id in &p2_pool {
            assert_eq!(tokens[*id].owner(), PlayerNum::P2);
        }
    }
}
