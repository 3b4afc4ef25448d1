use crate::game::token::TokenId;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::ops::{Index, IndexMut};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Token pool is already empty")]
pub struct PoolExhausted;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum PlayerNum {
    P1,
    P2,
}

impl PlayerNum {
    pub fn other(&self) -> PlayerNum {
        match self {
            PlayerNum::P1 => PlayerNum::P2,
            PlayerNum::P2 => PlayerNum::P1,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Player {
    name: String,
    color: String,
    remaining: VecDeque<TokenId>,
    is_active: bool,
}

impl Player {
    pub fn new(name: String, color: String, remaining: VecDeque<TokenId>) -> Self {
        Player {
            name,
            color,
            remaining,
            is_active: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn has_tokens_remaining(&self) -> bool {
        !self.remaining.is_empty()
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    // The token that will fall on this player's next drop
    pub fn next_token(&self) -> Option<TokenId> {
        self.remaining.front().copied()
    }

    pub fn take_next_token(&mut self) -> Result<TokenId, PoolExhausted> {
        self.remaining.pop_front().ok_or(PoolExhausted)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Players([Player; 2]);

impl Players {
    // The starting player is marked active; exactly one player is active
    // from then on.
    pub fn new(players: [Player; 2], starting: PlayerNum) -> Self {
        let mut players = Players(players);
        players[starting].is_active = true;
        players[starting.other()].is_active = false;
        players
    }

    pub fn active_num(&self) -> PlayerNum {
        if self.0[0].is_active {
            PlayerNum::P1
        } else {
            PlayerNum::P2
        }
    }

    pub fn switch_active(&mut self) {
        for player in &mut self.0 {
            player.is_active = !player.is_active;
        }
    }
}

impl Index<PlayerNum> for Players {
    type Output = Player;

    fn index(&self, index: PlayerNum) -> &Self::Output {
        match index {
            PlayerNum::P1 => &self.0[0],
            PlayerNum::P2 => &self.0[1],
        }
    }
}

impl IndexMut<PlayerNum> for Players {
    fn index_mut(&mut self, index: PlayerNum) -> &mut Self::Output {
        match index {
            PlayerNum::P1 => &mut self.0[0],
            PlayerNum::P2 => &mut self.0[1],
        }
    }
}
