use crate::game::board::{Board, Position};
use crate::game::player::PlayerNum;
use crate::game::token::TokenArena;
use serde::{Deserialize, Serialize};

// Checked in the order the scan tries them
const DIRECTIONS: [Direction; 4] = [
    Direction::Vertical,
    Direction::Horizontal,
    Direction::DiagonalFalling,
    Direction::DiagonalRising,
];

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum Direction {
    Vertical,
    Horizontal,
    // Down and to the right
    DiagonalFalling,
    // Up and to the right
    DiagonalRising,
}

impl Direction {
    fn step(&self) -> (i32, i32) {
        match self {
            Direction::Vertical => (0, 1),
            Direction::Horizontal => (1, 0),
            Direction::DiagonalFalling => (1, -1),
            Direction::DiagonalRising => (1, 1),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WinningLine {
    pub direction: Direction,
    pub spaces: [Position; 4],
}

// Scan the whole board for completed lines owned by the given player.
// Every match is recorded, so overlapping lines from a single drop all
// show up.
pub fn winning_lines(board: &Board, tokens: &TokenArena, owner: PlayerNum) -> Vec<WinningLine> {
    let mut lines = Vec::new();
    for space in board.spaces() {
        for direction in DIRECTIONS {
            if let Some(line) = line_from(board, tokens, owner, space.position(), direction) {
                lines.push(line);
            }
        }
    }
    lines
}

fn line_from(
    board: &Board,
    tokens: &TokenArena,
    owner: PlayerNum,
    origin: Position,
    direction: Direction,
) -> Option<WinningLine> {
    let (column_step, row_step) = direction.step();
    let column = origin.column() as i32;
    let row = origin.row() as i32;
    let mut spaces = [origin; 4];
    for (offset, position) in spaces.iter_mut().enumerate() {
        let offset = offset as i32;
        let space = board.space_at(column + column_step * offset, row + row_step * offset)?;
        if !space.is_owned_by(tokens, owner) {
            return None;
        }
        *position = space.position();
    }
    Some(WinningLine { direction, spaces })
}

// Distinct winning spaces in scan order; lines can share spaces
pub(crate) fn flatten_lines(lines: &[WinningLine]) -> Vec<Position> {
    let mut spaces = Vec::new();
    for line in lines {
        for position in line.spaces {
            if !spaces.contains(&position) {
                spaces.push(position);
            }
        }
    }
    spaces
}
