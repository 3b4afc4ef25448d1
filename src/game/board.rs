pub use self::coords::{Column, Position};

use crate::game::player::PlayerNum;
use crate::game::token::{TokenArena, TokenId};
use serde::{Deserialize, Serialize};

pub const COLUMNS: usize = 6;
pub const ROWS: usize = 7;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub struct Space {
    position: Position,
    occupant: Option<TokenId>,
}

impl Space {
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn column(&self) -> usize {
        self.position.column()
    }

    pub fn row(&self) -> usize {
        self.position.row()
    }

    pub fn occupant(&self) -> Option<TokenId> {
        self.occupant
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn is_owned_by(&self, tokens: &TokenArena, num: PlayerNum) -> bool {
        match self.occupant {
            Some(id) => tokens[id].owner() == num,
            None => false,
        }
    }
}

// Spaces live in a flat arena, column-major with row 0 at the bottom of
// each column.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Board {
    spaces: Vec<Space>,
}

impl Board {
    pub fn new() -> Self {
        let spaces = coords::all_positions()
            .map(|position| Space {
                position,
                occupant: None,
            })
            .collect();
        Board { spaces }
    }

    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    pub fn space(&self, position: Position) -> &Space {
        &self.spaces[index_of(position)]
    }

    // Takes signed integers because the win scan walks off the board edges
    pub fn space_at(&self, column: i32, row: i32) -> Option<&Space> {
        let column = usize::try_from(column).ok()?;
        let row = usize::try_from(row).ok()?;
        if column >= COLUMNS || row >= ROWS {
            return None;
        }
        self.spaces.get(column * ROWS + row)
    }

    // The lowest empty space in the column, or None when the column is full
    pub fn drop_target(&self, column: Column) -> Option<Position> {
        let start = column.get() * ROWS;
        self.spaces[start..start + ROWS]
            .iter()
            .find(|space| space.is_empty())
            .map(Space::position)
    }

    // The single mutation a space ever sees: its occupant is set once and
    // never cleared.
    pub(crate) fn mark(&mut self, position: Position, token: TokenId) {
        self.spaces[index_of(position)].occupant = Some(token);
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

fn index_of(position: Position) -> usize {
    position.column() * ROWS + position.row()
}

mod coords {
    use super::{COLUMNS, ROWS};
    use serde::{Deserialize, Serialize};

    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct Column(usize);

    impl Column {
        // Enforce that the column index is in range 0..COLUMNS
        pub fn new(column: usize) -> Option<Self> {
            if column < COLUMNS {
                Some(Column(column))
            } else {
                None
            }
        }

        pub fn get(&self) -> usize {
            self.0
        }
    }

    #[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Position {
        column: usize,
        row: usize,
    }

    impl Position {
        // Enforce that both coordinates are on the board
        pub fn new(column: usize, row: usize) -> Option<Self> {
            if column < COLUMNS && row < ROWS {
                Some(Position { column, row })
            } else {
                None
            }
        }

        pub fn column(&self) -> usize {
            self.column
        }

        pub fn row(&self) -> usize {
            self.row
        }
    }

    // Every board position in column-major order, bottom row first
    pub fn all_positions() -> impl Iterator<Item = Position> {
        (0..COLUMNS).flat_map(|column| (0..ROWS).map(move |row| Position { column, row }))
    }
}
