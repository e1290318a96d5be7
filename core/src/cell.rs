use serde::{Deserialize, Serialize};

use crate::*;

/// One square of the board.
///
/// Mine flag and adjacent count are fixed once the board is built; only the
/// revealed flag changes afterwards, and only from hidden to revealed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    position: Coord2,
    has_mine: bool,
    adjacent_mine_count: u8,
    revealed: bool,
}

impl Cell {
    pub(crate) const fn new(position: Coord2, has_mine: bool) -> Self {
        Self {
            position,
            has_mine,
            adjacent_mine_count: 0,
            revealed: false,
        }
    }

    pub const fn position(&self) -> Coord2 {
        self.position
    }

    pub const fn x(&self) -> Coord {
        self.position.0
    }

    pub const fn y(&self) -> Coord {
        self.position.1
    }

    pub const fn has_mine(&self) -> bool {
        self.has_mine
    }

    pub const fn adjacent_mine_count(&self) -> u8 {
        self.adjacent_mine_count
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub(crate) fn set_adjacent_mine_count(&mut self, count: u8) {
        self.adjacent_mine_count = count;
    }

    pub(crate) fn mark_revealed(&mut self) {
        self.revealed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn getters_expose_position_and_count() {
        let mut cell = Cell::new((10, 1), false);
        cell.set_adjacent_mine_count(1);

        assert_eq!(cell.x(), 10);
        assert_eq!(cell.y(), 1);
        assert_eq!(cell.position(), (10, 1));
        assert_eq!(cell.adjacent_mine_count(), 1);
        assert!(!cell.has_mine());
        assert!(!cell.is_revealed());
    }

    #[test]
    fn reveal_is_sticky() {
        let mut cell = Cell::new((0, 0), true);

        cell.mark_revealed();
        cell.mark_revealed();

        assert!(cell.is_revealed());
        assert!(cell.has_mine());
    }
}
