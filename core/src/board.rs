use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use core::ops::Index;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of cells for a single game.
///
/// The revealed set mirrors the per-cell revealed flags so the win check does
/// not need to scan the grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    revealed: BTreeSet<Coord2>,
    mine_count: CellCount,
}

impl Board {
    /// Places `mine_count` mines at random and computes every adjacent count.
    pub fn build(
        size: Coord,
        mine_count: CellCount,
        seed: u64,
        placement: Placement,
    ) -> Result<Self> {
        RandomMineGenerator::new(seed, placement).generate(size, mine_count)
    }

    /// Builds a board from a square mine mask with a side in `1..=Coord::MAX`.
    ///
    /// Counts are computed in a second pass, once every mine is known.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        if rows != cols || rows == 0 || rows > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }
        let side = rows as Coord;

        let mut cells = Array2::from_shape_fn((rows, cols), |(x, y)| {
            Cell::new((x as Coord, y as Coord), mine_mask[(x, y)])
        });
        for cell in cells.iter_mut() {
            let count = neighbors(cell.position(), side)
                .filter(|&pos| mine_mask[nd(pos)])
                .count();
            // at most 8 neighbors
            cell.set_adjacent_mine_count(count as u8);
        }

        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;

        Ok(Self {
            cells,
            revealed: BTreeSet::new(),
            mine_count,
        })
    }

    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(nd((size, size)));

        for &coords in mine_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::InvalidPosition);
            }
            mine_mask[nd(coords)] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn size(&self) -> Coord {
        // square with a side of at most Coord::MAX, checked on construction
        self.cells.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed.len() as CellCount
    }

    /// Every safe cell has been revealed.
    pub fn is_cleared(&self) -> bool {
        self.total_cells() - self.revealed_count() == self.mine_count
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed.contains(&coords)
    }

    /// Checks signed caller coordinates against the board bounds.
    pub fn validate_coords(&self, (x, y): (i32, i32)) -> Result<Coord2> {
        let size = self.size();
        match (Coord::try_from(x), Coord::try_from(y)) {
            (Ok(x), Ok(y)) if x < size && y < size => Ok((x, y)),
            _ => Err(GameError::InvalidPosition),
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[nd(coords)]
    }

    pub fn neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors(coords, self.size())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Reveals `coords` and, when it has no adjacent mines, the connected
    /// zero region around it plus that region's numbered fringe.
    ///
    /// Returns only the cells revealed by this call. Cells revealed earlier
    /// are neither visited again nor returned. A mined start cell reveals
    /// nothing; zero-count cells never border a mine, so the walk cannot
    /// reach one either.
    pub(crate) fn flood_reveal(&mut self, coords: Coord2) -> Vec<Cell> {
        let mut newly_revealed = Vec::new();
        if self.revealed.contains(&coords) || self[coords].has_mine() {
            return newly_revealed;
        }
        let side = self.size();

        let mut visited = BTreeSet::from([coords]);
        let mut to_visit = VecDeque::from([coords]);

        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = &mut self.cells[nd(visit_coords)];
            cell.mark_revealed();
            newly_revealed.push(*cell);
            let count = cell.adjacent_mine_count();
            log::trace!("Flood revealed cell at {:?}, mine count: {}", visit_coords, count);

            if count > 0 {
                continue;
            }

            for pos in neighbors(visit_coords, side) {
                if self.revealed.contains(&pos) || !visited.insert(pos) {
                    continue;
                }
                to_visit.push_back(pos);
            }
        }

        self.revealed.extend(newly_revealed.iter().map(Cell::position));
        newly_revealed
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[nd(coords)]
    }
}
