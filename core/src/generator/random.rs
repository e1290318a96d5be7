use alloc::vec::Vec;

use ndarray::Array2;

use super::*;

/// Purely random mine placement from a fixed seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
    placement: Placement,
}

impl RandomMineGenerator {
    pub fn new(seed: u64, placement: Placement) -> Self {
        Self { seed, placement }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, size: Coord, mines: CellCount) -> Result<Board> {
        use rand::prelude::*;

        let shape = nd((size, size));
        let total_cells = square(size);

        // optimize for full boards
        if mines >= total_cells {
            if mines > total_cells {
                log::warn!(
                    "Board already full, generated anyway, requested {} but only fits {}",
                    mines,
                    total_cells
                );
            }
            return Board::from_mine_mask(Array2::from_elem(shape, true));
        }

        let side = usize::from(size);
        let total = usize::from(total_cells);
        let mut mine_mask: Array2<bool> = Array2::default(shape);
        let mut rng = SmallRng::seed_from_u64(self.seed);

        match self.placement {
            Placement::Rejection => {
                let mut mines_placed = 0;
                while mines_placed < mines {
                    let place: usize = rng.random_range(0..total);
                    let cell = &mut mine_mask[[place / side, place % side]];
                    if *cell {
                        continue;
                    }
                    *cell = true;
                    mines_placed += 1;
                }
            }
            Placement::Shuffle => {
                let mut indices: Vec<usize> = (0..total).collect();
                for i in 0..usize::from(mines) {
                    let j = rng.random_range(i..total);
                    indices.swap(i, j);
                    let place = indices[i];
                    mine_mask[[place / side, place % side]] = true;
                }
            }
        }

        // double check mine count
        let count = mine_mask.iter().filter(|&&cell| cell).count();
        if count != usize::from(mines) {
            log::warn!(
                "Generated board count mismatch, actual: {}, requested: {}",
                count,
                mines
            );
        }
        Board::from_mine_mask(mine_mask)
    }
}
