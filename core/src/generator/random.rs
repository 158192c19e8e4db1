use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Uniform placement without replacement: cells are sampled at random and duplicates rejected until the requested
/// number of mines is down. Every cell is eligible, including the one the first move targets.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        let total_cells = config.total_cells();
        let (width, height) = config.size;

        // optimize for full boards
        if config.mines >= total_cells {
            if config.mines > total_cells {
                log::warn!(
                    "Minefield already full, generated anyway, requested {} but only fits {}",
                    config.mines,
                    total_cells
                );
            }
            return Ok(MineLayout::from_mine_mask(Array2::from_elem(
                config.size.to_nd_index(),
                true,
            )));
        }

        let mut mines: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut mines_placed: CellCount = 0;
        let mut rejected = 0usize;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        while mines_placed < config.mines {
            let coords: Coord2 = (rng.random_range(0..width), rng.random_range(0..height));
            let cell = &mut mines[coords.to_nd_index()];
            if *cell {
                rejected += 1;
                continue;
            }
            *cell = true;
            mines_placed += 1;
        }

        log::debug!(
            "Placed {} mines on {}x{} with seed {} ({} duplicate draws)",
            mines_placed,
            width,
            height,
            self.seed,
            rejected
        );
        Ok(MineLayout::from_mine_mask(mines))
    }
}
