use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

pub trait MineGenerator {
    fn generate(self, size: Coord, mines: CellCount) -> Result<Board>;
}

/// How distinct mine positions are drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Draw a random index and redraw when it is already mined. Unbounded
    /// retries as density approaches 100%.
    Rejection,
    /// Partial Fisher-Yates over all indices, exactly `mines` draws.
    #[default]
    Shuffle,
}

/// Seed derived from the wall clock, advancing between calls.
#[cfg(feature = "std")]
pub fn time_seed() -> u64 {
    use web_time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
