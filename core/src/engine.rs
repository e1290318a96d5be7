use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Unconfigured -> Configured (both settings stored)
/// - Unconfigured | Configured -> Ready (board generated)
/// - Ready -> Active | Won | Lost
/// - Active -> Won | Lost
/// - any -> Ready (new board), any -> Unconfigured (reset)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinerState {
    #[default]
    Unconfigured,
    Configured,
    Ready,
    Active,
    Won,
    Lost,
}

impl MinerState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn outcome(self) -> Outcome {
        match self {
            Self::Won => Outcome::Win,
            Self::Lost => Outcome::Lose,
            _ => Outcome::InProgress,
        }
    }
}

/// Result of a single reveal as seen by the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Win,
    Lose,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealReport {
    /// Cells revealed by this call. After a loss, every cell of the board.
    pub cells: Vec<Cell>,
    pub outcome: Outcome,
}

impl RevealReport {
    fn new(cells: Vec<Cell>, outcome: Outcome) -> Self {
        Self { cells, outcome }
    }
}

/// Owns the settings and the board of one game at a time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Miner {
    size: Option<Coord>,
    difficulty: Option<u8>,
    placement: Placement,
    config: Option<GameConfig>,
    board: Option<Board>,
    state: MinerState,
    triggered_mine: Option<Coord2>,
}

impl Miner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placement(placement: Placement) -> Self {
        Self {
            placement,
            ..Self::default()
        }
    }

    /// Plays on a prepared board, skipping settings and mine placement.
    pub fn from_board(board: Board) -> Self {
        Self {
            size: Some(board.size()),
            board: Some(board),
            state: MinerState::Ready,
            ..Self::default()
        }
    }

    pub fn state(&self) -> MinerState {
        self.state
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Stored board side, applied on the next start.
    pub fn size(&self) -> Option<Coord> {
        self.size
    }

    /// Stored difficulty percent, applied on the next start.
    pub fn difficulty(&self) -> Option<u8> {
        self.difficulty
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Settings of the current board, if it was generated from settings.
    pub fn config(&self) -> Option<GameConfig> {
        self.config
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn bomb_count(&self) -> Option<CellCount> {
        self.board.as_ref().map(Board::mine_count)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.board.as_ref().map_or(0, Board::revealed_count)
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_at(&self, x: i32, y: i32) -> Result<Cell> {
        let board = self.board.as_ref().ok_or(GameError::NotStarted)?;
        let coords = board.validate_coords((x, y))?;
        Ok(board.cell_at(coords))
    }

    /// Sides above `Coord::MAX` are rejected like non-positive ones.
    pub fn set_size(&mut self, size: i32) -> Result<()> {
        self.size = Some(crate::config::validate_size(size)?);
        self.mark_configured();
        Ok(())
    }

    pub fn set_difficulty(&mut self, difficulty: i32) -> Result<()> {
        self.difficulty = Some(crate::config::validate_difficulty(difficulty)?);
        self.mark_configured();
        Ok(())
    }

    /// Stores the settings and generates a fresh board, discarding any
    /// previous one.
    ///
    /// `size` must be in `1..=255` (`Coord::MAX`) and `difficulty` positive,
    /// otherwise this fails with [`GameError::InvalidSettings`] and leaves the
    /// engine untouched. Difficulties above 100 are clamped to a full board.
    #[cfg(feature = "std")]
    pub fn start(&mut self, size: i32, difficulty: i32) -> Result<()> {
        self.start_with_seed(size, difficulty, time_seed())
    }

    pub fn start_with_seed(&mut self, size: i32, difficulty: i32, seed: u64) -> Result<()> {
        let config = GameConfig::new(size, difficulty)?;
        self.start_config(config, seed)
    }

    #[cfg(feature = "std")]
    pub fn start_preset(&mut self, size: SizePreset, difficulty: DifficultyPreset) -> Result<()> {
        self.start_config(GameConfig::from_presets(size, difficulty), time_seed())
    }

    /// Regenerates the board from the stored settings.
    #[cfg(feature = "std")]
    pub fn restart(&mut self) -> Result<()> {
        self.restart_with_seed(time_seed())
    }

    pub fn restart_with_seed(&mut self, seed: u64) -> Result<()> {
        let (Some(size), Some(difficulty)) = (self.size, self.difficulty) else {
            return Err(GameError::InvalidSettings);
        };
        let config = GameConfig::new(size.into(), difficulty.into())?;
        self.start_config(config, seed)
    }

    pub fn start_config(&mut self, config: GameConfig, seed: u64) -> Result<()> {
        let board = Board::build(config.size(), config.bomb_count(), seed, self.placement)?;
        log::debug!(
            "Started {0}x{0} game at {1}%, {2} mines, seed {3}",
            config.size(),
            config.difficulty(),
            board.mine_count(),
            seed
        );

        self.size = Some(config.size());
        self.difficulty = Some(config.difficulty());
        self.config = Some(config);
        self.board = Some(board);
        self.state = MinerState::Ready;
        self.triggered_mine = None;
        Ok(())
    }

    /// Drops settings and board.
    pub fn reset(&mut self) {
        log::debug!("Reset game");
        *self = Self::with_placement(self.placement);
    }

    /// Reveals the cell at `(x, y)`.
    ///
    /// A mine ends the game and the report carries every cell so the caller
    /// can show the whole field. A safe cell flood-fills through adjacent
    /// zero cells, and the report carries only the newly revealed cells.
    /// Revealing a cell that is already open is a no-op that repeats the
    /// current outcome.
    pub fn reveal(&mut self, x: i32, y: i32) -> Result<RevealReport> {
        let Some(board) = self.board.as_mut() else {
            return Err(GameError::NotStarted);
        };
        let coords = board.validate_coords((x, y))?;

        if board.is_revealed(coords) {
            return Ok(RevealReport::new(Vec::new(), self.state.outcome()));
        }
        if self.state.is_finished() {
            return Err(GameError::AlreadyEnded);
        }

        if board[coords].has_mine() {
            log::debug!("Hit mine at {:?}", coords);
            self.triggered_mine = Some(coords);
            self.state = MinerState::Lost;
            return Ok(RevealReport::new(board.cells().collect(), Outcome::Lose));
        }

        let cells = board.flood_reveal(coords);
        log::debug!(
            "Revealed {} cells from {:?}, {} of {} safe cells open",
            cells.len(),
            coords,
            board.revealed_count(),
            board.safe_cell_count()
        );

        let outcome = if board.is_cleared() {
            self.state = MinerState::Won;
            Outcome::Win
        } else {
            self.state = MinerState::Active;
            Outcome::InProgress
        };
        Ok(RevealReport::new(cells, outcome))
    }

    fn mark_configured(&mut self) {
        if matches!(self.state, MinerState::Unconfigured)
            && self.size.is_some()
            && self.difficulty.is_some()
        {
            self.state = MinerState::Configured;
        }
    }
}
