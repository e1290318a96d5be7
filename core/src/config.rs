use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::*;

/// Upper bound for the difficulty percent, a completely mined board.
pub const MAX_DIFFICULTY: u8 = 100;

/// Validated game settings: board side and mine density in percent.
///
/// Deserialization goes through [`GameConfig::new`], so a stored config is
/// held to the same rules as caller input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    size: Coord,
    difficulty: u8,
}

impl GameConfig {
    /// Builds a config from raw caller input.
    ///
    /// Sizes outside `1..=Coord::MAX` and non-positive difficulties are
    /// rejected, difficulties above 100 are clamped to a full board.
    pub fn new(size: i32, difficulty: i32) -> Result<Self> {
        let size = validate_size(size)?;
        let difficulty = validate_difficulty(difficulty)?;
        Ok(Self { size, difficulty })
    }

    pub fn from_presets(size: SizePreset, difficulty: DifficultyPreset) -> Self {
        Self {
            size: size.grid_size(),
            difficulty: difficulty.percent(),
        }
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn difficulty(&self) -> u8 {
        self.difficulty
    }

    pub fn total_cells(&self) -> CellCount {
        square(self.size)
    }

    /// `floor(size² × difficulty / 100)`
    pub fn bomb_count(&self) -> CellCount {
        let total = u32::from(self.total_cells());
        let bombs = total * u32::from(self.difficulty) / u32::from(MAX_DIFFICULTY);
        // difficulty is at most 100, so bombs never exceed total
        bombs as CellCount
    }
}

#[derive(Deserialize)]
struct RawGameConfig {
    size: i32,
    difficulty: i32,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self> {
        Self::new(raw.size, raw.difficulty)
    }
}

pub(crate) fn validate_size(size: i32) -> Result<Coord> {
    if size <= 0 {
        return Err(GameError::InvalidSettings);
    }
    size.try_into().map_err(|_| GameError::InvalidSettings)
}

pub(crate) fn validate_difficulty(difficulty: i32) -> Result<u8> {
    if difficulty <= 0 {
        return Err(GameError::InvalidSettings);
    }
    if difficulty > i32::from(MAX_DIFFICULTY) {
        log::warn!(
            "Difficulty {}% exceeds a full board, clamped to {}%",
            difficulty,
            MAX_DIFFICULTY
        );
        return Ok(MAX_DIFFICULTY);
    }
    difficulty.try_into().map_err(|_| GameError::InvalidSettings)
}

/// Named board sizes offered to players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizePreset {
    Small,
    Medium,
    Large,
}

impl SizePreset {
    pub const ALL: [SizePreset; 3] = [Self::Small, Self::Medium, Self::Large];

    pub const fn grid_size(self) -> Coord {
        match self {
            Self::Small => 10,
            Self::Medium => 14,
            Self::Large => 20,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for SizePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SizePreset {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or(GameError::UnknownPreset)
    }
}

/// Named mine densities offered to players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyPreset {
    Easy,
    Normal,
    Hard,
}

impl DifficultyPreset {
    pub const ALL: [DifficultyPreset; 3] = [Self::Easy, Self::Normal, Self::Hard];

    pub const fn percent(self) -> u8 {
        match self {
            Self::Easy => 10,
            Self::Normal => 20,
            Self::Hard => 30,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for DifficultyPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DifficultyPreset {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or(GameError::UnknownPreset)
    }
}
