//! Rules engine for a square Minesweeper board: mine placement, adjacent
//! counts, flood-fill reveals and win/loss tracking.
//!
//! ```
//! use miner_core::{Board, Miner, Outcome};
//!
//! let board = Board::from_mine_coords(3, &[(1, 1)]).unwrap();
//! let mut miner = Miner::from_board(board);
//!
//! let report = miner.reveal(0, 0).unwrap();
//! assert_eq!(report.outcome, Outcome::InProgress);
//! assert_eq!(report.cells[0].adjacent_mine_count(), 1);
//!
//! let report = miner.reveal(1, 1).unwrap();
//! assert_eq!(report.outcome, Outcome::Lose);
//! assert_eq!(report.cells.len(), 9);
//! ```
#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod config;
mod engine;
mod error;
mod generator;
mod types;
