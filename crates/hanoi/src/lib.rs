//! Tower of Hanoi game logic.
//!
//! This crate holds everything with rules content and nothing that
//! touches a terminal or a clock:
//!
//! - **Solver**: pure recursive generation of the optimal move sequence
//! - **Rules**: the game state machine — board, selection, move
//!   validation, win detection
//! - **Playback**: the precomputed auto-solve plan consumed one move at
//!   a time by an external driver
//!
//! The rendering collaborator (see the `hanoi_tui` crate) reads the
//! [`Game`] state and forwards player intent through [`Game::click_rod`],
//! [`Game::reset`], and [`Game::auto_solve`]. Timing lives entirely in
//! the driver: the core exposes [`STEP_DELAY_MS`] but never sleeps.
//!
//! # Example
//!
//! ```
//! use hanoi::{Game, Rod};
//!
//! let mut game = Game::new();
//! assert!(game.apply_move(Rod::Left, Rod::Middle));
//! assert_eq!(game.move_count(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod playback;
mod rules;
mod solver;
mod types;

// Crate-level exports - playback plan
pub use playback::{Playback, STEP_DELAY_MS};

// Crate-level exports - game engine
pub use rules::{Game, DISK_COUNT};

// Crate-level exports - move generation
pub use solver::solve;

// Crate-level exports - domain types
pub use types::{Board, Disk, Move, MoveError, Rod};
