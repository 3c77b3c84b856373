//! Decision core of a chess-playing agent.
//!
//! Given a position and a clock, [`choose_move`] runs an iterative-deepening
//! alpha-beta search over a tapered piece-square evaluation and returns the
//! best move it found within the time budget. The rules engine and the clock
//! sit behind the [`Position`] and [`Clock`] traits.
//!
//! ```no_run
//! use chess_core::{choose_move, GameBoard, SearchConfig, SearchState, TurnTimer};
//!
//! let mut board = GameBoard::startpos();
//! let mut state = SearchState::new(SearchConfig::default());
//! let mv = choose_move(&mut board, &TurnTimer::new(60_000), &mut state)?;
//! println!("{mv}");
//! # Ok::<(), chess_core::Error>(())
//! ```

pub mod clock;
pub mod error;
pub mod eval;
pub mod position;
pub mod search;
pub mod tt;
pub mod types;

pub use clock::{Clock, TurnTimer};
pub use error::{Error, Result};
pub use eval::evaluate;
pub use position::{GameBoard, Position};
pub use search::{
    choose_move, search_with_outcome, IterationInfo, SearchConfig, SearchInfoCallback,
    SearchOutcome, SearchState,
};
pub use tt::{Bound, PositionCache};
pub use types::{PieceKind, SquareSet};
