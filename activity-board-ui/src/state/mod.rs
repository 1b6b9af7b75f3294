//! State Management
//!
//! Reactive board state and the controller that drives it.

pub mod board;

pub use board::{provide_board, Board, BoardState};
