//! Win rules for resolved grids.
//!
//! `evaluate` is a pure function of the grid and the mode. The engine calls
//! it when a spin finishes, but hosts can call it directly to replay or
//! preview outcomes.

pub mod evaluate;

pub use evaluate::{center_row_matches, evaluate, SpinResult};
