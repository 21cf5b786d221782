//! Exhaustive reachability over game states, used to validate that
//! authored levels are winnable and to compute a level's par move count.

mod graph;
mod populate;

pub use graph::{StateGraph, UniqueNode};
pub use populate::{populate_step, solve, PopulateResult};
