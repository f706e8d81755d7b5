//! Transition rules of the two automata.
//!
//! Both rules are fixed; there is no rule configuration surface. Each
//! function decides one cell's next state from its current state and a
//! live-cell count taken over the clipped neighborhood window, and every
//! cell of a generation is decided before any cell is overwritten.

use crate::cells::State;

/// Decides a cell's next state in the 1-dimensional world.
///
/// `window_sum` is the number of living cells in the clipped 5-cell
/// window, **including** the cell itself. A living cell survives when the
/// sum exceeds 2; a dead cell comes alive when the sum exceeds 1. All
/// other cells are dead in the next generation.
#[inline]
pub fn next_line(current: State, window_sum: usize) -> State {
    match current {
        State::Alive => State::from(window_sum > 2),
        State::Dead => State::from(window_sum > 1),
    }
}

/// Decides a cell's next state in the 2-dimensional world.
///
/// `neighbors` is the number of living cells in the clipped 3×3 window,
/// **excluding** the cell itself. Survival and birth share one threshold
/// here: a cell is alive in the next generation exactly when it has at
/// least 3 living neighbors, whatever its current state.
#[inline]
pub fn next_grid(current: State, neighbors: usize) -> State {
    match current {
        State::Alive => State::from(neighbors >= 3),
        State::Dead => State::from(neighbors >= 3),
    }
}
