//! Cells of the automata.

use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The state of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// The cell is dead.
    Dead,
    /// The cell is alive.
    Alive,
}

/// The Dead state.
pub const DEAD: State = State::Dead;
/// The Alive state.
pub const ALIVE: State = State::Alive;

impl State {
    /// Whether the cell is alive.
    #[inline]
    pub const fn is_alive(self) -> bool {
        matches!(self, State::Alive)
    }

    /// The character the renderers use for this state.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            State::Dead => '-',
            State::Alive => '#',
        }
    }
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            State::Dead => State::Alive,
            State::Alive => State::Dead,
        }
    }
}

impl From<bool> for State {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            ALIVE
        } else {
            DEAD
        }
    }
}

/// The number of living cells in a slice.
#[inline]
pub(crate) fn live_count(cells: &[State]) -> usize {
    cells.iter().filter(|cell| cell.is_alive()).count()
}
