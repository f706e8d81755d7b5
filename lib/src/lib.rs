//! Toy cellular automata: a 1-dimensional Game of Life variant and the
//! classic-shaped 2-dimensional Game of Life, each on a finite world with
//! clipped edges.
//!
//! A [`Line`] is a fixed-length row of cells. Every generation, each cell
//! counts the living cells in its clipped 5-cell window (itself, up to two
//! neighbors to the left and up to two to the right): a living cell
//! survives when the count exceeds 2, and a dead cell comes alive when the
//! count exceeds 1.
//!
//! A [`Grid`] is a fixed-size rectangle of cells, usually square. Every
//! generation, each cell counts the living cells among its up to eight
//! neighbors; the cell is alive in the next generation exactly when that
//! count reaches 3, whatever its current state.
//!
//! Both worlds evolve simultaneously: the next generation is computed
//! entirely from the current one before any cell changes. Edges never
//! wrap; neighborhood windows are truncated there instead.
//!
//! [`stamp_blinker`] and [`stamp_glider`] seed the worlds with the named
//! starting patterns, and [`Display`](std::fmt::Display) renders a world
//! as lines of `#` (alive) and `-` (dead).

mod cells;
mod error;
mod grid;
mod line;
mod patterns;
pub mod rules;

pub use cells::{State, ALIVE, DEAD};
pub use error::Error;
pub use grid::Grid;
pub use line::Line;
pub use patterns::{stamp_blinker, stamp_glider};
