//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// World size should not be negative: {0}.
    InvalidDimension(isize),
    /// Cell coordinate should not be negative: {0}.
    InvalidIndex(isize),
    /// The world has no cells to evolve.
    EmptyGrid,
    /// The pattern does not fit inside the world.
    OutOfBounds,
}
