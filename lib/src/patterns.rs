//! Named seed patterns stamped into the worlds.

use crate::{
    cells::{State, ALIVE, DEAD},
    error::Error,
    grid::Grid,
    line::Line,
};

/// The cells of the 1-dimensional blinker, in stamping order.
const BLINKER: [State; 6] = [DEAD, DEAD, ALIVE, ALIVE, DEAD, DEAD];

/// Live cells of the glider, as `(row, col)` offsets from the stamp
/// origin.
const GLIDER: [(usize, usize); 5] = [(1, 1), (2, 2), (2, 3), (3, 1), (3, 2)];

/// Rows and columns spanned by the glider: a dead border row and column
/// at offset 0, then the live cells at offsets 1 through 3.
const GLIDER_SPAN: usize = 4;

/// Edge length of the rectangle cleared around a stamped glider.
const GLIDER_CLEAR: usize = 6;

/// Stamps a blinker into `line`, starting at `index`.
///
/// Writes the fixed run dead, dead, alive, alive, dead, dead over the six
/// cells at `index..=index + 5`. The run must fit entirely inside the
/// world.
///
/// # Errors
///
/// [`Error::OutOfBounds`] if `index` is negative or `index + 5` is not
/// below the length of the world; nothing is written in that case.
pub fn stamp_blinker(line: &mut Line, index: isize) -> Result<(), Error> {
    if index < 0 || (index as usize).saturating_add(BLINKER.len()) > line.len() {
        return Err(Error::OutOfBounds);
    }
    let index = index as usize;
    for (offset, &state) in BLINKER.iter().enumerate() {
        line[index + offset] = state;
    }
    Ok(())
}

/// Stamps a glider into `grid`, with its bounding box at
/// `(top_row, left_col)`.
///
/// Clears the 6×6 rectangle below and to the right of the origin
/// (truncated at the world's edges) to dead, then sets the five glider
/// cells at offsets (1,1), (2,2), (2,3), (3,1), (3,2) alive. The
/// pattern's 4×4 bounding box must fit inside the world.
///
/// # Errors
///
/// [`Error::OutOfBounds`] if an origin coordinate is negative or the
/// bounding box does not fit; nothing is written in that case.
pub fn stamp_glider(grid: &mut Grid, top_row: isize, left_col: isize) -> Result<(), Error> {
    let fits = top_row >= 0
        && left_col >= 0
        && (top_row as usize).saturating_add(GLIDER_SPAN) <= grid.rows()
        && (left_col as usize).saturating_add(GLIDER_SPAN) <= grid.cols();
    if !fits {
        return Err(Error::OutOfBounds);
    }
    let (top_row, left_col) = (top_row as usize, left_col as usize);
    for row in top_row..grid.rows().min(top_row + GLIDER_CLEAR) {
        for col in left_col..grid.cols().min(left_col + GLIDER_CLEAR) {
            grid[(row, col)] = DEAD;
        }
    }
    for &(row, col) in GLIDER.iter() {
        grid[(top_row + row, left_col + col)] = ALIVE;
    }
    Ok(())
}
