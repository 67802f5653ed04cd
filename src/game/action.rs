//! Flat action indices for hosts with a discrete action space of size `N²`.
//!
//! Action `a` is written in base `N` and left-padded to two digits: the first
//! digit is `wide`, the second `depth`.

use serde::Serialize;

use super::grid::Grid;
use super::radix;
use crate::error::{ActionError, RadixError};

/// A column of the grid, addressed by its horizontal coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Column {
    pub wide: usize,
    pub depth: usize,
}

pub fn action_space(side: usize) -> usize {
    side * side
}

/// Decode a flat action into the column it targets.
pub fn decode(action: usize, side: usize) -> Result<Column, ActionError> {
    let size = action_space(side);
    if action >= size {
        return Err(ActionError::OutOfRange { action, size });
    }
    let base = u32::try_from(side).map_err(|_| RadixError::Overflow)?;
    let digits = radix::padded_digits(action, base, 2)?;
    Ok(Column {
        wide: digits[0] as usize,
        depth: digits[1] as usize,
    })
}

pub fn encode(column: Column, side: usize) -> Result<usize, ActionError> {
    if column.wide >= side || column.depth >= side {
        return Err(ActionError::ColumnOutOfRange {
            wide: column.wide,
            depth: column.depth,
            side,
        });
    }
    let base = u32::try_from(side).map_err(|_| RadixError::Overflow)?;
    // Both digits are below `base`, so they fit in a u32.
    let action = radix::from_digits(&[column.wide as u32, column.depth as u32], base)?;
    Ok(action)
}

/// Actions whose column still has room, in ascending order.
pub fn legal_actions(grid: &Grid) -> Vec<usize> {
    let side = grid.side();
    (0..action_space(side))
        .filter(|&a| !grid.is_column_full(a / side, a % side))
        .collect()
}

/// `true` at every action whose column still has room.
pub fn action_mask(grid: &Grid) -> Vec<bool> {
    let side = grid.side();
    (0..action_space(side))
        .map(|a| !grid.is_column_full(a / side, a % side))
        .collect()
}
