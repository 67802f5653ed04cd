//! K-in-a-row detection over the whole grid.
//!
//! Every straight run of `k` cells inside the grid lies in one of the
//! `(N-K+1)^3` sliding K×K×K sub-cubes and runs along one of the 13
//! directions in [`DIRECTIONS`]. Walking each direction from each start cell
//! covers that set without materialising sub-cubes or rotations.

use serde::Serialize;

use super::grid::{Cell, Grid};
use super::lines::{all_lines, Coord, Direction, Line, DIRECTIONS};
use super::player::Player;

/// An alignment found on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WinningLine {
    pub line: Line,
    pub player: Player,
}

/// Check whether any `k` consecutive cells along any direction hold the same
/// player's stones.
pub fn is_won(grid: &Grid, k: usize) -> bool {
    winning_line(grid, k).is_some()
}

/// First alignment found, in start-cell then direction order.
pub fn winning_line(grid: &Grid, k: usize) -> Option<WinningLine> {
    if k == 0 || k > grid.side() {
        return None;
    }

    all_lines(grid.side(), k).find_map(|line| {
        uniform_owner(grid, &line).map(|player| WinningLine { line, player })
    })
}

/// Check only the lines passing through `last`.
///
/// Agrees with [`is_won`] whenever the grid held no alignment before the
/// stone at `last` was placed, since any new alignment must contain it.
/// A `last` outside the grid is never a win.
pub fn is_won_through(grid: &Grid, k: usize, last: Coord) -> bool {
    if k == 0 || k > grid.side() {
        return false;
    }
    let (h, w, d) = last;
    let cell = match grid.try_get(h, w, d) {
        Some(cell) if !cell.is_empty() => cell,
        _ => return false,
    };

    DIRECTIONS.iter().any(|&direction| {
        let run = 1
            + run_length(grid, last, direction, cell)
            + run_length(grid, last, direction.reversed(), cell);
        run >= k
    })
}

/// Owner of the line if every cell carries the same nonzero sign.
fn uniform_owner(grid: &Grid, line: &Line) -> Option<Player> {
    let mut cells = line.cells().map(|(h, w, d)| grid.get(h, w, d));
    let first = cells.next()?;
    if first.is_empty() || !cells.all(|c| c == first) {
        return None;
    }
    Player::from_sign(first.sign())
}

/// Consecutive cells equal to `cell` beyond `from`, not counting `from`.
fn run_length(grid: &Grid, from: Coord, direction: Direction, cell: Cell) -> usize {
    let side = grid.side();
    (1..side)
        .map_while(|steps| direction.offset(from, steps, side))
        .take_while(|&(h, w, d)| grid.get(h, w, d) == cell)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::lines::LineKind;

    fn grid_with(side: usize, stones: &[(Coord, Cell)]) -> Grid {
        let mut grid = Grid::new(side);
        for &((h, w, d), cell) in stones {
            grid.set(h, w, d, cell);
        }
        grid
    }

    #[test]
    fn test_empty_grid_not_won() {
        assert!(!is_won(&Grid::new(4), 4));
        assert!(!is_won(&Grid::new(4), 2));
    }

    #[test]
    fn test_vertical_win() {
        let stones: Vec<_> = (0..4).map(|h| ((h, 1, 2), Cell::A)).collect();
        let grid = grid_with(4, &stones);
        let found = winning_line(&grid, 4).unwrap();
        assert_eq!(found.player, Player::A);
        assert_eq!(found.line.start, (0, 1, 2));
        assert_eq!(found.line.direction.kind(), LineKind::Axis);
    }

    #[test]
    fn test_no_win_with_three() {
        let stones: Vec<_> = (0..3).map(|w| ((0, w, 0), Cell::B)).collect();
        let grid = grid_with(4, &stones);
        assert!(!is_won(&grid, 4));
        assert!(is_won(&grid, 3));
    }

    #[test]
    fn test_mixed_line_not_won() {
        let grid = grid_with(
            3,
            &[((0, 0, 0), Cell::A), ((0, 1, 0), Cell::B), ((0, 2, 0), Cell::A)],
        );
        assert!(!is_won(&grid, 3));
    }

    #[test]
    fn test_face_diagonal_win() {
        // Diagonal in the (height, depth) plane at wide = 2.
        let stones: Vec<_> = (0..3).map(|i| ((i, 2, 2 - i), Cell::B)).collect();
        let grid = grid_with(3, &stones);
        let found = winning_line(&grid, 3).unwrap();
        assert_eq!(found.player, Player::B);
        assert_eq!(found.line.direction.kind(), LineKind::Face);
    }

    #[test]
    fn test_every_space_diagonal_detected() {
        let k = 4;
        let corners: [fn(usize) -> Coord; 4] = [
            |i: usize| (i, i, i),
            |i: usize| (i, i, 3 - i),
            |i: usize| (i, 3 - i, i),
            |i: usize| (3 - i, i, i),
        ];
        for corner in corners {
            let stones: Vec<_> = (0..k).map(|i| (corner(i), Cell::A)).collect();
            let grid = grid_with(4, &stones);
            let found = winning_line(&grid, k).expect("space diagonal should win");
            assert_eq!(found.line.direction.kind(), LineKind::Space);
        }
    }

    #[test]
    fn test_sliding_window_finds_offset_line() {
        // Length-2 diagonal in the far corner of a 4-grid.
        let grid = grid_with(4, &[((2, 2, 2), Cell::B), ((3, 3, 3), Cell::B)]);
        assert!(is_won(&grid, 2));
        assert!(!is_won(&grid, 3));
    }

    #[test]
    fn test_k_larger_than_grid_never_wins() {
        let stones: Vec<_> = (0..3).map(|h| ((h, 0, 0), Cell::A)).collect();
        let grid = grid_with(3, &stones);
        assert!(!is_won(&grid, 4));
        assert!(!is_won(&grid, 0));
    }

    #[test]
    fn test_won_through_matches_last_stone() {
        let stones: Vec<_> = (0..3).map(|w| ((1, w, w), Cell::A)).collect();
        let grid = grid_with(3, &stones);
        assert!(is_won_through(&grid, 3, (1, 1, 1)));
        assert!(is_won_through(&grid, 3, (1, 0, 0)));
        assert!(!is_won_through(&grid, 3, (0, 0, 0)));
        assert!(!is_won_through(&grid, 4, (1, 1, 1)));
    }

    #[test]
    fn test_winning_line_serializes() {
        let stones: Vec<_> = (0..3).map(|h| ((h, 1, 2), Cell::B)).collect();
        let grid = grid_with(3, &stones);
        let found = winning_line(&grid, 3).unwrap();
        let json = serde_json::to_value(found).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "line": {
                    "start": [0, 1, 2],
                    "direction": { "dh": 1, "dw": 0, "dd": 0 },
                    "len": 3
                },
                "player": "B"
            })
        );
    }

    #[test]
    fn test_won_through_rejects_cell_outside_grid() {
        // (0, 0, 4) would alias (0, 1, 0) in a flat side-4 buffer.
        let stones: Vec<_> = (0..4).map(|d| ((0, 1, d), Cell::A)).collect();
        let grid = grid_with(4, &stones);
        assert!(is_won_through(&grid, 4, (0, 1, 0)));
        assert!(!is_won_through(&grid, 4, (0, 0, 4)));
        assert!(!is_won_through(&grid, 4, (9, 9, 9)));
    }

    #[test]
    fn test_won_through_ignores_other_lines() {
        let mut stones: Vec<_> = (0..3).map(|h| ((h, 0, 0), Cell::B)).collect();
        stones.push(((0, 2, 2), Cell::A));
        let grid = grid_with(3, &stones);
        assert!(is_won(&grid, 3));
        assert!(!is_won_through(&grid, 3, (0, 2, 2)));
    }
}
