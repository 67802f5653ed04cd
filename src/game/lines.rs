//! Straight lines through the grid.
//!
//! A line is a start cell, one of the 13 canonical directions and a length.
//! Every direction has its first nonzero component positive, so each
//! geometric line is enumerated exactly once.

use serde::Serialize;

/// `(height, wide, depth)`
pub type Coord = (usize, usize, usize);

/// Unit step `(dh, dw, dd)` with each component in `{-1, 0, 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Direction {
    pub dh: isize,
    pub dw: isize,
    pub dd: isize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Parallel to one axis.
    Axis,
    /// Diagonal of a plane perpendicular to one axis.
    Face,
    /// Corner-to-corner through a cube.
    Space,
}

const fn dir(dh: isize, dw: isize, dd: isize) -> Direction {
    Direction { dh, dw, dd }
}

pub const DIRECTIONS: [Direction; 13] = [
    dir(1, 0, 0),
    dir(0, 1, 0),
    dir(0, 0, 1),
    dir(1, 1, 0),
    dir(1, -1, 0),
    dir(1, 0, 1),
    dir(1, 0, -1),
    dir(0, 1, 1),
    dir(0, 1, -1),
    dir(1, 1, 1),
    dir(1, 1, -1),
    dir(1, -1, 1),
    dir(1, -1, -1),
];

impl Direction {
    pub fn kind(self) -> LineKind {
        let moving = [self.dh, self.dw, self.dd]
            .iter()
            .filter(|&&c| c != 0)
            .count();
        match moving {
            1 => LineKind::Axis,
            2 => LineKind::Face,
            _ => LineKind::Space,
        }
    }

    pub fn reversed(self) -> Direction {
        dir(-self.dh, -self.dw, -self.dd)
    }

    /// `steps` cells away from `from`, or `None` if that leaves a grid of
    /// the given side.
    pub fn offset(self, from: Coord, steps: usize, side: usize) -> Option<Coord> {
        let step = |origin: usize, delta: isize| -> Option<usize> {
            let moved = origin as isize + delta * steps as isize;
            (0..side as isize).contains(&moved).then_some(moved as usize)
        };
        Some((
            step(from.0, self.dh)?,
            step(from.1, self.dw)?,
            step(from.2, self.dd)?,
        ))
    }
}

/// K consecutive cells starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Line {
    pub start: Coord,
    pub direction: Direction,
    pub len: usize,
}

impl Line {
    /// The line if all of it lies inside a grid of `side`.
    pub fn within(start: Coord, direction: Direction, len: usize, side: usize) -> Option<Line> {
        if len == 0 {
            return None;
        }
        direction.offset(start, len - 1, side)?;
        direction.offset(start, 0, side)?;
        Some(Line {
            start,
            direction,
            len,
        })
    }

    pub fn end(&self) -> Coord {
        let (h, w, d) = self.start;
        let span = (self.len - 1) as isize;
        (
            (h as isize + self.direction.dh * span) as usize,
            (w as isize + self.direction.dw * span) as usize,
            (d as isize + self.direction.dd * span) as usize,
        )
    }

    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let (h, w, d) = self.start;
        (0..self.len as isize).map(move |i| {
            (
                (h as isize + self.direction.dh * i) as usize,
                (w as isize + self.direction.dw * i) as usize,
                (d as isize + self.direction.dd * i) as usize,
            )
        })
    }
}

/// Every line of length `len` that fits in a grid of `side`, grouped by
/// start cell.
pub fn all_lines(side: usize, len: usize) -> impl Iterator<Item = Line> {
    (0..side * side * side).flat_map(move |i| {
        let start = (i / (side * side), (i / side) % side, i % side);
        DIRECTIONS
            .into_iter()
            .filter_map(move |direction| Line::within(start, direction, len, side))
    })
}

/// Number of distinct lines of length `len` in a grid of `side`.
pub fn line_count(side: usize, len: usize) -> usize {
    if len == 0 || len > side {
        return 0;
    }
    let room = side - len + 1;
    DIRECTIONS
        .iter()
        .map(|d| {
            [d.dh, d.dw, d.dd]
                .iter()
                .map(|&c| if c == 0 { side } else { room })
                .product::<usize>()
        })
        .sum()
}
