//! Splitting a line into same-owner segments and classifying how open each
//! segment is on either side.

use smallvec::SmallVec;

use crate::board::{Cell, Player, WINNING_LENGTH};

/// Distance from a segment end to the next obstruction (a stone of either
/// color) along the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Distance {
    /// At least two empty cells, or the line ends before any obstruction.
    Infinity,
    /// Exactly one empty cell, then a stone.
    One,
    /// A stone directly adjacent.
    Zero,
}

/// One contiguous run of a player's stones (empty cells allowed inside,
/// opponent stones not) within a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SegmentInfo {
    /// Occupancy of the scored window, bit `i` set when cell `i` of the window
    /// holds the owner's stone.
    pub pattern: u8,
    /// Number of cells from the first to the last owner stone, before windowing.
    pub length: usize,
    /// Left and right distances.
    pub distances: [Distance; 2],
}

impl SegmentInfo {
    pub fn left(&self) -> Distance {
        self.distances[0]
    }

    pub fn right(&self) -> Distance {
        self.distances[1]
    }
}

pub type SegmentInfoList = SmallVec<[SegmentInfo; 4]>;

/// Splits `line` into the segments owned by `owner`, left to right.
///
/// A segment starts at an owner stone and runs until the next opponent stone
/// or the end of the line; trailing empty cells are not part of it.
pub fn segments(line: &[Cell], owner: Player) -> SegmentInfoList {
    let own = Cell::from(owner);
    let opponent = own.inverse();
    let mut result = SegmentInfoList::new();

    let mut i = 0;
    while i < line.len() {
        if line[i] != own {
            i += 1;
            continue;
        }

        let begin = i;
        let mut end = begin + 1;
        while end < line.len() && line[end] != opponent {
            end += 1;
        }
        let last = (begin..end)
            .rev()
            .find(|&j| line[j] == own)
            .unwrap_or(begin);

        let cells = &line[begin..=last];
        result.push(SegmentInfo {
            pattern: segment_pattern(cells, own),
            length: cells.len(),
            distances: [left_distance(line, begin), right_distance(line, last)],
        });

        i = end;
    }

    result
}

/// Packs up to `WINNING_LENGTH` cells of `cells` into a bit pattern. Longer
/// runs are reduced to the window holding the most `own` stones.
pub fn segment_pattern(cells: &[Cell], own: Cell) -> u8 {
    let start = if cells.len() > WINNING_LENGTH {
        densest_window(cells, own, WINNING_LENGTH)
    } else {
        0
    };

    cells[start..]
        .iter()
        .take(WINNING_LENGTH)
        .enumerate()
        .fold(0u8, |pattern, (i, &cell)| {
            if cell == own {
                pattern | (1 << i)
            } else {
                pattern
            }
        })
}

/// Start of the `width`-wide window of `cells` with the most `own` stones,
/// preferring the leftmost on ties. `cells` must be at least `width` long.
pub fn densest_window(cells: &[Cell], own: Cell, width: usize) -> usize {
    let mut best_start = 0;
    let mut best_count = 0;
    for (start, window) in cells.windows(width).enumerate() {
        let count = window.iter().filter(|&&cell| cell == own).count();
        if count > best_count {
            best_count = count;
            best_start = start;
        }
    }
    best_start
}

/// Distance to the left of the segment starting at `begin`.
pub fn left_distance(line: &[Cell], begin: usize) -> Distance {
    if begin == 0 {
        return Distance::Infinity;
    }
    if !line[begin - 1].is_empty() {
        return Distance::Zero;
    }
    if begin == 1 {
        return Distance::Infinity;
    }
    if !line[begin - 2].is_empty() {
        return Distance::One;
    }
    Distance::Infinity
}

/// Distance to the right of the segment whose last stone is at `last`.
pub fn right_distance(line: &[Cell], last: usize) -> Distance {
    if last + 1 >= line.len() {
        return Distance::Infinity;
    }
    if !line[last + 1].is_empty() {
        return Distance::Zero;
    }
    if last + 2 >= line.len() {
        return Distance::Infinity;
    }
    if !line[last + 2].is_empty() {
        return Distance::One;
    }
    Distance::Infinity
}
