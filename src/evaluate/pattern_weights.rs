//! Weights for five-cell occupancy patterns and the openness scaling applied
//! on top of them.

use super::segment::{Distance, SegmentInfo};
use super::Score;
use crate::board::WINNING_LENGTH;

/// All five bits set: five in a row.
pub const FULL_PATTERN: u8 = 0b11111;

/// Weight of every five-bit pattern, indexed by the pattern. Bit 0 is the
/// leftmost cell of the window; mirrored and shifted patterns share a weight.
const PATTERN_WEIGHTS: [Score; 32] = [
    0.0,           // 00000
    1.0,           // 00001
    1.0,           // 00010
    10.0,          // 00011
    1.0,           // 00100
    8.0,           // 00101
    10.0,          // 00110
    100.0,         // 00111
    1.0,           // 01000
    5.0,           // 01001
    8.0,           // 01010
    80.0,          // 01011
    10.0,          // 01100
    80.0,          // 01101
    100.0,         // 01110
    1_000.0,       // 01111
    1.0,           // 10000
    3.0,           // 10001
    5.0,           // 10010
    50.0,          // 10011
    8.0,           // 10100
    60.0,          // 10101
    80.0,          // 10110
    800.0,         // 10111
    10.0,          // 11000
    50.0,          // 11001
    80.0,          // 11010
    800.0,         // 11011
    100.0,         // 11100
    800.0,         // 11101
    1_000.0,       // 11110
    Score::INFINITY, // 11111
];

pub fn pattern_weight(pattern: u8) -> Score {
    PATTERN_WEIGHTS[(pattern & FULL_PATTERN) as usize]
}

/// Scaling for a segment given its left and right distances. Symmetric.
pub fn openness_factor(left: Distance, right: Distance) -> Score {
    use Distance::*;

    match (left, right) {
        (Infinity, Infinity) => 1.0,
        (One, Infinity) | (Infinity, One) => 0.75,
        (Zero, Infinity) | (Infinity, Zero) => 0.5,
        (One, One) => 0.5,
        (One, Zero) | (Zero, One) => 0.25,
        (Zero, Zero) => 0.0,
    }
}

/// Scores a single segment.
///
/// A full window is a win (`+inf`) except when the segment is exactly five
/// long and blocked directly on both sides, which scores 0.
pub fn score(segment: &SegmentInfo) -> Score {
    let factor = openness_factor(segment.left(), segment.right());

    if segment.pattern & FULL_PATTERN == FULL_PATTERN {
        if segment.length == WINNING_LENGTH && factor == 0.0 {
            return 0.0;
        }
        return Score::INFINITY;
    }

    pattern_weight(segment.pattern) * factor
}
