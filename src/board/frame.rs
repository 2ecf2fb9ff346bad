//! Axis-aligned rectangles in grid coordinates and the aligned growth rule
//! used when a grid has to reallocate.

/// A rectangle `{x, y, width, height}`. `x`/`y` is the minimum corner; the
/// frame covers `x..x + width` and `y..y + height`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Frame {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A `size`×`size` square centered on the origin.
    pub fn centered(size: i32) -> Self {
        Self::new(-size / 2, -size / 2, size, size)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// One past the largest x covered.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// One past the largest y covered.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn area(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// Any `i32` coordinate is valid input, so offsets are taken in `i64`.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let dx = x as i64 - self.x as i64;
        let dy = y as i64 - self.y as i64;
        (0..self.width as i64).contains(&dx) && (0..self.height as i64).contains(&dy)
    }

    /// Row-major offset of `(x, y)` in a buffer laid out over this frame.
    /// Only meaningful when `contains(x, y)`.
    #[inline]
    pub fn index_of(&self, x: i32, y: i32) -> usize {
        debug_assert!(self.contains(x, y), "({}, {}) outside {:?}", x, y, self);
        let dx = x as i64 - self.x as i64;
        let dy = y as i64 - self.y as i64;
        (dx + dy * self.width as i64) as usize
    }

    /// The smallest frame covering both `self` and `(x, y)`.
    pub fn union_point(self, x: i32, y: i32) -> Self {
        let (x_begin, width) = extend_range(self.x, self.width, x);
        let (y_begin, height) = extend_range(self.y, self.height, y);
        Self::new(x_begin, y_begin, width, height)
    }

    /// Grows the frame along each axis, in multiples of the current size, until
    /// it covers `(x, y)`. Returns `None` if the point is already covered.
    pub fn aligned_extend(self, x: i32, y: i32) -> Option<Self> {
        let horizontal = aligned_extend_range(self.x, self.width, x);
        let vertical = aligned_extend_range(self.y, self.height, y);
        if horizontal.is_none() && vertical.is_none() {
            return None;
        }

        let (x_begin, width) = horizontal.unwrap_or((self.x, self.width));
        let (y_begin, height) = vertical.unwrap_or((self.y, self.height));
        Some(Self::new(x_begin, y_begin, width, height))
    }
}

/// New size along one axis for an offset `d` from the old origin, given the
/// old size `old`. Always a multiple of `old`.
pub fn align_size(old: i32, d: i32) -> i32 {
    if d >= 0 {
        ((d + old) / old) * old
    } else {
        ((-d - 1 + old * 2) / old) * old
    }
}

/// How far the origin moves (a non-positive multiple of `old`) when growing
/// backwards to cover a negative offset `d`.
pub fn align_distance(old: i32, d: i32) -> i32 {
    ((d + 1 - old) / old) * old
}

fn aligned_extend_range(begin: i32, size: i32, value: i32) -> Option<(i32, i32)> {
    let end = begin + size;
    let d = value - begin;

    if value >= end {
        Some((begin, align_size(size, d)))
    } else if value < begin {
        Some((begin + align_distance(size, d), align_size(size, d)))
    } else {
        None
    }
}

/// Widths that do not fit an `i32` saturate at `i32::MAX`.
fn extend_range(begin: i32, size: i32, value: i32) -> (i32, i32) {
    if size == 0 {
        return (value, 1);
    }

    let (begin, size, value) = (begin as i64, size as i64, value as i64);
    let end = begin + size;
    let (begin, size) = if value < begin {
        (value, end - value)
    } else if value >= end {
        (begin, value + 1 - begin)
    } else {
        (begin, size)
    };
    (begin as i32, size.min(i32::MAX as i64) as i32)
}
