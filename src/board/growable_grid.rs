use log::debug;

use super::frame::Frame;
use super::INITIAL_GRID_SIZE;

/// An origin-relative 2-D array that grows to cover any coordinate it is
/// written at.
///
/// Two frames are tracked: the allocated `frame` backing `cells`, and the
/// `in_use` frame, the smallest rectangle holding every coordinate ever
/// written. `in_use` is always inside `frame`.
#[derive(Clone, Debug)]
pub struct GrowableGrid<T> {
    cells: Vec<T>,
    frame: Frame,
    in_use: Frame,
}

impl<T: Copy + Default> Default for GrowableGrid<T> {
    fn default() -> Self {
        Self::with_size(INITIAL_GRID_SIZE)
    }
}

impl<T: Copy + Default> GrowableGrid<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a `size`×`size` grid centered on the origin.
    pub fn with_size(size: i32) -> Self {
        assert!(size > 0, "grid size must be positive, got {}", size);
        let frame = Frame::centered(size);
        Self {
            cells: vec![T::default(); frame.area()],
            frame,
            in_use: Frame::default(),
        }
    }

    /// Returns the value at `(x, y)`, or `T::default()` for any coordinate that
    /// was never written.
    #[inline]
    pub fn read(&self, x: i32, y: i32) -> T {
        if self.frame.contains(x, y) {
            self.cells[self.frame.index_of(x, y)]
        } else {
            T::default()
        }
    }

    /// Returns a mutable reference to `(x, y)`, growing the allocation first
    /// if the coordinate is outside it. The in-use frame is extended to cover
    /// the coordinate.
    pub fn write(&mut self, x: i32, y: i32) -> &mut T {
        self.in_use = self.in_use.union_point(x, y);

        if let Some(new_frame) = self.frame.aligned_extend(x, y) {
            self.reallocate(new_frame);
        }

        let index = self.frame.index_of(x, y);
        &mut self.cells[index]
    }

    pub fn set(&mut self, x: i32, y: i32, value: T) {
        *self.write(x, y) = value;
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn in_use(&self) -> Frame {
        self.in_use
    }

    /// Number of allocated cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn reallocate(&mut self, new_frame: Frame) {
        debug!("growing grid from {:?} to {:?}", self.frame, new_frame);

        let mut cells = vec![T::default(); new_frame.area()];
        let old = self.frame;
        for y in old.y..old.bottom() {
            let src = old.index_of(old.x, y);
            let dst = new_frame.index_of(old.x, y);
            let width = old.width as usize;
            cells[dst..dst + width].copy_from_slice(&self.cells[src..src + width]);
        }

        self.cells = cells;
        self.frame = new_frame;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_allocation() {
        let grid: GrowableGrid<i32> = GrowableGrid::new();
        assert_eq!(INITIAL_GRID_SIZE, 51);
        assert_eq!(grid.len(), 51 * 51);
        assert_eq!(grid.frame(), Frame::new(-25, -25, 51, 51));
        assert!(grid.in_use().is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let mut grid: GrowableGrid<i32> = GrowableGrid::new();
        *grid.write(0, 0) = 20;
        assert_eq!(grid.read(0, 0), 20);
        assert_eq!(grid.read(1, 0), 0);
    }

    #[test]
    fn test_read_outside_allocation_is_default() {
        let grid: GrowableGrid<u8> = GrowableGrid::with_size(3);
        assert_eq!(grid.read(1000, -1000), 0);
        assert_eq!(grid.len(), 9);
    }

    #[test]
    fn test_read_at_extreme_coordinates() {
        let mut grid: GrowableGrid<i32> = GrowableGrid::new();
        grid.set(0, 0, 7);
        let extremes = [
            (i32::MAX, 0),
            (i32::MIN, 0),
            (0, i32::MAX),
            (0, i32::MIN),
            (i32::MAX, i32::MIN),
        ];
        for &(x, y) in extremes.iter() {
            assert_eq!(grid.read(x, y), 0, "at ({}, {})", x, y);
        }
        assert_eq!(grid.read(0, 0), 7);
    }

    #[test]
    fn test_resize() {
        let mut grid: GrowableGrid<i32> = GrowableGrid::with_size(1);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.frame(), Frame::new(0, 0, 1, 1));

        grid.set(0, 0, 12);
        grid.set(1, 0, 13);
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.frame(), Frame::new(0, 0, 2, 1));

        grid.set(0, -1, 14);
        assert_eq!(grid.len(), 2 * 2);
        assert_eq!(grid.frame(), Frame::new(0, -1, 2, 2));

        assert_eq!(grid.read(0, 0), 12);
        assert_eq!(grid.read(1, 0), 13);
        assert_eq!(grid.read(0, -1), 14);
        assert_eq!(grid.read(1, -1), 0);
    }

    #[test]
    fn test_far_writes_preserve_contents() {
        let mut grid: GrowableGrid<i32> = GrowableGrid::with_size(5);
        let points = [(0, 0), (2, -2), (-40, 7), (300, 300), (-1000, -999), (17, -512)];
        for (value, &(x, y)) in points.iter().enumerate() {
            grid.set(x, y, value as i32 + 1);
        }
        for (value, &(x, y)) in points.iter().enumerate() {
            assert_eq!(grid.read(x, y), value as i32 + 1, "at ({}, {})", x, y);
        }
        assert_eq!(grid.read(299, 300), 0);
    }

    #[test]
    fn test_growth_is_geometric() {
        let mut grid: GrowableGrid<u8> = GrowableGrid::with_size(4);
        let mut reallocations = 0;
        let mut frame = grid.frame();
        for x in 0..4096 {
            grid.set(x, 0, 1);
            if grid.frame() != frame {
                reallocations += 1;
                frame = grid.frame();
            }
        }
        assert!(reallocations <= 12, "{} reallocations", reallocations);
    }

    #[test]
    fn test_in_use_frame_is_minimal() {
        let mut grid: GrowableGrid<u8> = GrowableGrid::new();
        grid.set(2, 3, 1);
        assert_eq!(grid.in_use(), Frame::new(2, 3, 1, 1));
        grid.set(-1, 5, 1);
        assert_eq!(grid.in_use(), Frame::new(-1, 3, 4, 3));
        grid.set(60, -60, 1);
        assert_eq!(grid.in_use(), Frame::new(-1, -60, 62, 66));
        assert!(grid.in_use().contains(60, -60));
    }

    #[test]
    fn test_in_use_inside_allocation() {
        let mut grid: GrowableGrid<u8> = GrowableGrid::with_size(3);
        for &(x, y) in &[(5, 5), (-9, 2), (0, -30)] {
            grid.set(x, y, 1);
            let in_use = grid.in_use();
            let frame = grid.frame();
            assert!(frame.contains(in_use.x, in_use.y));
            assert!(frame.contains(in_use.right() - 1, in_use.bottom() - 1));
        }
    }
}
