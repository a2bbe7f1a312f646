use std::ops;

use crate::core::Point;

/// Fixed size 2D store, row-major.
///
/// Whether the grid owns its elements is decided by `T`: a `Grid<Cell>` drops its cells on
/// clear, a `Grid<&Cell>` only forgets the references.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    buf: Vec<Option<T>>,
    height: usize,
    width: usize,
}

impl<T> Grid<T> {
    /// Creates an empty grid, returns `None` if either dimension is zero.
    pub fn new(height: usize, width: usize) -> Option<Self> {
        if height == 0 || width == 0 {
            return None;
        }

        let len = height.checked_mul(width)?;
        let mut buf = Vec::with_capacity(len);
        buf.resize_with(len, || None);

        Some(Self { buf, height, width })
    }

    /// Creates a grid with every slot filled by `init`, which gets the slot position.
    pub fn from_fn(height: usize, width: usize, mut init: impl FnMut(Point) -> T) -> Option<Self> {
        let mut grid = Self::new(height, width)?;
        for (idx, slot) in grid.buf.iter_mut().enumerate() {
            *slot = Some(init(Point::new(idx / width, idx % width)));
        }
        Some(grid)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of slots, empty ones included.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.iter().all(Option::is_none)
    }

    pub fn pos_to_idx(&self, pos: Point) -> Option<usize> {
        if !pos.is_within(self.height, self.width) {
            return None;
        }

        Some(pos.row * self.width + pos.col)
    }

    pub fn idx_to_pos(&self, idx: usize) -> Option<Point> {
        if idx >= self.buf.len() {
            return None;
        }

        Some(Point::new(idx / self.width, idx % self.width))
    }

    pub fn get(&self, pos: Point) -> Option<&T> {
        self.pos_to_idx(pos).and_then(|i| self.buf[i].as_ref())
    }

    pub fn get_mut(&mut self, pos: Point) -> Option<&mut T> {
        self.pos_to_idx(pos).and_then(|i| self.buf[i].as_mut())
    }

    pub fn get_idx(&self, idx: usize) -> Option<&T> {
        self.buf.get(idx).and_then(Option::as_ref)
    }

    pub fn get_idx_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.buf.get_mut(idx).and_then(Option::as_mut)
    }

    /// Writes `value` into the slot, returns `false` and does nothing when out of bounds.
    ///
    /// A previous value is dropped, which for borrowed `T` is a no-op.
    pub fn set(&mut self, pos: Point, value: T) -> bool {
        match self.pos_to_idx(pos) {
            Some(i) => {
                self.buf[i] = Some(value);
                true
            }
            None => false,
        }
    }

    /// Empties the slot and hands its value back.
    pub fn take(&mut self, pos: Point) -> Option<T> {
        self.pos_to_idx(pos).and_then(|i| self.buf[i].take())
    }

    /// Empties every slot without any callback.
    pub fn clear(&mut self) {
        self.buf.iter_mut().for_each(|slot| *slot = None);
    }

    /// Empties every slot, passing each present value to `destroy` exactly once, in row-major
    /// order. Empty slots are skipped.
    pub fn clear_and_destroy(&mut self, mut destroy: impl FnMut(T)) {
        for slot in self.buf.iter_mut() {
            if let Some(value) = slot.take() {
                destroy(value);
            }
        }
    }

    /// Present values in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.buf.iter_mut().flatten()
    }

    /// Every position of the grid in row-major order.
    pub fn iter_pos(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_pos(i))
    }
}

impl<T> ops::Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, index: Point) -> &Self::Output {
        self.get(index).expect("Index out of bounds or empty slot")
    }
}

impl<T> ops::IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, index: Point) -> &mut Self::Output {
        self.get_mut(index).expect("Index out of bounds or empty slot")
    }
}
