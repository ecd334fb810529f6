use core::ops::{Index, IndexMut};

/// A grid of size `(W, H)` containing a value of type `T`, stored row by row
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid<T, const W: usize, const H: usize> {
    rows: [[T; W]; H],
}

impl<T: Copy, const W: usize, const H: usize> Grid<T, W, H> {
    pub const fn new(fill_value: T) -> Self {
        Self {
            rows: [[fill_value; W]; H],
        }
    }

    pub fn fill(&mut self, value: T) {
        self.rows.iter_mut().for_each(|row| row.fill(value));
    }
}

impl<T, const W: usize, const H: usize> Grid<T, W, H> {
    fn x_y_to_index(x: i32, y: i32) -> Option<(usize, usize)> {
        if (y >= 0) & (y < H as i32) & (x >= 0) & (x < W as i32) {
            Some((x as usize, y as usize))
        } else {
            None
        }
    }

    pub fn row(&self, y: usize) -> &[T; W] {
        &self.rows[y]
    }

    /// Signed lookup, `None` for anything outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        let (x, y) = Self::x_y_to_index(x, y)?;
        Some(&self.rows[y][x])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut T> {
        let (x, y) = Self::x_y_to_index(x, y)?;
        Some(&mut self.rows[y][x])
    }

    pub fn set(&mut self, x: i32, y: i32, value: T) {
        if let Some(cell) = self.get_mut(x, y) {
            *cell = value;
        }
    }

    /// Every coordinate in row-major order: `y` outer, `x` inner
    pub fn iter_coords() -> impl Iterator<Item = (usize, usize)> {
        (0..H).flat_map(|y| (0..W).map(move |x| (x, y)))
    }

    pub fn iter_with_index(&self) -> impl Iterator<Item = ((usize, usize), &T)> {
        Self::iter_coords().zip(self.rows.iter().flatten())
    }
}

/// Plain `(x, y)` access, panics outside the grid
impl<T, const W: usize, const H: usize> Index<(usize, usize)> for Grid<T, W, H> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        &self.rows[y][x]
    }
}

impl<T, const W: usize, const H: usize> IndexMut<(usize, usize)> for Grid<T, W, H> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        &mut self.rows[y][x]
    }
}
