use crate::{Grid, HEIGHT, PointList, WIDTH};

/// Cell value for a position named in the point list
pub const SET: u8 = 255;

/// The 160x120 occupancy raster, one byte per cell, each either 0 or [`SET`]
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Raster {
    cells: Grid<u8, WIDTH, HEIGHT>,
}

impl Raster {
    pub const fn new() -> Self {
        Self {
            cells: Grid::new(0),
        }
    }

    pub fn from_points(points: PointList<'_>) -> Self {
        let mut raster = Self::new();
        raster.load(points);
        raster
    }

    /// Marks every listed `(x, y)` as [`SET`]; other cells are left alone.
    ///
    /// # Panics
    ///
    /// If a coordinate lies outside the display. The list is expected to be
    /// valid, see [`PointList::check`].
    pub fn load(&mut self, points: PointList<'_>) {
        for (x, y) in points.pairs() {
            self.cells[(usize::from(x), usize::from(y))] = SET;
        }
        debug!("raster loaded from {} points", points.len());
    }

    /// Cell value, or `None` outside the display
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        self.cells.get(x, y).copied()
    }

    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.cells[(x, y)] == SET
    }

    pub fn set_count(&self) -> usize {
        self.cells.iter_with_index().filter(|(_, v)| **v == SET).count()
    }

    pub fn fill(&mut self) {
        self.cells.fill(SET);
    }
}

impl Default for Raster {
    fn default() -> Self {
        Self::new()
    }
}
