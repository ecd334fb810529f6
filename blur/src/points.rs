use core::fmt;

use crate::{HEIGHT, WIDTH};

/// A flat list of `(x, y)` byte pairs, as compiled into the firmware.
///
/// The list is trusted static data. Nothing on the rendering path validates
/// it: a coordinate outside 160x120 makes [`crate::Raster::load`] panic. Use
/// [`PointList::check`] in a `const` assertion to reject bad data at build
/// time instead.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PointList<'a> {
    bytes: &'a [u8],
}

impl<'a> PointList<'a> {
    pub const EMPTY: PointList<'static> = PointList { bytes: &[] };

    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Number of complete pairs; a trailing odd byte is not counted
    pub const fn len(&self) -> usize {
        self.bytes.len() / 2
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn pairs(self) -> impl Iterator<Item = (u8, u8)> + 'a {
        self.bytes.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    /// Checks the even length and the coordinate range of every pair
    pub const fn check(&self) -> Result<(), PointError> {
        if self.bytes.len() % 2 != 0 {
            return Err(PointError::OddLength {
                len: self.bytes.len(),
            });
        }
        let mut index = 0;
        while index < self.len() {
            let x = self.bytes[2 * index];
            let y = self.bytes[2 * index + 1];
            if x as usize >= WIDTH || y as usize >= HEIGHT {
                return Err(PointError::OutOfRange { index, x, y });
            }
            index += 1;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PointError {
    /// The byte count does not split into pairs
    OddLength { len: usize },
    /// Pair `index` lies outside the display
    OutOfRange { index: usize, x: u8, y: u8 },
}

impl fmt::Display for PointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointError::OddLength { len } => {
                write!(f, "point list has an odd number of bytes ({len})")
            }
            PointError::OutOfRange { index, x, y } => write!(
                f,
                "point {index} at ({x}, {y}) is outside the {WIDTH}x{HEIGHT} display"
            ),
        }
    }
}

impl core::error::Error for PointError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_in_list_order() {
        let list = PointList::new(&[1, 2, 3, 4, 5]);
        assert_eq!(list.len(), 2);
        let pairs: std::vec::Vec<_> = list.pairs().collect();
        assert_eq!(pairs, [(1, 2), (3, 4)]);
    }

    #[test]
    fn check_accepts_corners() {
        assert_eq!(PointList::new(&[0, 0, 159, 119, 159, 0, 0, 119]).check(), Ok(()));
        assert_eq!(PointList::EMPTY.check(), Ok(()));
        assert!(PointList::EMPTY.is_empty());
    }

    #[test]
    fn check_rejects_bad_data() {
        assert_eq!(
            PointList::new(&[1, 2, 3]).check(),
            Err(PointError::OddLength { len: 3 })
        );
        assert_eq!(
            PointList::new(&[1, 2, 160, 5]).check(),
            Err(PointError::OutOfRange { index: 1, x: 160, y: 5 })
        );
        assert_eq!(
            PointList::new(&[10, 120]).check(),
            Err(PointError::OutOfRange { index: 0, x: 10, y: 120 })
        );
    }

    #[test]
    fn check_runs_in_const() {
        const GOOD: PointList<'static> = PointList::new(&[80, 60]);
        const _: () = assert!(GOOD.check().is_ok());
    }

    #[test]
    fn error_messages() {
        let err = PointError::OutOfRange { index: 3, x: 200, y: 1 };
        assert_eq!(
            std::format!("{err}"),
            "point 3 at (200, 1) is outside the 160x120 display"
        );
    }
}
