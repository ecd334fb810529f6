/// Taps extend this far from the centre in each direction
pub const RADIUS: i32 = 2;

const SIZE: usize = (2 * RADIUS + 1) as usize;

/// 5x5 integer convolution weights plus the divisor used to normalise the sum.
///
/// Weights are indexed `[dx + 2][dy + 2]`. The divisor is stored separately
/// rather than derived from the weights, so a kernel whose weights outgrow its
/// divisor produces brightness values above 255; the engine narrows those with
/// wraparound.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Kernel {
    weights: [[u8; SIZE]; SIZE],
    divisor: u32,
}

impl Kernel {
    /// The pyramid blur: centre 16, tapering to 1 in the corners, normalised by 100
    pub const BLUR: Kernel = Kernel::new(
        [
            [1, 2, 4, 2, 1],
            [2, 4, 8, 4, 2],
            [4, 8, 16, 8, 4],
            [2, 4, 8, 4, 2],
            [1, 2, 4, 2, 1],
        ],
        100,
    );

    pub const fn new(weights: [[u8; SIZE]; SIZE], divisor: u32) -> Self {
        assert!(divisor != 0, "kernel divisor must be non-zero");
        Self { weights, divisor }
    }

    pub const fn divisor(&self) -> u32 {
        self.divisor
    }

    pub const fn weight(&self, dx: i32, dy: i32) -> u8 {
        self.weights[(dx + RADIUS) as usize][(dy + RADIUS) as usize]
    }

    pub const fn weight_sum(&self) -> u32 {
        let mut sum = 0;
        let mut a = 0;
        while a < SIZE {
            let mut b = 0;
            while b < SIZE {
                sum += self.weights[a][b] as u32;
                b += 1;
            }
            a += 1;
        }
        sum
    }

    /// All 25 taps as `(dx, dy, weight)`, `dx` outer and `dy` inner
    pub fn taps(&self) -> impl Iterator<Item = (i32, i32, u32)> + '_ {
        (-RADIUS..=RADIUS).flat_map(move |dx| {
            (-RADIUS..=RADIUS).map(move |dy| (dx, dy, u32::from(self.weight(dx, dy))))
        })
    }
}

// A full neighbourhood of set cells must normalise to exactly full brightness.
const _: () = assert!(Kernel::BLUR.weight_sum() == Kernel::BLUR.divisor());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blur_is_symmetric() {
        let k = Kernel::BLUR;
        for dx in -RADIUS..=RADIUS {
            for dy in -RADIUS..=RADIUS {
                assert_eq!(k.weight(dx, dy), k.weight(-dx, dy));
                assert_eq!(k.weight(dx, dy), k.weight(dx, -dy));
                assert_eq!(k.weight(dx, dy), k.weight(dy, dx));
            }
        }
        assert_eq!(k.weight(0, 0), 16);
        assert_eq!(k.weight(-2, -2), 1);
    }

    #[test]
    fn taps_cover_every_offset_once() {
        let taps: std::vec::Vec<_> = Kernel::BLUR.taps().collect();
        assert_eq!(taps.len(), 25);
        assert_eq!(taps[0], (-2, -2, 1));
        assert_eq!(taps[12], (0, 0, 16));
        assert_eq!(taps.iter().map(|(_, _, w)| w).sum::<u32>(), 100);
    }

    #[test]
    #[should_panic]
    fn zero_divisor_is_rejected() {
        let _ = Kernel::new([[1; SIZE]; SIZE], 0);
    }
}
