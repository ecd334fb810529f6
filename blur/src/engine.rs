use crate::{DisplaySink, HEIGHT, Kernel, PointList, Raster, WIDTH, plot};

/// One computed row of brightness values, indexed by column
pub type RowBuffer = [u8; WIDTH];

/// Where the engine is within a frame.
///
/// The two phases alternate strictly: a row is computed in full with no sink
/// writes, then flushed in full with no computation, then the next row starts.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    ComputingRow(u8),
    FlushingRow(u8),
}

impl Phase {
    pub const START: Phase = Phase::ComputingRow(0);

    /// The phase after this one, `None` once the last row is flushed
    pub const fn next(self) -> Option<Phase> {
        match self {
            Phase::ComputingRow(j) => Some(Phase::FlushingRow(j)),
            Phase::FlushingRow(j) if (j as usize) + 1 < HEIGHT => Some(Phase::ComputingRow(j + 1)),
            Phase::FlushingRow(_) => None,
        }
    }

    pub const fn row(self) -> u8 {
        match self {
            Phase::ComputingRow(j) | Phase::FlushingRow(j) => j,
        }
    }
}

/// Convolves a loaded [`Raster`] and streams the result to a [`DisplaySink`]
#[derive(Clone, Copy, Debug)]
pub struct Engine<'r> {
    raster: &'r Raster,
    kernel: Kernel,
}

impl<'r> Engine<'r> {
    pub const fn new(raster: &'r Raster) -> Self {
        Self::with_kernel(raster, Kernel::BLUR)
    }

    pub const fn with_kernel(raster: &'r Raster, kernel: Kernel) -> Self {
        Self { raster, kernel }
    }

    pub const fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Blurred brightness of column `i`, row `j`.
    ///
    /// Taps falling outside the display contribute nothing, so cells near the
    /// border see less than the full kernel. The quotient is narrowed to a byte
    /// by truncation: anything above 255 wraps instead of saturating.
    pub fn brightness(&self, i: usize, j: usize) -> u8 {
        let (i, j) = (i as i32, j as i32);
        let accumulator: u32 = self
            .kernel
            .taps()
            .filter_map(|(dx, dy, weight)| {
                let cell = self.raster.get(i + dx, j + dy)?;
                Some(u32::from(cell) * weight)
            })
            .sum();
        (accumulator / self.kernel.divisor()) as u8
    }

    pub fn compute_row(&self, j: u8, row: &mut RowBuffer) {
        for (i, brightness) in row.iter_mut().enumerate() {
            *brightness = self.brightness(i, usize::from(j));
        }
    }

    /// Plots a computed row, columns ascending
    pub fn flush_row<S: DisplaySink + ?Sized>(j: u8, row: &RowBuffer, sink: &mut S) {
        for (i, &colour) in row.iter().enumerate() {
            plot(sink, i as u8, j, colour);
        }
    }

    /// Renders the whole frame: 120 rows of 160 writes, row-major
    pub fn run<S: DisplaySink + ?Sized>(&self, sink: &mut S) {
        let mut row: RowBuffer = [0; WIDTH];
        let mut phase = Some(Phase::START);
        while let Some(current) = phase {
            match current {
                Phase::ComputingRow(j) => self.compute_row(j, &mut row),
                Phase::FlushingRow(j) => {
                    Self::flush_row(j, &row, sink);
                    trace!("row {} flushed", j);
                }
            }
            phase = current.next();
        }
        debug!("frame complete");
    }
}

/// Loads `points` into a fresh raster and blurs it onto `sink`
pub fn render<S: DisplaySink + ?Sized>(points: PointList<'_>, sink: &mut S) {
    let raster = Raster::from_points(points);
    Engine::new(&raster).run(sink);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PIXEL_COUNT;

    #[test]
    fn phases_alternate_to_the_last_row() {
        let mut phase = Phase::START;
        let mut steps = 1;
        while let Some(next) = phase.next() {
            match (phase, next) {
                (Phase::ComputingRow(a), Phase::FlushingRow(b)) => assert_eq!(a, b),
                (Phase::FlushingRow(a), Phase::ComputingRow(b)) => assert_eq!(a + 1, b),
                other => panic!("unexpected transition {other:?}"),
            }
            phase = next;
            steps += 1;
        }
        assert_eq!(phase, Phase::FlushingRow(119));
        assert_eq!(phase.row(), 119);
        assert_eq!(steps, 2 * HEIGHT);
    }

    #[test]
    fn empty_raster_is_black() {
        let raster = Raster::new();
        let engine = Engine::new(&raster);
        let mut row = [7; WIDTH];
        engine.compute_row(60, &mut row);
        assert!(row.iter().all(|&b| b == 0));
    }

    #[test]
    fn footprint_of_one_pixel() {
        let raster = Raster::from_points(PointList::new(&[80, 60]));
        let engine = Engine::new(&raster);
        assert_eq!(engine.brightness(80, 60), 40);
        assert_eq!(engine.brightness(81, 60), 20);
        assert_eq!(engine.brightness(80, 59), 20);
        assert_eq!(engine.brightness(79, 61), 10);
        assert_eq!(engine.brightness(82, 60), 10);
        assert_eq!(engine.brightness(82, 61), 5);
        assert_eq!(engine.brightness(78, 58), 2);
        assert_eq!(engine.brightness(83, 60), 0);
        assert_eq!(engine.brightness(80, 63), 0);
    }

    #[test]
    fn full_raster_edges_are_darker() {
        let mut raster = Raster::new();
        raster.fill();
        let engine = Engine::new(&raster);
        assert_eq!(engine.brightness(80, 60), 255);
        // three of five kernel columns in range: (40 + 20 + 10) * 255 / 100
        assert_eq!(engine.brightness(0, 60), 178);
        assert_eq!(engine.brightness(159, 60), 178);
        // one quadrant: 49 * 255 / 100
        assert_eq!(engine.brightness(0, 0), 124);
        assert_eq!(engine.brightness(159, 119), 124);
        // four of five columns: (100 - 10) * 255 / 100
        assert_eq!(engine.brightness(1, 60), 229);
    }

    #[test]
    fn oversized_quotient_wraps() {
        let mut raster = Raster::new();
        raster.fill();
        let doubled = Kernel::new(
            [
                [2, 4, 8, 4, 2],
                [4, 8, 16, 8, 4],
                [8, 16, 32, 16, 8],
                [4, 8, 16, 8, 4],
                [2, 4, 8, 4, 2],
            ],
            100,
        );
        let engine = Engine::with_kernel(&raster, doubled);
        // 255 * 200 / 100 = 510, which narrows to 510 - 256
        assert_eq!(engine.brightness(80, 60), 254);
        assert_eq!(engine.kernel().weight_sum(), 200);
    }

    struct Counter(usize);

    impl DisplaySink for Counter {
        fn write(&mut self, _word: u32) {
            self.0 += 1;
        }
    }

    #[test]
    fn render_writes_every_pixel_once() {
        let mut counter = Counter(0);
        render(PointList::new(&[5, 5]), &mut counter);
        assert_eq!(counter.0, PIXEL_COUNT);
    }
}
