/// Evenly spaced samples over the half-open interval `[start, stop)`.
pub struct Arange {
    start: f64,
    step: f64,
    index: usize,
    len: usize,
}

impl Arange {
    pub fn new(start: f64, stop: f64, step: f64) -> Self {
        // Same sample count as numpy.arange: ceil((stop - start) / step)
        let len = if stop > start && step > 0. {
            ((stop - start) / step).ceil() as usize
        } else {
            0
        };

        Arange {
            start,
            step,
            index: 0,
            len,
        }
    }
}

impl Iterator for Arange {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.index >= self.len {
            None
        } else {
            let i = self.index;
            self.index += 1;
            Some(self.start + self.step * i as f64)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Arange {}

/// The discretized range a linguistic variable is sampled over
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Universe {
    start: f64,
    stop: f64,
    step: f64,
}

impl Universe {
    /// Upper bound on the number of samples a single universe may hold
    pub const MAX_SAMPLES: usize = 1_000_000;

    /// Sample count of `[start, stop)` at `step`, before any conversion to
    /// `usize`. Infinite when the span overflows.
    pub(crate) fn sample_count(start: f64, stop: f64, step: f64) -> f64 {
        if stop > start {
            ((stop - start) / step).ceil()
        } else {
            0.
        }
    }

    pub(crate) fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    /// Exclusive upper bound
    pub fn stop(&self) -> f64 {
        self.stop
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn samples(&self) -> Arange {
        Arange::new(self.start, self.stop, self.step)
    }

    pub fn len(&self) -> usize {
        self.samples().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[test]
fn test_arange() {
    let samples: Vec<f64> = Arange::new(0., 5., 1.).collect();

    assert_eq!(samples, vec![0., 1., 2., 3., 4.]);

    let samples: Vec<f64> = Arange::new(0., 26., 0.1).collect();

    assert_eq!(samples.len(), 260);
    assert_eq!(samples[0], 0.);
    assert!((samples[259] - 25.9).abs() < 1e-9);

    // Partial last step is still sampled
    assert_eq!(Arange::new(0., 2.5, 1.).collect::<Vec<_>>(), vec![0., 1., 2.]);
}

#[test]
fn test_empty_universe() {
    assert_eq!(Arange::new(3., 3., 1.).len(), 0);
    assert_eq!(Arange::new(4., 3., 1.).len(), 0);
    assert!(Universe::new(7., 7., 0.1).is_empty());
    assert_eq!(Universe::new(0., 50., 1.).len(), 50);
}

#[test]
fn test_sample_count() {
    assert_eq!(Universe::sample_count(0., 26., 0.1), 260.);
    assert_eq!(Universe::sample_count(5., 5., 0.1), 0.);
    assert_eq!(Universe::sample_count(-1e308, 1e308, 0.1), f64::INFINITY);
}
