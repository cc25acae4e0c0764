/// Watches for a field that keeps repeating itself.
///
/// Each observation says whether the newest generation equals the one two
/// steps back (a still life or a period-2 oscillator). Once more than
/// `threshold` observations in a row were equal, the field is considered
/// stagnant.
#[derive(Clone, Debug)]
pub struct Stagnation {
    threshold: u32,
    run: u32,
}

impl Stagnation {
    pub const DEFAULT_THRESHOLD: u32 = 60;

    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            run: 0,
        }
    }

    /// Records one comparison; returns `true` when a reseed is due.
    ///
    /// Every equal comparison extends the run, including the first one
    /// after a reset, so a freshly seeded still life fires on step
    /// `threshold + 1`. The counter is cleared when it fires.
    pub fn observe(&mut self, equal: bool) -> bool {
        if !equal {
            self.reset();
            return false;
        }
        self.run += 1;
        if self.run > self.threshold {
            self.reset();
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.run = 0;
    }

    /// Whether the latest comparison was equal; implied by a non-zero run.
    pub fn previous_equal(&self) -> bool {
        self.run > 0
    }

    /// Consecutive equal observations so far.
    pub fn run(&self) -> u32 {
        self.run
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}

impl Default for Stagnation {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}
