use crate::{Error, Result, Stagnation};

/// Construction-time settings of a [`crate::Life`].
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// Number of column bands a step is split into; 1 is sequential.
    pub workers: usize,
    /// Consecutive repeats tolerated before the field is reseeded.
    pub stagnation_threshold: u32,
    /// `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            workers: 1,
            stagnation_threshold: Stagnation::DEFAULT_THRESHOLD,
            seed: None,
        }
    }
}

impl Config {
    pub const DEFAULT_WIDTH: usize = 100;
    pub const DEFAULT_HEIGHT: usize = 70;

    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_stagnation_threshold(mut self, threshold: u32) -> Self {
        self.stagnation_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.width.checked_mul(self.height).is_none() {
            return Err(Error::Config(format!(
                "{}x{} grid is too large",
                self.width, self.height
            )));
        }
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!(
                "{}x{} grid has no cells",
                self.width, self.height
            )));
        }
        if self.workers == 0 {
            return Err(Error::Config("at least one worker is required".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!((config.width, config.height), (100, 70));
        assert_eq!(config.workers, 1);
        assert_eq!(config.stagnation_threshold, 60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_settings() {
        assert!(Config::new(0, 10).validate().is_err());
        assert!(Config::new(10, 0).validate().is_err());
        assert!(Config::new(10, 10).with_workers(0).validate().is_err());
        assert!(Config::new(1, 1).with_workers(8).validate().is_ok());
        assert!(Config::new(usize::MAX, 3).validate().is_err());
    }
}
