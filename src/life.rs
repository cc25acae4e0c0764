use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info, warn};

use crate::snapshot::{decode_binary, decode_text, dump_file_name, encode_binary, encode_text};
use crate::{Config, Dispatch, Engine, Grid, Result, Seeder, Stagnation};

/// A running simulation: the field, the engine that advances it, the
/// stagnation watchdog and the snapshot helpers.
pub struct Life {
    grid: Grid,
    engine: Engine,
    seeder: Seeder,
    stagnation: Stagnation,
    last_dump: Option<String>,
}

impl Life {
    /// Creates a randomly seeded field.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::assemble(config, Engine::new(config.workers)?)
    }

    /// Same as [`Life::new`], but partitions are run by `dispatch`.
    pub fn with_dispatch(
        config: &Config,
        dispatch: Box<dyn Dispatch + Send + Sync>,
    ) -> Result<Self> {
        config.validate()?;
        Self::assemble(config, Engine::with_dispatch(config.workers, dispatch)?)
    }

    fn assemble(config: &Config, engine: Engine) -> Result<Self> {
        let mut life = Self {
            grid: Grid::new(config.width, config.height)?,
            engine,
            seeder: Seeder::new(config.seed),
            stagnation: Stagnation::new(config.stagnation_threshold),
            last_dump: None,
        };
        info!(
            width = config.width,
            height = config.height,
            workers = life.engine.workers(),
            "field created"
        );
        life.seed_random();
        Ok(life)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn generation_count(&self) -> u64 {
        self.grid.generation()
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn stagnation(&self) -> &Stagnation {
        &self.stagnation
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y)
    }

    /// Toggling from the outside; the rule is not applied.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        self.grid.set(x, y, alive);
    }

    pub fn seed_random(&mut self) {
        let mut cells = self.blank_cells();
        self.seeder.fill_random(&mut cells);
        self.restart_from(&cells);
        info!(population = self.population(), "seeded randomly");
    }

    pub fn seed_clear(&mut self) {
        let mut cells = self.blank_cells();
        self.seeder.fill_clear(&mut cells);
        self.restart_from(&cells);
        info!("cleared");
    }

    /// Restarts from a dead field with the given cells alive.
    ///
    /// Coordinates wrap around the torus.
    pub fn seed_pattern(&mut self, alive: impl IntoIterator<Item = (usize, usize)>) {
        let (width, height) = self.dimensions();
        let mut cells = self.blank_cells();
        for (x, y) in alive {
            cells[(x % width) * height + y % height] = true;
        }
        self.restart_from(&cells);
        info!(population = self.population(), "seeded from pattern");
    }

    /// Advances one generation and reseeds if the field has stagnated.
    pub fn step(&mut self) -> Result<()> {
        self.engine.step(&mut self.grid)?;
        let generation = self.grid.generation();
        debug!(generation, "advanced");

        let repeated = self.grid.current() == self.grid.two_back();
        if self.stagnation.observe(repeated) {
            info!(
                generation,
                threshold = self.stagnation.threshold(),
                "field stagnated, reseeding"
            );
            self.seed_random();
        }
        Ok(())
    }

    /// Writes the current generation to `dir` as a binary snapshot.
    ///
    /// The `<token>_<timestamp>` part of the name is remembered for
    /// [`Life::reload_last_dump`].
    pub fn dump(&mut self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let token = self.seeder.dump_token();
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let path = dir.as_ref().join(dump_file_name(token, timestamp));
        fs::write(&path, encode_binary(self.grid.current()))?;
        self.last_dump = Some(format!("{token}_{timestamp}"));
        info!(path = %path.display(), generation = self.generation_count(), "dumped");
        Ok(path)
    }

    pub fn last_dump(&self) -> Option<&str> {
        self.last_dump.as_deref()
    }

    /// Reloads the snapshot written by the latest [`Life::dump`] into `dir`.
    ///
    /// Returns `Ok(false)` if nothing was dumped yet or the file is gone.
    pub fn reload_last_dump(&mut self, dir: impl AsRef<Path>) -> Result<bool> {
        let Some(last) = &self.last_dump else {
            return Ok(false);
        };
        let path = dir.as_ref().join(format!("dump_{last}.gol"));
        self.load_binary(path)
    }

    /// Loads a binary snapshot.
    ///
    /// A missing or unreadable file leaves the field untouched and returns
    /// `Ok(false)`. A file holding fewer cells than the field is an error
    /// and also leaves the field untouched.
    pub fn load_binary(&mut self, path: impl AsRef<Path>) -> Result<bool> {
        let Some(data) = read_snapshot(path.as_ref()) else {
            return Ok(false);
        };
        let (width, height) = self.dimensions();
        let cells = decode_binary(&data, width, height)?;
        self.restart_from(&cells);
        info!(path = %path.as_ref().display(), "loaded binary snapshot");
        Ok(true)
    }

    /// Loads a text snapshot; same failure policy as [`Life::load_binary`].
    pub fn load_text(&mut self, path: impl AsRef<Path>) -> Result<bool> {
        let Some(data) = read_snapshot(path.as_ref()) else {
            return Ok(false);
        };
        let (width, height) = self.dimensions();
        let cells = decode_text(&data, width, height)?;
        self.restart_from(&cells);
        info!(path = %path.as_ref().display(), "loaded text snapshot");
        Ok(true)
    }

    /// Writes the current generation as a text snapshot.
    pub fn save_text(&self, path: impl AsRef<Path>) -> Result<()> {
        let (width, height) = self.dimensions();
        fs::write(path, encode_text(self.grid.current(), width, height))?;
        Ok(())
    }

    fn blank_cells(&self) -> Vec<bool> {
        let (width, height) = self.dimensions();
        vec![false; width * height]
    }

    fn restart_from(&mut self, cells: &[bool]) {
        self.grid.fill(cells);
        self.stagnation.reset();
    }
}

fn read_snapshot(path: &Path) -> Option<Vec<u8>> {
    match fs::read(path) {
        Ok(data) => Some(data),
        Err(err) => {
            warn!(path = %path.display(), %err, "snapshot not readable, keeping field");
            None
        }
    }
}
