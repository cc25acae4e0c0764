mod dispatch;

use std::ops::Range;

use tracing::{trace, warn};

use crate::rule::{count_neighbors, next_state};
use crate::{Error, Grid, Result};

pub use dispatch::{Dispatch, ScopedThreads, Task};

/// Splits `0..width` into `workers` contiguous, disjoint column bands.
///
/// Every band gets `width / workers` columns and the last one also takes
/// the remainder, so the bands always cover the whole field. The number
/// of bands is clamped to `1..=width`.
pub fn partitions(width: usize, workers: usize) -> Vec<Range<usize>> {
    let parts = workers.clamp(1, width.max(1));
    let load = width / parts;
    (0..parts)
        .map(|i| {
            let start = i * load;
            let end = if i + 1 == parts { width } else { start + load };
            start..end
        })
        .collect()
}

/// Advances a [`Grid`] one generation at a time, spreading the columns
/// over a fixed number of workers.
pub struct Engine {
    workers: usize,
    dispatch: Box<dyn Dispatch + Send + Sync>,
}

impl Engine {
    pub fn new(workers: usize) -> Result<Self> {
        Self::with_dispatch(workers, Box::new(ScopedThreads))
    }

    /// Use a custom dispatcher (e.g. an external thread pool).
    pub fn with_dispatch(
        workers: usize,
        dispatch: Box<dyn Dispatch + Send + Sync>,
    ) -> Result<Self> {
        if workers == 0 {
            return Err(Error::Config("at least one worker is required".into()));
        }
        Ok(Self { workers, dispatch })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Computes the next generation and publishes it once every band is done.
    ///
    /// Workers read only the generation that was current when the call
    /// started and write only their own band of the scratch buffer.
    pub fn step(&self, grid: &mut Grid) -> Result<()> {
        let (width, height) = grid.dimensions();
        let bands = partitions(width, self.workers);
        let dispatch = &*self.dispatch;

        let result = grid.advance(|src, next| {
            let mut rest = next;
            let mut tasks: Vec<Task<'_>> = Vec::with_capacity(bands.len());
            for columns in bands {
                let (band, tail) =
                    std::mem::take(&mut rest).split_at_mut(columns.len() * height);
                rest = tail;
                tasks.push(Box::new(move || {
                    evolve_band(src, width, height, columns, band);
                }));
            }
            dispatch.run_all(tasks)
        });

        match &result {
            Ok(()) => trace!(
                generation = grid.generation(),
                population = grid.population(),
                workers = self.workers(),
                "step published"
            ),
            Err(err) => warn!(%err, "step abandoned"),
        }
        result
    }
}

/// Writes the next state of `columns` into `dst`, which holds exactly
/// those columns.
fn evolve_band(
    src: &[bool],
    width: usize,
    height: usize,
    columns: Range<usize>,
    dst: &mut [bool],
) {
    debug_assert_eq!(dst.len(), columns.len() * height);
    for (x, column) in columns.zip(dst.chunks_exact_mut(height)) {
        for (y, cell) in column.iter_mut().enumerate() {
            let neighbors = count_neighbors(src, width, height, x, y);
            *cell = next_state(src[x * height + y], neighbors);
        }
    }
}
