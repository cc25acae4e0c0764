use std::panic::{self, AssertUnwindSafe};
use std::thread;

use crate::{Error, Result};

/// Unit of work handed to a dispatcher; borrows the step's buffers.
pub type Task<'a> = Box<dyn FnOnce() + Send + 'a>;

/// Runs a batch of independent tasks and waits for all of them.
pub trait Dispatch {
    /// Blocks until every task has finished.
    ///
    /// A task that panics is reported as [`Error::WorkerFailure`] with its
    /// index in `tasks`; the remaining tasks are still joined.
    fn run_all(&self, tasks: Vec<Task<'_>>) -> Result<()>;
}

/// Dispatcher on top of [`std::thread::scope`].
///
/// A single task runs on the calling thread.
#[derive(Clone, Copy, Default)]
pub struct ScopedThreads;

impl Dispatch for ScopedThreads {
    fn run_all(&self, tasks: Vec<Task<'_>>) -> Result<()> {
        if tasks.len() <= 1 {
            for (partition, task) in tasks.into_iter().enumerate() {
                panic::catch_unwind(AssertUnwindSafe(task))
                    .map_err(|_| Error::WorkerFailure { partition })?;
            }
            return Ok(());
        }

        let failed = thread::scope(|s| {
            let handles = tasks
                .into_iter()
                .map(|task| s.spawn(task))
                .collect::<Vec<_>>();
            handles
                .into_iter()
                .enumerate()
                .filter_map(|(i, handle)| handle.join().err().map(|_| i))
                .collect::<Vec<_>>()
        });
        match failed.first() {
            Some(&partition) => Err(Error::WorkerFailure { partition }),
            None => Ok(()),
        }
    }
}
