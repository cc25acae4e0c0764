/// Errors produced by the simulation core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Grid dimensions or worker count are unusable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Writing a snapshot failed.
    #[error("snapshot i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// A snapshot holds fewer cells than the grid.
    #[error("snapshot truncated: expected {expected} cells, found {found}")]
    Truncated { expected: usize, found: usize },

    /// A partition task panicked; the step was not published.
    #[error("worker for partition {partition} failed")]
    WorkerFailure { partition: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
