#![warn(clippy::all)]

mod engine;
mod error;
mod grid;
mod life;
mod rule;
mod seeder;
mod snapshot;
mod stagnation;
mod utils;

pub use engine::{partitions, Dispatch, Engine, ScopedThreads, Task};
pub use error::{Error, Result};
pub use grid::Grid;
pub use life::Life;
pub use rule::{count_neighbors, next_state, wrap, NEIGHBOR_OFFSETS};
pub use seeder::{Seeder, ALIVE_RANGE, ALIVE_VALUE};
pub use snapshot::{
    decode_binary, decode_text, dump_file_name, encode_binary, encode_text, TEXT_ALIVE,
    TEXT_DEAD,
};
pub use stagnation::Stagnation;
pub use utils::Config;
