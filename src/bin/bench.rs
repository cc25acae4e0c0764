use std::time::Instant;

use anyhow::Context;
use torus_life::{Config, Life};
use tracing_subscriber::EnvFilter;

const WIDTH: usize = 1024;
const HEIGHT: usize = 768;
const STEPS: u32 = 200;
const SEED: u64 = 42;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let mut reference = None;
    for workers in [1, 2, 4, 8] {
        let config = Config::new(WIDTH, HEIGHT)
            .with_workers(workers)
            .with_seed(SEED);
        let mut life = Life::new(&config).context("building field")?;

        let timer = Instant::now();
        for _ in 0..STEPS {
            life.step()
                .with_context(|| format!("stepping with {workers} workers"))?;
        }
        let elapsed = timer.elapsed();
        println!(
            "workers={workers}: {STEPS} steps in {elapsed:?} ({:?}/step), population {}",
            elapsed / STEPS,
            life.population()
        );

        let cells = life.grid().current().to_vec();
        match &reference {
            None => reference = Some(cells),
            Some(expected) => anyhow::ensure!(
                *expected == cells,
                "{workers} workers diverged from the sequential run"
            ),
        }
    }
    Ok(())
}
