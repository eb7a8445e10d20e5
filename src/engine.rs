//! Dedicated worker pool for generation passes.

use log::debug;

use crate::{
    cancellation::{CancellationChecker, NeverCancel},
    error::Result,
    generate::{self, FractalParameters, Generation},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Worker threads for the grid pass. 0 falls back to the number of CPUs.
    pub threads: usize,
}

impl EngineConfig {
    pub fn with_threads(threads: usize) -> Self {
        Self { threads }
    }

    fn thread_count(&self) -> usize {
        if self.threads == 0 {
            num_cpus::get()
        } else {
            self.threads
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threads: num_cpus::get(),
        }
    }
}

pub struct Engine {
    pool: rayon::ThreadPool,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        let threads = config.thread_count();
        debug!("starting engine with {} worker threads", threads);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("escape-time-{}", index))
            .build()?;
        Ok(Self { pool })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn generate(&self, parameters: &FractalParameters) -> Result<Generation> {
        self.generate_cancellable(parameters, &NeverCancel)
    }

    pub fn generate_cancellable(
        &self,
        parameters: &FractalParameters,
        checker: &impl CancellationChecker,
    ) -> Result<Generation> {
        self.pool
            .install(|| generate::generate_cancellable(parameters, checker))
    }
}
