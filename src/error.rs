use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid resolution {width}x{height}: both dimensions must be at least 1")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Invalid zoom factor {0}: must be greater than 0")]
    InvalidZoom(f64),

    #[error("Invalid iteration budget {0}: must be greater than 0")]
    InvalidIterationBudget(u32),

    #[error("Generation cancelled")]
    Cancelled,

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
