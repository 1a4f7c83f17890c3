use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to build render thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to write image")]
    Io(#[from] io::Error),
}
