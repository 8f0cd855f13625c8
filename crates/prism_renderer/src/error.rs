use thiserror::Error;

/// Configuration problems detected before any ray is traced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Invalid resolution: {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Bucket size must be at least 1 pixel")]
    InvalidBucketSize,

    #[error("Degenerate viewport: {0}")]
    DegenerateViewport(&'static str),
}

pub type RenderResult<T> = Result<T, RenderError>;
