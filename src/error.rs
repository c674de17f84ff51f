use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid time threshold: {0}")]
    InvalidThreshold(String),

    #[error("listener with id `{0}` is already registered")]
    DuplicateListener(String),

    #[error("invalid config: {0}")]
    Config(String),
}
