use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid window size: {width}x{height}")]
    InvalidWindowSize { width: f32, height: f32 },
}
