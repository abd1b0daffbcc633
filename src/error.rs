use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    #[error("invalid geometry: panel width={width}, span={span}")]
    InvalidGeometry { width: f64, span: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config decode failed: {0}")]
    Config(#[from] serde_json::Error),

    #[error("command channel is closed")]
    ChannelClosed,
}
