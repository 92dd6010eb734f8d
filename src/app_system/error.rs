use thiserror::Error;

/// Errors raised while configuring, starting, or stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Actor task failed: {0}")]
    ActorTask(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
