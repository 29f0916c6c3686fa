use thiserror::Error;

/// Top-level error type used across the entire workspace.
#[derive(Debug, Error)]
pub enum DockError {
    #[error("config error: {0}")]
    Config(String),

    #[error("host error: {0}")]
    Host(String),

    #[error("panel error: {0}")]
    Panel(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = DockError> = std::result::Result<T, E>;
