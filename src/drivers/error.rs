use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("failed to open serial port {port}: {source}")]
    Open {
        port: String,
        #[source]
        source: serialport::Error,
    },
    #[error("serial read failed: {0}")]
    Read(#[from] std::io::Error),
    #[error("sample window capacity must be greater than zero")]
    InvalidCapacity,
}
