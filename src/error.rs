use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostfactsError {
    #[error("Failed to probe '{path}': {source}")]
    Probe {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HostfactsError>;
