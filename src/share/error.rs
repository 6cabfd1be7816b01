use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Failed to launch share target `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Share target I/O error: {0}")]
    Io(#[from] std::io::Error),
}
