use thiserror::Error;

/// Custom error types for kgcomplete
#[derive(Debug, Error)]
pub enum KgError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid node file: {0}")]
    InvalidNodeFile(String),

    #[error("Invalid field '{0}': expected ID=ENDPOINT")]
    InvalidField(String),

    #[error("Could not create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
