use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaygroundError {
    #[error("A file named \"{0}\" already exists")]
    DuplicateName(String),

    #[error("\"{0}\" is a default file and cannot be renamed or deleted")]
    ProtectedFile(String),

    #[error("No file named \"{0}\"")]
    NotFound(String),

    #[error("The \"{0}\" tab cannot be closed")]
    TabNotClosable(String),

    #[error("Invalid file name: {0}")]
    InvalidName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),
}

/// Convenience type alias for Results with PlaygroundError
pub type Result<T> = std::result::Result<T, PlaygroundError>;
