use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostProcessingError {
    #[error("landing route is not defined for provider '{provider_code}'")]
    MissingLandingRoute { provider_code: String },
    #[error("a handler is already registered for provider '{0}'")]
    DuplicateProvider(String),
    #[error("the global dispatcher has already been installed")]
    AlreadyInstalled,
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Logger error: {0}")]
    Logger(String),
}

pub type Result<T> = std::result::Result<T, PostProcessingError>;
