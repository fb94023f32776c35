use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("image element could not be created")]
    ImageUnavailable,
    #[error("failed to load {url}")]
    Failed { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObserverError {
    #[error("browser window not available")]
    NoWindow,
    #[error("intersection observer rejected: {0}")]
    Rejected(String),
}
