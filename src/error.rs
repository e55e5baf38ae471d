#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("key extract: {0}")]
    KeyExtract(Box<dyn std::error::Error + Send + Sync>),

    #[error("predicate: {0}")]
    Predicate(Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
