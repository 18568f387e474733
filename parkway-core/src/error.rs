use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid park catalog: {0}")]
    InvalidCatalog(String),
    #[error("Unknown attraction: {0}")]
    AttractionNotFound(String),
    #[error("No route between {start} and {end}")]
    NoPath { start: String, end: String },
    #[error("Wait-time feed unavailable: {0}")]
    FeedUnavailable(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
