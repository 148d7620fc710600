use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// An expected input column is absent. Raised before any transform runs.
    #[error("missing input column: {0}")]
    MissingColumn(String),

    /// The reshape was configured in a way that cannot produce a valid result.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// An attribute name with fewer segments than the decomposition needs.
    #[error("malformed attribute name {name:?}: expected at least 3 segments separated by {separator:?}")]
    MalformedAttribute { name: String, separator: char },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
