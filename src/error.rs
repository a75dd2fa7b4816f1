use thiserror::Error;

/// Every failure is deterministic for a given input, nothing here is worth retrying
#[derive(Debug, Error)]
pub enum Error {
    /// pair string did not split into exactly two components
    #[error("cannot parse currency pair: {0}")]
    Format(String),
    /// required key absent from a raw record
    #[error("missing field `{0}`")]
    MissingField(String),
    /// numeric or timestamp field could not be parsed
    #[error("cannot parse `{field}` from {value:?}")]
    Parse { field: String, value: String },
    #[error("config error: {0}")]
    Config(#[from] ini::Error),
    #[error("invalid config value for `{key}`: {value:?}")]
    InvalidConfig { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn parse(field: &str, value: impl ToString) -> Self {
        Error::Parse {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}
