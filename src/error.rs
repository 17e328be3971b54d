use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("Error: could not read embed config: {0}")]
    Config(#[from] figment::Error),
    #[error("Error: invalid embed dimension `{field}`: {reason}")]
    InvalidDimension {
        field: &'static str,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, EmbedError>;
