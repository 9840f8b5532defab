use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Please enter a use case.")]
    EmptyInput,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown {kind}: '{value}'")]
    UnknownChoice { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
