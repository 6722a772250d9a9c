use thiserror::Error;

#[derive(Error, Debug)]
pub enum MissionError {
    #[error("invalid direction {0:?}: expected one of N, S, E, W")]
    InvalidDirection(String),
    #[error("invalid integer {token:?} for {field}")]
    InvalidInteger { field: &'static str, token: String },
    #[error("input ended before {field} was given")]
    MissingInput { field: &'static str },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
