use thiserror::Error;

#[derive(Error, Debug)]
pub enum GardenError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
