use crate::models::types::RoomNumber;
use thiserror::Error;

pub type AppResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// No room carries this number
    #[error("room {0} not found")]
    RoomNotFound(RoomNumber),

    /// Check-in on a room that already has a guest
    #[error("room {0} is already occupied")]
    RoomAlreadyOccupied(RoomNumber),

    /// Check-out on a room without a guest
    #[error("room {0} is not occupied")]
    RoomNotOccupied(RoomNumber),
}

#[derive(Debug, Error)]
pub enum ConfigErrorKind {
    #[error("failed to read file: {0}")]
    Read(std::io::Error),

    #[error("failed to parse file: {0}")]
    Parse(toml::de::Error),

    #[error("invalid environment variable {0}: {1}")]
    InvalidEnv(String, String),

    #[error("invalid inventory: {0}")]
    Inventory(String),
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("invalid configuration in {path}: {source}")]
    Config {
        path: std::path::PathBuf,
        #[source]
        source: ConfigErrorKind,
    },

    #[error("invalid configuration: {0}")]
    Env(#[source] ConfigErrorKind),
}
