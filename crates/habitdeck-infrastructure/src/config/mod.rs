use std::path::PathBuf;

use habitdeck_domain::shared::DomainError;

/// Storage key for the full habit list blob.
pub const HABITS_KEY: &str = "my-habits-data";

/// Storage key for the full achievement list blob.
pub const ACHIEVEMENTS_KEY: &str = "my-achievements";

/// Application data directory (`<platform data dir>/habitdeck`).
pub fn data_dir() -> Result<PathBuf, DomainError> {
    dirs::data_dir()
        .map(|dir| dir.join("habitdeck"))
        .ok_or_else(|| {
            DomainError::Infrastructure("Could not resolve platform data directory".to_string())
        })
}

/// Directory for rotated log files.
pub fn log_dir() -> Result<PathBuf, DomainError> {
    Ok(data_dir()?.join("logs"))
}
