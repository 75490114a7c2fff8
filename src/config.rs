//! Environment-based configuration.

/// Runtime configuration loaded from the process environment.
pub struct Config {
    /// Connection URL for the backing store.
    pub database_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")?,
        })
    }
}
