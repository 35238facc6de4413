use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
    pub search: SearchSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub path: String,
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SearchSettings {
    /// Search terms only match when followed by a space, so a term at the
    /// very end of a question is not found. Kept on for compatibility with
    /// existing clients.
    pub trailing_space: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            trailing_space: true,
        }
    }
}

impl Settings {
    /// Reads `.env`, then `trivia.toml` (or the file named by `TRIVIA_CONFIG`),
    /// then `TRIVIA_*` environment variables (`TRIVIA_SERVER__PORT=9000`).
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let file = dotenv::var("TRIVIA_CONFIG").unwrap_or_else(|_| "trivia.toml".to_owned());
        Self::load_from(Path::new(&file))
    }

    pub fn load_from(file: &Path) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database.path", "trivia.db")?
            .set_default("database.run_migrations", true)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("search.trailing_space", true)?
            .add_source(File::from(file).required(false))
            .add_source(
                Environment::with_prefix("TRIVIA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
