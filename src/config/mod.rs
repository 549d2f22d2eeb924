use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Page-level display limits. These are rendering caps, not store queries:
/// pages fetch whole collections and truncate locally.
#[derive(Debug, Deserialize, Clone)]
pub struct ContentConfig {
    pub home_news_count: usize,
    pub recent_placements: usize,
    pub recent_testimonials: usize,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .set_default("database.url", "sqlite://campanile.db")?
            .set_default("database.max_connections", 10)?
            .set_default("content.home_news_count", 3)?
            .set_default("content.recent_placements", 8)?
            .set_default("content.recent_testimonials", 4)?
            // Add config file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (with CAMPANILE__ prefix, double underscore separates levels)
            .add_source(Environment::with_prefix("CAMPANILE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite://campanile.db".to_string(),
                max_connections: 10,
            },
            content: ContentConfig::default(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            home_news_count: 3,
            recent_placements: 8,
            recent_testimonials: 4,
        }
    }
}
