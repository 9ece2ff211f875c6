use std::string::ToString;

use ::config::{Config, ConfigError};
use once_cell::sync::Lazy;
use rocket::serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct DbConfig {
    pub location: String,
}

/// config properties for how this server presents itself to the outside world
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
    /// the public base url rendered into brain share links
    #[serde(rename = "baseurl")]
    pub base_url: String,
}

/// config properties for the whole of this application
#[derive(Deserialize, Clone)]
pub struct SecondBrainConfig {
    pub database: DbConfig,
    pub server: ServerConfig,
}

/// Parses the config file located at ./SecondBrain.toml, if it exists.
/// If this fails to parse the file, the application will panic
pub fn parse_config() -> SecondBrainConfig {
    let builder = Config::builder()
        .add_source(::config::File::with_name("./SecondBrain.toml"))
        .build();
    // some errors are fine, such as not found
    if let Err(ConfigError::Foreign(e)) = builder {
        let message = e.to_string();
        if message.contains("not found") {
            log::warn!("No config file found. Continuing startup...");
            return SB_CONFIG_DEFAULT.clone();
        }
        panic!("Failed to parse config file. Exception is {e}");
        // basically everything else is unrecoverable, though
    } else if let Err(e) = builder {
        log::error!("Failed to parse config file. Exception is {e}");
        panic!("Failed to parse config file. Exception is {e}");
    }
    let settings = builder.unwrap();
    settings
        .try_deserialize()
        .unwrap_or(SB_CONFIG_DEFAULT.clone())
}

/// global variable for config, that way it doesn't need to be repeatedly parsed
pub static SECOND_BRAIN_CONFIG: Lazy<SecondBrainConfig> = Lazy::new(parse_config);
static SB_CONFIG_DEFAULT: Lazy<SecondBrainConfig> = Lazy::new(|| SecondBrainConfig {
    database: DbConfig {
        location: "./db.sqlite".to_string(),
    },
    server: ServerConfig {
        base_url: "http://localhost:8000".to_string(),
    },
});
