use std::net::SocketAddr;
use std::path::Path;

use crate::config::schema::Config;
use crate::error::ConfigError;

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content)
}

pub fn load_config_from_str(content: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_json::from_str(content)?;

    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.upload_directory.as_os_str().is_empty() {
        return Err(ConfigError::Validation {
            message: "uploadDirectory must not be empty".to_string(),
        });
    }

    if config.database_path.as_os_str().is_empty() {
        return Err(ConfigError::Validation {
            message: "databasePath must not be empty".to_string(),
        });
    }

    if let Err(e) = config.bind_address.parse::<SocketAddr>() {
        return Err(ConfigError::Validation {
            message: format!("Invalid bindAddress '{}': {}", config.bind_address, e),
        });
    }

    Ok(())
}
