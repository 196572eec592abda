use std::path::Path;

use crate::config::schema::ArchivingConfig;
use crate::error::ConfigError;

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ArchivingConfig, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content)
}

pub fn load_config_from_str(content: &str) -> Result<ArchivingConfig, ConfigError> {
    let config: ArchivingConfig = serde_json::from_str(content)?;

    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &ArchivingConfig) -> Result<(), ConfigError> {
    if config.max_age_days < 1 {
        return Err(ConfigError::Validation {
            message: format!("max_age_days must be at least 1, got {}", config.max_age_days),
        });
    }

    if config.sweep_interval_secs < 1 {
        return Err(ConfigError::Validation {
            message: "sweep_interval_secs must be at least 1".to_string(),
        });
    }

    Ok(())
}
