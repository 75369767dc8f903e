//! Server-side application settings.
//!
//! [`init`] reads [`RollcallConfig`] once at startup from the file named by
//! `ROLLCALL_CONFIG` (default `rollcall.toml`). A missing file means defaults;
//! an unreadable or malformed one is an error.

use std::sync::OnceLock;

use records::RollcallConfig;

static CONFIG: OnceLock<RollcallConfig> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

fn config_path() -> String {
    std::env::var("ROLLCALL_CONFIG").unwrap_or_else(|_| RollcallConfig::filename().to_string())
}

/// Load a config file; a file that does not exist yields the defaults.
pub fn read_config(path: &str) -> Result<RollcallConfig, SettingsError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("{path} not found, using default settings");
            return Ok(RollcallConfig::default());
        }
        Err(source) => {
            return Err(SettingsError::Read {
                path: path.to_string(),
                source,
            })
        }
    };
    RollcallConfig::from_toml(&text).map_err(|source| SettingsError::Parse {
        path: path.to_string(),
        source,
    })
}

/// Load the settings for this process. Later calls keep the first value.
pub fn init() -> Result<&'static RollcallConfig, SettingsError> {
    dotenvy::dotenv().ok();
    let config = read_config(&config_path())?;
    Ok(CONFIG.get_or_init(|| config))
}

/// Settings loaded by [`init`], or the defaults if it never ran.
pub fn config() -> &'static RollcallConfig {
    CONFIG.get_or_init(RollcallConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let config = read_config("/nonexistent/rollcall.toml").unwrap();
        assert_eq!(config, RollcallConfig::default());
    }
}
