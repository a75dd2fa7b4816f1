use crate::config::{self, AdapterConfig};
use std::path::Path;
use std::sync::Arc;

/// Environment variable pointing at the config file
pub const CONFIG_PATH_ENV: &str = "YOBIT_ADAPTER_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.ini";

lazy_static::lazy_static! {
    pub static ref CONFIG: Arc<AdapterConfig> = Arc::new(load_ini());
}

/// Reads $YOBIT_ADAPTER_CONFIG, or config.ini in the working directory
pub fn load_ini() -> AdapterConfig {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_ini_from(&path)
}

/// Falls back to the defaults when the file is absent or broken
pub fn load_ini_from(path: &str) -> AdapterConfig {
    if !Path::new(path).exists() {
        log::debug!("{path} not found, using default adapter config");
        return AdapterConfig::default();
    }
    match config::from_file(path) {
        Ok(config) => {
            log::info!("adapter config loaded from {path}: {config:?}");
            config
        }
        Err(e) => {
            log::warn!("failed loading {path} ({e}), using default adapter config");
            AdapterConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_file_absent() {
        assert_eq!(
            load_ini_from("/nonexistent/config.ini"),
            AdapterConfig::default()
        );
    }

    #[test]
    fn test_defaults_when_file_broken() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[Adapter]\ncurrency_precision = many").unwrap();
        let path = file.path().to_str().unwrap().to_string();
        assert_eq!(load_ini_from(&path), AdapterConfig::default());
    }

    #[test]
    fn test_loaded_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[Adapter]\nplaceholder_order_id = level").unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let loaded = load_ini_from(&path);
        assert_eq!(loaded.placeholder_order_id, "level");
        assert_eq!(loaded.currency_precision, config::DEFAULT_CURRENCY_PRECISION);
    }
}
