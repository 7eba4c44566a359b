use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::{DemoError, Result};

pub fn load_from_path<P: AsRef<Path>>(p: P) -> Result<Config> {
    let txt = fs::read_to_string(p)
        .map_err(|e| DemoError::Config(format!("Failed to read config file: {e}")))?;
    let cfg: Config = toml::from_str(&txt)
        .map_err(|e| DemoError::Config(format!("Failed to parse config: {e}")))?;

    validate_config(&cfg)?;

    Ok(cfg)
}

fn validate_config(cfg: &Config) -> Result<()> {
    if cfg.telemetry.trace_enabled {
        if cfg.telemetry.trace_endpoint.is_empty() {
            return Err(DemoError::Config(
                "trace_endpoint must not be empty when trace export is enabled".to_string(),
            ));
        }
        if !cfg.telemetry.trace_path.starts_with('/') {
            return Err(DemoError::Config(format!(
                "trace_path must start with '/': {}",
                cfg.telemetry.trace_path
            )));
        }
    }

    Ok(())
}
