//! Configuration loading functionality.
//!
//! This module loads the payroll configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PayrollConfig;

/// Loads the payroll configuration from a YAML file.
///
/// # Arguments
///
/// * `path` - Path to the configuration file (e.g., "./config/payroll.yaml")
///
/// # Returns
///
/// Returns the parsed [`PayrollConfig`], or an error if:
/// - The file is missing ([`EngineError::ConfigNotFound`])
/// - The file contains invalid YAML or is missing required fields
///   ([`EngineError::ConfigParseError`])
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::load_payroll_config;
///
/// let config = load_payroll_config("./config/payroll.yaml")?;
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn load_payroll_config<P: AsRef<Path>>(path: P) -> EngineResult<PayrollConfig> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_config_not_found() {
        let result = load_payroll_config("/nonexistent/payroll.yaml");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_shipped_config_file_parses() {
        let config = load_payroll_config("./config/payroll.yaml").unwrap();
        assert_eq!(config.work_schedule.weekend_days.len(), 2);
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let dir = std::env::temp_dir().join("payroll_engine_loader_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.yaml");
        fs::write(&path, "work_schedule: [not, a, map").unwrap();

        let result = load_payroll_config(&path);
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }
}
