//! Loading calculator configuration from disk.

use std::path::Path;

use anyhow::{Context, Result};
use gb_sequence::CalculatorConfig;

/// Read a JSON calculator configuration.
pub fn load_config(path: impl AsRef<Path>) -> Result<CalculatorConfig> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = CalculatorConfig::from_json(&json)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Resolve the configuration: a config file wins over the `--dims` flag.
pub fn resolve_config(path: Option<&Path>, n_dims: usize) -> Result<CalculatorConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(CalculatorConfig::with_dimensions(n_dims)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "n_dims": 14 }}"#).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.n_dims, 14);
    }

    #[test]
    fn test_load_config_rejects_zero_dimensions() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "n_dims": 0 }}"#).unwrap();

        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_flag_used_without_file() {
        let config = resolve_config(None, 9).unwrap();
        assert_eq!(config.n_dims, 9);
    }
}
