//! Configuration loading.

use osctip_core::config::OsctipConfig;
use osctip_core::error::Result;

use crate::paths::OsctipPaths;

/// Loads `config.toml` from the storage directory.
///
/// A missing file yields the defaults. A malformed file is an error: the
/// config is authored by hand, so a parse failure points at a typo the user
/// needs to see, unlike the data blobs which fail closed.
pub fn load_config(paths: &OsctipPaths) -> Result<OsctipConfig> {
    let path = paths.config_file();

    if !path.exists() {
        return Ok(OsctipConfig::default());
    }

    let content = std::fs::read_to_string(&path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OsctipPaths::resolve(Some(temp_dir.path().to_path_buf())).unwrap();

        assert_eq!(load_config(&paths).unwrap(), OsctipConfig::default());
    }

    #[test]
    fn test_file_values_are_applied() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OsctipPaths::resolve(Some(temp_dir.path().to_path_buf())).unwrap();
        std::fs::write(
            paths.config_file(),
            "response_delay_ms = 10\nrng_seed = 99\n",
        )
        .unwrap();

        let config = load_config(&paths).unwrap();
        assert_eq!(config.response_delay_ms, 10);
        assert_eq!(config.rng_seed, Some(99));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = OsctipPaths::resolve(Some(temp_dir.path().to_path_buf())).unwrap();
        std::fs::write(paths.config_file(), "response_delay_ms = \"soon\"").unwrap();

        assert!(load_config(&paths).is_err());
    }
}
