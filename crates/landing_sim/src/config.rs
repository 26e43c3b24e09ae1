use crate::error::{Result, SimError};
use std::{env, path::PathBuf};

pub const ENV_OUTPUT_DIR: &str = "LANDING_SIM_OUTPUT_DIR";
const DEFAULT_OUTPUT_DIR: &str = "csv";

/// Where the attempt log is written
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Output directory from the environment, or `csv` when unset or blank.
    pub fn from_env() -> Result<Self> {
        Self::resolve(None)
    }

    /// Picks the output directory: `cli_dir` first, then
    /// `LANDING_SIM_OUTPUT_DIR`, then `csv`. An explicit choice that names an
    /// existing non-directory is rejected.
    pub fn resolve(cli_dir: Option<PathBuf>) -> Result<Self> {
        let explicit = cli_dir.filter(|p| !p.as_os_str().is_empty()).or_else(|| {
            env::var_os(ENV_OUTPUT_DIR)
                .filter(|v| !v.to_string_lossy().trim().is_empty())
                .map(PathBuf::from)
        });

        let output_dir = match explicit {
            Some(path) => ensure_directory(path)?,
            None => PathBuf::from(DEFAULT_OUTPUT_DIR),
        };

        Ok(Self {
            output_dir: Some(output_dir),
        })
    }
}

fn ensure_directory(path: PathBuf) -> Result<PathBuf> {
    if path.exists() && !path.is_dir() {
        return Err(SimError::InvalidConfiguration(format!(
            "Output path is not a directory: {}",
            path.display()
        )));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, ffi::OsStr, sync::Mutex};
    use tempfile::{NamedTempFile, TempDir};

    // Tests in this module mutate the same environment variable.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env<F: FnOnce()>(value: Option<&OsStr>, f: F) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        let orig = env::var_os(ENV_OUTPUT_DIR);

        unsafe {
            match value {
                Some(v) => env::set_var(ENV_OUTPUT_DIR, v),
                None => env::remove_var(ENV_OUTPUT_DIR),
            }
        }

        f();

        unsafe {
            match orig {
                Some(v) => env::set_var(ENV_OUTPUT_DIR, v),
                None => env::remove_var(ENV_OUTPUT_DIR),
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.output_dir.is_none());
    }

    #[test]
    fn test_from_env_unset_uses_csv_dir() {
        with_env(None, || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.output_dir, Some(PathBuf::from("csv")));
        });
    }

    #[test]
    fn test_from_env_with_valid_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        with_env(Some(temp_dir.path().as_os_str()), || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.output_dir, Some(temp_dir.path().to_path_buf()));
        });
    }

    #[test]
    fn test_from_env_with_whitespace_only() {
        with_env(Some(OsStr::new("   \t\n   ")), || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.output_dir, Some(PathBuf::from("csv")));
        });
    }

    #[test]
    fn test_cli_dir_overrides_env() {
        let env_dir = TempDir::new().unwrap();
        let cli_dir = TempDir::new().unwrap();
        with_env(Some(env_dir.path().as_os_str()), || {
            let config = Config::resolve(Some(cli_dir.path().to_path_buf())).unwrap();
            assert_eq!(config.output_dir, Some(cli_dir.path().to_path_buf()));
        });
    }

    #[test]
    fn test_cli_dir_not_yet_created_is_accepted() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("later");
        with_env(None, || {
            let config = Config::resolve(Some(missing.clone())).unwrap();
            assert_eq!(config.output_dir, Some(missing.clone()));
        });
    }

    #[test]
    fn test_cli_dir_rejects_file_path() {
        let file = NamedTempFile::new().unwrap();
        with_env(None, || {
            let result = Config::resolve(Some(file.path().to_path_buf()));
            assert!(matches!(result, Err(SimError::InvalidConfiguration(_))));
        });
    }

    #[test]
    fn test_from_env_rejects_file_path() {
        let file = NamedTempFile::new().unwrap();
        with_env(Some(file.path().as_os_str()), || {
            let result = Config::from_env();
            assert!(matches!(result, Err(SimError::InvalidConfiguration(_))));
        });
    }
}
