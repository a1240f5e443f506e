use filters::DEFAULT_EXCLUDED_DIRS;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default name of the backup subfolder created under each destination base.
pub const DEFAULT_BACKUP_SUBDIRECTORY: &str = "wsmirror";

/// One run's configuration, loaded from a YAML file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Root namespace containing the source directories to mirror.
    pub source_root: PathBuf,
    /// Names of top-level directories mirrored to the secondary destination
    /// instead of the cloud one.
    #[serde(default)]
    pub large_file_directory_names: Vec<String>,
    /// Base path of the cloud-synced destination.
    pub cloud: PathBuf,
    /// Base path of the secondary (NAS) destination; the platform Downloads
    /// folder is used when absent.
    #[serde(default)]
    pub nas: Option<PathBuf>,
    /// Directory basenames whose subtrees are never mirrored.
    #[serde(default = "default_exclude_directories")]
    pub exclude_directories: Vec<String>,
    /// Subfolder created under each destination base to hold the mirrors.
    #[serde(default = "default_backup_subdirectory")]
    pub backup_subdirectory: String,
}

impl Config {
    /// Loads and parses the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn default_exclude_directories() -> Vec<String> {
    DEFAULT_EXCLUDED_DIRS
        .iter()
        .map(|name| (*name).to_string())
        .collect()
}

fn default_backup_subdirectory() -> String {
    DEFAULT_BACKUP_SUBDIRECTORY.to_string()
}

/// Error produced while loading the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration {}: {source}", path.display())]
    Read {
        /// The configuration file path.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// The configuration file is not valid YAML for [`Config`].
    #[error("failed to parse configuration {}: {source}", path.display())]
    Parse {
        /// The configuration file path.
        path: PathBuf,
        /// The underlying deserialization failure.
        source: serde_yaml::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_configuration() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.yml");
        fs::write(
            &path,
            "source_root: /srv/workspace\n\
             large_file_directory_names: [videos, datasets]\n\
             cloud: /mnt/cloud\n\
             nas: /mnt/nas\n\
             exclude_directories: [.venv]\n\
             backup_subdirectory: mirrors\n",
        )
        .expect("write config");

        let config = Config::load(&path).expect("load");
        assert_eq!(config.source_root, PathBuf::from("/srv/workspace"));
        assert_eq!(config.large_file_directory_names, vec!["videos", "datasets"]);
        assert_eq!(config.cloud, PathBuf::from("/mnt/cloud"));
        assert_eq!(config.nas, Some(PathBuf::from("/mnt/nas")));
        assert_eq!(config.exclude_directories, vec![".venv"]);
        assert_eq!(config.backup_subdirectory, "mirrors");
    }

    #[test]
    fn applies_defaults_for_optional_keys() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.yml");
        fs::write(&path, "source_root: /srv/workspace\ncloud: /mnt/cloud\n")
            .expect("write config");

        let config = Config::load(&path).expect("load");
        assert!(config.nas.is_none());
        assert!(config.large_file_directory_names.is_empty());
        assert_eq!(config.exclude_directories.len(), DEFAULT_EXCLUDED_DIRS.len());
        assert_eq!(config.backup_subdirectory, DEFAULT_BACKUP_SUBDIRECTORY);
    }

    #[test]
    fn rejects_unknown_keys() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.yml");
        fs::write(
            &path,
            "source_root: /srv/workspace\ncloud: /mnt/cloud\nbogus: true\n",
        )
        .expect("write config");

        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn reports_missing_file() {
        let missing = Path::new("/nonexistent/config.yml");
        assert!(matches!(
            Config::load(missing),
            Err(ConfigError::Read { .. })
        ));
    }
}
