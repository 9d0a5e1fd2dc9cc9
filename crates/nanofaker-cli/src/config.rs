use std::fs::{OpenOptions, create_dir_all};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "faker.toml";

/// Where installed locale packages live unless configured otherwise.
pub const DEFAULT_LOCALE_DIR: &str = "node_modules";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    TomlDecode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("toml encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
    #[error("{0} already exists")]
    AlreadyExists(PathBuf),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Settings read from `faker.toml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FakerConfig {
    pub locale: String,
    pub seed: Option<u64>,
    pub auto_install_locales: bool,
    pub verbose: bool,
    pub locale_dir: Option<PathBuf>,
}

impl Default for FakerConfig {
    fn default() -> Self {
        Self {
            locale: nanofaker_core::DEFAULT_LOCALE.to_string(),
            seed: None,
            auto_install_locales: false,
            verbose: false,
            locale_dir: None,
        }
    }
}

impl FakerConfig {
    pub fn locale_dir(&self) -> PathBuf {
        self.locale_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOCALE_DIR))
    }
}

/// Read `explicit`, or `faker.toml` in `cwd` when present. A missing default
/// file yields defaults; a missing explicit file is an error.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> ConfigResult<FakerConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = cwd.join(CONFIG_FILE);
            if !candidate.exists() {
                return Ok(FakerConfig::default());
            }
            candidate
        }
    };

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::TomlDecode { path, source })
}

/// Write a config file, refusing to overwrite unless `force`.
pub fn save_config(path: &Path, config: &FakerConfig, force: bool) -> ConfigResult<()> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    let encoded = toml::to_string_pretty(config)?;
    write_bytes_atomic(path, encoded.as_bytes()).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_bytes_atomic(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)?;
    }

    let file_name = path.file_name().map_or_else(
        || CONFIG_FILE.to_string(),
        |name| name.to_string_lossy().into_owned(),
    );
    let tmp_path = path.with_file_name(format!("{file_name}.tmp"));
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    std::fs::rename(&tmp_path, path)
}
