use crate::events::AppEvent;
use async_channel::Sender;
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use wardrobe::{BaseBodyConfig, SlotRegistry, SlotsConfig};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Randomize every slot but the outfit when the host activates.
    #[serde(default)]
    pub auto_randomize_on_activate: bool,
    /// Fixed seed for reproducible randomization.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub base_body: Vec<BaseBodyConfig>,
    #[serde(default)]
    pub slots: SlotsConfig,
}

impl Config {
    pub fn registry(&self) -> Result<SlotRegistry, ConfigError> {
        Ok(SlotRegistry::load(&self.base_body, &self.slots)?)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Wardrobe error: {0}")]
    Wardrobe(#[from] wardrobe::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "wardrobe", "dresser").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Reads `path` when it exists, otherwise the built-in wardrobe, then applies
/// `DRESSER_*` environment overrides.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder();
    let builder = if path.exists() {
        builder.add_source(config::File::from(path))
    } else {
        builder.add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ))
    };

    let s = builder
        .add_source(config::Environment::with_prefix("DRESSER").try_parsing(true))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_config() -> Result<Config, ConfigError> {
    load_from(&get_config_path()?)
}

pub fn default_config() -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ))
        .build()?;
    Ok(s.try_deserialize()?)
}

pub fn load_or_setup() -> Result<Config, ConfigError> {
    match load_config() {
        Ok(c) => Ok(c),
        Err(e) => {
            log::warn!("Falling back to the built-in wardrobe: {}", e);
            default_config()
        }
    }
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Sends [`AppEvent::ConfigReload`] whenever the config file is written, created or
/// removed. Returns once the receiving side is gone.
pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    if let Err(e) = watch_config(tx).await {
        log::error!("Config watcher stopped: {}", e);
    }
}

async fn watch_config(tx: Sender<AppEvent>) -> Result<(), ConfigError> {
    let config_path = get_config_path()?;
    let Some(config_dir) = config_path.parent().map(Path::to_path_buf) else {
        return Ok(());
    };
    fs_err::create_dir_all(&config_dir)?;

    let (bridge_tx, bridge_rx) = async_channel::unbounded();
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    // whole directory, so a replaced file is still seen
    watcher.watch(&config_dir, RecursiveMode::NonRecursive)?;

    while let Ok(res) = bridge_rx.recv().await {
        let event = match res {
            Ok(event) => event,
            Err(e) => {
                log::error!("Watch error: {}", e);
                continue;
            }
        };
        let touches_config = matches!(
            event.kind,
            EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
        ) && event.paths.iter().any(|p| p == &config_path);

        if touches_config {
            log::debug!("Config file changed: {:?}", event.kind);
            if tx.send(AppEvent::ConfigReload).await.is_err() {
                break;
            }
        }
    }
    Ok(())
}
