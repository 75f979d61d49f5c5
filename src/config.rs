use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::anim::Easing;
use crate::events::AppEvent;
use crate::gui::theme::ColorSpec;
use crate::gui::{DEFAULT_OPACITY, dial, ring};
use crate::validate;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DialSettings {
    pub radius: f64,
    pub blob_radius: f64,
    pub blob_width: f64,
    pub stroke_width: f64,
    pub color: ColorSpec,
    pub opacity: f64,
    pub initial_value: f64,
    pub maximum_value: f64,
    pub duration_ms: u64,
    pub easing: Easing,
    /// Absolute pointer-to-angle reference point. Unset means the widget's
    /// own hub, which is right for pointer events in widget coordinates.
    pub center_x: Option<f64>,
    pub center_y: Option<f64>,
}

impl Default for DialSettings {
    fn default() -> Self {
        Self {
            radius: dial::DEFAULT_RADIUS,
            blob_radius: dial::DEFAULT_BLOB_RADIUS,
            blob_width: dial::DEFAULT_BLOB_WIDTH,
            stroke_width: dial::DEFAULT_TRACK_WIDTH,
            color: ColorSpec::default(),
            opacity: DEFAULT_OPACITY,
            initial_value: 0.0,
            maximum_value: dial::DEFAULT_MAXIMUM_VALUE,
            duration_ms: dial::DEFAULT_DURATION_MS,
            easing: Easing::EaseOut,
            center_x: None,
            center_y: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RingSettings {
    pub radius: f64,
    pub stroke_width: f64,
    pub color: ColorSpec,
    pub opacity: f64,
    /// Percent of a full turn, on a scale of 100.
    pub progress: f64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Default for RingSettings {
    fn default() -> Self {
        Self {
            radius: ring::DEFAULT_RADIUS,
            stroke_width: ring::DEFAULT_STROKE_WIDTH,
            color: ColorSpec::default(),
            opacity: DEFAULT_OPACITY,
            progress: ring::DEFAULT_PROGRESS,
            duration_ms: ring::DEFAULT_DURATION_MS,
            easing: Easing::EaseInOut,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Settings {
    pub dial: DialSettings,
    pub ring: RingSettings,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "arcdial", "arcdial").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Settings, ConfigError> {
    let config_path = get_config_path()?;

    let raw = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("ARCDIAL"))
        .build()?;

    // Opacity is checked before deserialization so a bad value warns with
    // the offending widget and property named, instead of a serde error.
    for (component, key) in [("dial", "dial.opacity"), ("ring", "ring.opacity")] {
        let value = raw.get::<config::Value>(key).ok();
        if let Err(e) = validate::validate_opacity(component, "opacity", value.as_ref()) {
            if cfg!(debug_assertions) {
                log::warn!("{}", e);
            } else {
                log::debug!("{}", e);
            }
        }
    }

    Ok(raw.try_deserialize()?)
}

/// Writes the bundled demo config on first run, then loads whatever is on
/// disk. Any load failure falls back to built-in defaults; configuration
/// problems are never fatal.
pub fn load_or_setup() -> Settings {
    match write_default_config() {
        Ok(path) => log::debug!("Using config at {}", path.display()),
        Err(e) => log::warn!("Could not write default config: {}", e),
    }

    match load_config() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Falling back to default settings: {}", e);
            Settings::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
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

use async_channel::Sender;

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    if let Err(e) = watch_config(tx).await {
        log::error!("Config watcher error: {}", e);
    }
}

async fn watch_config(tx: Sender<AppEvent>) -> anyhow::Result<()> {
    let config_path = get_config_path()?;
    let config_dir = config_path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Config path has no parent directory"))?
        .to_path_buf();

    fs_err::create_dir_all(&config_dir)?;

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    watcher.watch(&config_dir, RecursiveMode::NonRecursive)?;

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_widget_constants() {
        let settings = Settings::default();

        assert_eq!(settings.dial.radius, 100.0);
        assert_eq!(settings.dial.blob_radius, 15.0);
        assert_eq!(settings.dial.blob_width, 5.0);
        assert_eq!(settings.dial.stroke_width, 7.0);
        assert_eq!(settings.dial.opacity, 0.2);
        assert_eq!(settings.dial.initial_value, 0.0);
        assert_eq!(settings.dial.maximum_value, 25.0);
        assert_eq!(settings.dial.duration_ms, 2000);
        assert_eq!(settings.dial.easing, Easing::EaseOut);
        assert_eq!(settings.dial.center_x, None);

        assert_eq!(settings.ring.radius, 80.0);
        assert_eq!(settings.ring.stroke_width, 10.0);
        assert_eq!(settings.ring.progress, 25.0);
        assert_eq!(settings.ring.duration_ms, 200);
        assert_eq!(settings.ring.easing, Easing::EaseInOut);
    }

    #[test]
    fn test_bundled_config_parses() {
        let settings: Settings = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.dial.initial_value, 15.0);
        assert_eq!(settings.dial.maximum_value, 25.0);
        assert_eq!(settings.ring.progress, 25.0);
        assert_eq!(settings.dial.color.as_str(), "cyan");
    }

    #[test]
    fn test_partial_config_fills_in_defaults() {
        let settings: Settings = config::Config::builder()
            .add_source(config::File::from_str(
                "[dial]\ninitial_value = 3.0\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.dial.initial_value, 3.0);
        assert_eq!(settings.dial.radius, 100.0);
        assert_eq!(settings.ring.progress, 25.0);
    }
}
