//! 配置服务

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use month_calendar_core::{EmptySubmit, WeekStart, WidgetOptions};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::view::theme::Theme;

use super::paths::{default_data_file, default_log_file};

/// 应用配置（对应 `config.json`，缺省字段取默认值）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Theme,
    pub week_start: WeekStart,
    pub empty_submit: EmptySubmit,
    pub data_file: Option<PathBuf>,
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 本地配置服务（JSON 文件）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::debug!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read config {}", self.path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", self.path.display()))?;

        Ok(config)
    }
}

/// 约会存放位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    File(PathBuf),
    Memory,
}

/// 合并后的运行设置
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub theme: Theme,
    pub widget: WidgetOptions,
    pub store: StoreLocation,
    pub log_file: PathBuf,
}

impl Settings {
    /// 命令行 > 配置文件 > 默认值
    pub fn resolve(cli: &Cli, config: AppConfig) -> Self {
        let store = if cli.ephemeral {
            StoreLocation::Memory
        } else {
            let path = cli
                .data_file
                .clone()
                .or(config.data_file)
                .unwrap_or_else(default_data_file);
            StoreLocation::File(path)
        };

        Self {
            theme: config.theme,
            widget: WidgetOptions {
                week_start: cli.week_start.unwrap_or(config.week_start),
                empty_submit: config.empty_submit,
            },
            store,
            log_file: cli.log_file.clone().unwrap_or_else(default_log_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(dir.path().join("config.json"));
        assert_eq!(service.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "week_start": "monday", "empty_submit": "close" }"#).unwrap();

        let config = LocalConfigService::new(&path).load().unwrap();
        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.empty_submit, EmptySubmit::Close);
        assert_eq!(config.theme, Theme::Dark);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "week_start": "friday" }"#).unwrap();
        assert!(LocalConfigService::new(&path).load().is_err());
    }

    #[test]
    fn cli_overrides_config() {
        let cli = Cli {
            data_file: Some(PathBuf::from("/tmp/cli.json")),
            week_start: Some(WeekStart::Sunday),
            ..Cli::default()
        };
        let config = AppConfig {
            week_start: WeekStart::Monday,
            data_file: Some(PathBuf::from("/tmp/config.json")),
            ..AppConfig::default()
        };

        let settings = Settings::resolve(&cli, config);
        assert_eq!(settings.widget.week_start, WeekStart::Sunday);
        assert_eq!(settings.store, StoreLocation::File(PathBuf::from("/tmp/cli.json")));
    }

    #[test]
    fn config_data_file_used_without_cli_flag() {
        let config = AppConfig {
            data_file: Some(PathBuf::from("/tmp/config.json")),
            ..AppConfig::default()
        };
        let settings = Settings::resolve(&Cli::default(), config);
        assert_eq!(settings.store, StoreLocation::File(PathBuf::from("/tmp/config.json")));
    }

    #[test]
    fn ephemeral_uses_memory_store() {
        let cli = Cli {
            ephemeral: true,
            ..Cli::default()
        };
        let settings = Settings::resolve(&cli, AppConfig::default());
        assert_eq!(settings.store, StoreLocation::Memory);
    }
}
