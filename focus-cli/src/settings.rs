//! 前端设置
//!
//! 设置以 JSON 保存在 `<config_dir>/focus/settings.json`。

use std::path::{Path, PathBuf};

use focus_core::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 设置文件读取错误
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO 错误
    #[error("Cannot read settings file: {0}")]
    Read(#[from] std::io::Error),

    /// JSON 格式错误
    #[error("Invalid settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// 转换为 `EnvFilter` 指令
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// 前端设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliSettings {
    /// 先手方
    pub first_player: Color,
    /// 开局时双方的储备数
    pub starting_reserves: i32,
    /// 日志级别
    pub log_level: LogLevel,
    /// 渲染时显示栈高
    pub show_heights: bool,
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            first_player: Color::First,
            starting_reserves: 0,
            log_level: LogLevel::default(),
            show_heights: true,
        }
    }
}

impl CliSettings {
    /// 获取设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("focus");
            path.push("settings.json");
            path
        })
    }

    /// 从默认位置加载设置
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            tracing::warn!("无法获取配置目录，使用默认设置");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// 从指定文件加载设置，失败时回退到默认值
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(Some(settings)) => {
                tracing::info!("已加载设置: {:?}", path);
                settings
            }
            Ok(None) => {
                tracing::info!("设置文件不存在，使用默认设置");
                Self::default()
            }
            Err(e) => {
                tracing::warn!("{}，使用默认设置", e);
                Self::default()
            }
        }
    }

    /// 读取并解析设置文件，文件不存在时返回 `None`
    pub fn try_load_from(path: &Path) -> Result<Option<Self>, SettingsError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// 保存设置到默认位置
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::settings_path()
            .ok_or_else(|| anyhow::anyhow!("无法获取配置目录"))?;
        self.save_to(&path)
    }

    /// 保存设置到指定文件
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        use anyhow::Context;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("无法创建配置目录: {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("序列化设置失败")?;
        std::fs::write(path, content)
            .with_context(|| format!("写入设置文件失败: {:?}", path))?;

        tracing::info!("设置已保存: {:?}", path);
        Ok(())
    }
}
