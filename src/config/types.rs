//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 音源配置
    #[serde(default)]
    pub voicebank: VoicebankConfig,

    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 音源配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VoicebankConfig {
    /// 未通过命令行参数指定时读取的音源根目录
    #[serde(default)]
    pub root: Option<PathBuf>,
}

/// 输出配置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// 是否格式化 JSON 输出
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.voicebank.root.is_none());
        assert!(config.output.pretty);
        assert_eq!(config.log.level, "info");
    }
}
