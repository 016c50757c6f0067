use serde::{Deserialize, Serialize};

use crate::logger::LogLevel;

pub trait IntoOr<T> {
    fn into_or(self, or: T) -> T;
}

impl<T> IntoOr<T> for Option<T> {
    fn into_or(self, or: T) -> T {
        self.unwrap_or(or)
    }
}

pub trait GeneralConfig {
    fn logger(&self) -> &LoggerConfig;
}

#[derive(Debug, Clone, Serialize)]
pub struct LoggerConfig {
    enabled: bool,
    log_file: bool,
    log_level: LogLevel,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PartialLoggerConfig {
    enabled: Option<bool>,
    log_file: Option<bool>,
    log_level: Option<LogLevel>,
}

impl LoggerConfig {
    pub fn from_partial(partial: PartialLoggerConfig) -> Self {
        Self {
            enabled: partial.enabled.into_or(false),
            log_file: partial.log_file.into_or(false),
            log_level: partial.log_level.into_or(LogLevel::Warn),
        }
    }

    pub fn from_file<P: AsRef<std::path::Path>>(file_path: P) -> anyhow::Result<Self> {
        let canonic_path = std::fs::canonicalize(file_path)?;
        let content = std::fs::read_to_string(canonic_path)?;
        Ok(Self::from_partial(toml::from_str(&content)?))
    }

    pub fn from_optional_file<P: AsRef<std::path::Path>>(
        file_path: Option<P>,
    ) -> anyhow::Result<Self> {
        match file_path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn get_enabled(&self) -> &bool {
        &self.enabled
    }

    pub fn with_log_file(mut self, log_file: bool) -> Self {
        self.log_file = log_file;
        self
    }

    pub fn set_log_file(&mut self, log_file: bool) {
        self.log_file = log_file;
    }

    pub fn get_log_file(&self) -> &bool {
        &self.log_file
    }

    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            enabled: false,
            log_file: false,
            log_level: LogLevel::Warn,
        }
    }
}

impl IntoOr<LoggerConfig> for Option<PartialLoggerConfig> {
    fn into_or(self, or: LoggerConfig) -> LoggerConfig {
        match self {
            Some(t) => LoggerConfig::from_partial(t),
            None => or,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisConfig {
    pretty_json: bool,
    logger: LoggerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PartialAnalysisConfig {
    pretty_json: Option<bool>,
    logger: Option<PartialLoggerConfig>,
}

impl AnalysisConfig {
    pub fn from_partial(partial: PartialAnalysisConfig) -> Self {
        Self {
            pretty_json: partial.pretty_json.into_or(true),
            logger: partial.logger.into_or(LoggerConfig::default()),
        }
    }

    pub fn from_file<P: AsRef<std::path::Path>>(file_path: P) -> anyhow::Result<Self> {
        let canonic_path = std::fs::canonicalize(file_path)?;
        let content = std::fs::read_to_string(canonic_path)?;
        Ok(Self::from_partial(toml::from_str(&content)?))
    }

    pub fn from_optional_file<P: AsRef<std::path::Path>>(
        file_path: Option<P>,
    ) -> anyhow::Result<Self> {
        match file_path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn with_pretty_json(mut self, pretty_json: bool) -> Self {
        self.pretty_json = pretty_json;
        self
    }

    pub fn set_pretty_json(&mut self, pretty_json: bool) {
        self.pretty_json = pretty_json;
    }

    pub fn get_pretty_json(&self) -> &bool {
        &self.pretty_json
    }

    pub fn with_logger(mut self, logger: LoggerConfig) -> Self {
        self.logger = logger;
        self
    }

    pub fn set_logger(&mut self, logger: LoggerConfig) {
        self.logger = logger;
    }

    pub fn get_logger(&self) -> &LoggerConfig {
        &self.logger
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            pretty_json: true,
            logger: LoggerConfig::default(),
        }
    }
}

impl GeneralConfig for AnalysisConfig {
    fn logger(&self) -> &LoggerConfig {
        &self.logger
    }
}
