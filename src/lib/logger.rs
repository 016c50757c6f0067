use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    str::FromStr,
    sync::Mutex,
};

use chrono::Local;
use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};

use crate::config::LoggerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn label(&self) -> ColoredString {
        match self {
            LogLevel::Debug => "DBG".bright_cyan(),
            LogLevel::Info => "INF".bright_green(),
            LogLevel::Warn => "WAR".yellow(),
            LogLevel::Error => "ERR".bright_red(),
        }
    }

    pub fn label_plain(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DBG",
            LogLevel::Info => "INF",
            LogLevel::Warn => "WAR",
            LogLevel::Error => "ERR",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            LogLevel::Debug => 0,
            LogLevel::Info => 1,
            LogLevel::Warn => 2,
            LogLevel::Error => 3,
        }
    }

    /// Whether a message at this level passes a sink configured at
    /// `threshold`.
    pub fn visible_at(&self, threshold: &LogLevel) -> bool {
        self.rank() >= threshold.rank()
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "info" | "inf" => Ok(LogLevel::Info),
            "warn" | "warning" | "war" => Ok(LogLevel::Warn),
            "error" | "err" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "Debug"),
            LogLevel::Info => write!(f, "Info"),
            LogLevel::Warn => write!(f, "Warn"),
            LogLevel::Error => write!(f, "Error"),
        }
    }
}

/// Leveled logger writing colored messages to stderr and, optionally, plain
/// messages to a per-run log file.
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
    name: String,
    file: Option<Mutex<BufWriter<File>>>,
}

impl Logger {
    pub fn new(level: LogLevel, name: String, log_file_path: Option<String>) -> Self {
        let file = log_file_path.map(|path| {
            if let Some(parent) = std::path::Path::new(&path).parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            let file = File::create(path).unwrap();
            Mutex::new(BufWriter::new(file))
        });

        Logger { level, name, file }
    }

    pub fn from_config(config: &LoggerConfig, name: String) -> Option<Self> {
        if !*config.get_enabled() {
            return None;
        }

        let log_file_path = if *config.get_log_file() {
            Some(format!(
                "./logs/analysis_run_{}.txt",
                Local::now().format("%Y-%m-%d_%H-%M-%S")
            ))
        } else {
            None
        };

        Some(Logger::new(*config.get_log_level(), name, log_file_path))
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        self.writeln_to_file(&format!(
            "[{}] {}: {}",
            level.label_plain(),
            self.name,
            message
        ));

        if level.visible_at(&self.level) {
            let name = format!("{}:", self.name).dimmed();
            eprintln!("[{}] {} {}", level.label(), name, message);
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    pub fn empty(&self, level: LogLevel) {
        self.writeln_to_file("");
        if level.visible_at(&self.level) {
            eprintln!();
        }
    }

    fn writeln_to_file(&self, string: &str) {
        if let Some(file) = &self.file {
            let mut f = file.lock().unwrap();

            f.write_all(string.as_bytes()).unwrap();
            f.write_all(b"\n").unwrap();
        }
    }

    pub fn object<'a>(&'a self, name: &'a str) -> ObjectBuilder<'a> {
        ObjectBuilder::new(name, self)
    }
}

/// Builder for structured multi-line log messages.
#[derive(Debug, Clone)]
pub struct ObjectBuilder<'a> {
    logger: &'a Logger,
    name: &'a str,
    fields: Vec<(&'a str, &'a str)>,
}

impl<'a> ObjectBuilder<'a> {
    fn new(name: &'a str, logger: &'a Logger) -> Self {
        ObjectBuilder {
            logger,
            name,
            fields: vec![],
        }
    }

    pub fn add_field(mut self, name: &'a str, value: &'a str) -> Self {
        self.fields.push((name, value));

        self
    }

    fn build(&self) -> String {
        let mut result = format!("{} {{", self.name);
        for (name, value) in &self.fields {
            result.push_str(&format!("\n  {}: {}", name, value));
        }
        result.push_str("\n}");
        result
    }

    pub fn log(&self, level: LogLevel) {
        self.logger.log(level, &self.build());
    }
}
