// SPDX-FileCopyrightText: Copyright © 2020-2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::{fs::OpenOptions, io, str::FromStr, sync::Mutex};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter},
    layer::SubscriberExt as _,
    util::SubscriberInitExt as _,
};

pub mod progress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    Stderr,
    File(String),
}

impl OutputDestination {
    fn make_writer(&self) -> io::Result<BoxMakeWriter> {
        Ok(match self {
            OutputDestination::Stderr => BoxMakeWriter::new(io::stderr),
            OutputDestination::File(path) => {
                let file = OpenOptions::new().create(true).append(true).open(path)?;
                BoxMakeWriter::new(Mutex::new(file))
            }
        })
    }
}

/// Initialize the global tracing subscriber
///
/// Fails only if a log file destination cannot be opened. Calling this
/// more than once leaves the first subscriber in place.
pub fn init(format: OutputFormat, level: LevelFilter, destination: OutputDestination) -> io::Result<()> {
    let filter = tracing_subscriber::filter::Targets::new().with_default(level);

    let writer = destination.make_writer()?;
    // ansi escapes only make sense on a terminal
    let ansi = destination == OutputDestination::Stderr;

    let registry = tracing_subscriber::registry().with(filter);
    let _ = match format {
        OutputFormat::Text => registry
            .with(fmt::layer().with_ansi(ansi).with_writer(writer))
            .try_init(),
        OutputFormat::Json => registry.with(fmt::layer().json().with_writer(writer)).try_init(),
    };

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
    pub format: OutputFormat,
    pub destination: OutputDestination,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::WARN,
            format: OutputFormat::Text,
            destination: OutputDestination::Stderr,
        }
    }
}

impl FromStr for LogConfig {
    type Err = String;

    /// Parse `<level>[:<format>][:<destination>]`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');

        let level = match parts.next().unwrap_or_default().to_lowercase().as_str() {
            "off" => LevelFilter::OFF,
            "trace" => LevelFilter::TRACE,
            "debug" => LevelFilter::DEBUG,
            "info" => LevelFilter::INFO,
            "warn" => LevelFilter::WARN,
            "error" => LevelFilter::ERROR,
            other => {
                return Err(format!(
                    "Invalid log level: {other:?}. Valid levels: off, trace, debug, info, warn, error"
                ));
            }
        };

        let format = match parts.next().map(str::to_lowercase).as_deref() {
            None | Some("text") => OutputFormat::Text,
            Some("json") => OutputFormat::Json,
            Some(other) => return Err(format!("Invalid log format: {other}. Valid formats: text, json")),
        };

        let destination = match parts.next() {
            None | Some("stderr") => OutputDestination::Stderr,
            Some("") => return Err("Empty log destination".to_owned()),
            // a path may itself contain ':'
            Some(path) => OutputDestination::File(path.to_owned()),
        };

        Ok(LogConfig {
            level,
            format,
            destination,
        })
    }
}

/// Initialize tracing with a parsed log configuration
pub fn init_with_config(config: LogConfig) -> io::Result<()> {
    init(config.format, config.level, config.destination)
}
