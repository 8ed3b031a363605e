//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueHint};
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

const LOCAL_CONFIG_BASENAME: &str = "foglio";
const DEFAULT_PAGE_SIZE: u32 = 9;
const DEFAULT_RELATED_LIMIT: u32 = 3;

/// Command-line arguments for the Foglio binary.
#[derive(Debug, Parser)]
#[command(name = "foglio", version, about = "Foglio blog publishing core")]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(long = "config-file", env = "FOGLIO_CONFIG_FILE", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// List published articles matching a query.
    List(ListArgs),
    /// Show one article with its rendered body and related reading.
    Show(ShowArgs),
    /// Render a markup file to HTML.
    Render(RenderArgs),
}

#[derive(Debug, Args, Clone)]
pub struct ListArgs {
    /// Case-insensitive search over titles, bodies and author names.
    #[arg(long, default_value = "")]
    pub search: String,

    /// Sort order: newest, oldest, popular or title.
    #[arg(long, default_value = "newest")]
    pub sort: String,

    /// 1-based page number.
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Override the configured page size.
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<u32>,

    /// Emit the listing as JSON instead of a table.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub json: bool,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: "newest".to_string(),
            page: 1,
            page_size: None,
            json: false,
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct ShowArgs {
    /// Article id or slug.
    #[arg(value_name = "ARTICLE")]
    pub article: String,

    /// Emit the article and its node tree as JSON instead of HTML.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct RenderArgs {
    /// Path to a markup file; standard input when omitted.
    #[arg(value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub path: Option<PathBuf>,

    /// Emit the typed node tree as JSON instead of HTML.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub nodes: bool,
}

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub listing: ListingSettings,
    pub source: SourceSettings,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Clone)]
pub struct ListingSettings {
    pub page_size: u32,
    pub related_limit: u32,
}

#[derive(Debug, Clone)]
pub struct SourceSettings {
    /// Simulated fetch latency applied by the in-memory source.
    pub latency: Duration,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    logging: RawLoggingSettings,
    listing: RawListingSettings,
    source: RawSourceSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawListingSettings {
    page_size: Option<u32>,
    related_limit: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSourceSettings {
    latency_ms: Option<u64>,
}

impl RawSettings {
    fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(level) = cli.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
    }
}

/// Resolve settings with file → environment → CLI precedence.
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder =
        Config::builder().add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix("FOGLIO").separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_cli_overrides(cli);

    Settings::from_raw(raw)
}

/// Parse CLI arguments and resolve settings in one step.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        Ok(Self {
            logging: build_logging_settings(raw.logging)?,
            listing: build_listing_settings(raw.listing)?,
            source: build_source_settings(raw.source),
        })
    }
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str())
            .map_err(|err| LoadError::invalid("logging.level", format!("failed to parse: {err}")))?,
        None => LevelFilter::INFO,
    };
    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    Ok(LoggingSettings { level, format })
}

fn build_listing_settings(listing: RawListingSettings) -> Result<ListingSettings, LoadError> {
    let page_size = listing.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
    if page_size == 0 {
        return Err(LoadError::invalid(
            "listing.page_size",
            "must be at least 1",
        ));
    }

    Ok(ListingSettings {
        page_size,
        related_limit: listing.related_limit.unwrap_or(DEFAULT_RELATED_LIMIT),
    })
}

fn build_source_settings(source: RawSourceSettings) -> SourceSettings {
    SourceSettings {
        latency: Duration::from_millis(source.latency_ms.unwrap_or(0)),
    }
}
