//! Configuration management for the SourceShare CLI.
//!
//! Handles:
//! - Command-line argument parsing
//! - Project (`.sourceshare.toml`) and user config files
//! - Merging CLI > project > user > built-in defaults

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Project config file name, searched from the working directory upwards
pub const PROJECT_CONFIG_FILE: &str = ".sourceshare.toml";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/editor";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Command-line arguments for the SourceShare CLI
#[derive(Debug, Parser)]
#[command(name = "sourceshare")]
#[command(about = "Share code snippets as self-contained links")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Editor page URL that share links are built on
    #[arg(long, global = true, help = "Editor page URL for share links")]
    pub base_url: Option<String>,

    /// Directory downloads are written into
    #[arg(long, global = true, help = "Directory for downloaded files")]
    pub download_dir: Option<PathBuf>,

    /// Explicit config file, replacing the project config lookup
    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(
        long,
        global = true,
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a share link for a file
    Share {
        file: PathBuf,
        /// Language id; inferred from the file extension when omitted,
        /// unknown ids fall back to typescript
        #[arg(long)]
        language: Option<String>,
        /// Print only a JSON object with the link, download name and language
        #[arg(long)]
        json: bool,
    },
    /// Open a share link and print or download its code
    Open {
        url: String,
        #[arg(long)]
        download: bool,
    },
    /// Encode stdin into a bare token
    Encode,
    /// Decode a bare token from stdin
    Decode,
    /// List supported languages
    Languages,
}

/// Values accepted in config files
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub download_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        toml::from_str(&text).with_context(|| format!("Failed to parse config file {:?}", path))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub download_dir: PathBuf,
    pub log_level: String,
    /// Project config file that was loaded, if any
    pub project_config: Option<PathBuf>,
}

impl Config {
    /// Create configuration from parsed arguments, reading config files
    pub fn from_args(args: &Args) -> Result<Self> {
        let project_path = match &args.config {
            Some(path) => Some(path.clone()),
            None => {
                let cwd = std::env::current_dir().context("Failed to read current directory")?;
                find_project_config(&cwd)
            }
        };
        let project = project_path
            .as_deref()
            .map(FileConfig::load)
            .transpose()?;

        let user = match user_config_path() {
            Some(path) if path.is_file() => Some(FileConfig::load(&path)?),
            _ => None,
        };

        let mut config = Self::from_sources(args, project, user)?;
        config.project_config = project_path;
        Ok(config)
    }

    /// Merge explicit sources without touching the filesystem
    pub fn from_sources(
        args: &Args,
        project: Option<FileConfig>,
        user: Option<FileConfig>,
    ) -> Result<Self> {
        let project = project.unwrap_or_default();
        let user = user.unwrap_or_default();

        let base_url = args
            .base_url
            .clone()
            .or(project.base_url)
            .or(user.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url =
            Url::parse(&base_url).with_context(|| format!("Invalid base_url '{}'", base_url))?;

        let download_dir = args
            .download_dir
            .clone()
            .or(project.download_dir)
            .or(user.download_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        let log_level = args
            .log_level
            .clone()
            .or(project.log_level)
            .or(user.log_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Config {
            base_url,
            download_dir,
            log_level,
            project_config: None,
        })
    }

    pub fn has_project_config(&self) -> bool {
        self.project_config.is_some()
    }
}

/// Find `.sourceshare.toml` in `start` or any ancestor
pub fn find_project_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(PROJECT_CONFIG_FILE))
        .find(|candidate| candidate.is_file())
}

/// `<config dir>/sourceshare/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sourceshare").join("config.toml"))
}
