use crate::config::{ColorMode, ConfigError, Settings, load_settings};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and exercise namespaced debug filters
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (TOML) with debug, color, styled and panic_throws keys
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Filter string, e.g. "app:*,-app:secret"
    #[arg(short, long, env = "DEBUG", global = true)]
    pub filter: Option<String>,

    /// When to use colour
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,

    /// Emit %c-styled console lines instead of ANSI text
    #[arg(long, global = true)]
    pub styled: bool,

    /// Print effective settings to stderr
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show which namespaces the filter enables
    Check {
        /// Namespaces to test
        #[arg(required = true)]
        namespaces: Vec<String>,
    },
    /// Show the colour assigned to each namespace (or the whole palette)
    Colours {
        namespaces: Vec<String>,
    },
    /// Log a message under a namespace, honouring the filter
    Emit {
        namespace: String,
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Report a fatal message under a namespace and stop
    #[command(hide = true)]
    Panic {
        namespace: String,
        message: Vec<String>,
    },
}

impl Cli {
    /// Settings file, then environment, then command-line flags
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let mut settings = load_settings(self.config.as_deref())?
            .with_env(|name| std::env::var(name).ok());

        if let Some(filter) = &self.filter {
            settings.debug = filter.clone();
        }
        if let Some(color) = self.color {
            settings.color = color;
        }
        if self.styled {
            settings.styled = true;
        }
        Ok(settings)
    }
}

pub fn cli_parse() -> Cli {
    Cli::parse()
}
