//! Namespaced debug logging.
//!
//! Loggers are created per namespace (`"app:init"`, `"server:worker:1"`) and
//! are enabled by a filter string, normally taken from the `DEBUG`
//! environment variable:
//!
//! ```sh
//! DEBUG=app:init,app:auth,server:* my-program
//! ```
//!
//! Enabled loggers prefix each line with their namespace, coloured with a
//! palette slot derived from the namespace itself.
//!
//! # Environment
//!
//! Read once, when the process-wide factory (or the CLI) builds its
//! [`Settings`]. Empty values count as unset.
//!
//! - `DEBUG`: the filter string
//! - `NO_COLOR`: disable ANSI colour
//! - `NSDEBUG_PANIC_THROWS` (or the older `W_PANIC_THROWS`): make
//!   [`Debugger::panic`] unwind instead of exiting the process

pub mod cli;
pub mod colour;
pub mod config;
pub mod debugger;
pub mod display;
pub mod filter;

use anyhow::Context;

pub use cli::{Cli, Commands, cli_parse};
pub use colour::{ColourAssigner, ColourEntry, StyledLine, colour_for, colour_ns, strip_ansi};
pub use config::{ColorMode, ConfigError, Settings, load_settings};
pub use debugger::{
    Channel, DebugFactory, Debugger, Line, MemorySink, Output, Sink, StderrSink, factory, w,
};
pub use filter::{FilterEngine, FilterWarning, filter_warnings, print_filter_warnings};

pub fn run() -> anyhow::Result<()> {
    let cli = cli_parse();
    let settings = cli.settings().context("Failed to load settings")?;
    let use_colour = settings.use_colour();

    colored::control::set_override(use_colour);

    if cli.verbose > 0 {
        eprintln!("Filter: {:?}", settings.debug);
        eprintln!(
            "Color mode: {:?} (colour {})",
            settings.color,
            if use_colour { "on" } else { "off" }
        );
        eprintln!("Styled output: {}", settings.styled);
        if let Some(config_path) = &cli.config {
            eprintln!("Settings file: {}", config_path.display());
        }
    }

    match &cli.command {
        Commands::Check { namespaces } => {
            print_filter_warnings(&settings.debug);
            let engine = FilterEngine::compile(&settings.debug);
            display::display_check(&engine, namespaces);
        }
        Commands::Colours { namespaces } => {
            display::display_colours(namespaces);
        }
        Commands::Emit { namespace, message } => {
            print_filter_warnings(&settings.debug);
            let factory = DebugFactory::new(&settings);
            if cli.verbose > 0 {
                eprintln!("Compiled filter: {}", factory.engine());
                eprintln!("Output: {:?}", factory.output());
            }
            let debugger = factory.create(namespace.as_str());
            if cli.verbose > 0 && !debugger.is_enabled() {
                eprintln!("Namespace '{}' is disabled by the filter", namespace);
            }
            debugger.log(message.join(" "));
        }
        Commands::Panic { namespace, message } => {
            let mut debugger = DebugFactory::new(&settings).create(namespace.as_str());
            debugger.panic(message.join(" "));
        }
    }

    Ok(())
}
