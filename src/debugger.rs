//! Logger factory and logger instances
//!
//! A [`DebugFactory`] owns the compiled filter and the output settings. Each
//! [`Debugger`] it creates asks the filter once, at creation, whether its
//! namespace is enabled; the answer can be overridden per instance later.

mod sink;

pub use sink::{Channel, Line, MemorySink, Sink, StderrSink};

use crate::colour::{colour_for, colour_ns, prefix};
use crate::config::Settings;
use crate::filter::FilterEngine;
use std::backtrace::Backtrace;
use std::fmt;
use std::sync::{Arc, LazyLock};

static FACTORY: LazyLock<DebugFactory> =
    LazyLock::new(|| DebugFactory::new(&Settings::from_env()));

/// How enabled debuggers render their lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// "namespace message"
    Plain,
    /// Namespace wrapped in its ANSI colour
    Ansi,
    /// `%c` format string with CSS arguments
    Styled,
}

impl Output {
    pub fn from_settings(settings: &Settings) -> Self {
        if settings.styled {
            Output::Styled
        } else if settings.use_colour() {
            Output::Ansi
        } else {
            Output::Plain
        }
    }
}

pub struct DebugFactory {
    engine: FilterEngine,
    output: Output,
    panic_throws: bool,
    sink: Arc<dyn Sink>,
}

impl DebugFactory {
    pub fn new(settings: &Settings) -> Self {
        DebugFactory {
            engine: FilterEngine::compile(&settings.debug),
            output: Output::from_settings(settings),
            panic_throws: settings.panic_throws,
            sink: Arc::new(StderrSink),
        }
    }

    /// Replace the sink handed to debuggers created from now on
    pub fn with_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    pub fn engine(&self) -> &FilterEngine {
        &self.engine
    }

    pub fn output(&self) -> Output {
        self.output
    }

    /// Create a debugger for `namespace`
    pub fn create(&self, namespace: impl Into<String>) -> Debugger {
        let namespace = namespace.into();
        let enabled = self.engine.enabled(&namespace);
        Debugger {
            namespace,
            enabled,
            output: self.output,
            channel: Channel::Debug,
            sink: Arc::clone(&self.sink),
            panic_throws: self.panic_throws,
        }
    }
}

impl fmt::Debug for DebugFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DebugFactory")
            .field("engine", &self.engine.to_string())
            .field("output", &self.output)
            .field("panic_throws", &self.panic_throws)
            .finish_non_exhaustive()
    }
}

/// The process-wide factory, configured from the environment on first use
pub fn factory() -> &'static DebugFactory {
    &FACTORY
}

/// Create a debugger from the process-wide factory.
///
/// ```no_run
/// let log = nsdebug::w("app:init");
/// log.log("starting");
/// nsdebug::nsdebug!(log, "loaded {} plugins", 3);
/// ```
pub fn w(namespace: impl Into<String>) -> Debugger {
    factory().create(namespace)
}

/// A namespaced logger instance
pub struct Debugger {
    namespace: String,
    enabled: bool,
    output: Output,
    channel: Channel,
    sink: Arc<dyn Sink>,
    panic_throws: bool,
}

impl Debugger {
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Override the filter's decision for this instance
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_sink(&mut self, sink: Arc<dyn Sink>) {
        self.sink = sink;
    }

    pub fn log(&self, message: impl fmt::Display) {
        if self.enabled {
            self.emit(&message.to_string());
        }
    }

    /// Like [`Debugger::log`], for `format_args!` output
    pub fn log_fmt(&self, args: fmt::Arguments<'_>) {
        if self.enabled {
            self.emit(&fmt::format(args));
        }
    }

    /// Render a message the way this debugger would emit it
    pub fn render(&self, message: &str) -> Line {
        match self.output {
            Output::Plain => Line::Text(format!("{}{}", prefix(&self.namespace), message)),
            Output::Ansi => {
                let name = if self.namespace.is_empty() {
                    String::new()
                } else {
                    format!("{} ", colour_ns(&self.namespace))
                };
                Line::Text(format!("{}{}", name, message))
            }
            Output::Styled => {
                Line::Styled(colour_for(&self.namespace).styled(&self.namespace, message))
            }
        }
    }

    fn emit(&self, message: &str) {
        self.sink.write(self.channel, &self.render(message));
    }

    /// Report an unrecoverable condition and stop.
    ///
    /// When configured to throw, unwinds with "PANIC! <message>". Otherwise the
    /// message is forced out on the error channel, followed by a backtrace,
    /// and the process exits with status 1.
    pub fn panic(&mut self, message: impl fmt::Display) -> ! {
        let text = format!("PANIC! {}", message);
        if self.panic_throws {
            panic!("{}", text);
        }

        self.channel = Channel::Error;
        self.enabled = true;
        self.emit(&text);
        self.sink.write(
            Channel::Error,
            &Line::Text(Backtrace::force_capture().to_string()),
        );
        std::process::exit(1)
    }
}

impl fmt::Debug for Debugger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debugger")
            .field("namespace", &self.namespace)
            .field("enabled", &self.enabled)
            .field("output", &self.output)
            .field("channel", &self.channel)
            .finish_non_exhaustive()
    }
}

/// Log through a debugger, formatting only when it is enabled
#[macro_export]
macro_rules! nsdebug {
    ($debugger:expr, $($arg:tt)+) => {{
        let debugger = &$debugger;
        if debugger.is_enabled() {
            debugger.log_fmt(format_args!($($arg)+));
        }
    }};
}
