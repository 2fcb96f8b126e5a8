use crate::colour::StyledLine;
use std::io::{self, Write};
use std::sync::Mutex;

/// Which console method a line is meant for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Debug,
    Error,
}

/// A rendered line, ready for a sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Plain or ANSI-coloured text
    Text(String),
    /// Format string plus CSS arguments for styled consoles
    Styled(StyledLine),
}

impl Line {
    /// Text without styling placeholders (ANSI escapes, if any, are kept)
    pub fn to_plain(&self) -> String {
        match self {
            Line::Text(text) => text.clone(),
            Line::Styled(styled) => styled.to_plain(),
        }
    }

    /// What a byte stream receives: text as-is, styled lines as
    /// format/css/reset separated by tabs
    pub fn to_stream(&self) -> String {
        match self {
            Line::Text(text) => text.clone(),
            Line::Styled(styled) => styled.to_console_args(),
        }
    }
}

/// Destination for debugger output
pub trait Sink: Send + Sync {
    fn write(&self, channel: Channel, line: &Line);
}

impl<F> Sink for F
where
    F: Fn(Channel, &Line) + Send + Sync,
{
    fn write(&self, channel: Channel, line: &Line) {
        self(channel, line)
    }
}

/// Writes every line to stderr (see [`Line::to_stream`]). Write failures are
/// ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write(&self, _channel: Channel, line: &Line) {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{}", line.to_stream());
    }
}

/// Keeps every line in memory, for hosts that render output themselves
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Channel, Line)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn lines(&self) -> Vec<(Channel, Line)> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Written lines as plain text
    pub fn texts(&self) -> Vec<String> {
        self.lines().iter().map(|(_, line)| line.to_plain()).collect()
    }
}

impl Sink for MemorySink {
    fn write(&self, channel: Channel, line: &Line) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        lines.push((channel, line.clone()));
    }
}
