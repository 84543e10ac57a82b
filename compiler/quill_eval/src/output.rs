//! Output sinks for `print` and for runtime error reports.
//!
//! Output goes to every registered sink:
//! - `StdioSink`: stdout for the standard channel, stderr for errors
//! - `BufferSink`: captured lines, for tests and embedding hosts
//! - any `Fn(Channel, &Value)` closure

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::Value;

/// Which stream a value is emitted on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    /// `print` output.
    Standard,
    /// Runtime error reports.
    Error,
}

impl Channel {
    pub fn tag(self) -> &'static str {
        match self {
            Channel::Standard => "std",
            Channel::Error => "error",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Receiver for emitted values.
pub trait OutputSink {
    fn emit(&self, channel: Channel, value: &Value);
}

impl<F> OutputSink for F
where
    F: Fn(Channel, &Value),
{
    fn emit(&self, channel: Channel, value: &Value) {
        self(channel, value);
    }
}

/// Sink that writes to the process's stdout and stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdioSink;

impl OutputSink for StdioSink {
    fn emit(&self, channel: Channel, value: &Value) {
        match channel {
            Channel::Standard => println!("{value}"),
            Channel::Error => eprintln!("{value}"),
        }
    }
}

/// Sink that captures displayed values.
///
/// Clones share the same buffer, so a host can register one clone with the
/// environment and read the output through another.
#[derive(Clone, Debug, Default)]
pub struct BufferSink {
    lines: Arc<Mutex<Vec<(Channel, String)>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every captured line, in emission order.
    pub fn output(&self) -> Vec<(Channel, String)> {
        self.lines.lock().clone()
    }

    /// Captured lines of one channel.
    pub fn lines(&self, channel: Channel) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl OutputSink for BufferSink {
    fn emit(&self, channel: Channel, value: &Value) {
        self.lines.lock().push((channel, value.to_string()));
    }
}
