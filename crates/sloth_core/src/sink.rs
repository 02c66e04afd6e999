//! Output sinks for observing evaluation.
//!
//! Observation points (a traced thunk being forced, a stream element being
//! printed) write one line to a [`Sink`]:
//! - `Stdout`: the terminal (default)
//! - `Buffer`: an in-memory capture, for tests
//! - `Silent`: discards everything

use std::sync::Arc;

use parking_lot::Mutex;

/// Destination for observation output.
///
/// Enum dispatch keeps the hot path free of vtable calls.
pub enum Sink {
    /// Writes to stdout.
    Stdout,
    /// Appends to an in-memory buffer.
    Buffer(Mutex<String>),
    /// Drops all output.
    Silent,
}

impl Sink {
    /// A fresh, empty capturing sink.
    pub fn buffer() -> Self {
        Sink::Buffer(Mutex::new(String::new()))
    }

    /// Write `msg` followed by a newline.
    pub fn write_line(&self, msg: &str) {
        match self {
            Sink::Stdout => println!("{msg}"),
            Sink::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(msg);
                buf.push('\n');
            }
            Sink::Silent => {}
        }
    }

    /// Everything captured so far. Empty for non-capturing sinks.
    pub fn contents(&self) -> String {
        match self {
            Sink::Buffer(buf) => buf.lock().clone(),
            Sink::Stdout | Sink::Silent => String::new(),
        }
    }

    /// Captured output split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

/// Sink handle shared between the code being observed and its caller.
pub type SharedSink = Arc<Sink>;

pub fn stdout_sink() -> SharedSink {
    Arc::new(Sink::Stdout)
}

pub fn buffer_sink() -> SharedSink {
    Arc::new(Sink::buffer())
}

pub fn silent_sink() -> SharedSink {
    Arc::new(Sink::Silent)
}

#[cfg(test)]
mod tests;
