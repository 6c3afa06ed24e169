//! Diagnostic output sink handed to every listener.
//!
//! Listeners never print directly — they write through the Console the
//! engine owns, so the runner and the tests can redirect output the same
//! way the store offers an in-memory variant.

use crate::error::EventResult;
use std::io::Write;
use std::sync::{Arc, Mutex};

pub struct Console {
    out: Box<dyn Write + Send>,
}

impl Console {
    /// Console writing to the process stdout (runner binary).
    pub fn stdout() -> Self {
        Self {
            out: Box::new(std::io::stdout()),
        }
    }

    /// Console writing into a shared in-memory buffer (used in tests).
    pub fn captured() -> (Self, ConsoleCapture) {
        let buffer = Arc::new(Mutex::new(String::new()));
        let console = Self {
            out: Box::new(CaptureWriter(Arc::clone(&buffer))),
        };
        (console, ConsoleCapture(buffer))
    }

    /// Write one diagnostic line.
    pub fn print(&mut self, line: &str) -> EventResult<()> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }
}

/// Read side of a captured console.
#[derive(Clone)]
pub struct ConsoleCapture(Arc<Mutex<String>>);

impl ConsoleCapture {
    pub fn contents(&self) -> String {
        self.0.lock().expect("console buffer poisoned").clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

struct CaptureWriter(Arc<Mutex<String>>);

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::Other, "console buffer poisoned"))?;
        guard.push_str(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
