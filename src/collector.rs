//! Response collection for the serial-direct variant.
//!
//! The module answers a command with a handful of short lines followed by a
//! final result code. [`ResponseCollector`] replays that accumulation at the
//! line level: blank lines and the echo of the issued command are dropped,
//! payload lines are gathered, and `OK` / `ERROR` terminate the response.
//! Reading lines off the wire, and deciding when to give up on a silent
//! module, stay with the transport.

use heapless::{String, Vec};

/// Longest response line the collector retains.
pub const MAX_LINE_LEN: usize = 64;
/// Payload lines retained per response.
pub const MAX_LINES: usize = 8;

/// Terminal classification of one collected response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CollectOutcome {
    /// Final result code `OK`.
    Success,
    /// A line containing `ERROR` (`ERROR`, `+CME ERROR: ...`, ...). The
    /// line is retained so callers can surface it.
    Failure,
}

#[derive(Debug, Default)]
pub struct ResponseCollector {
    echo: Option<String<MAX_LINE_LEN>>,
    lines: Vec<String<MAX_LINE_LEN>, MAX_LINES>,
}

impl ResponseCollector {
    pub const fn new() -> Self {
        Self {
            echo: None,
            lines: Vec::new(),
        }
    }

    /// Collector for a response to `cmd`, dropping the command echo if the
    /// module still has echo enabled.
    pub fn for_command(cmd: &str) -> Self {
        Self {
            echo: String::try_from(cmd).ok(),
            lines: Vec::new(),
        }
    }

    /// Feed one line. Returns the outcome once the final result code has
    /// been seen; until then the line is classified and accumulated.
    pub fn feed(&mut self, line: &str) -> Option<CollectOutcome> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if self.echo.as_ref().is_some_and(|echo| echo.as_str() == line) {
            return None;
        }
        if line == "OK" {
            return Some(CollectOutcome::Success);
        }

        self.push(line);
        if line.contains("ERROR") {
            return Some(CollectOutcome::Failure);
        }
        None
    }

    /// Collected payload lines, in arrival order.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(|line| line.as_str())
    }

    /// Drop everything collected so far; the echo filter is kept.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    fn push(&mut self, line: &str) {
        let Ok(line) = String::try_from(line) else {
            warn!("dropping oversized response line ({} bytes)", line.len());
            return;
        };
        if self.lines.push(line).is_err() {
            warn!("response buffer full, dropping line");
        }
    }
}
