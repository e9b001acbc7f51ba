//! Display Surface
//!
//! Where the shell draws its prompt, echoed keystrokes and output.

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

/// Erases one character left of the cursor.
pub const ERASE_CHAR: &str = "\u{8} \u{8}";

/// Output sink of a shell session.
pub trait DisplaySurface {
    /// Write text followed by a line break.
    fn write_line(&mut self, text: &str);

    /// Write text without a line break.
    fn write(&mut self, text: &str);

    /// Erase everything written so far.
    fn clear_all(&mut self);
}

/// A recorded call on a [`RecordingDisplay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayCall {
    WriteLine(String),
    Write(String),
    ClearAll,
}

/// In-memory display that keeps every call, for tests and headless use.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    calls: Vec<DisplayCall>,
    screen: String,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DisplayCall] {
        &self.calls
    }

    /// Drop recorded calls, keeping the screen.
    pub fn take_calls(&mut self) -> Vec<DisplayCall> {
        std::mem::take(&mut self.calls)
    }

    /// Visible text since the last clear, with backspaces applied.
    pub fn screen(&self) -> &str {
        &self.screen
    }

    fn put(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\u{8}' {
                if !self.screen.ends_with('\n') {
                    self.screen.pop();
                }
            } else {
                self.screen.push(ch);
            }
        }
    }
}

impl DisplaySurface for RecordingDisplay {
    fn write_line(&mut self, text: &str) {
        self.calls.push(DisplayCall::WriteLine(text.to_string()));
        self.put(text);
        self.screen.push('\n');
    }

    fn write(&mut self, text: &str) {
        self.calls.push(DisplayCall::Write(text.to_string()));
        self.put(text);
    }

    fn clear_all(&mut self) {
        self.calls.push(DisplayCall::ClearAll);
        self.screen.clear();
    }
}

/// Display backed by standard output.
pub struct TerminalDisplay<W: Write = std::io::Stdout> {
    out: W,
}

impl TerminalDisplay {
    pub fn stdout() -> Self {
        Self { out: std::io::stdout() }
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySurface for TerminalDisplay<W> {
    // Raw mode does not translate `\n`, so lines end with an explicit CR.
    fn write_line(&mut self, text: &str) {
        let _ = queue!(self.out, Print(text), Print("\r\n"));
        let _ = self.out.flush();
    }

    fn write(&mut self, text: &str) {
        let _ = queue!(self.out, Print(text));
        let _ = self.out.flush();
    }

    fn clear_all(&mut self) {
        let _ = queue!(self.out, Clear(ClearType::All), MoveTo(0, 0));
        let _ = self.out.flush();
    }
}
