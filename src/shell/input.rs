//! Line editing state: the pending input buffer, history recall, and the
//! queue of lines submitted while a command is still running.

use std::collections::VecDeque;

/// Abstract key event delivered by the display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Up,
    Down,
}

#[derive(Debug, Default, Clone)]
pub struct LineEditor {
    buffer: String,
    history: Vec<String>,
    /// Index into `history`; `history.len()` means past the end
    cursor: usize,
    /// Buffer contents saved when recall leaves the past-the-end slot
    draft: String,
    queued: VecDeque<String>,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn queued(&self) -> impl Iterator<Item = &str> {
        self.queued.iter().map(String::as_str)
    }

    pub fn push_char(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    /// Remove the last character; `false` when the buffer was already empty.
    pub fn backspace(&mut self) -> bool {
        self.buffer.pop().is_some()
    }

    /// Take the buffer as a submitted line.
    ///
    /// Blank buffers are discarded and yield `None`. Non-blank lines are
    /// appended to history and the recall cursor moves past the end.
    pub fn submit(&mut self) -> Option<String> {
        let line = std::mem::take(&mut self.buffer);
        self.draft.clear();
        if line.trim().is_empty() {
            self.cursor = self.history.len();
            return None;
        }
        self.history.push(line.clone());
        self.cursor = self.history.len();
        Some(line)
    }

    /// Hold a submitted line until the running command finishes.
    pub fn enqueue(&mut self, line: String) {
        self.queued.push_back(line);
    }

    pub fn next_queued(&mut self) -> Option<String> {
        self.queued.pop_front()
    }

    /// Absorb a key while a command is running. Nothing is drawn; the
    /// buffer is echoed with the next prompt. Returns `true` when Enter
    /// queued a line.
    pub fn handle_busy_key(&mut self, key: Key) -> bool {
        match key {
            Key::Char(ch) => self.push_char(ch),
            Key::Backspace => {
                self.backspace();
            }
            Key::Enter => {
                if let Some(line) = self.submit() {
                    self.enqueue(line);
                    return true;
                }
            }
            Key::Up | Key::Down => {}
        }
        false
    }

    /// Step back in history. Returns `false` when already at the oldest entry.
    pub fn recall_previous(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        if self.cursor == self.history.len() {
            self.draft = self.buffer.clone();
        }
        self.cursor -= 1;
        self.buffer = self.history[self.cursor].clone();
        true
    }

    /// Step forward in history. Returns `false` when already past the end.
    pub fn recall_next(&mut self) -> bool {
        if self.cursor >= self.history.len() {
            return false;
        }
        self.cursor += 1;
        self.buffer = if self.cursor == self.history.len() {
            std::mem::take(&mut self.draft)
        } else {
            self.history[self.cursor].clone()
        };
        true
    }
}
