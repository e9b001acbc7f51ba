//! Terminal key sources
//!
//! Turns stdin into [`Key`] events. A terminal is read in raw mode through
//! crossterm so editing keys arrive as they are pressed; piped input is read
//! line by line and decoded the way a terminal would have sent it.

use std::io::{BufRead, ErrorKind};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use tokio::sync::mpsc;

use crate::shell::input::Key;

/// Meaning of one raw terminal key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermInput {
    Key(Key),
    /// Ctrl-C or Ctrl-D: stop reading input
    Quit,
    Ignore,
}

pub fn map_key_event(event: &KeyEvent) -> TermInput {
    if event.kind == KeyEventKind::Release {
        return TermInput::Ignore;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') | KeyCode::Char('d') => TermInput::Quit,
            _ => TermInput::Ignore,
        };
    }
    match event.code {
        KeyCode::Char(ch) => TermInput::Key(Key::Char(ch)),
        KeyCode::Enter => TermInput::Key(Key::Enter),
        KeyCode::Backspace => TermInput::Key(Key::Backspace),
        KeyCode::Up => TermInput::Key(Key::Up),
        KeyCode::Down => TermInput::Key(Key::Down),
        _ => TermInput::Ignore,
    }
}

/// Keeps the terminal in raw mode until dropped.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enable() -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Forward raw terminal key presses until Ctrl-C/Ctrl-D, a read error, or
/// the receiver going away. Blocks; run it on a blocking thread.
pub fn forward_terminal_keys(tx: &mpsc::Sender<Key>) {
    loop {
        let event = match crossterm::event::read() {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(error = %e, "terminal read failed, closing input");
                break;
            }
        };
        let Event::Key(key_event) = event else {
            continue;
        };
        match map_key_event(&key_event) {
            TermInput::Key(key) => {
                if tx.blocking_send(key).is_err() {
                    break;
                }
            }
            TermInput::Quit => break,
            TermInput::Ignore => {}
        }
    }
}

/// Keys that produce `line` on a terminal, followed by Enter.
///
/// DEL and BS erase, `ESC [ A` / `ESC [ B` (and their `ESC O` forms)
/// recall history. Other escape sequences and control characters are
/// dropped.
pub fn decode_line(line: &str) -> Vec<Key> {
    let mut keys = Vec::with_capacity(line.len() + 1);
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\u{7f}' | '\u{8}' => keys.push(Key::Backspace),
            '\u{1b}' => match chars.peek() {
                Some('[') | Some('O') => {
                    chars.next();
                    // Parameters run until the final byte of the sequence
                    let mut last = None;
                    for c in chars.by_ref() {
                        if ('@'..='~').contains(&c) {
                            last = Some(c);
                            break;
                        }
                    }
                    match last {
                        Some('A') => keys.push(Key::Up),
                        Some('B') => keys.push(Key::Down),
                        _ => {}
                    }
                }
                _ => {}
            },
            c if c.is_control() => {}
            c => keys.push(Key::Char(c)),
        }
    }
    keys.push(Key::Enter);
    keys
}

/// Forward piped input line by line until EOF, a read error, or the
/// receiver going away. Undecodable bytes become U+FFFD and the line is
/// still submitted. Blocks; run it on a blocking thread.
pub fn forward_lines<R: BufRead>(mut reader: R, tx: &mpsc::Sender<Key>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                tracing::warn!(error = %e, "stdin read failed, closing input");
                break;
            }
        }
        let text = match std::str::from_utf8(&buf) {
            Ok(text) => text.to_string(),
            Err(_) => {
                tracing::warn!("input line is not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(&buf).into_owned()
            }
        };
        let line = text.trim_end_matches(|c: char| c == '\n' || c == '\r');
        for key in decode_line(line) {
            if tx.blocking_send(key).is_err() {
                return;
            }
        }
    }
    tracing::debug!("end of input");
}
