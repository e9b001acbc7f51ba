//! Turns tagged output lines into display text.

use owo_colors::OwoColorize;

use crate::commands::OutputLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// `<label>:<cwd>> `
    pub fn prompt(&self, label: &str, cwd: &str) -> String {
        let text = format!("{}:{}> ", label, cwd);
        if self.color {
            text.cyan().to_string()
        } else {
            text
        }
    }

    pub fn line(&self, line: &OutputLine) -> String {
        if !self.color {
            return line.plain();
        }
        match line {
            OutputLine::Text(s) => s.clone(),
            OutputLine::Heading(s) => s.yellow().to_string(),
            OutputLine::Labeled { label, text } => format!("  {}{}", label.green(), text),
            OutputLine::Status(s) => format!("{} {}", "STATUS:".yellow(), s),
            OutputLine::Error(s) => s.red().to_string(),
            OutputLine::Listing(entries) => entries
                .iter()
                .map(|e| {
                    if e.is_directory() {
                        format!("{}/", e.name).blue().to_string()
                    } else {
                        e.name.green().to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join("    "),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(true)
    }
}
