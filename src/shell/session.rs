//! Shell Session
//!
//! The REPL's input state machine. It consumes abstract [`Key`] events,
//! draws on a [`DisplaySurface`], and hands complete lines back to the
//! caller for dispatch. It never runs commands itself, so it can be
//! driven synchronously in tests.

use crate::commands::{CommandOutput, SessionEffect};
use crate::config::ShellConfig;
use crate::fs::FileSystemTree;
use crate::interpreter::SessionEnv;
use crate::shell::display::{DisplaySurface, ERASE_CHAR};
use crate::shell::input::{Key, LineEditor};
use crate::shell::render::Renderer;

pub const WELCOME_BANNER: &str = "Welcome to the CUAG Agent CLI. Type help for commands.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    /// A dispatched line has not produced its output yet
    Executing,
}

/// What the caller should do after a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    /// Run this line, then report back through [`ShellSession::finish`]
    Dispatch(String),
}

pub struct ShellSession {
    env: SessionEnv,
    editor: LineEditor,
    state: SessionState,
    prompt_label: String,
    renderer: Renderer,
    /// Draw typed characters; off when the terminal already echoes them
    local_echo: bool,
}

impl ShellSession {
    pub fn new(env: SessionEnv, prompt_label: impl Into<String>, renderer: Renderer) -> Self {
        Self {
            env,
            editor: LineEditor::new(),
            state: SessionState::Idle,
            prompt_label: prompt_label.into(),
            renderer,
            local_echo: true,
        }
    }

    pub fn from_config(config: &ShellConfig, fs: FileSystemTree) -> Self {
        Self::new(
            SessionEnv::new(fs, config.home.clone()),
            config.prompt_label.clone(),
            Renderer::new(config.color),
        )
    }

    pub fn with_local_echo(mut self, local_echo: bool) -> Self {
        self.local_echo = local_echo;
        self
    }

    pub fn env(&self) -> &SessionEnv {
        &self.env
    }

    pub fn cwd(&self) -> &str {
        &self.env.cwd
    }

    pub fn history(&self) -> &[String] {
        self.editor.history()
    }

    pub fn input_buffer(&self) -> &str {
        self.editor.buffer()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == SessionState::Executing
    }

    /// Environment for the running command alongside the editor that keeps
    /// collecting keys until it finishes.
    pub fn parts(&mut self) -> (&SessionEnv, &mut LineEditor) {
        (&self.env, &mut self.editor)
    }

    pub fn start(&mut self, display: &mut dyn DisplaySurface) {
        display.write_line(WELCOME_BANNER);
        self.render_prompt(display);
    }

    pub fn handle_key(&mut self, key: Key, display: &mut dyn DisplaySurface) -> KeyOutcome {
        if self.is_busy() {
            if self.editor.handle_busy_key(key) {
                tracing::debug!(queued = self.editor.queued().count(), "line queued while executing");
            }
            return KeyOutcome::Continue;
        }

        match key {
            Key::Char(ch) => {
                self.editor.push_char(ch);
                if self.local_echo {
                    let mut buf = [0u8; 4];
                    display.write(ch.encode_utf8(&mut buf));
                }
            }
            Key::Backspace => {
                if self.editor.backspace() && self.local_echo {
                    display.write(ERASE_CHAR);
                }
            }
            Key::Up | Key::Down => {
                let shown = self.editor.buffer().chars().count();
                let moved = if key == Key::Up {
                    self.editor.recall_previous()
                } else {
                    self.editor.recall_next()
                };
                if moved && self.local_echo {
                    display.write(&ERASE_CHAR.repeat(shown));
                    display.write(self.editor.buffer());
                }
            }
            Key::Enter => {
                if self.local_echo {
                    display.write_line("");
                }
                match self.editor.submit() {
                    Some(line) => {
                        self.state = SessionState::Executing;
                        return KeyOutcome::Dispatch(line);
                    }
                    None => self.render_prompt(display),
                }
            }
        }
        KeyOutcome::Continue
    }

    /// Apply a command's effects and write its lines, without prompting.
    pub fn write_output(&mut self, output: CommandOutput, display: &mut dyn DisplaySurface) {
        for effect in &output.effects {
            match effect {
                SessionEffect::ClearScreen => display.clear_all(),
                SessionEffect::ChangeDirectory(_) => self.env.apply(effect),
            }
        }
        for line in &output.lines {
            display.write_line(&self.renderer.line(line));
        }
    }

    /// Complete the in-flight line and prompt again.
    ///
    /// When lines were queued while executing, the oldest one is echoed
    /// after the new prompt and returned for dispatch; the session stays
    /// `Executing`. Otherwise the session goes idle and any partially typed
    /// input is redrawn.
    pub fn finish(&mut self, output: CommandOutput, display: &mut dyn DisplaySurface) -> Option<String> {
        self.write_output(output, display);
        self.state = SessionState::Idle;
        self.render_prompt(display);

        if let Some(next) = self.editor.next_queued() {
            if self.local_echo {
                display.write_line(&next);
            }
            self.state = SessionState::Executing;
            return Some(next);
        }

        if self.local_echo && !self.editor.buffer().is_empty() {
            display.write(self.editor.buffer());
        }
        None
    }

    fn render_prompt(&self, display: &mut dyn DisplaySurface) {
        display.write(&self.renderer.prompt(&self.prompt_label, &self.env.cwd));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::OutputLine;
    use crate::fs::seeded_tree;
    use crate::shell::display::{DisplayCall, RecordingDisplay};

    fn session() -> ShellSession {
        ShellSession::new(SessionEnv::new(seeded_tree(), "/home/user"), "CUAG", Renderer::plain())
    }

    fn type_str(session: &mut ShellSession, display: &mut RecordingDisplay, text: &str) {
        for ch in text.chars() {
            assert_eq!(session.handle_key(Key::Char(ch), display), KeyOutcome::Continue);
        }
    }

    #[test]
    fn test_start_draws_banner_and_prompt() {
        let mut display = RecordingDisplay::new();
        session().start(&mut display);
        assert_eq!(
            display.calls(),
            [
                DisplayCall::WriteLine(WELCOME_BANNER.to_string()),
                DisplayCall::Write("CUAG:/home/user> ".to_string()),
            ]
        );
    }

    #[test]
    fn test_typing_echoes_and_enter_dispatches() {
        let mut session = session();
        let mut display = RecordingDisplay::new();
        type_str(&mut session, &mut display, "ls");
        assert_eq!(session.input_buffer(), "ls");

        let outcome = session.handle_key(Key::Enter, &mut display);
        assert_eq!(outcome, KeyOutcome::Dispatch("ls".to_string()));
        assert!(session.is_busy());
        assert_eq!(session.input_buffer(), "");
        assert_eq!(session.history(), ["ls"]);
        assert_eq!(display.screen(), "ls\n");
    }

    #[test]
    fn test_empty_enter_only_reprompts() {
        let mut session = session();
        let mut display = RecordingDisplay::new();
        type_str(&mut session, &mut display, "  ");
        assert_eq!(session.handle_key(Key::Enter, &mut display), KeyOutcome::Continue);
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.history().is_empty());
        assert_eq!(
            display.take_calls().last(),
            Some(&DisplayCall::Write("CUAG:/home/user> ".to_string()))
        );
    }

    #[test]
    fn test_backspace_never_erases_prompt() {
        let mut session = session();
        let mut display = RecordingDisplay::new();
        session.start(&mut display);
        type_str(&mut session, &mut display, "ab");
        for _ in 0..5 {
            session.handle_key(Key::Backspace, &mut display);
        }
        assert_eq!(session.input_buffer(), "");
        let erases = display
            .calls()
            .iter()
            .filter(|c| **c == DisplayCall::Write(ERASE_CHAR.to_string()))
            .count();
        assert_eq!(erases, 2);
        assert!(display.screen().ends_with("CUAG:/home/user> "));
    }

    #[test]
    fn test_history_recall_redraws_line() {
        let mut session = session();
        let mut display = RecordingDisplay::new();
        session.start(&mut display);
        for line in ["ls", "status"] {
            type_str(&mut session, &mut display, line);
            let outcome = session.handle_key(Key::Enter, &mut display);
            assert_eq!(outcome, KeyOutcome::Dispatch(line.to_string()));
            assert!(session.finish(CommandOutput::empty(), &mut display).is_none());
        }

        session.handle_key(Key::Up, &mut display);
        assert_eq!(session.input_buffer(), "status");
        session.handle_key(Key::Up, &mut display);
        assert_eq!(session.input_buffer(), "ls");
        session.handle_key(Key::Up, &mut display);
        assert_eq!(session.input_buffer(), "ls");
        assert!(display.screen().ends_with("CUAG:/home/user> ls"));

        session.handle_key(Key::Down, &mut display);
        session.handle_key(Key::Down, &mut display);
        assert_eq!(session.input_buffer(), "");
        assert!(display.screen().ends_with("CUAG:/home/user> "));
    }

    #[test]
    fn test_finish_writes_output_then_prompt() {
        let mut session = session();
        let mut display = RecordingDisplay::new();
        type_str(&mut session, &mut display, "cat nope");
        session.handle_key(Key::Enter, &mut display);
        display.take_calls();

        let output = CommandOutput::error("Error: cat: nope: No such file or is a directory");
        assert_eq!(session.finish(output, &mut display), None);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(
            display.calls(),
            [
                DisplayCall::WriteLine("Error: cat: nope: No such file or is a directory".to_string()),
                DisplayCall::Write("CUAG:/home/user> ".to_string()),
            ]
        );
    }

    #[test]
    fn test_change_directory_effect_updates_prompt() {
        let mut session = session();
        let mut display = RecordingDisplay::new();
        type_str(&mut session, &mut display, "cd documents");
        session.handle_key(Key::Enter, &mut display);
        let output = CommandOutput::effect(SessionEffect::ChangeDirectory(
            "/home/user/documents".to_string(),
        ));
        session.finish(output, &mut display);
        assert_eq!(session.cwd(), "/home/user/documents");
        assert!(display.screen().ends_with("CUAG:/home/user/documents> "));
    }

    #[test]
    fn test_clear_effect_clears_display() {
        let mut session = session();
        let mut display = RecordingDisplay::new();
        session.start(&mut display);
        type_str(&mut session, &mut display, "clear");
        session.handle_key(Key::Enter, &mut display);
        session.finish(CommandOutput::effect(SessionEffect::ClearScreen), &mut display);
        assert_eq!(display.screen(), "CUAG:/home/user> ");
    }

    #[test]
    fn test_keys_while_executing_are_buffered() {
        let mut session = session();
        let mut display = RecordingDisplay::new();
        type_str(&mut session, &mut display, "task LYRA \"hi\"");
        session.handle_key(Key::Enter, &mut display);
        display.take_calls();

        type_str(&mut session, &mut display, "ls");
        session.handle_key(Key::Up, &mut display);
        assert!(display.calls().is_empty());
        assert_eq!(session.input_buffer(), "ls");

        session.finish(CommandOutput::lines(vec![OutputLine::text("done")]), &mut display);
        assert!(!session.is_busy());
        assert!(display.screen().ends_with("done\nCUAG:/home/user> ls"));
    }

    #[test]
    fn test_enter_while_executing_queues() {
        let mut session = session();
        let mut display = RecordingDisplay::new();
        type_str(&mut session, &mut display, "task LYRA \"hi\"");
        session.handle_key(Key::Enter, &mut display);

        type_str(&mut session, &mut display, "status");
        assert_eq!(session.handle_key(Key::Enter, &mut display), KeyOutcome::Continue);
        assert_eq!(session.history(), ["task LYRA \"hi\"", "status"]);

        let next = session.finish(CommandOutput::empty(), &mut display);
        assert_eq!(next.as_deref(), Some("status"));
        assert!(session.is_busy());
        assert!(display.screen().ends_with("CUAG:/home/user> status\n"));

        assert_eq!(session.finish(CommandOutput::empty(), &mut display), None);
        assert!(!session.is_busy());
    }

    #[test]
    fn test_without_local_echo_only_prompts_are_drawn() {
        let mut session = session().with_local_echo(false);
        let mut display = RecordingDisplay::new();
        type_str(&mut session, &mut display, "ls");
        session.handle_key(Key::Backspace, &mut display);
        assert!(display.calls().is_empty());
        session.handle_key(Key::Char('s'), &mut display);
        session.handle_key(Key::Enter, &mut display);
        assert!(display.calls().is_empty());
    }
}
