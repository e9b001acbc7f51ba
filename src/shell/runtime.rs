//! Shell Runtime
//!
//! Drives a [`ShellSession`] from a channel of key events. At most one
//! command future is in flight; keys that arrive meanwhile go to the line
//! editor, and lines submitted in that window run afterwards in order.

use tokio::sync::mpsc;

use crate::commands::CommandOutput;
use crate::interpreter::CommandInterpreter;
use crate::shell::display::DisplaySurface;
use crate::shell::input::Key;
use crate::shell::session::{KeyOutcome, ShellSession};

pub struct Shell<D: DisplaySurface> {
    session: ShellSession,
    interpreter: CommandInterpreter,
    display: D,
}

impl<D: DisplaySurface> Shell<D> {
    pub fn new(session: ShellSession, interpreter: CommandInterpreter, display: D) -> Self {
        Self {
            session,
            interpreter,
            display,
        }
    }

    pub fn session(&self) -> &ShellSession {
        &self.session
    }

    pub fn interpreter(&self) -> &CommandInterpreter {
        &self.interpreter
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Draw the banner and first prompt, then process keys until the
    /// sender is dropped. Commands already submitted still run to completion.
    pub async fn run(&mut self, mut keys: mpsc::Receiver<Key>) {
        self.session.start(&mut self.display);
        while let Some(key) = keys.recv().await {
            if let KeyOutcome::Dispatch(line) = self.session.handle_key(key, &mut self.display) {
                if !self.dispatch(line, &mut keys).await {
                    break;
                }
            }
        }
        tracing::debug!("key channel closed, shell loop exiting");
    }

    /// Run `line` and everything queued behind it. Returns `false` once
    /// the key channel has closed.
    async fn dispatch(&mut self, line: String, keys: &mut mpsc::Receiver<Key>) -> bool {
        let mut open = true;
        let mut next = Some(line);
        while let Some(line) = next {
            let output = {
                let (env, editor) = self.session.parts();
                let command = self.interpreter.execute(&line, env);
                tokio::pin!(command);
                loop {
                    tokio::select! {
                        biased;
                        output = &mut command => break output,
                        key = keys.recv(), if open => match key {
                            Some(key) => {
                                if editor.handle_busy_key(key) {
                                    tracing::debug!(line = %line, "line queued behind running command");
                                }
                            }
                            None => open = false,
                        },
                    }
                }
            };
            next = self.session.finish(output, &mut self.display);
        }
        open
    }

    /// Run one line without prompts or echo, e.g. for `-c`.
    pub async fn run_line(&mut self, line: &str) -> CommandOutput {
        let output = self.interpreter.execute(line, self.session.env()).await;
        self.session.write_output(output.clone(), &mut self.display);
        output
    }
}
