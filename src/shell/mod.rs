//! Interactive shell: key handling, display and the async driver.

pub mod display;
pub mod input;
pub mod render;
pub mod runtime;
pub mod session;
pub mod terminal;

pub use display::{DisplayCall, DisplaySurface, RecordingDisplay, TerminalDisplay, ERASE_CHAR};
pub use input::{Key, LineEditor};
pub use render::Renderer;
pub use runtime::Shell;
pub use session::{KeyOutcome, SessionState, ShellSession, WELCOME_BANNER};
