use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use cuag_shell::config::ShellConfig;
use cuag_shell::shell::terminal::{self, RawModeGuard};
use cuag_shell::shell::{DisplaySurface, Shell, ShellSession, TerminalDisplay};
use cuag_shell::{logging, seeded_tree, CodexCatalog, CommandInterpreter, PersonaGenerator};

#[derive(Parser)]
#[command(name = "cuag-shell")]
#[command(about = "CUAG agent terminal over an in-memory filesystem")]
#[command(version)]
struct Cli {
    /// Shell configuration file (TOML)
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Starting directory and target of a bare `cd`
    #[arg(long = "home")]
    home: Option<String>,

    /// Disable ANSI colours
    #[arg(long = "no-color")]
    no_color: bool,

    /// System persona instruction
    #[arg(long = "system")]
    system: Option<String>,

    /// AI behaviour instruction
    #[arg(long = "ai")]
    ai: Option<String>,

    /// User context instruction
    #[arg(long = "user")]
    user: Option<String>,

    /// Run a command line and exit (may be repeated)
    #[arg(short = 'c')]
    commands: Vec<String>,

    /// Log debug output to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn load_config(cli: &Cli) -> Result<ShellConfig, cuag_shell::ConfigError> {
    let mut config = match cli.config {
        Some(ref path) => ShellConfig::load(path)?,
        None => ShellConfig::default(),
    };
    if let Some(ref home) = cli.home {
        config.home = home.clone();
    }
    if cli.no_color {
        config.color = false;
    }
    if let Some(ref system) = cli.system {
        config.instructions.system = system.clone();
    }
    if let Some(ref ai) = cli.ai {
        config.instructions.ai_behavior = ai.clone();
    }
    if let Some(ref user) = cli.user {
        config.instructions.user_context = user.clone();
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let interpreter = CommandInterpreter::new(
        Arc::new(CodexCatalog::builtin()),
        Arc::new(PersonaGenerator::new(Duration::from_millis(config.generator_delay_ms))),
    )
    .with_instructions(config.instructions.clone())
    .with_task_timeout(config.task_timeout_ms.map(Duration::from_millis));

    let interactive = std::io::stdin().is_terminal();
    let session = ShellSession::from_config(&config, seeded_tree());
    let mut shell = Shell::new(session, interpreter, TerminalDisplay::stdout());

    if !cli.commands.is_empty() {
        for line in &cli.commands {
            shell.run_line(line).await;
        }
        return;
    }

    // Raw mode lets editing keys through as they are pressed; restored on drop
    let raw_mode = if interactive {
        match RawModeGuard::enable() {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Error: cannot switch the terminal to raw mode: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    let (tx, rx) = mpsc::channel(256);
    if raw_mode.is_some() {
        tokio::task::spawn_blocking(move || terminal::forward_terminal_keys(&tx));
    } else {
        tokio::task::spawn_blocking(move || terminal::forward_lines(std::io::stdin().lock(), &tx));
    }

    tracing::debug!(interactive, "starting shell");
    shell.run(rx).await;
    shell.display_mut().write_line("");
    drop(raw_mode);
}
