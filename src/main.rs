use profile::app::{run_app, App};
use profile::cli::{parse_args, run_cli_command, usage};
use profile::config::ProfileConfig;
use profile::logging::init_logging;
use profile::terminal::{setup_panic_hook, TerminalManager};
use profile::ui;

use color_eyre::Result;
use crossterm::event::EventStream;

fn main() -> Result<()> {
    // Flags are handled before anything touches the terminal
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) if e.is_usage_error() => {
            eprintln!("error: {}\n\n{}", e, usage());
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    };
    let Some(options) = run_cli_command(command) else {
        return Ok(());
    };

    color_eyre::install()?;

    let config = ProfileConfig::from_env();
    if let Err(e) = init_logging(&config) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::info!(
        version = profile::cli::VERSION,
        animations = config.animations_enabled,
        "starting"
    );

    setup_panic_hook();

    let mut app = App::new(&config, options);
    let runtime = tokio::runtime::Runtime::new()?;

    let mut manager = TerminalManager::new()?;
    let size = manager.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let result: Result<()> = runtime
        .block_on(run_app(manager.terminal(), &mut app, EventStream::new()))
        .map_err(Into::into);
    manager.restore()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "exited with error");
    }
    tracing::info!("bye");
    result
}
