mod app;
mod events;
mod persist;
mod strings;
mod terminal;
mod theme;
mod ui;

use anyhow::Result;
use terminal::TerminalGuard;
use tracing_appender::non_blocking::WorkerGuard;

fn main() -> Result<()> {
    let _log_guard = init_logging();
    let mut app = app::App::new();
    let mut term = TerminalGuard::new()?;
    events::run(&mut term.terminal, &mut app)
}

// Logs go to a file in the data dir; stdout belongs to the terminal UI.
// Failure to set up logging is not fatal.
fn init_logging() -> Option<WorkerGuard> {
    let dir = persist::data_dir()?;
    std::fs::create_dir_all(&dir).ok()?;
    let appender = tracing_appender::rolling::never(dir, "flexfuel.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = tracing_subscriber::EnvFilter::try_from_env("FLEXFUEL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(guard)
}
