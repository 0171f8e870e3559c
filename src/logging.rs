use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines should go
pub enum LogTarget<'a> {
    /// Append to a file (no ANSI colors)
    File(&'a Path),
    /// Standard error, for non-interactive commands
    Stderr,
    /// Nothing; the interactive screen owns the terminal
    Off,
}

/// Install the global subscriber. Level comes from `RUST_LOG`, default `info`.
pub fn init(target: LogTarget<'_>) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match target {
        LogTarget::File(path) => {
            let file = File::options().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        LogTarget::Off => {}
    }
    Ok(())
}
