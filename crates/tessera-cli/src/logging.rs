use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

const CRATES: [&str; 3] = ["tessera_cli", "tessera_grid", "tessera_config"];

/// Filter directives for our crates at `level`.
pub fn directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Resolve the effective level: an explicit `--log-level` wins over `--verbose`.
pub fn level(log_level: Option<LogLevel>, verbose: bool) -> LevelFilter {
    match (log_level, verbose) {
        (Some(level), _) => level.into(),
        (None, true) => LevelFilter::DEBUG,
        (None, false) => LevelFilter::INFO,
    }
}

/// Install the global subscriber. Logs go to stderr so stdout carries only the frame.
///
/// `RUST_LOG`, when set, replaces the computed directives.
pub fn init(log_level: Option<LogLevel>, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level(log_level, verbose))));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_switches_to_debug() {
        assert_eq!(level(None, false), LevelFilter::INFO);
        assert_eq!(level(None, true), LevelFilter::DEBUG);
        assert_eq!(level(Some(LogLevel::Warn), true), LevelFilter::WARN);
    }

    #[test]
    fn directives_cover_every_crate() {
        assert_eq!(
            directives(LevelFilter::DEBUG),
            "tessera_cli=debug,tessera_grid=debug,tessera_config=debug"
        );
    }
}
