//! Logger setup for the `uitree` binary.
//!
//! Everything logs through the `log` facade; this is the only place that
//! picks a backend. Log lines go to stderr so `uitree tree` output on stdout
//! stays clean.

use std::sync::Once;

use clap::ValueEnum;

/// When to color log output. Maps onto [`env_logger::WriteStyle`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for env_logger::WriteStyle {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => env_logger::WriteStyle::Auto,
            ColorChoice::Always => env_logger::WriteStyle::Always,
            ColorChoice::Never => env_logger::WriteStyle::Never,
        }
    }
}

/// Logger configuration, filled from the command line.
///
/// `filter` follows the `env_logger` filter syntax (e.g. "info",
/// "uitree_markup=trace").
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub color: ColorChoice,
}

/// Explicit filter first, then `RUST_LOG`, then `warn`.
pub fn resolve_filter(explicit: Option<&str>, env: Option<&str>) -> String {
    explicit
        .or(env)
        .filter(|f| !f.trim().is_empty())
        .unwrap_or("warn")
        .to_string()
}

static INIT: Once = Once::new();

/// Installs the global logger. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let env = std::env::var("RUST_LOG").ok();
        let filter = resolve_filter(config.filter.as_deref(), env.as_deref());

        env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.color.into())
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .init();

        log::debug!("logging initialized with filter {:?}", filter);
    });
}
