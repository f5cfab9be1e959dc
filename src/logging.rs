// Chunk: docs/chunks/logging - tracing setup for the page and the CLI
//!
//! Logging setup.
//!
//! The filter is silent by default (`warn`), and nothing it does on the happy
//! path logs above `debug`, so an installed script prints nothing unless
//! someone raises `log_level`. In the page, lines go to `console.log`. In the
//! CLI they go to stderr.
//!
//! ## Level priority (native only)
//!
//! 1. **`SMART_HOME_END_LOG`**
//! 2. **`RUST_LOG`**
//! 3. **`Settings::log_level`**

use std::env;

use tracing_subscriber::{fmt, EnvFilter};

use crate::settings::Settings;

type InitError = Box<dyn std::error::Error + Send + Sync>;

/// Level used when the configured filter does not parse.
const FALLBACK_LEVEL: &str = "warn";

/// Initialize logging.
///
/// Safe to call multiple times; later calls are ignored. An unparseable
/// filter falls back to `warn` and is reported once a subscriber is set.
pub fn init(settings: &Settings) {
    let (filter, invalid) = resolve_filter(settings);
    if let Err(err) = try_init(filter) {
        tracing::debug!(%err, "logging already initialized");
    }
    if let Some(err) = invalid {
        tracing::warn!(%err, fallback = FALLBACK_LEVEL, "invalid log filter");
    }
}

/// Initialize logging for tests. Will not crash if called repeatedly.
pub fn test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(not(target_arch = "wasm32"))]
fn try_init(filter: EnvFilter) -> Result<(), InitError> {
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
}

#[cfg(target_arch = "wasm32")]
fn try_init(filter: EnvFilter) -> Result<(), InitError> {
    fmt()
        .with_env_filter(filter)
        .with_writer(console::ConsoleWriter)
        .with_ansi(false)
        .without_time()
        .try_init()
}

fn resolve_filter(settings: &Settings) -> (EnvFilter, Option<InitError>) {
    match create_filter(settings) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(FALLBACK_LEVEL), Some(err)),
    }
}

fn create_filter(settings: &Settings) -> Result<EnvFilter, InitError> {
    for var in ["SMART_HOME_END_LOG", "RUST_LOG"] {
        if let Ok(directives) = env::var(var) {
            return Ok(EnvFilter::try_new(directives)?);
        }
    }
    let level = settings.level_filter()?;
    Ok(EnvFilter::builder()
        .with_default_directive(level.into())
        .parse("")?)
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing_subscriber::fmt::MakeWriter;

    /// Sends each formatted event to `console.log`.
    pub struct ConsoleWriter;

    /// Buffers one formatted event; emitted on drop.
    pub struct ConsoleLine(Vec<u8>);

    impl<'a> MakeWriter<'a> for ConsoleWriter {
        type Writer = ConsoleLine;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleLine(Vec::new())
        }
    }

    impl io::Write for ConsoleLine {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleLine {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.0);
            let line = line.trim_end();
            if !line.is_empty() {
                web_sys::console::log_1(&line.into());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        test();
        test();
        init(&Settings::default());
    }

    #[test]
    fn test_filter_from_settings_level() {
        if env::var("SMART_HOME_END_LOG").is_ok() || env::var("RUST_LOG").is_ok() {
            return;
        }
        let settings = Settings {
            log_level: "debug".to_string(),
            ..Default::default()
        };
        assert!(create_filter(&settings).is_ok());
    }

    #[test]
    fn test_invalid_level_fails_filter() {
        if env::var("SMART_HOME_END_LOG").is_ok() || env::var("RUST_LOG").is_ok() {
            return;
        }
        let settings = Settings {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(create_filter(&settings).is_err());
    }

    #[test]
    fn test_invalid_level_falls_back_and_is_reported() {
        if env::var("SMART_HOME_END_LOG").is_ok() || env::var("RUST_LOG").is_ok() {
            return;
        }
        let settings = Settings {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        let (filter, invalid) = resolve_filter(&settings);
        assert!(invalid.is_some());
        assert_eq!(filter.to_string(), FALLBACK_LEVEL);

        let (_, invalid) = resolve_filter(&Settings::default());
        assert!(invalid.is_none());
    }

    #[test]
    fn test_init_with_invalid_level_does_not_panic() {
        init(&Settings {
            log_level: "loud".to_string(),
            ..Default::default()
        });
    }
}
