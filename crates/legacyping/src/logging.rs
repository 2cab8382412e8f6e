use clap::ValueEnum;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Extra filter directives, e.g. `legacyping_transport=trace`.
///
/// Applied on top of `--log-level`, so a single crate can be turned up
/// without flooding the rest.
pub const LOG_FILTER_ENV: &str = "LEGACYPING_LOG";

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// `level` as the catch-all directive, refined by `extra` directives.
///
/// Malformed directives in `extra` are skipped.
pub fn build_filter(level: LogLevel, extra: Option<&str>) -> EnvFilter {
    let mut directives = level.as_directive().to_string();
    if let Some(extra) = extra.map(str::trim).filter(|extra| !extra.is_empty()) {
        directives.push(',');
        directives.push_str(extra);
    }
    EnvFilter::builder().parse_lossy(directives)
}

/// Build the subscriber writing to `writer`.
pub fn subscriber<W>(
    format: LogFormat,
    filter: EnvFilter,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false);

    match format {
        LogFormat::Text => Box::new(builder.finish()),
        LogFormat::Json => Box::new(builder.json().finish()),
    }
}

/// Install the stderr subscriber. Stdout carries ping results only.
pub fn init_logging(format: LogFormat, level: LogLevel) {
    let extra = std::env::var(LOG_FILTER_ENV).ok();
    let filter = build_filter(level, extra.as_deref());
    let _ = tracing::subscriber::set_global_default(subscriber(format, filter, std::io::stderr));
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use tracing::level_filters::LevelFilter;

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'w> MakeWriter<'w> for Captured {
        type Writer = Captured;

        fn make_writer(&'w self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn level_is_the_catch_all() {
        let filter = build_filter(LogLevel::Warn, None);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));

        let filter = build_filter(LogLevel::Error, Some("  "));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn extra_directives_raise_one_target() {
        let filter = build_filter(LogLevel::Warn, Some("legacyping_transport=trace"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn events_below_level_are_dropped() {
        let captured = Captured::default();
        let sub = subscriber(
            LogFormat::Text,
            build_filter(LogLevel::Warn, None),
            captured.clone(),
        );
        tracing::subscriber::with_default(sub, || {
            tracing::debug!(bytes = 3, "received reply");
            tracing::warn!("server sent extra bytes");
        });

        let text = captured.text();
        assert!(!text.contains("received reply"));
        assert!(text.contains("server sent extra bytes"));
    }

    #[test]
    fn json_lines_go_to_the_writer() {
        let captured = Captured::default();
        let sub = subscriber(
            LogFormat::Json,
            build_filter(LogLevel::Debug, None),
            captured.clone(),
        );
        tracing::subscriber::with_default(sub, || {
            tracing::debug!(bytes = 3, "received reply");
        });

        let text = captured.text();
        let line: serde_json::Value =
            serde_json::from_str(text.trim()).expect("one json log line");
        assert_eq!(line["level"], "DEBUG");
        assert_eq!(line["fields"]["message"], "received reply");
        assert_eq!(line["fields"]["bytes"], 3);
    }
}
