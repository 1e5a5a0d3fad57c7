use std::sync::Once;

/// Filter used when neither the config nor `RUST_LOG` names one.
const DEFAULT_FILTER: &str = "info";

/// Filter that surfaces every call a `RecordingContext` records, plus the
/// buffer and vertex array lifecycle messages.
pub const GL_CALL_FILTER: &str = "glbuf=trace";

/// Logger configuration.
///
/// Library messages are logged under the `glbuf` target: handle creation at
/// debug, attachments and recorded GL calls at trace.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter directives. Overrides `RUST_LOG` when set.
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Route output through the test harness capture instead of stderr.
    pub is_test: bool,
}

impl LoggingConfig {
    /// Config that logs every recorded GL call.
    pub fn gl_calls() -> Self {
        Self {
            env_filter: Some(GL_CALL_FILTER.to_owned()),
            ..Self::default()
        }
    }

    fn filter(&self, rust_log: Option<String>) -> String {
        self.env_filter
            .clone()
            .or(rust_log)
            .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            is_test: false,
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the `log` backend. Only the first call in a
/// process has any effect, and a logger installed by the host wins.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.filter(std::env::var("RUST_LOG").ok());

        let installed = env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .is_test(config.is_test)
            .try_init();

        match installed {
            Ok(()) => log::debug!("glbuf logging on with filter `{filter}`"),
            Err(_) => log::debug!("logger already installed, keeping it"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── filter resolution ─────────────────────────────────────────────────

    #[test]
    fn explicit_filter_beats_rust_log() {
        let config = LoggingConfig::gl_calls();
        assert_eq!(config.filter(Some("warn".into())), GL_CALL_FILTER);
    }

    #[test]
    fn rust_log_used_when_no_filter_given() {
        let config = LoggingConfig::default();
        assert_eq!(config.filter(Some("glbuf=debug".into())), "glbuf=debug");
        assert_eq!(config.filter(None), DEFAULT_FILTER);
    }

    // ── install ───────────────────────────────────────────────────────────

    #[test]
    fn init_is_idempotent() {
        let config = LoggingConfig { is_test: true, ..LoggingConfig::gl_calls() };
        init_logging(config.clone());
        init_logging(config);
        log::trace!("still alive after second init");
    }
}
