use std::sync::Once;

/// Filters used when neither [`LoggingConfig::filters`] nor `RUST_LOG` is set.
///
/// The GPU stack is chatty at `info`; keep it to warnings unless asked.
pub const DEFAULT_FILTERS: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

/// Logger configuration.
///
/// `filters` follows the `env_logger` filter syntax (e.g. "debug",
/// "wirecube_engine=debug,wgpu_core=warn").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filters: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filters: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Resolves the filter string in priority order: explicit config,
    /// then `RUST_LOG`, then [`DEFAULT_FILTERS`].
    fn resolve_filters(&self, env_value: Option<String>) -> String {
        self.filters
            .clone()
            .or(env_value)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTERS.to_string())
    }
}

static INIT: Once = Once::new();

/// Installs the global logger.
///
/// Idempotent; only the first call has an effect. Call early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filters = config.resolve_filters(std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filters);
        builder.write_style(config.write_style);

        // Another logger may already be installed (e.g. by a test harness).
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized with filters `{filters}`");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filters_win_over_env() {
        let cfg = LoggingConfig {
            filters: Some("debug".into()),
            ..Default::default()
        };
        assert_eq!(cfg.resolve_filters(Some("trace".into())), "debug");
    }

    #[test]
    fn env_used_when_no_explicit_filters() {
        let cfg = LoggingConfig::default();
        assert_eq!(cfg.resolve_filters(Some("warn".into())), "warn");
    }

    #[test]
    fn blank_filters_fall_back_to_default() {
        let cfg = LoggingConfig {
            filters: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(cfg.resolve_filters(None), DEFAULT_FILTERS);
        assert_eq!(LoggingConfig::default().resolve_filters(None), DEFAULT_FILTERS);
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::default());
    }
}
