use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Forwards `log` records to the browser console, tagged with their module
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl ConsoleLogger {
    fn format(record: &Record) -> String {
        format!("[{}] {}", component(record.target()), record.args())
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = Self::format(record);
        match record.level() {
            Level::Error => gloo::console::error!(message),
            Level::Warn => gloo::console::warn!(message),
            Level::Info => gloo::console::info!(message),
            Level::Debug | Level::Trace => gloo::console::debug!(message),
        }
    }

    fn flush(&self) {}
}

/// Level used when nothing else is configured
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the console logger. Only the first call takes effect.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Last path segment of a module target, e.g. `finance_visualization`
fn component(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_from_target() {
        assert_eq!(
            component("allowance_finance::components::finance::finance_visualization"),
            "finance_visualization"
        );
        assert_eq!(component("main"), "main");
    }

    #[test]
    fn test_message_format() {
        let record = Record::builder()
            .args(format_args!("skipping paint"))
            .level(Level::Debug)
            .target("app::components::finance::finance_visualization")
            .build();
        assert_eq!(
            ConsoleLogger::format(&record),
            "[finance_visualization] skipping paint"
        );
    }

    #[test]
    fn test_default_level_is_at_least_info() {
        assert!(default_level() >= LevelFilter::Info);
    }
}
