use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Pick the log level for the run. Diagnostics only show with --debug.
pub fn log_level(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initialize logging on stderr with the specified level
pub fn init_logging(debug: bool) -> LevelFilter {
    let level = log_level(debug);

    // A logger may already be installed (e.g. in tests); keep that one
    let _ = SimpleLogger::new()
        .with_level(level)
        .without_timestamps()
        .init();

    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(true), LevelFilter::Debug);
        assert_eq!(log_level(false), LevelFilter::Warn);
    }
}
