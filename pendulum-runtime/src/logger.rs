use log::{Level, LevelFilter, Log, Metadata, Record};

/// Logger for services supervised by systemd.
///
/// Records are written without timestamps, prefixed with the syslog priority
/// so the journal picks up the level.
pub struct SystemdLogger {
    level: LevelFilter,
}

impl SystemdLogger {
    /// Install the logger as the global logger.
    pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(Self { level }))?;
        log::set_max_level(level);
        Ok(())
    }

    fn priority(level: Level) -> &'static str {
        match level {
            Level::Error => "<3>",
            Level::Warn => "<4>",
            Level::Info => "<6>",
            Level::Debug | Level::Trace => "<7>",
        }
    }
}

impl Log for SystemdLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let priority = Self::priority(record.level());
        if record.level() == Level::Error {
            eprintln!("{}{}", priority, record.args());
        } else {
            println!("{}{}", priority, record.args());
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority() {
        assert_eq!(SystemdLogger::priority(Level::Error), "<3>");
        assert_eq!(SystemdLogger::priority(Level::Warn), "<4>");
        assert_eq!(SystemdLogger::priority(Level::Trace), "<7>");
    }

    #[test]
    fn test_enabled() {
        let logger = SystemdLogger {
            level: LevelFilter::Info,
        };

        assert!(logger.enabled(&Metadata::builder().level(Level::Warn).build()));
        assert!(!logger.enabled(&Metadata::builder().level(Level::Debug).build()));
    }
}
