// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct Logger {
    level: LevelFilter,
}

impl Logger {
    pub fn initialize(level: LevelFilter) {
        let logger = Box::leak(Box::new(Logger { level }));

        log::set_max_level(level);
        log::set_logger(logger).expect("No se pudo instalar el registrador");
        log::debug!("Registrador instalado con nivel {level}");
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level = match record.level() {
            Level::Error => record.level().as_str().red().bold(),
            Level::Warn => record.level().as_str().yellow().bold(),
            Level::Info => record.level().as_str().green(),
            Level::Debug => record.level().as_str().blue(),
            Level::Trace => record.level().as_str().dimmed(),
        };

        eprintln!("[{level}] {}: {}", record.file().unwrap_or_default(), record.args());
    }

    fn flush(&self) {}
}
