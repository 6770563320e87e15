//! File logging initialization.
//!
//! The UI owns the terminal, so logs go to a file only. A missing or
//! unwritable log file downgrades to running unlogged rather than failing
//! startup.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};

pub fn initialize(log_path: &Path) {
    match File::create(log_path) {
        Ok(file) => {
            let _ = WriteLogger::init(LevelFilter::Info, build_config(), file);
        }
        Err(err) => {
            eprintln!("Warning: could not create log file at {log_path:?}: {err}");
        }
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
