//! Logger setup
//!
//! The terminal UI owns the screen, so the interactive form logs to a file
//! (debug builds only). One-shot lookups log to stderr.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};

const LOG_FILE: &str = "kgcomplete.log";

pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE)
}

/// Log to stderr, honoring `RUST_LOG` (warnings by default)
pub fn init_stderr() {
    let _ = builder("warn").target(Target::Stderr).try_init();
}

/// Append to the log file in debug builds; release builds stay silent
pub fn init_file() {
    if !cfg!(debug_assertions) {
        return;
    }

    let path = log_file_path();
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(_) => return,
    };

    if builder("debug")
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .is_ok()
    {
        log::debug!("Logging to {}", path.display());
    }
}

fn builder(default_level: &str) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} {}: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });
    builder
}
