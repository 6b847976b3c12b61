use std::{fs::OpenOptions, io::Write, sync::Mutex};

use crate::trace::trace::AutofillEvent;

/// Append-only JSONL trace sink. Opening failures downgrade the logger to
/// disabled with a warning instead of failing the run.
pub struct TraceLogger {
    file: Option<Mutex<std::fs::File>>,
}

impl TraceLogger {
    pub fn new(path: &str) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self {
                file: Some(Mutex::new(file)),
            },
            Err(e) => {
                eprintln!("Warning: could not open trace file '{}': {}", path, e);
                Self::disabled()
            }
        }
    }

    /// A logger that drops every event.
    pub fn disabled() -> Self {
        Self { file: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    pub fn log(&self, event: &AutofillEvent) {
        let Some(file_mutex) = &self.file else {
            return;
        };
        let json = match serde_json::to_string(event) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Warning: failed to serialize trace event: {}", e);
                return;
            }
        };
        let Ok(mut file) = file_mutex.lock() else {
            eprintln!("Warning: trace logger lock poisoned");
            return;
        };
        if let Err(e) = writeln!(file, "{}", json) {
            eprintln!("Warning: failed to write trace event: {}", e);
        }
    }
}
