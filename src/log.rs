//! Simple file-based logging for debugging

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Get the directory where the executable is located
pub fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .unwrap_or_else(|_| PathBuf::from("fltkit"))
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Default log file location (next to the executable)
pub fn default_log_path() -> PathBuf {
    exe_dir().join("fltkit.log")
}

/// Initialize logging to the given file, truncating it.
///
/// Messages logged before `init` are dropped.
pub fn init(path: &Path) {
    if let Ok(file) = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
    {
        *LOG_FILE.lock() = Some(file);
    }

    log("=== fltkit log started ===");
}

/// Stop logging and close the file
pub fn shutdown() {
    *LOG_FILE.lock() = None;
}

/// Whether a log file is currently open
pub fn is_enabled() -> bool {
    LOG_FILE.lock().is_some()
}

fn timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S%.3f")
        .to_string()
}

/// Log a message to the file
pub fn log(msg: &str) {
    let mut guard = LOG_FILE.lock();
    if let Some(ref mut file) = *guard {
        let _ = writeln!(file, "[{}] {}", timestamp(), msg);
        let _ = file.flush();
    }
}

/// Log a formatted message
#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::log::log(&format!($($arg)*))
    };
}

/// Log with function context
#[macro_export]
macro_rules! log_fn {
    ($fn_name:expr) => {
        $crate::log::log(&format!("-> {}", $fn_name))
    };
    ($fn_name:expr, $($arg:tt)*) => {
        $crate::log::log(&format!("-> {}: {}", $fn_name, format!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_writes_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.log");

        init(&path);
        assert!(is_enabled());
        crate::log!("reload rows={}", 3);
        crate::log_fn!("on_draw_cell", "row={}", 7);
        shutdown();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("=== fltkit log started ==="));
        assert!(content.contains("reload rows=3"));
        assert!(content.contains("-> on_draw_cell: row=7"));
    }
}
