// Debug logging module for Termpong
// Provides file-based logging that can be enabled via the TERMPONG_DEBUG
// environment variable (the process takes no CLI arguments)

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

// Global flag to track whether debug logging is enabled
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("termpong-debug.log")
}

/// Initialize debug logging to file.
///
/// If disabled, returns immediately and no file is created. If enabled,
/// the log file is created or truncated and a session header is written.
pub fn init(enabled: bool) -> io::Result<()> {
    DEBUG_ENABLED.store(enabled, Ordering::Relaxed);

    if !enabled {
        return Ok(());
    }

    let path = log_file_path();
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;

    writeln!(file, "=== Termpong Debug Log ===")?;
    writeln!(file, "Session started: {:?}", SystemTime::now())?;
    writeln!(file, "To monitor: tail -f {}", path.display())?;
    writeln!(file, "========================================\n")?;

    Ok(())
}

/// Append one `[timestamp] [CATEGORY] message` line to the log file.
/// No-op when debug logging is disabled; logging failures are swallowed
/// so diagnostics can never take down the game.
pub fn log(category: &str, message: &str) {
    if !DEBUG_ENABLED.load(Ordering::Relaxed) {
        return;
    }

    let timestamp = SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);

    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path())
    {
        let _ = writeln!(file, "[{:013}] [{}] {}", timestamp, category, message);
    }
}
