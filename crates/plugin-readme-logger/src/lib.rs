use colored::Colorize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

static LOG_FILE: Mutex<Option<PathBuf>> = Mutex::new(None);
static VERBOSITY: Mutex<u8> = Mutex::new(NORMAL);

/// Only errors reach the console
pub const QUIET: u8 = 0;
/// Progress, info and success messages
pub const NORMAL: u8 = 1;
/// Adds debug messages (-v)
pub const DEBUG: u8 = 2;
/// Adds trace/step messages (-vv)
pub const TRACE: u8 = 3;

/// Get the current verbosity level
pub fn get_verbosity() -> u8 {
    VERBOSITY.lock().ok().map_or(NORMAL, |v| *v)
}

/// Set the verbosity level without touching the log file
pub fn set_verbosity(verbosity: u8) {
    if let Ok(mut v) = VERBOSITY.lock() {
        *v = verbosity;
    }
}

/// Initialize the logger with a verbosity level and an optional log file.
///
/// The log file is appended to, never truncated, so repeated hook runs
/// accumulate in one place.
pub fn init_with_verbosity(verbosity: u8, log_file: Option<PathBuf>) -> Result<(), String> {
    set_verbosity(verbosity);

    if let Some(path) = &log_file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create log directory: {}", e))?;
        }
    }

    let mut guard = LOG_FILE
        .lock()
        .map_err(|_| "Log file lock poisoned".to_string())?;
    *guard = log_file;

    Ok(())
}

/// Write to log file
fn write_to_log(message: &str) {
    if let Ok(log_file_guard) = LOG_FILE.lock() {
        if let Some(ref log_path) = *log_file_guard {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(log_path) {
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(file, "[{}] {}", timestamp, message);
            }
        }
    }
}

/// Log a progress message for a major step of a run
pub fn progress(message: &str) {
    write_to_log(&format!("PROGRESS {}", message));
    if get_verbosity() >= NORMAL {
        eprintln!("{} {}", "::".cyan().bold(), message);
    }
}

/// Log an informational message
pub fn info(message: &str) {
    write_to_log(&format!("INFO {}", message));
    if get_verbosity() >= NORMAL {
        eprintln!("{}", message);
    }
}

/// Log a debug message (console at -v, always to file)
pub fn debug(message: &str) {
    write_to_log(&format!("DEBUG {}", message));
    if get_verbosity() >= DEBUG {
        eprintln!("{} {}", "DEBUG:".blue().bold(), message);
    }
}

/// Log a step message (console at -vv, always to file)
pub fn step(message: &str) {
    write_to_log(&format!("STEP {}", message));
    if get_verbosity() >= TRACE {
        eprintln!("{} {}", "TRACE:".dimmed(), message);
    }
}

/// Log an error message (to both file and console)
pub fn error(message: &str) {
    write_to_log(&format!("ERROR {}", message));
    eprintln!("{} {}", "Error:".red().bold(), message);
}

/// Log a success message
pub fn success(message: &str) {
    write_to_log(&format!("SUCCESS {}", message));
    if get_verbosity() >= NORMAL {
        let check = "\u{2714}".green().bold();
        eprintln!("{} {}", check, message);
    }
}
