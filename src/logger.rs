// Process logger behind the `log` facade: timestamped one-line records, optional stderr
// mirror, warn+ appended to the configured log file, plus a panic hook writing to the same file.

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::backtrace::Backtrace;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

lazy_static! {
    static ref MIRROR_STDERR: bool = {
        let v = std::env::var("COUNTER_CARD_LOG_STDERR").unwrap_or_else(|_| "0".to_string());
        is_truthy(&v)
    };
}
lazy_static! {
    static ref LOG_FILE: Mutex<Option<std::fs::File>> = Mutex::new(None);
}
lazy_static! {
    // Warn+ lines logged before the log file path is known (config loading).
    static ref PENDING_LINES: Mutex<Vec<String>> = Mutex::new(Vec::new());
}

const MAX_PENDING_LINES: usize = 256;

struct AppLogger;

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match log::max_level().to_level() {
            Some(max) => metadata.level() <= max,
            None => false,
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(
            &timestamp_millis(),
            record.level(),
            record.target(),
            &record.args().to_string(),
        );

        if *MIRROR_STDERR {
            eprintln!("{}", line);
        }

        if matches!(record.level(), Level::Warn | Level::Error) {
            write_file_line(&line);
        }
    }

    fn flush(&self) {
        if let Ok(mut lf) = LOG_FILE.lock() {
            if let Some(f) = lf.as_mut() {
                let _ = f.flush();
            }
        }
    }
}

fn is_truthy(v: &str) -> bool {
    matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

fn format_line(ts: &str, level: Level, target: &str, msg: &str) -> String {
    format!("[{}] [{:>5}] {}: {}", ts, level, target, msg)
}

/// Parses a `RUST_LOG`-style value. Only the level words are understood;
/// module filters are ignored.
pub fn parse_level(val: &str) -> Option<LevelFilter> {
    let v = val.to_lowercase();
    if v.contains("trace") {
        Some(LevelFilter::Trace)
    } else if v.contains("debug") {
        Some(LevelFilter::Debug)
    } else if v.contains("info") {
        Some(LevelFilter::Info)
    } else if v.contains("warn") {
        Some(LevelFilter::Warn)
    } else if v.contains("error") {
        Some(LevelFilter::Error)
    } else if v.contains("off") {
        Some(LevelFilter::Off)
    } else {
        None
    }
}

/// Installs the logger and the panic hook. Level defaults to info unless `RUST_LOG` says
/// otherwise.
pub fn init() {
    let _ = log::set_boxed_logger(Box::new(AppLogger));

    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|v| parse_level(&v))
        .unwrap_or(LevelFilter::Info);
    log::set_max_level(level);

    install_panic_hook();

    log::info!("logger initialized at level {}", level.as_str().to_lowercase());
}

/// Opens (or creates) the log file for appending and flushes warn+ lines logged before it
/// was known.
pub fn open_log_file(path: &Path) {
    let file = OpenOptions::new().create(true).append(true).open(path);
    match file {
        Ok(mut f) => {
            if let Ok(mut pending) = PENDING_LINES.lock() {
                for line in pending.drain(..) {
                    let _ = writeln!(f, "{}", line);
                }
                let _ = f.flush();
            }
            if let Ok(mut lf) = LOG_FILE.lock() {
                *lf = Some(f);
            }
            log::debug!("persisting warnings to {}", path.to_string_lossy());
        }
        Err(e) => {
            log::warn!("cannot open log file {}: {}", path.to_string_lossy(), e);
        }
    }
}

fn timestamp_millis() -> String {
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    format!("{}.{:03}", now.as_secs(), now.subsec_millis())
}

fn write_file_line(line: &str) {
    if let Ok(mut lf) = LOG_FILE.lock() {
        if let Some(f) = lf.as_mut() {
            let _ = writeln!(f, "{}", line);
            let _ = f.flush();
            return;
        }
    }
    if let Ok(mut pending) = PENDING_LINES.lock() {
        if pending.len() < MAX_PENDING_LINES {
            pending.push(line.to_string());
        }
    }
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        let msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            *s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.as_str()
        } else {
            "Box<Any>"
        };

        let loc = match panic_info.location() {
            Some(l) => format!("{}:{}:{}", l.file(), l.line(), l.column()),
            None => "unknown".to_string(),
        };

        let bt = Backtrace::force_capture();
        write_file_line(&format!("[{}] [ERROR] panic at {loc}: {msg}", timestamp_millis()));
        for line in format!("{bt:?}").lines() {
            write_file_line(line);
        }

        log::error!("panic at {loc}: {msg}");
        if !*MIRROR_STDERR {
            eprintln!("panic at {loc}: {msg}");
        }
    }));
}
