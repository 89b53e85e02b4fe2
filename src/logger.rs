use chrono::Local;
use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record};
use std::fmt::Arguments;
use std::fs;
use std::sync::Once;

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "hotel.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static INIT: Once = Once::new();

/// Initializes the global logger.
///
/// Call once at the start of `main`; later calls are no-ops.
///
/// Log level is controlled by the `RUST_LOG` environment variable and
/// defaults to `info` (e.g. `RUST_LOG=debug hotel_booking --room 102`).
/// Records go to stderr (coloured) and to `logs/hotel.log`.
pub fn init() {
    INIT.call_once(apply);
}

/// Writes `[timestamp level target] message`, colouring the level when `colors` is set.
fn write_record(out: FormatCallback, message: &Arguments, record: &Record, colors: Option<&ColoredLevelConfig>) {
    let timestamp = Local::now().format(TIMESTAMP_FORMAT);
    match colors {
        Some(colors) => out.finish(format_args!("[{} {} {}] {}", timestamp, colors.color(record.level()), record.target(), message)),
        None => out.finish(format_args!("[{} {} {}] {}", timestamp, record.level(), record.target(), message)),
    }
}

fn level_filter() -> LevelFilter {
    std::env::var("RUST_LOG").ok().and_then(|level| level.parse::<LevelFilter>().ok()).unwrap_or(LevelFilter::Info)
}

fn apply() {
    if let Err(e) = fs::create_dir_all(LOG_DIR) {
        eprintln!("Failed to create log directory at '{}': {}", LOG_DIR, e);
    }
    let log_file_path = format!("{}/{}", LOG_DIR, LOG_FILE);

    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::BrightBlack);

    let mut dispatch = Dispatch::new()
        .level(level_filter())
        .level_for("serde", LevelFilter::Warn)
        .chain(Dispatch::new().format(move |out, message, record| write_record(out, message, record, Some(&colors))).chain(std::io::stderr()));

    match fern::log_file(&log_file_path) {
        Ok(file) => {
            dispatch = dispatch.chain(Dispatch::new().format(|out, message, record| write_record(out, message, record, None)).chain(file));
        }
        Err(e) => eprintln!("Failed to open log file '{}': {}", log_file_path, e),
    }

    if let Err(e) = dispatch.apply() {
        eprintln!("Failed to apply logger configuration: {}", e);
        return;
    }

    log::info!("Logger initialized. Logging to console and '{}'.", log_file_path);
}
