//! Console Logging
//!
//! `log` facade backed by the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        let line = JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// `[TARGET] message`, with the crate prefix dropped from the target
fn format_line(level: Level, target: &str, message: &str) -> String {
    let module = target.rsplit("::").next().unwrap_or(target).to_uppercase();
    if level <= Level::Warn {
        format!("[{}] {}: {}", module, level, message)
    } else {
        format!("[{}] {}", module, message)
    }
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line(Level::Info, "market_ui::pages::cart", "bound 2 steppers"),
            "[CART] bound 2 steppers"
        );
        assert_eq!(
            format_line(Level::Error, "market_ui::commands::notifications", "socket closed"),
            "[NOTIFICATIONS] ERROR: socket closed"
        );
    }
}
