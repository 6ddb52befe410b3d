//! Console Logger
//!
//! `log` backend writing to the browser console, one line per record tagged
//! with the emitting module: `[MANAGER] INFO loaded 3 contacts`.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

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
        let line = JsValue::from_str(&format_line(record.level(), record.target(), record.args()));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger; a second call is ignored
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

/// Last path segment of the target, upper-cased
fn tag(target: &str) -> String {
    target.rsplit("::").next().unwrap_or(target).to_uppercase()
}

fn format_line(level: Level, target: &str, args: &std::fmt::Arguments) -> String {
    format!("[{}] {} {}", tag(target), level, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line(Level::Info, "contact_manager_ui::manager", &format_args!("loaded {} contacts", 3));
        assert_eq!(line, "[MANAGER] INFO loaded 3 contacts");
    }

    #[test]
    fn test_tag_without_path() {
        assert_eq!(tag("app"), "APP");
    }
}
