// Console-backed `log` sink. Replaces the old ad-hoc `clog` helper.
use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_record(record.level(), record.target(), &record.args().to_string()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_record(level: Level, target: &str, msg: &str) -> String {
    // strip the crate prefix, console output is noisy enough already
    let target = target.split_once("::").map(|(_, rest)| rest).unwrap_or(target);
    format!("[{}] {}: {}", level, target, msg)
}

/// Install the console logger. A second call only adjusts the level.
pub fn init(level: LevelFilter) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_crate_prefix_from_target() {
        let line = format_record(Level::Warn, "hope_site_frontend::mobile::clipboard", "denied");
        assert_eq!(line, "[WARN] mobile::clipboard: denied");
    }

    #[test]
    fn keeps_bare_target() {
        let line = format_record(Level::Info, "app", "ready");
        assert_eq!(line, "[INFO] app: ready");
    }
}
