//! `tracing` setup for the browser. Events are formatted by `tracing-subscriber`
//! and forwarded to the developer console at a matching console level.

use tracing::level_filters::LevelFilter;

/// Parses a configured log level, defaulting to `INFO` for unknown values.
pub fn parse_log_level(value: &str) -> LevelFilter {
    // `LevelFilter` reads "" as ERROR.
    let value = value.trim();
    if value.is_empty() {
        return LevelFilter::INFO;
    }
    value.parse().unwrap_or(LevelFilter::INFO)
}

/// Installs the global subscriber. Calling it twice keeps the first one.
#[cfg(target_arch = "wasm32")]
pub fn init(log_level: &str) {
    let level = parse_log_level(log_level);

    // wasm32-unknown-unknown has no system clock, so timestamps stay off.
    let result = tracing_subscriber::fmt()
        .with_writer(console::ConsoleMakeWriter)
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;
    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    pub struct ConsoleMakeWriter;

    /// Buffers one formatted event and emits it on drop.
    pub struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let line = String::from_utf8_lossy(&self.buffer);
            let line = JsValue::from_str(line.trim_end());
            match self.level {
                Level::ERROR => web_sys::console::error_1(&line),
                Level::WARN => web_sys::console::warn_1(&line),
                Level::INFO => web_sys::console::info_1(&line),
                _ => web_sys::console::debug_1(&line),
            }
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                level: Level::INFO,
                buffer: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                level: *meta.level(),
                buffer: Vec::new(),
            }
        }
    }
}
