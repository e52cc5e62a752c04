use log::{Level, Metadata, Record};

pub struct Logger;

impl log::Log for Logger {
	fn enabled(&self, _: &Metadata) -> bool {
		true
	}

	fn log(&self, record: &Record) {
		if record.level() <= Level::Warn {
			eprintln!("[{}] {}", record.level(), record.args());
		} else {
			eprintln!(
				"[{}] {}: {}",
				record.level(),
				record.target(),
				record.args()
			);
		}
	}

	fn flush(&self) {}
}
