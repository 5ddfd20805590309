//! Log capture for unit tests.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for Buffer {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.0.lock().extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

/// Runs `f` with a thread-local subscriber and returns the `WARN` and above
/// lines it emitted.
pub(crate) fn capture_warnings<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
	let buffer = Buffer::default();
	let writer = buffer.clone();
	let subscriber = tracing_subscriber::fmt()
		.with_writer(move || writer.clone())
		.with_max_level(tracing::Level::WARN)
		.with_ansi(false)
		.without_time()
		.with_target(false)
		.finish();

	let result = tracing::subscriber::with_default(subscriber, f);

	let bytes = buffer.0.lock().clone();
	let lines = String::from_utf8_lossy(&bytes)
		.lines()
		.map(str::to_string)
		.collect();
	(result, lines)
}
