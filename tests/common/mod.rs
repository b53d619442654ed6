//! Common test utilities

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use cmdtree::App;

/// Writer backed by a shared buffer, so a test can keep reading what a
/// run wrote after the `App` has taken ownership of the stream.
#[derive(Clone, Default)]
pub struct CaptureBuf {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuf {
    pub fn new() -> Self {
        CaptureBuf::default()
    }

    /// Everything written so far, as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8(self.inner.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CaptureBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// An app named `demo` whose stdout is the returned capture buffer.
pub fn capture_app() -> (App, CaptureBuf) {
    let out = CaptureBuf::new();
    let app = App::with_name("demo").stdout(out.clone());
    (app, out)
}
