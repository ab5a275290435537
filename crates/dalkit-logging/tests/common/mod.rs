use std::io::Write;
use std::sync::{Arc, Mutex};

use dalkit_logging::{LogSink, Severity, SinkError};

/// One sink invocation as seen by a [`RecordingSink`]
pub type Call = (String, Severity, String);

/// Shared journal written by every [`RecordingSink`] in a test
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<Call>>>);

impl Journal {
    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    #[allow(dead_code)]
    pub fn calls_for(&self, sink_id: &str) -> usize {
        self.calls().iter().filter(|(id, _, _)| id == sink_id).count()
    }
}

/// Sink that appends every invocation to a shared journal
pub struct RecordingSink {
    id: String,
    journal: Journal,
}

impl RecordingSink {
    pub fn new(id: impl Into<String>, journal: &Journal) -> Arc<Self> {
        Arc::new(Self {
            id: id.into(),
            journal: journal.clone(),
        })
    }
}

impl LogSink for RecordingSink {
    fn id(&self) -> &str {
        &self.id
    }

    fn write(&self, severity: Severity, message: &str) -> Result<(), SinkError> {
        self.journal
            .0
            .lock()
            .unwrap()
            .push((self.id.clone(), severity, message.to_string()));
        Ok(())
    }
}

/// Sink that panics on every write
#[allow(dead_code)]
pub struct PanickingSink;

impl LogSink for PanickingSink {
    fn id(&self) -> &str {
        "test.panicking"
    }

    fn write(&self, _severity: Severity, _message: &str) -> Result<(), SinkError> {
        panic!("sink exploded")
    }
}

/// In-memory `Write` target whose contents can be read back
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    #[allow(dead_code)]
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[allow(dead_code)]
pub fn severity_strategy() -> impl proptest::strategy::Strategy<Value = Severity> {
    proptest::sample::select(Severity::ALL.to_vec())
}
