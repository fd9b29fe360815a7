use async_trait::async_trait;
use ipn_dns_application::ports::{QueryLogEntry, QueryLogSink};
use std::sync::Mutex;

/// Records every entry handed to the sink so tests can assert on them.
#[derive(Default)]
pub struct MockQueryLogSink {
    entries: Mutex<Vec<QueryLogEntry>>,
}

impl MockQueryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<QueryLogEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryLogSink for MockQueryLogSink {
    async fn log_query(&self, entry: &QueryLogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}
