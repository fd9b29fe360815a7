use async_trait::async_trait;
use ipn_dns_domain::{QueryType, ReplyCode};
use std::net::IpAddr;

/// One resolved query, as seen by the log sink.
#[derive(Debug, Clone)]
pub struct QueryLogEntry {
    pub name: String,
    pub qtype: QueryType,
    pub client: IpAddr,
    pub answers: usize,
    pub code: ReplyCode,
}

/// Receives one entry per resolution, fire-and-forget. Implementations must
/// not block the resolve path.
#[async_trait]
pub trait QueryLogSink: Send + Sync {
    async fn log_query(&self, entry: &QueryLogEntry);
}
