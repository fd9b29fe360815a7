use async_trait::async_trait;
use ipn_dns_application::ports::{QueryLogEntry, QueryLogSink};
use ipn_dns_domain::ReplyCode;
use tracing::info;

/// Query log sink that emits one structured tracing event per resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingQueryLogger;

#[async_trait]
impl QueryLogSink for TracingQueryLogger {
    async fn log_query(&self, entry: &QueryLogEntry) {
        match entry.code {
            ReplyCode::NoError => info!(
                name = %entry.name,
                qtype = %entry.qtype,
                client = %entry.client,
                answers = entry.answers,
                "query answered"
            ),
            ReplyCode::NxDomain => info!(
                name = %entry.name,
                qtype = %entry.qtype,
                client = %entry.client,
                "no matching records (NXDOMAIN)"
            ),
        }
    }
}
