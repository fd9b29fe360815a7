use crate::ports::{QueryLogEntry, QueryLogSink};
use ipn_dns_domain::{Answer, Query, RecordTable, Reply};
use std::net::IpAddr;
use std::sync::Arc;

/// Resolves queries against the immutable record table.
///
/// Pure scan in table order: a record answers when its owner pattern
/// wildcard-matches the query name and the requested type matches the
/// record's type (ANY and CNAME match every type). Matched records are
/// duplicated with their owner rewritten to the literal queried name. Zero
/// matches yields NXDOMAIN.
///
/// The table is never mutated after construction, so concurrent calls need
/// no coordination.
pub struct ResolveQueryUseCase {
    table: Arc<RecordTable>,
    query_log: Arc<dyn QueryLogSink>,
}

impl ResolveQueryUseCase {
    pub fn new(table: Arc<RecordTable>, query_log: Arc<dyn QueryLogSink>) -> Self {
        Self { table, query_log }
    }

    pub async fn execute(&self, query: &Query, client: IpAddr) -> Reply {
        let mut answers = Vec::new();

        for record in self.table.records() {
            if record.pattern.matches(&query.name) && query.qtype.matches(record.rtype) {
                answers.push(Answer {
                    owner: query.name.clone(),
                    rtype: record.rtype,
                    node: record.node,
                    ttl: record.ttl,
                });
            }
        }

        let reply = Reply::new(answers);

        let entry = QueryLogEntry {
            name: query.name.to_string(),
            qtype: query.qtype,
            client,
            answers: reply.answers.len(),
            code: reply.code,
        };
        let logger = self.query_log.clone();
        tokio::spawn(async move {
            logger.log_query(&entry).await;
        });

        reply
    }
}
