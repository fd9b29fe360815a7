use crate::config::errors::ConfigError;
use crate::name::DnsName;
use crate::record::IpnRecord;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One configured record: an owner pattern (optionally with a leftmost `*`
/// label) mapping to an IPN node number.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecordEntry {
    pub pattern: String,

    pub node: u64,

    #[serde(default)]
    pub ttl: Option<u32>,
}

impl RecordEntry {
    pub fn ttl_or_default(&self) -> u32 {
        self.ttl.unwrap_or(0)
    }

    pub fn to_record(&self) -> Result<IpnRecord, ConfigError> {
        let pattern = DnsName::from_str(&self.pattern)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        if !pattern.is_valid_pattern() {
            return Err(ConfigError::Validation(format!(
                "wildcard label must be leftmost in record pattern '{}'",
                self.pattern
            )));
        }
        Ok(IpnRecord::new(pattern, self.node).with_ttl(self.ttl_or_default()))
    }
}
