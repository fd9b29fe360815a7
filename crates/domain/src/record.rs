use crate::name::DnsName;
use std::fmt;
use std::str::FromStr;

/// Experimental RR type carrying an IPN node number (8-byte big-endian).
pub const IPN_TYPE_CODE: u16 = 264;

/// One synthetic resource record: an owner pattern (optionally with a
/// leftmost `*` wildcard label) mapping to an IPN node number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpnRecord {
    pub pattern: DnsName,

    pub rtype: u16,

    pub node: u64,

    pub ttl: u32,
}

impl IpnRecord {
    pub fn new(pattern: DnsName, node: u64) -> Self {
        Self {
            pattern,
            rtype: IPN_TYPE_CODE,
            node,
            ttl: 0,
        }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    /// Wire payload: the node number as 8 big-endian octets.
    pub fn rdata(&self) -> [u8; 8] {
        self.node.to_be_bytes()
    }
}

impl fmt::Display for IpnRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} IN IPN {}", self.pattern, self.ttl, self.node)
    }
}

/// Immutable ordered record table, fixed at construction.
///
/// Iteration order is declaration order; replies preserve it. Safe to share
/// read-only across concurrent query handlers.
#[derive(Debug, Clone)]
pub struct RecordTable {
    records: Vec<IpnRecord>,
}

impl RecordTable {
    pub fn new(records: Vec<IpnRecord>) -> Self {
        Self { records }
    }

    /// The canonical table used when no records are configured:
    ///
    /// ```text
    /// *.com.                 0  IN  IPN  1
    /// *.edu.                 0  IN  IPN  2
    /// *.net.                 0  IN  IPN  1
    /// *.net.                 0  IN  IPN  2
    /// *.net.                 0  IN  IPN  3
    /// *.org.                 0  IN  IPN  2
    /// *.org.                 0  IN  IPN  3
    /// *.org.                 0  IN  IPN  5
    /// xn--gieen-nqa.de.      0  IN  IPN  1
    /// xn--hxa3aa3a0982a.gr.  0  IN  IPN  2
    /// ```
    pub fn builtin() -> Self {
        let entries: &[(&str, u64)] = &[
            ("*.com", 1),
            ("*.edu", 2),
            ("*.net", 1),
            ("*.net", 2),
            ("*.net", 3),
            ("*.org", 2),
            ("*.org", 3),
            ("*.org", 5),
            ("xn--gieen-nqa.de", 1),
            ("xn--hxa3aa3a0982a.gr", 2),
        ];
        let records = entries
            .iter()
            .map(|(pattern, node)| {
                let pattern =
                    DnsName::from_str(pattern).expect("builtin record patterns are well-formed");
                IpnRecord::new(pattern, *node)
            })
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[IpnRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
