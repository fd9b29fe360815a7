use crate::name::DnsName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyCode {
    NoError,
    NxDomain,
}

impl ReplyCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyCode::NoError => "NOERROR",
            ReplyCode::NxDomain => "NXDOMAIN",
        }
    }
}

impl std::fmt::Display for ReplyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One answer record: a matched table record with its owner name rewritten to
/// the literal queried name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub owner: DnsName,
    pub rtype: u16,
    pub node: u64,
    pub ttl: u32,
}

impl Answer {
    /// Wire payload: the node number as 8 big-endian octets.
    pub fn rdata(&self) -> [u8; 8] {
        self.node.to_be_bytes()
    }
}

/// Outcome of one resolution: matched answers in table order, or NXDOMAIN
/// when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub answers: Vec<Answer>,
    pub code: ReplyCode,
}

impl Reply {
    pub fn new(answers: Vec<Answer>) -> Self {
        let code = if answers.is_empty() {
            ReplyCode::NxDomain
        } else {
            ReplyCode::NoError
        };
        Self { answers, code }
    }

    pub fn is_nxdomain(&self) -> bool {
        self.code == ReplyCode::NxDomain
    }
}
