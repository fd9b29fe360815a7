//! Centralized mapping between `ipn_dns_domain::QueryType` and
//! `hickory_proto::rr::RecordType`.
//!
//! Every conversion between the wire layer and the domain goes through here.

use hickory_proto::rr::RecordType as HickoryRecordType;
use ipn_dns_domain::{QueryType, IPN_TYPE_CODE};

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert hickory RecordType → domain QueryType (for incoming queries).
    ///
    /// Total: types this server has no records for become `Other` and
    /// resolve to NXDOMAIN rather than NotImp.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> QueryType {
        QueryType::from_code(u16::from(hickory_type))
    }

    /// Convert domain QueryType → hickory RecordType (for outgoing answers).
    pub fn to_hickory(qtype: &QueryType) -> HickoryRecordType {
        match qtype {
            QueryType::Ipn => HickoryRecordType::Unknown(IPN_TYPE_CODE),
            QueryType::Any => HickoryRecordType::ANY,
            QueryType::Cname => HickoryRecordType::CNAME,
            QueryType::Other(code) => HickoryRecordType::from(*code),
        }
    }
}
