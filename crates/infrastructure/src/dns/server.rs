use crate::dns::record_type_map::RecordTypeMapper;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::rdata::NULL;
use hickory_proto::rr::{Name, RData, Record};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use ipn_dns_application::use_cases::ResolveQueryUseCase;
use ipn_dns_domain::{DnsName, Query};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Bridges hickory's wire layer to the resolve use case.
///
/// The transport (hickory `ServerFuture`) parses wire-format messages and
/// hands them here; this handler converts to domain types, resolves, and
/// serializes the reply. Answer records for the experimental IPN type go out
/// as RFC 3597 unknown rdata (type 264, 8-byte payload).
#[derive(Clone)]
pub struct StubDnsHandler {
    use_case: Arc<ResolveQueryUseCase>,
}

impl StubDnsHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase>) -> Self {
        Self { use_case }
    }
}

#[async_trait::async_trait]
impl RequestHandler for StubDnsHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let query = &request_info.query;
        let name_utf8 = query.name().to_utf8();
        let qtype = RecordTypeMapper::from_hickory(query.query_type());
        let client_ip = request.src().ip();

        let name = match DnsName::from_str(&name_utf8) {
            Ok(name) => name,
            Err(e) => {
                warn!(name = %name_utf8, error = %e, "Unusable query name");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        debug!(name = %name, qtype = %qtype, client = %client_ip, "DNS query received");

        let reply = self
            .use_case
            .execute(&Query::new(name, qtype), client_ip)
            .await;

        if reply.is_nxdomain() {
            return send_error_response(request, &mut response_handle, ResponseCode::NXDomain)
                .await;
        }

        let owner = Name::from_str(&name_utf8).unwrap_or_else(|_| Name::root());
        let answers: Vec<Record> = reply
            .answers
            .iter()
            .map(|answer| {
                Record::from_rdata(
                    owner.clone(),
                    answer.ttl,
                    RData::Unknown {
                        code: hickory_proto::rr::RecordType::from(answer.rtype),
                        rdata: NULL::with(answer.rdata().to_vec()),
                    },
                )
            })
            .collect();

        debug!(name = %name_utf8, answers = answers.len(), "Sending response");

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = *request.header();
        header.set_recursion_available(true);
        let response = builder.build(header, answers.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = *request.header();
    header.set_response_code(code);
    header.set_recursion_available(true);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
