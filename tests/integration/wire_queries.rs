//! End-to-end wire tests: boot the server on an ephemeral port and speak
//! real DNS over UDP and TCP.

use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::{DNSClass, Name, RData, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use hickory_server::ServerFuture;
use ipn_dns_application::use_cases::ResolveQueryUseCase;
use ipn_dns_domain::RecordTable;
use ipn_dns_infrastructure::dns::query_logger::TracingQueryLogger;
use ipn_dns_infrastructure::dns::server::StubDnsHandler;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, UdpSocket};

const IPN: RecordType = RecordType::Unknown(264);
const RECV_TIMEOUT: Duration = Duration::from_secs(5);

fn make_handler() -> StubDnsHandler {
    let use_case = Arc::new(ResolveQueryUseCase::new(
        Arc::new(RecordTable::builtin()),
        Arc::new(TracingQueryLogger),
    ));
    StubDnsHandler::new(use_case)
}

async fn start_udp_server() -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();
    let mut server = ServerFuture::new(make_handler());
    server.register_socket(socket);
    tokio::spawn(async move {
        let _ = server.block_until_done().await;
    });
    addr
}

async fn start_tcp_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let mut server = ServerFuture::new(make_handler());
    server.register_listener(listener, RECV_TIMEOUT);
    tokio::spawn(async move {
        let _ = server.block_until_done().await;
    });
    addr
}

fn build_query(id: u16, name: &str, record_type: RecordType) -> Vec<u8> {
    let mut query = Query::new();
    query.set_name(Name::from_str(name).unwrap());
    query.set_query_type(record_type);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}

async fn query_udp(server: SocketAddr, name: &str, record_type: RecordType) -> Message {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    socket
        .send_to(&build_query(0x29b1, name, record_type), server)
        .await
        .unwrap();

    let mut buf = [0u8; 4096];
    let (len, _) = tokio::time::timeout(RECV_TIMEOUT, socket.recv_from(&mut buf))
        .await
        .expect("timed out waiting for UDP response")
        .unwrap();
    Message::from_vec(&buf[..len]).unwrap()
}

async fn query_tcp(server: SocketAddr, name: &str, record_type: RecordType) -> Message {
    let mut stream = TcpStream::connect(server).await.unwrap();

    // RFC 1035 §4.2.2: two-octet length prefix on TCP.
    let query = build_query(0x29b2, name, record_type);
    let mut framed = Vec::with_capacity(query.len() + 2);
    framed.extend_from_slice(&(query.len() as u16).to_be_bytes());
    framed.extend_from_slice(&query);
    stream.write_all(&framed).await.unwrap();

    let mut len_buf = [0u8; 2];
    tokio::time::timeout(RECV_TIMEOUT, stream.read_exact(&mut len_buf))
        .await
        .expect("timed out waiting for TCP response")
        .unwrap();
    let len = u16::from_be_bytes(len_buf) as usize;
    let mut buf = vec![0u8; len];
    stream.read_exact(&mut buf).await.unwrap();
    Message::from_vec(&buf).unwrap()
}

/// Decodes each answer's 8-byte big-endian IPN payload.
fn answer_nodes(message: &Message) -> Vec<u64> {
    message
        .answers()
        .iter()
        .map(|record| match record.data() {
            RData::Unknown { code, rdata } => {
                assert_eq!(*code, RecordType::from(264));
                let bytes: [u8; 8] = rdata
                    .anything()
                    .try_into()
                    .expect("IPN payload must be 8 octets");
                u64::from_be_bytes(bytes)
            }
            other => panic!("unexpected rdata: {other:?}"),
        })
        .collect()
}

// ── UDP ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_udp_net_wildcard_returns_three_answers() {
    let server = start_udp_server().await;

    let response = query_udp(server, "foo.net.", IPN).await;

    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert_eq!(response.id(), 0x29b1);
    assert_eq!(answer_nodes(&response), vec![1, 2, 3]);
    for record in response.answers() {
        assert_eq!(record.name(), &Name::from_str("foo.net.").unwrap());
        assert_eq!(record.record_type(), IPN);
        assert_eq!(record.ttl(), 0);
    }
}

#[tokio::test]
async fn test_udp_single_wildcard_match() {
    let server = start_udp_server().await;

    let response = query_udp(server, "anything.com.", IPN).await;

    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert_eq!(answer_nodes(&response), vec![1]);
}

#[tokio::test]
async fn test_udp_any_query_matches_org_records() {
    let server = start_udp_server().await;

    let response = query_udp(server, "bar.org.", RecordType::ANY).await;

    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert_eq!(answer_nodes(&response), vec![2, 3, 5]);
}

#[tokio::test]
async fn test_udp_cname_query_matches_like_any() {
    let server = start_udp_server().await;

    let response = query_udp(server, "baz.edu.", RecordType::CNAME).await;

    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert_eq!(answer_nodes(&response), vec![2]);
}

#[tokio::test]
async fn test_udp_idn_names_resolve_exactly() {
    let server = start_udp_server().await;

    let response = query_udp(server, "xn--gieen-nqa.de.", IPN).await;
    assert_eq!(answer_nodes(&response), vec![1]);

    let response = query_udp(server, "xn--hxa3aa3a0982a.gr.", IPN).await;
    assert_eq!(answer_nodes(&response), vec![2]);
}

#[tokio::test]
async fn test_udp_unmatched_name_is_nxdomain() {
    let server = start_udp_server().await;

    let response = query_udp(server, "example.invalid.", IPN).await;

    assert_eq!(response.response_code(), ResponseCode::NXDomain);
    assert!(response.answers().is_empty());
}

#[tokio::test]
async fn test_udp_wildcard_does_not_cross_labels() {
    let server = start_udp_server().await;

    let response = query_udp(server, "a.b.net.", IPN).await;

    assert_eq!(response.response_code(), ResponseCode::NXDomain);
    assert!(response.answers().is_empty());
}

#[tokio::test]
async fn test_udp_foreign_type_is_nxdomain() {
    let server = start_udp_server().await;

    let response = query_udp(server, "foo.net.", RecordType::A).await;

    assert_eq!(response.response_code(), ResponseCode::NXDomain);
    assert!(response.answers().is_empty());
}

#[tokio::test]
async fn test_udp_repeated_queries_are_identical() {
    let server = start_udp_server().await;

    let first = query_udp(server, "foo.net.", IPN).await;
    let second = query_udp(server, "foo.net.", IPN).await;

    assert_eq!(answer_nodes(&first), answer_nodes(&second));
    assert_eq!(first.response_code(), second.response_code());
}

// ── TCP ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_tcp_net_wildcard_returns_three_answers() {
    let server = start_tcp_server().await;

    let response = query_tcp(server, "foo.net.", IPN).await;

    assert_eq!(response.response_code(), ResponseCode::NoError);
    assert_eq!(response.id(), 0x29b2);
    assert_eq!(answer_nodes(&response), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_tcp_unmatched_name_is_nxdomain() {
    let server = start_tcp_server().await;

    let response = query_tcp(server, "example.invalid.", IPN).await;

    assert_eq!(response.response_code(), ResponseCode::NXDomain);
    assert!(response.answers().is_empty());
}
