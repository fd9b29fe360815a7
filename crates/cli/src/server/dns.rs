use hickory_server::ServerFuture;
use ipn_dns_infrastructure::dns::server::StubDnsHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, UdpSocket};
use tracing::info;

/// Binds the listeners and runs the DNS server until completion.
///
/// UDP is always served; TCP is added when `tcp` is set. Both run on the
/// same hickory `ServerFuture`, which spawns one task per listener.
pub async fn start_dns_server(
    bind_addr: String,
    handler: StubDnsHandler,
    tcp: bool,
    tcp_timeout: Duration,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let mut server = ServerFuture::new(handler);

    server.register_socket(create_udp_socket(domain, socket_addr)?);
    info!(bind_address = %socket_addr, "UDP listener registered");

    if tcp {
        server.register_listener(create_tcp_listener(domain, socket_addr)?, tcp_timeout);
        info!(bind_address = %socket_addr, "TCP listener registered");
    }

    info!(
        "DNS server ready on {} [{}]",
        socket_addr,
        if tcp { "UDP/TCP" } else { "UDP" }
    );

    server.block_until_done().await?;
    Ok(())
}

fn create_udp_socket(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

fn create_tcp_listener(domain: Domain, socket_addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(128)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}
