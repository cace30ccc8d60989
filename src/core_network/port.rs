use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::core_network::datachan::DataMode;
use crate::helpers::send_response;
use crate::session::Session;
use log::{debug, info, warn};
use std::io;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use tokio::net::TcpStream;

/// Parses `h1,h2,h3,h4,p1,p2` into the address the client listens on.
///
/// The error is the complete 501 reply to send back.
pub fn parse_port_argument(arg: &str) -> Result<SocketAddrV4, &'static str> {
    let parts: Vec<&str> = arg.trim().split(',').map(str::trim).collect();
    if parts.len() != 6 {
        return Err("501 Syntax error in parameters or arguments.\r\n");
    }

    // Validate and construct the IP address
    let ip_parts = parts[0..4]
        .iter()
        .map(|x| x.parse::<u8>())
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|_| "501 Invalid IP address.\r\n")?;
    let ip = Ipv4Addr::new(ip_parts[0], ip_parts[1], ip_parts[2], ip_parts[3]);

    // Validate and construct the port number
    let port_parts = parts[4..6]
        .iter()
        .map(|x| x.parse::<u8>())
        .collect::<Result<Vec<u8>, _>>()
        .map_err(|_| "501 Invalid port number.\r\n")?;
    let port = (port_parts[0] as u16) << 8 | port_parts[1] as u16;

    Ok(SocketAddrV4::new(ip, port))
}

/// Sets up an active mode (PORT) connection.
pub async fn setup_port_connection(addr: SocketAddr) -> io::Result<TcpStream> {
    let data_stream = TcpStream::connect(addr).await?;
    debug!("Connected to client data port {}", addr);
    Ok(data_stream)
}

/// Handles the PORT (Active Mode) FTP command.
///
/// The connect runs in the background so a client that is slow to listen
/// does not hold up the control channel.
pub fn handle_port_command(session: &mut Session, arg: String) -> HandlerFuture<'_> {
    Box::pin(async move {
        let addr = match parse_port_argument(&arg) {
            Ok(addr) => addr,
            Err(response) => {
                warn!("Rejected PORT argument: {}", arg);
                send_response(&mut session.writer, response.as_bytes()).await?;
                return Ok(());
            }
        };

        info!("Received PORT command with address {}", addr);
        session.data_channel.adopt(
            DataMode::Active,
            tokio::spawn(setup_port_connection(SocketAddr::V4(addr))),
        );

        send_response(&mut session.writer, b"200 PORT command successful.\r\n").await?;
        Ok(())
    })
}
