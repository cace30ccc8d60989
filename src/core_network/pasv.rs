use crate::core_ftpcommand::handlers::HandlerFuture;
use crate::core_network::datachan::DataMode;
use crate::core_network::error::DataChanError;
use crate::helpers::send_response;
use crate::session::Session;
use log::{debug, info};
use std::io;
use std::net::Ipv4Addr;
use tokio::net::{TcpListener, TcpStream};

/// Sets up a passive mode (PASV) listener and sends the response to the client.
///
/// The accept runs in the background; the next transfer command picks the
/// connection up through the session's data channel.
pub fn handle_pasv_command(session: &mut Session, _arg: String) -> HandlerFuture<'_> {
    Box::pin(async move {
        let pasv_address = session.config.server.pasv_address.clone();
        let pasv_ip: Ipv4Addr = pasv_address
            .parse()
            .map_err(|_| DataChanError::InvalidPasvAddress(pasv_address.clone()))?;

        // Set up the passive mode listener
        let (listener, pasv_response) = setup_pasv_listener(pasv_ip)
            .await
            .map_err(DataChanError::Io)?;

        session
            .data_channel
            .adopt(DataMode::Passive, tokio::spawn(accept_pasv_connection(listener)));

        send_response(&mut session.writer, pasv_response.as_bytes()).await?;
        info!("PASV listener ready, waiting for the client");
        Ok(())
    })
}

/// Sets up a passive mode (PASV) listener.
/// Returns the listener and the formatted PASV response.
pub async fn setup_pasv_listener(pasv_ip: Ipv4Addr) -> io::Result<(TcpListener, String)> {
    let listener = TcpListener::bind((pasv_ip, 0)).await?;
    let port = listener.local_addr()?.port();

    let [h1, h2, h3, h4] = pasv_ip.octets();
    let pasv_response = format!(
        "227 Entering Passive Mode ({},{},{},{},{},{}).\r\n",
        h1,
        h2,
        h3,
        h4,
        port / 256,
        port % 256
    );
    debug!("PASV listener set up on IP: {}, Port: {}", pasv_ip, port);
    Ok((listener, pasv_response))
}

/// Accepts the incoming connection on the passive listener.
pub async fn accept_pasv_connection(listener: TcpListener) -> io::Result<TcpStream> {
    let (data_stream, addr) = listener.accept().await?;
    debug!("Accepted data connection from: {}", addr);
    Ok(data_stream)
}
