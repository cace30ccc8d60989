use crate::core_ftpcommand::error::SessionError;
use crate::core_network::datachan::close_data_connection;
use crate::core_network::error::DataChanError;
use crate::helpers::send_response;
use crate::session::Session;
use log::debug;
use std::io;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;

/// Waits for the negotiated data connection and announces the transfer.
///
/// Fails without touching the network when neither PASV nor PORT was issued.
pub async fn open_data_connection(session: &mut Session) -> Result<TcpStream, SessionError> {
    let timeout = session.config.server.data_timeout();
    let stream = session.data_channel.wait_for_data_connection(timeout).await?;
    debug!(
        "Data connection open, type {} byte size {:?}",
        session.type_, session.byte_size
    );
    send_response(&mut session.writer, b"150 Opening data connection.\r\n").await?;
    Ok(stream)
}

/// Copies `reader` into `writer` until end of input, returning the byte count.
pub async fn pipe<R, W>(reader: &mut R, writer: &mut W, buffer_size: usize) -> io::Result<u64>
where
    R: AsyncRead + Unpin + ?Sized,
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut buffer = vec![0; buffer_size.max(1)];
    let mut total = 0u64;
    loop {
        let n = reader.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        writer.write_all(&buffer[..n]).await?;
        total += n as u64;
    }
    writer.flush().await?;
    Ok(total)
}

/// Writes a formatted listing over a fresh data connection, then closes it.
pub async fn send_listing(session: &mut Session, payload: String) -> Result<(), SessionError> {
    let mut stream = open_data_connection(session).await?;
    let result = stream.write_all(payload.as_bytes()).await;
    close_data_connection(stream).await;

    if let Err(e) = result {
        return Err(DataChanError::Io(e).into());
    }

    debug!("Listing sent: {} bytes", payload.len());
    send_response(&mut session.writer, b"226 Transfer complete.\r\n").await?;
    Ok(())
}
