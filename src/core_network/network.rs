use crate::core_fs::{FsFactory, RemoteFs};
use crate::core_ftpcommand::ftpcommand::parse_command_line;
use crate::core_ftpcommand::handlers::{dispatch_command, initialize_command_handlers};
use crate::constants::MAX_COMMAND_LINE;
use crate::helpers::send_response;
use crate::session::Session;
use crate::Config;
use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

pub async fn start_server(config: Arc<Config>, factory: FsFactory) -> Result<()> {
    let bind_addr = format!(
        "{}:{}",
        config.server.listen_address, config.server.listen_port
    );
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind control listener on {}", bind_addr))?;
    info!("Server listening on {}", bind_addr);

    serve(listener, config, factory).await
}

/// Accepts control connections forever, one task and one collaborator each.
pub async fn serve(listener: TcpListener, config: Arc<Config>, factory: FsFactory) -> Result<()> {
    loop {
        let (socket, addr) = listener.accept().await?;
        info!("New connection from {:?}", addr);

        let config = Arc::clone(&config);
        let fs = factory();

        tokio::spawn(async move {
            handle_connection(socket, config, fs).await;
            info!("Connection closed for {:?}", addr);
        });
    }
}

pub async fn handle_connection(
    socket: TcpStream,
    config: Arc<Config>,
    fs: Box<dyn RemoteFs>,
) {
    let (read_half, write_half) = socket.into_split();
    let session = Session::new(Box::new(write_half), fs, config);
    run_session(BufReader::new(read_half), session).await;
}

enum ControlLine {
    Line(String),
    TooLong,
    Closed,
}

/// Reads one command line. Invalid UTF-8 is decoded lossily and lines over
/// `MAX_COMMAND_LINE` bytes are discarded up to their terminator.
async fn read_command_line<R>(reader: &mut R, buffer: &mut Vec<u8>) -> io::Result<ControlLine>
where
    R: AsyncBufRead + Unpin,
{
    let limit = MAX_COMMAND_LINE as u64;

    buffer.clear();
    let n = (&mut *reader).take(limit).read_until(b'\n', buffer).await?;
    if n == 0 {
        return Ok(ControlLine::Closed);
    }
    if buffer.ends_with(b"\n") || n < MAX_COMMAND_LINE {
        return Ok(ControlLine::Line(String::from_utf8_lossy(buffer).into_owned()));
    }

    loop {
        buffer.clear();
        let n = (&mut *reader).take(limit).read_until(b'\n', buffer).await?;
        if n == 0 || buffer.ends_with(b"\n") {
            return Ok(ControlLine::TooLong);
        }
    }
}

/// Completes once the client has closed the control connection.
///
/// Only peeks at the buffer: a pipelined command stays queued for the
/// command loop and the watch stops there.
async fn control_closed<R>(reader: &mut R)
where
    R: AsyncBufRead + Unpin,
{
    let closed = match reader.fill_buf().await {
        Ok(buf) => buf.is_empty(),
        Err(e) => {
            warn!("Control connection failed during a command: {}", e);
            true
        }
    };
    if !closed {
        std::future::pending::<()>().await;
    }
}

/// Drives one session until QUIT, end of input or a control channel failure.
/// The session is torn down in every case, including when the client goes
/// away in the middle of a transfer.
pub async fn run_session<R>(mut reader: R, mut session: Session)
where
    R: AsyncBufRead + Unpin,
{
    let banner = format!("220 {}\r\n", session.config.server.banner);
    if let Err(e) = send_response(&mut session.writer, banner.as_bytes()).await {
        warn!("Failed to send banner: {}", e);
        session.teardown().await;
        return;
    }

    let handlers = initialize_command_handlers();
    let mut buffer = Vec::new();

    loop {
        let line = match read_command_line(&mut reader, &mut buffer).await {
            Ok(ControlLine::Line(line)) => line,
            Ok(ControlLine::TooLong) => {
                warn!("Discarded a control line over {} bytes", MAX_COMMAND_LINE);
                if let Err(e) =
                    send_response(&mut session.writer, b"500 Command line too long.\r\n").await
                {
                    warn!("Failed to write to control connection: {}", e);
                    break;
                }
                continue;
            }
            Ok(ControlLine::Closed) => {
                debug!("Client closed the control connection");
                break;
            }
            Err(e) => {
                warn!("Failed to read from control connection: {}", e);
                break;
            }
        };

        let Some((verb, arg)) = parse_command_line(&line) else {
            continue;
        };

        if verb == "PASS" {
            info!("Received command: PASS ****");
        } else {
            info!("Received command: {} {}", verb, arg);
        }

        let outcome = tokio::select! {
            biased;
            result = dispatch_command(&mut session, &handlers, &verb, arg) => Some(result),
            _ = control_closed(&mut reader) => None,
        };

        match outcome {
            Some(Ok(())) => {}
            Some(Err(e)) => {
                error!("Error handling command {}: {}", verb, e);
                break;
            }
            None => {
                info!("Control connection closed while {} was running", verb);
                break;
            }
        }

        if verb == "QUIT" {
            break;
        }
    }

    session.teardown().await;
}
