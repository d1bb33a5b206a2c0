use interprocess::local_socket::{
    tokio::{prelude::*, Stream},
    GenericFilePath,
};
use pomodoro_protocol::{read_frame, write_frame, FrameError, Request, Response};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("the daemon is not running")]
    DaemonNotRunning,
    #[error("timed out talking to the daemon")]
    Timeout,
    #[error("invalid socket path: {0}")]
    SocketPath(#[source] io::Error),
    #[error("exchange with the daemon failed: {0}")]
    Exchange(#[from] FrameError),
}

/// One request, one response, one connection.
pub struct DaemonClient {
    socket_path: PathBuf,
    timeout: Duration,
}

impl DaemonClient {
    pub fn new() -> Self {
        Self::at(pomodoro_protocol::socket_path())
    }

    fn at(socket_path: PathBuf) -> Self {
        Self {
            socket_path,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The timeout bounds the connection attempt and the exchange separately.
    pub async fn send(&self, request: Request) -> Result<Response, ClientError> {
        let mut stream = self.connect().await?;

        timeout(self.timeout, async {
            write_frame(&mut stream, &request).await?;
            read_frame(&mut stream).await
        })
        .await
        .map_err(|_| ClientError::Timeout)?
        .map_err(ClientError::from)
    }

    async fn connect(&self) -> Result<Stream, ClientError> {
        let name = self
            .socket_path
            .as_os_str()
            .to_fs_name::<GenericFilePath>()
            .map_err(ClientError::SocketPath)?;

        timeout(self.timeout, Stream::connect(name))
            .await
            .map_err(|_| ClientError::Timeout)?
            .map_err(|_| ClientError::DaemonNotRunning)
    }
}

impl Default for DaemonClient {
    fn default() -> Self {
        Self::new()
    }
}
