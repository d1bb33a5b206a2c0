use crate::actors::TimerHandle;
use anyhow::{Context, Result};
use interprocess::local_socket::{tokio::prelude::*, GenericFilePath, ListenerOptions};
use pomodoro_protocol::{read_frame, write_frame, Request, Response, TimerSnapshot};
use std::path::PathBuf;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::broadcast;
use tracing::{debug, error, info, instrument};

pub struct Server {
    socket_path: PathBuf,
    timer_handle: TimerHandle,
    shutdown_sender: broadcast::Sender<()>,
}

impl Server {
    pub fn new(
        socket_path: PathBuf,
        timer_handle: TimerHandle,
        shutdown_sender: broadcast::Sender<()>,
    ) -> Self {
        Self {
            socket_path,
            timer_handle,
            shutdown_sender,
        }
    }

    fn prepare_socket_path(&self) -> Result<()> {
        if let Some(parent) = self.socket_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("cannot create {}", parent.display()))?;
        }

        if self.socket_path.exists() {
            std::fs::remove_file(&self.socket_path).context("cannot remove stale socket")?;
            debug!("removed stale socket file");
        }
        Ok(())
    }

    #[instrument(skip(self, shutdown))]
    pub async fn run(&self, mut shutdown: broadcast::Receiver<()>) -> Result<()> {
        self.prepare_socket_path()?;

        let listener = ListenerOptions::new()
            .name(self.socket_path.as_os_str().to_fs_name::<GenericFilePath>()?)
            .create_tokio()?;

        info!(path = %self.socket_path.display(), "server listening");

        loop {
            tokio::select! {
                accept_result = listener.accept() => {
                    match accept_result {
                        Ok(stream) => {
                            let timer_handle = self.timer_handle.clone();
                            let shutdown_sender = self.shutdown_sender.clone();
                            tokio::spawn(async move {
                                if let Err(error) = handle_connection(stream, timer_handle, shutdown_sender).await {
                                    error!(%error, "connection handler failed");
                                }
                            });
                        }
                        Err(error) => {
                            error!(%error, "failed to accept connection");
                        }
                    }
                }
                _ = shutdown.recv() => {
                    info!("shutdown signal received");
                    break;
                }
            }
        }

        self.cleanup_socket();
        Ok(())
    }

    fn cleanup_socket(&self) {
        if let Err(error) = std::fs::remove_file(&self.socket_path) {
            debug!(%error, "socket file already removed");
        } else {
            debug!("socket file cleaned up");
        }
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        self.cleanup_socket();
    }
}

async fn handle_connection<S>(
    mut stream: S,
    timer_handle: TimerHandle,
    shutdown_sender: broadcast::Sender<()>,
) -> Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let request: Request = read_frame(&mut stream)
        .await
        .context("failed to read request")?;
    debug!(?request, "received request");

    let response = handle_request(request, &timer_handle, &shutdown_sender).await;
    debug!(?response, "sending response");

    write_frame(&mut stream, &response)
        .await
        .context("failed to write response")
}

async fn handle_request(
    request: Request,
    timer_handle: &TimerHandle,
    shutdown_sender: &broadcast::Sender<()>,
) -> Response {
    match request {
        Request::Ping => Response::Pong,

        Request::GetStatus => Response::Status(timer_handle.snapshot()),

        Request::PlayPause => status_or_error(timer_handle.play_pause().await),

        Request::Stop => match timer_handle.stop().await {
            Some((was_active, status)) => Response::Stopped { was_active, status },
            None => timer_unavailable(),
        },

        Request::AdjustDuration(adjustment) => {
            status_or_error(timer_handle.adjust(adjustment).await)
        }

        Request::Shutdown => {
            info!("shutdown requested by client");
            if shutdown_sender.send(()).is_ok() {
                Response::Ok
            } else {
                Response::Error {
                    message: "daemon is already shutting down".to_string(),
                }
            }
        }
    }
}

fn status_or_error(snapshot: Option<TimerSnapshot>) -> Response {
    snapshot.map_or_else(timer_unavailable, Response::Status)
}

fn timer_unavailable() -> Response {
    Response::Error {
        message: "timer is not available".to_string(),
    }
}
