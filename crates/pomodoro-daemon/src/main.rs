mod actors;
mod server;
mod ticker;

use actors::{NotifierActor, TimerActor};
use anyhow::Result;
use pomodoro_core::Config;
use server::Server;
use tokio::sync::broadcast;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("pomodoro_daemon=debug".parse()?),
        )
        .init();

    info!("pomodoro daemon starting");

    let config = Config::load().unwrap_or_else(|error| {
        warn!(%error, "failed to load config, using defaults");
        Config::default()
    });

    let (shutdown_sender, shutdown_receiver) = broadcast::channel::<()>(1);
    let sigint_shutdown_sender = shutdown_sender.clone();

    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("SIGINT received, initiating shutdown");
        sigint_shutdown_sender.send(()).ok();
    });

    let notifier_handle = if config.notifications.enabled {
        let (notifier_actor, notifier_handle) = NotifierActor::new(&config.notifications);
        tokio::spawn(notifier_actor.run());
        Some(notifier_handle)
    } else {
        info!("notifications disabled");
        None
    };

    let durations = config.timer.durations();
    let tick_interval = config.timer.tick_interval();
    info!(?durations, ?tick_interval, "timer configured");

    let (timer_actor, timer_handle) = TimerActor::new(durations, tick_interval, notifier_handle);
    tokio::spawn(timer_actor.run());

    let server = Server::new(
        pomodoro_protocol::socket_path(),
        timer_handle,
        shutdown_sender,
    );
    server.run(shutdown_receiver).await?;

    info!("pomodoro daemon stopped");
    Ok(())
}
