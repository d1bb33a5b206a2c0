use notify_rust::{Notification, Urgency};
use pomodoro_core::{NotificationConfig, NotificationUrgency, SessionLabel};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

#[derive(Debug, PartialEq)]
pub enum NotifierMessage {
    SessionChanged { label: SessionLabel, minutes: u32 },
}

#[derive(Clone)]
pub struct NotifierHandle {
    sender: mpsc::Sender<NotifierMessage>,
}

impl NotifierHandle {
    /// Fire and forget: the caller never waits on the desktop.
    pub fn send_session_changed(&self, label: SessionLabel, minutes: u32) {
        let sender = self.sender.clone();
        tokio::spawn(async move {
            if let Err(error) = sender
                .send(NotifierMessage::SessionChanged { label, minutes })
                .await
            {
                error!(%error, "failed to send session change notification message");
            }
        });
    }

    #[cfg(test)]
    pub(crate) fn detached() -> (Self, mpsc::Receiver<NotifierMessage>) {
        let (sender, receiver) = mpsc::channel(32);
        (Self { sender }, receiver)
    }
}

/// Hands a notification to the desktop. Blocks until the bus answers.
type Present = fn(Notification) -> Result<(), String>;

pub struct NotifierActor {
    receiver: mpsc::Receiver<NotifierMessage>,
    urgency: Urgency,
    sound_name: Option<String>,
    present: Present,
}

impl NotifierActor {
    pub fn new(config: &NotificationConfig) -> (Self, NotifierHandle) {
        let (sender, receiver) = mpsc::channel(32);

        let urgency = match config.urgency {
            NotificationUrgency::Low => Urgency::Low,
            NotificationUrgency::Normal => Urgency::Normal,
            NotificationUrgency::Critical => Urgency::Critical,
        };

        let sound_name = config
            .sound_enabled
            .then(|| config.sound_name.clone())
            .filter(|name| !name.is_empty());

        let actor = Self {
            receiver,
            urgency,
            sound_name,
            present: show_on_desktop,
        };

        let handle = NotifierHandle { sender };

        (actor, handle)
    }

    pub async fn run(mut self) {
        info!("notifier actor started");

        while let Some(message) = self.receiver.recv().await {
            match message {
                NotifierMessage::SessionChanged { label, minutes } => {
                    self.send_session_changed_notification(label, minutes);
                }
            }
        }

        debug!("notifier actor stopped");
    }

    fn send_session_changed_notification(&self, label: SessionLabel, minutes: u32) {
        let (summary, body) = session_changed_text(label, minutes);
        let notification = self.build_notification(summary, &body);
        let present = self.present;

        // Failures are only logged; the timer carries on regardless.
        tokio::task::spawn_blocking(move || match present(notification) {
            Ok(()) => debug!(%label, minutes, "session change notification sent"),
            Err(error) => warn!(%error, %label, "failed to show session change notification"),
        });
    }

    fn build_notification(&self, summary: &str, body: &str) -> Notification {
        let mut notification = Notification::new();
        notification
            .summary(summary)
            .body(body)
            .urgency(self.urgency)
            .appname("Pomodoro");

        if let Some(ref sound_name) = self.sound_name {
            notification.sound_name(sound_name);
        }

        notification
    }
}

fn show_on_desktop(notification: Notification) -> Result<(), String> {
    notification
        .show()
        .map(drop)
        .map_err(|error| error.to_string())
}

fn session_changed_text(label: SessionLabel, minutes: u32) -> (&'static str, String) {
    match label {
        SessionLabel::OnBreak => (
            "Pomodoro - Time for a break",
            format!("Focus session complete. Enjoy a {} min break.", minutes),
        ),
        SessionLabel::Focusing => (
            "Pomodoro - Back to focus",
            format!("Break is over. Starting a {} min focus session.", minutes),
        ),
    }
}
