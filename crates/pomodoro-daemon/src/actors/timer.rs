use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info};

use pomodoro_core::{DurationAdjustment, Durations, TickOutcome, TimerSnapshot, TimerState};

use super::NotifierHandle;
use crate::ticker::Ticker;

pub enum TimerMessage {
    PlayPause {
        reply: oneshot::Sender<TimerSnapshot>,
    },
    Stop {
        reply: oneshot::Sender<(bool, TimerSnapshot)>,
    },
    Adjust {
        adjustment: DurationAdjustment,
        reply: oneshot::Sender<TimerSnapshot>,
    },
    GetStatus {
        reply: oneshot::Sender<TimerSnapshot>,
    },
}

pub struct TimerActor {
    receiver: mpsc::Receiver<TimerMessage>,
    state: TimerState,
    ticker: Ticker,
    tick_interval: Duration,
    notifier: Option<NotifierHandle>,
    snapshots: watch::Sender<TimerSnapshot>,
}

#[derive(Clone)]
pub struct TimerHandle {
    sender: mpsc::Sender<TimerMessage>,
    snapshots: watch::Receiver<TimerSnapshot>,
}

impl TimerHandle {
    pub async fn play_pause(&self) -> Option<TimerSnapshot> {
        self.request(|reply| TimerMessage::PlayPause { reply }).await
    }

    /// Also reports whether a session existed when the stop was applied.
    pub async fn stop(&self) -> Option<(bool, TimerSnapshot)> {
        self.request(|reply| TimerMessage::Stop { reply }).await
    }

    pub async fn adjust(&self, adjustment: DurationAdjustment) -> Option<TimerSnapshot> {
        self.request(|reply| TimerMessage::Adjust { adjustment, reply })
            .await
    }

    pub async fn get_status(&self) -> Option<TimerSnapshot> {
        self.request(|reply| TimerMessage::GetStatus { reply }).await
    }

    /// Latest published snapshot, without a round trip to the actor.
    pub fn snapshot(&self) -> TimerSnapshot {
        *self.snapshots.borrow()
    }

    /// A receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<TimerSnapshot> {
        self.snapshots.clone()
    }

    async fn request<T>(
        &self,
        message: impl FnOnce(oneshot::Sender<T>) -> TimerMessage,
    ) -> Option<T> {
        let (reply_sender, reply_receiver) = oneshot::channel();
        self.sender.send(message(reply_sender)).await.ok()?;
        reply_receiver.await.ok()
    }
}

impl TimerActor {
    pub fn new(
        durations: Durations,
        tick_interval: Duration,
        notifier: Option<NotifierHandle>,
    ) -> (Self, TimerHandle) {
        let (sender, receiver) = mpsc::channel(32);
        let state = TimerState::new(durations);
        let (snapshot_sender, snapshot_receiver) = watch::channel(TimerSnapshot::from(&state));

        let actor = Self {
            receiver,
            state,
            ticker: Ticker::disarmed(),
            tick_interval,
            notifier,
            snapshots: snapshot_sender,
        };

        let handle = TimerHandle {
            sender,
            snapshots: snapshot_receiver,
        };

        (actor, handle)
    }

    pub async fn run(mut self) {
        loop {
            tokio::select! {
                message = self.receiver.recv() => {
                    match message {
                        Some(message) => self.handle_message(message),
                        None => break,
                    }
                }
                _ = self.ticker.tick() => {
                    self.handle_tick();
                }
            }
        }

        self.ticker.disarm();
        debug!("timer actor stopped");
    }

    fn handle_message(&mut self, message: TimerMessage) {
        match message {
            TimerMessage::PlayPause { reply } => {
                let had_session = self.state.session().is_some();
                self.apply(self.state.play_pause());
                let ticking = self.ticker.is_armed();
                match (had_session, ticking) {
                    (false, _) => info!(durations = ?self.state.durations(), "focus session started"),
                    (true, true) => info!("session resumed"),
                    (true, false) => info!("session paused"),
                }
                let _ = reply.send(self.current_snapshot());
            }
            TimerMessage::Stop { reply } => {
                let was_active = self.state.session().is_some();
                if was_active {
                    info!("session stopped");
                }
                self.apply(self.state.stop());
                let _ = reply.send((was_active, self.current_snapshot()));
            }
            TimerMessage::Adjust { adjustment, reply } => {
                let next = self.state.adjust(adjustment);
                if next == self.state {
                    debug!(?adjustment, "duration adjustment ignored");
                } else {
                    debug!(?adjustment, durations = ?next.durations(), "durations adjusted");
                }
                self.apply(next);
                let _ = reply.send(self.current_snapshot());
            }
            TimerMessage::GetStatus { reply } => {
                let _ = reply.send(self.current_snapshot());
            }
        }
    }

    fn handle_tick(&mut self) {
        let (next, outcome) = self.state.tick();

        if let TickOutcome::SessionChanged(label) = outcome {
            let minutes = next.durations().minutes_for(label);
            info!(%label, minutes, "session elapsed");

            if let Some(ref notifier) = self.notifier {
                notifier.send_session_changed(label, minutes);
            }
        }

        self.apply(next);
    }

    /// Replaces the state, arms the ticker iff running and publishes the
    /// new snapshot.
    fn apply(&mut self, state: TimerState) {
        self.state = state;
        if state.is_running() {
            self.ticker.arm(self.tick_interval);
        } else {
            self.ticker.disarm();
        }
        self.snapshots.send_if_modified(|current| {
            let next = TimerSnapshot::from(&state);
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
    }

    fn current_snapshot(&self) -> TimerSnapshot {
        TimerSnapshot::from(&self.state)
    }
}
