use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// Interval schedule with explicit arm/disarm.
///
/// A `None` delay means disarmed: [`Ticker::tick`] never completes and no
/// schedule exists. Arming with a new delay drops the previous schedule and
/// starts a fresh one, so ticks never accumulate across re-arms.
#[derive(Debug, Default)]
pub struct Ticker {
    delay: Option<Duration>,
    schedule: Option<Interval>,
}

impl Ticker {
    pub fn disarmed() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.schedule.is_some()
    }

    /// Keeps the current schedule when `delay` is unchanged.
    pub fn set_delay(&mut self, delay: Option<Duration>) {
        if delay == self.delay {
            return;
        }

        self.delay = delay;
        self.schedule = delay.map(|period| {
            let mut schedule = interval_at(Instant::now() + period, period);
            schedule.set_missed_tick_behavior(MissedTickBehavior::Delay);
            schedule
        });
    }

    pub fn arm(&mut self, period: Duration) {
        self.set_delay(Some(period));
    }

    pub fn disarm(&mut self) {
        self.set_delay(None);
    }

    /// Completes at the next scheduled instant. Cancel safe.
    pub async fn tick(&mut self) -> Instant {
        match self.schedule.as_mut() {
            Some(schedule) => schedule.tick().await,
            None => std::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{sleep, timeout};

    #[tokio::test(start_paused = true)]
    async fn armed_ticker_fires_once_per_period() {
        let mut ticker = Ticker::disarmed();
        let start = Instant::now();
        ticker.arm(Duration::from_secs(1));

        ticker.tick().await;
        assert_eq!(start.elapsed(), Duration::from_secs(1));

        ticker.tick().await;
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn disarmed_ticker_never_fires() {
        let mut ticker = Ticker::disarmed();

        let result = timeout(Duration::from_secs(30), ticker.tick()).await;

        assert!(result.is_err());
        assert!(!ticker.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn no_tick_after_disarm() {
        let mut ticker = Ticker::disarmed();
        ticker.arm(Duration::from_secs(1));
        ticker.tick().await;

        ticker.disarm();
        let result = timeout(Duration::from_secs(10), ticker.tick()).await;

        assert!(result.is_err());
        assert!(!ticker.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn changing_delay_restarts_the_schedule() {
        let mut ticker = Ticker::disarmed();
        ticker.arm(Duration::from_secs(1));
        sleep(Duration::from_millis(600)).await;

        let changed_at = Instant::now();
        ticker.set_delay(Some(Duration::from_secs(2)));
        ticker.tick().await;

        assert_eq!(changed_at.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn same_delay_keeps_the_running_schedule() {
        let mut ticker = Ticker::disarmed();
        let start = Instant::now();
        ticker.arm(Duration::from_secs(1));
        sleep(Duration::from_millis(600)).await;

        ticker.arm(Duration::from_secs(1));
        ticker.tick().await;

        assert_eq!(start.elapsed(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn rearming_after_disarm_starts_a_full_period() {
        let mut ticker = Ticker::disarmed();
        ticker.arm(Duration::from_secs(1));
        sleep(Duration::from_millis(900)).await;
        ticker.disarm();

        let rearmed_at = Instant::now();
        ticker.arm(Duration::from_secs(1));
        ticker.tick().await;

        assert_eq!(rearmed_at.elapsed(), Duration::from_secs(1));
    }
}
