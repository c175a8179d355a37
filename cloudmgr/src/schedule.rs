//! Periodic tick task bound to the active page. The task only sends messages;
//! all state changes happen on the UI loop that receives them.

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::router::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick(Route),
}

/// Tick period per route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Periods {
    pub dashboard: Duration,
    pub control: Duration,
}

impl Default for Periods {
    fn default() -> Self {
        Self {
            dashboard: Duration::from_millis(3000),
            control: Duration::from_millis(2000),
        }
    }
}

impl Periods {
    /// `None` means the page has no live data.
    pub fn for_route(&self, r: Route) -> Option<Duration> {
        match r {
            Route::Dashboard => Some(self.dashboard),
            Route::Control => Some(self.control),
            Route::Configuration => None,
        }
    }
}

pub fn spawn_ticker(route: Route, period: Duration, tx: UnboundedSender<TimerEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut iv = interval(period);
        iv.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately; the page already shows fresh values.
        iv.tick().await;
        loop {
            iv.tick().await;
            if tx.send(TimerEvent::Tick(route)).is_err() {
                break;
            }
        }
    })
}

/// At most one running ticker, always for the route it was last pointed at.
pub struct ViewTimer {
    periods: Periods,
    tx: UnboundedSender<TimerEvent>,
    running: Option<(Route, JoinHandle<()>)>,
}

impl ViewTimer {
    pub fn new(periods: Periods, tx: UnboundedSender<TimerEvent>) -> Self {
        Self {
            periods,
            tx,
            running: None,
        }
    }

    /// Cancel whatever is running and start the ticker for `route`, if it has one.
    pub fn retarget(&mut self, route: Route) {
        if matches!(&self.running, Some((r, h)) if *r == route && !h.is_finished()) {
            return;
        }
        self.cancel();
        if let Some(period) = self.periods.for_route(route) {
            tracing::debug!(%route, ?period, "start view timer");
            self.running = Some((route, spawn_ticker(route, period, self.tx.clone())));
        }
    }

    pub fn cancel(&mut self) {
        if let Some((route, h)) = self.running.take() {
            tracing::debug!(%route, "stop view timer");
            h.abort();
        }
    }

    pub fn active_route(&self) -> Option<Route> {
        self.running.as_ref().map(|(r, _)| *r)
    }
}

impl Drop for ViewTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    #[tokio::test(start_paused = true)]
    async fn ticks_at_period_for_route() {
        let (tx, mut rx) = unbounded_channel();
        let mut t = ViewTimer::new(Periods::default(), tx);
        t.retarget(Route::Control);
        tokio::time::sleep(Duration::from_millis(4100)).await;
        let mut n = 0;
        while let Ok(ev) = rx.try_recv() {
            assert_eq!(ev, TimerEvent::Tick(Route::Control));
            n += 1;
        }
        assert_eq!(n, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn configuration_has_no_timer() {
        let (tx, mut rx) = unbounded_channel();
        let mut t = ViewTimer::new(Periods::default(), tx);
        t.retarget(Route::Configuration);
        assert_eq!(t.active_route(), None);
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn retarget_replaces_previous_ticker() {
        let (tx, mut rx) = unbounded_channel();
        let mut t = ViewTimer::new(Periods::default(), tx);
        t.retarget(Route::Control);
        t.retarget(Route::Dashboard);
        assert_eq!(t.active_route(), Some(Route::Dashboard));
        tokio::time::sleep(Duration::from_millis(6100)).await;
        let mut seen = Vec::new();
        while let Ok(TimerEvent::Tick(r)) = rx.try_recv() {
            seen.push(r);
        }
        assert_eq!(seen, vec![Route::Dashboard, Route::Dashboard]);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_stops_ticking() {
        let (tx, mut rx) = unbounded_channel();
        let mut t = ViewTimer::new(Periods::default(), tx.clone());
        t.retarget(Route::Dashboard);
        drop(t);
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
        drop(tx);
    }
}
