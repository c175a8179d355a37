//! Transient notices. Only the latest one is kept.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub kind: NoticeKind,
    shown_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Fading,
    Hidden,
}

pub struct Notifier {
    current: Option<Notice>,
    visible_for: Duration,
    fade_for: Duration,
    // Count of notices ever raised; lets callers tell a new notice from a re-render.
    raised: u64,
}

impl Notifier {
    pub fn new(visible_for: Duration, fade_for: Duration) -> Self {
        Self {
            current: None,
            visible_for,
            fade_for,
            raised: 0,
        }
    }

    pub fn notify(&mut self, title: impl Into<String>, message: impl Into<String>, kind: NoticeKind, now: Instant) {
        let notice = Notice {
            title: title.into(),
            message: message.into(),
            kind,
            shown_at: now,
        };
        tracing::info!(title = %notice.title, message = %notice.message, ?kind, "notice");
        self.current = Some(notice);
        self.raised += 1;
    }

    pub fn raised(&self) -> u64 {
        self.raised
    }

    pub fn phase(&self, now: Instant) -> Phase {
        let Some(n) = &self.current else {
            return Phase::Hidden;
        };
        let age = now.saturating_duration_since(n.shown_at);
        if age < self.visible_for {
            Phase::Visible
        } else if age < self.visible_for + self.fade_for {
            Phase::Fading
        } else {
            Phase::Hidden
        }
    }

    /// The notice to draw, if it has not run out yet.
    pub fn current(&self, now: Instant) -> Option<(&Notice, Phase)> {
        match self.phase(now) {
            Phase::Hidden => None,
            p => self.current.as_ref().map(|n| (n, p)),
        }
    }

    /// Drop an expired notice so the next frame does not consider it.
    pub fn prune(&mut self, now: Instant) {
        if self.current.is_some() && self.phase(now) == Phase::Hidden {
            self.current = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(Duration::from_millis(4000), Duration::from_millis(300))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_follow_timing() {
        let t0 = Instant::now();
        let mut n = Notifier::default();
        assert_eq!(n.phase(t0), Phase::Hidden);
        n.notify("Create Backup", "ok", NoticeKind::Success, t0);
        assert_eq!(n.phase(t0), Phase::Visible);
        assert_eq!(n.phase(t0 + Duration::from_millis(3999)), Phase::Visible);
        assert_eq!(n.phase(t0 + Duration::from_millis(4000)), Phase::Fading);
        assert_eq!(n.phase(t0 + Duration::from_millis(4299)), Phase::Fading);
        assert_eq!(n.phase(t0 + Duration::from_millis(4300)), Phase::Hidden);
    }

    #[test]
    fn latest_notice_wins() {
        let t0 = Instant::now();
        let mut n = Notifier::default();
        n.notify("first", "a", NoticeKind::Success, t0);
        n.notify("second", "b", NoticeKind::Error, t0 + Duration::from_millis(10));
        let (cur, _) = n.current(t0 + Duration::from_millis(20)).expect("visible");
        assert_eq!(cur.title, "second");
        assert_eq!(cur.kind, NoticeKind::Error);
        assert_eq!(n.raised(), 2);
    }

    #[test]
    fn new_notice_restarts_timer() {
        let t0 = Instant::now();
        let mut n = Notifier::default();
        n.notify("a", "", NoticeKind::Success, t0);
        n.notify("b", "", NoticeKind::Success, t0 + Duration::from_secs(3));
        assert_eq!(n.phase(t0 + Duration::from_secs(5)), Phase::Visible);
    }

    #[test]
    fn prune_clears_expired() {
        let t0 = Instant::now();
        let mut n = Notifier::default();
        n.notify("a", "", NoticeKind::Success, t0);
        n.prune(t0 + Duration::from_secs(10));
        assert!(n.current(t0).is_none());
    }
}
