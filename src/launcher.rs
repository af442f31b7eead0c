//! App-open-with-fallback sequencing
//!
//! Opening a wallet's deep link gives no signal back about whether the app
//! is installed. The sequencer opens the app link right away and, unless it
//! is cancelled first, hands back the generic `upi://` link once the
//! fallback delay has passed. Time is passed in so the frame loop drives it.

use crate::types::UpiApp;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchState {
    NotAttempted,
    AppLinkSent { app: UpiApp, deadline: Instant },
    FallbackFired,
    Cancelled,
}

#[derive(Debug)]
pub struct LaunchSequencer {
    state: LaunchState,
    fallback_url: Option<String>,
    delay: Duration,
}

impl LaunchSequencer {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: LaunchState::NotAttempted,
            fallback_url: None,
            delay,
        }
    }

    pub fn state(&self) -> &LaunchState {
        &self.state
    }

    /// Arms the fallback and returns the URL to open now. A new launch
    /// replaces any fallback still pending from an earlier one.
    pub fn launch_app(
        &mut self,
        app: UpiApp,
        app_url: String,
        generic_url: String,
        now: Instant,
    ) -> String {
        let deadline = now + self.delay;
        debug!(app = app.id(), delay_ms = self.delay.as_millis() as u64, "Fallback armed");
        self.state = LaunchState::AppLinkSent { app, deadline };
        self.fallback_url = Some(generic_url);
        app_url
    }

    /// Returns the fallback URL exactly once, when the deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match self.state {
            LaunchState::AppLinkSent { deadline, .. } if now >= deadline => {
                self.state = LaunchState::FallbackFired;
                self.fallback_url.take()
            }
            _ => None,
        }
    }

    /// Time left before the fallback fires, if one is armed.
    pub fn time_until_fallback(&self, now: Instant) -> Option<Duration> {
        match self.state {
            LaunchState::AppLinkSent { deadline, .. } => Some(deadline.saturating_duration_since(now)),
            _ => None,
        }
    }

    /// Disarms a pending fallback. No effect once it has fired.
    pub fn cancel(&mut self) {
        if let LaunchState::AppLinkSent { app, .. } = self.state {
            debug!(app = app.id(), "Fallback cancelled");
            self.state = LaunchState::Cancelled;
            self.fallback_url = None;
        }
    }

    /// Back to `NotAttempted`, cancelling anything armed.
    pub fn reset(&mut self) {
        self.cancel();
        self.state = LaunchState::NotAttempted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1500);

    fn armed(now: Instant) -> LaunchSequencer {
        let mut seq = LaunchSequencer::new(DELAY);
        let opened = seq.launch_app(
            UpiApp::GPay,
            "tez://pay?pa=x".into(),
            "upi://pay?pa=x".into(),
            now,
        );
        assert_eq!(opened, "tez://pay?pa=x");
        seq
    }

    #[test]
    fn starts_not_attempted() {
        let mut seq = LaunchSequencer::new(DELAY);
        assert_eq!(seq.state(), &LaunchState::NotAttempted);
        assert_eq!(seq.poll(Instant::now()), None);
    }

    #[test]
    fn fallback_waits_for_the_deadline() {
        let t0 = Instant::now();
        let mut seq = armed(t0);
        assert_eq!(seq.poll(t0), None);
        assert_eq!(seq.poll(t0 + Duration::from_millis(1499)), None);
        assert!(matches!(seq.state(), LaunchState::AppLinkSent { app: UpiApp::GPay, .. }));
        assert_eq!(seq.poll(t0 + DELAY), Some("upi://pay?pa=x".to_string()));
        assert_eq!(seq.state(), &LaunchState::FallbackFired);
    }

    #[test]
    fn fallback_fires_only_once() {
        let t0 = Instant::now();
        let mut seq = armed(t0);
        assert!(seq.poll(t0 + Duration::from_secs(5)).is_some());
        assert_eq!(seq.poll(t0 + Duration::from_secs(6)), None);
    }

    #[test]
    fn cancelled_sequencer_never_fires() {
        let t0 = Instant::now();
        let mut seq = armed(t0);
        seq.cancel();
        assert_eq!(seq.state(), &LaunchState::Cancelled);
        assert_eq!(seq.poll(t0 + Duration::from_secs(10)), None);
        assert_eq!(seq.time_until_fallback(t0), None);
    }

    #[test]
    fn cancel_after_firing_keeps_fired_state() {
        let t0 = Instant::now();
        let mut seq = armed(t0);
        seq.poll(t0 + DELAY);
        seq.cancel();
        assert_eq!(seq.state(), &LaunchState::FallbackFired);
    }

    #[test]
    fn relaunch_rearms_from_the_new_time() {
        let t0 = Instant::now();
        let mut seq = armed(t0);
        let t1 = t0 + Duration::from_millis(1000);
        seq.launch_app(
            UpiApp::PhonePe,
            "phonepe://pay?pa=x".into(),
            "upi://pay?pa=y".into(),
            t1,
        );
        assert_eq!(seq.poll(t0 + DELAY), None);
        assert_eq!(seq.time_until_fallback(t0 + DELAY), Some(Duration::from_millis(1000)));
        assert_eq!(seq.poll(t1 + DELAY), Some("upi://pay?pa=y".to_string()));
    }

    #[test]
    fn reset_returns_to_not_attempted() {
        let t0 = Instant::now();
        let mut seq = armed(t0);
        seq.reset();
        assert_eq!(seq.state(), &LaunchState::NotAttempted);
        assert_eq!(seq.poll(t0 + DELAY), None);
    }
}
