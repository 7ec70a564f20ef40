use std::time::Duration;

use thiserror::Error;

use super::easing::Easing;
use super::scheduler::TickOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimatorError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Running,
    Completed,
    Cancelled,
}

impl SessionStatus {
    pub fn is_finished(self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::Cancelled)
    }
}

/// One animate-from-zero run toward a fixed target.
#[derive(Clone, Debug)]
pub struct CountUpSession {
    target: u64,
    duration: Duration,
    current: u64,
    started_at: Option<f64>,
    status: SessionStatus,
    easing: Easing,
}

impl CountUpSession {
    pub fn new(target: i64, duration: Duration, easing: Easing) -> Result<Self, AnimatorError> {
        let target = u64::try_from(target).map_err(|_| AnimatorError::InvalidArgument {
            name: "target",
            reason: format!("must be non-negative, got {}", target),
        })?;
        if duration.is_zero() {
            return Err(AnimatorError::InvalidArgument {
                name: "duration",
                reason: "must be strictly positive".to_string(),
            });
        }

        Ok(Self {
            target,
            duration,
            current: 0,
            started_at: None,
            status: SessionStatus::Idle,
            easing,
        })
    }

    /// Moves an idle session to running. A zero target has nothing to
    /// animate and completes on the spot.
    pub fn begin(&mut self, now_ms: f64) {
        if self.status != SessionStatus::Idle {
            return;
        }
        self.started_at = Some(now_ms);
        self.status = SessionStatus::Running;
        if self.target == 0 {
            self.status = SessionStatus::Completed;
        }
    }

    pub fn tick(&mut self, now_ms: f64) -> TickOutcome {
        match self.status {
            SessionStatus::Idle => return TickOutcome::Continue,
            SessionStatus::Completed | SessionStatus::Cancelled => return TickOutcome::Done,
            SessionStatus::Running => {}
        }
        let Some(started_at) = self.started_at else {
            return TickOutcome::Continue;
        };

        let elapsed = (now_ms - started_at).max(0.0);
        let duration_ms = self.duration.as_secs_f64() * 1000.0;
        let t = (elapsed / duration_ms).min(1.0);

        if t >= 1.0 || self.target == 0 {
            self.current = self.target;
            self.status = SessionStatus::Completed;
            return TickOutcome::Done;
        }

        // only completion may show the target itself
        let eased = (self.easing.apply(t) * self.target as f64).round();
        let value = if eased <= 0.0 { 0 } else { (eased as u64).min(self.target - 1) };
        // a clock that steps backwards must not pull the display down
        self.current = self.current.max(value);
        TickOutcome::Continue
    }

    /// Freezes the value where it is. Finished sessions are left untouched.
    pub fn cancel(&mut self) {
        if !self.status.is_finished() {
            self.status = SessionStatus::Cancelled;
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    #[cfg(test)]
    pub fn started_at(&self) -> Option<f64> {
        self.started_at
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }
}
