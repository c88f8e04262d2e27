//! Phase timeout budgets for a single connection attempt.
//!
//! A [`Timeout`] holds up to three settings: a connect timeout, a read timeout,
//! and a total budget shared by both phases. Once the connection is established
//! (`start` .. `stop` around the connect), the time spent comes out of the total
//! for the request phase unless an explicit read timeout overrides it.

mod clock;
mod error;
mod value;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use error::{ConfigError, TimeoutField};
pub use value::{TimeoutInput, TimeoutValue, DEFAULT_TIMEOUT};

use std::time::Duration;

/// Timer lifecycle. Timestamps are clock readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Idle,
    Running { started: Duration },
    Stopped { started: Duration, stopped: Duration },
}

/// Timeout settings plus the timer for one connect/request cycle.
///
/// A tracker is single use: once started it cannot be started again. Use
/// [`fresh`](Self::fresh) to get an idle copy for the next attempt.
#[derive(Debug, Clone)]
pub struct Timeout<C: Clock = MonotonicClock> {
    connect: TimeoutValue,
    read: TimeoutValue,
    total: TimeoutValue,
    state: TimerState,
    clock: C,
}

impl Timeout<MonotonicClock> {
    pub fn new(connect: TimeoutValue, read: TimeoutValue, total: TimeoutValue) -> Self {
        Timeout::with_clock(connect, read, total, MonotonicClock::new())
    }

    /// Builds a tracker from loosely typed settings; `None` means default.
    ///
    /// Fails on negative numbers, NaN, or text other than `"none"`/`"default"`.
    pub fn from_inputs(
        connect: Option<TimeoutInput>,
        read: Option<TimeoutInput>,
        total: Option<TimeoutInput>,
    ) -> Result<Self, ConfigError> {
        let resolve = |input: Option<TimeoutInput>, field| match input {
            Some(input) => input.resolve(field),
            None => Ok(TimeoutValue::Default),
        };
        Ok(Timeout::new(
            resolve(connect, TimeoutField::Connect)?,
            resolve(read, TimeoutField::Read)?,
            resolve(total, TimeoutField::Total)?,
        ))
    }
}

impl Default for Timeout<MonotonicClock> {
    fn default() -> Self {
        Timeout::new(
            TimeoutValue::Default,
            TimeoutValue::Default,
            TimeoutValue::Default,
        )
    }
}

impl<C: Clock> Timeout<C> {
    pub fn with_clock(
        connect: TimeoutValue,
        read: TimeoutValue,
        total: TimeoutValue,
        clock: C,
    ) -> Self {
        Self {
            connect,
            read,
            total,
            state: TimerState::Idle,
            clock,
        }
    }

    /// Same settings, idle timer, driven by `clock`.
    pub fn clocked_by<K: Clock>(&self, clock: K) -> Timeout<K> {
        Timeout::with_clock(self.connect, self.read, self.total, clock)
    }

    /// Idle copy of this tracker for another attempt.
    pub fn fresh(&self) -> Self
    where
        C: Clone,
    {
        self.clocked_by(self.clock.clone())
    }

    pub fn connect(&self) -> TimeoutValue {
        self.connect
    }

    pub fn read(&self) -> TimeoutValue {
        self.read
    }

    pub fn total(&self) -> TimeoutValue {
        self.total
    }

    /// Deadline for establishing the connection.
    ///
    /// An explicit connect setting wins; otherwise the whole total budget applies.
    pub fn connect_timeout(&self) -> TimeoutValue {
        if self.connect.is_default() {
            self.total
        } else {
            self.connect
        }
    }

    /// Deadline for the request/response exchange.
    ///
    /// An explicit read setting is returned as is. Otherwise a numeric total is
    /// reduced by the time elapsed so far (zero before `start`), never below zero.
    pub fn request_timeout(&self) -> TimeoutValue {
        if !self.read.is_default() {
            return self.read;
        }
        match self.total {
            TimeoutValue::Value(total) => {
                TimeoutValue::Value(total.saturating_sub(self.elapsed_or_zero()))
            }
            total => total,
        }
    }

    /// Records the start of the attempt.
    pub fn start(&mut self) -> Result<(), ConfigError> {
        match self.state {
            TimerState::Idle => {
                let started = self.clock.now();
                self.state = TimerState::Running { started };
                tracing::trace!(?started, "timeout timer started");
                Ok(())
            }
            TimerState::Running { .. } | TimerState::Stopped { .. } => {
                Err(ConfigError::AlreadyStarted)
            }
        }
    }

    /// Records the end of the timed phase. Stopping again moves the stop time
    /// to now.
    pub fn stop(&mut self) -> Result<(), ConfigError> {
        match self.state {
            TimerState::Idle => Err(ConfigError::NotStarted),
            TimerState::Running { started } | TimerState::Stopped { started, .. } => {
                let stopped = self.clock.now();
                self.state = TimerState::Stopped { started, stopped };
                tracing::trace!(
                    elapsed = ?stopped.saturating_sub(started),
                    "timeout timer stopped"
                );
                Ok(())
            }
        }
    }

    /// Time between `start` and `stop`, or between `start` and now if still running.
    pub fn get_elapsed(&self) -> Result<Duration, ConfigError> {
        match self.state {
            TimerState::Idle => Err(ConfigError::NotStarted),
            TimerState::Running { started } => Ok(self.clock.now().saturating_sub(started)),
            TimerState::Stopped { started, stopped } => Ok(stopped.saturating_sub(started)),
        }
    }

    pub fn is_started(&self) -> bool {
        !matches!(self.state, TimerState::Idle)
    }

    fn elapsed_or_zero(&self) -> Duration {
        self.get_elapsed().unwrap_or(Duration::ZERO)
    }
}
