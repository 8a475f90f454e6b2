//! Sliding-window attempt counter for form submissions.
//!
//! One limiter is built by the app shell and handed to whichever component
//! submits. It is not `Sync` and does not need to be: everything runs on the
//! browser's event loop.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::ops::Deref;
use std::rc::Rc;

pub const DEFAULT_MAX_ATTEMPTS: usize = 5;
pub const DEFAULT_WINDOW_MS: u64 = 60_000;

/// Source of "now" in epoch milliseconds.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

#[derive(Debug, Clone)]
pub struct RateLimiter<C: Clock = SystemClock> {
    max_attempts: usize,
    window_ms: u64,
    attempts: VecDeque<i64>,
    clock: C,
}

impl Default for RateLimiter<SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_WINDOW_MS)
    }
}

impl RateLimiter<SystemClock> {
    pub fn new(max_attempts: usize, window_ms: u64) -> Self {
        Self::with_clock(max_attempts, window_ms, SystemClock)
    }
}

impl<C: Clock> RateLimiter<C> {
    pub fn with_clock(max_attempts: usize, window_ms: u64, clock: C) -> Self {
        Self {
            max_attempts,
            window_ms,
            attempts: VecDeque::with_capacity(max_attempts),
            clock,
        }
    }

    /// Records an attempt and returns true, or returns false without
    /// recording when the window is already full.
    pub fn can_attempt(&mut self) -> bool {
        let now = self.clock.now_ms();
        let window = self.window_i64();
        // Wall-clock time can step backwards, so order is not assumed
        self.attempts.retain(|&t| now.saturating_sub(t) < window);

        if self.attempts.len() >= self.max_attempts {
            log::warn!(
                "Rate limit reached: {} attempts within {}ms",
                self.attempts.len(),
                self.window_ms
            );
            return false;
        }

        self.attempts.push_back(now);
        true
    }

    /// Milliseconds until the oldest recorded attempt leaves the window.
    pub fn time_until_reset(&self) -> u64 {
        match self.attempts.iter().min() {
            None => 0,
            Some(&oldest) => {
                let elapsed = self.clock.now_ms().saturating_sub(oldest);
                self.window_i64().saturating_sub(elapsed).clamp(0, i64::MAX) as u64
            }
        }
    }

    fn window_i64(&self) -> i64 {
        i64::try_from(self.window_ms).unwrap_or(i64::MAX)
    }

    pub fn attempts(&self) -> usize {
        self.attempts.len()
    }

    pub fn reset(&mut self) {
        self.attempts.clear();
    }
}

/// Caller-owned handle passed down through props.
#[derive(Debug, Clone, Default)]
pub struct SharedRateLimiter(Rc<RefCell<RateLimiter>>);

impl SharedRateLimiter {
    pub fn new(limiter: RateLimiter) -> Self {
        Self(Rc::new(RefCell::new(limiter)))
    }
}

impl Deref for SharedRateLimiter {
    type Target = RefCell<RateLimiter>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for SharedRateLimiter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
