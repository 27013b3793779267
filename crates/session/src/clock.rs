//! Timers driven by an injected monotonic clock (milliseconds).
//!
//! Nothing here sleeps or spawns: the game loop passes `now_ms` in and the
//! timers report whether they fired. Each timer is single-slot, so starting it
//! again drops whatever was outstanding.

use crate::types::ROUND_TICK_MS;

/// One-second round countdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundClock {
    round_secs: u32,
    remaining: u32,
    next_tick_ms: u64,
}

impl RoundClock {
    pub fn new(round_secs: u32, now_ms: u64) -> Self {
        Self {
            round_secs,
            remaining: round_secs,
            next_tick_ms: now_ms + ROUND_TICK_MS,
        }
    }

    /// Refill the countdown, first tick one second from `now_ms`
    pub fn restart(&mut self, now_ms: u64) {
        self.remaining = self.round_secs;
        self.next_tick_ms = now_ms + ROUND_TICK_MS;
    }

    /// Seconds left in the round
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Process elapsed ticks. Returns true once the countdown hits zero.
    ///
    /// Ticks after expiry are left for the caller to handle after a restart.
    pub fn advance(&mut self, now_ms: u64) -> bool {
        while now_ms >= self.next_tick_ms {
            self.remaining = self.remaining.saturating_sub(1);
            self.next_tick_ms += ROUND_TICK_MS;
            if self.remaining == 0 {
                return true;
            }
        }
        false
    }
}

/// Single-slot delayed update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timeout {
    slot: Option<(u64, u64)>,
}

impl Timeout {
    /// Schedule to fire `delay_ms` after `now_ms`, replacing any pending one
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64) {
        self.slot = Some((now_ms, now_ms + delay_ms));
    }

    pub fn cancel(&mut self) {
        self.slot = None;
    }

    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }

    /// Clear and return true if pending and due
    pub fn fire_if_due(&mut self, now_ms: u64) -> bool {
        match self.slot {
            Some((_, due)) if now_ms >= due => {
                self.slot = None;
                true
            }
            _ => false,
        }
    }

    /// Clear and return true if pending, regardless of due time
    pub fn fire_now(&mut self) -> bool {
        self.slot.take().is_some()
    }

    /// Elapsed fraction of the pending delay in `[0, 1]`
    pub fn progress(&self, now_ms: u64) -> Option<f32> {
        let (start, due) = self.slot?;
        if due <= start {
            return Some(1.0);
        }
        let t = now_ms.saturating_sub(start) as f32 / (due - start) as f32;
        Some(t.clamp(0.0, 1.0))
    }
}
