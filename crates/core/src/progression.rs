//! Progression module - level and XP bookkeeping
//!
//! A round's score is banked as XP. While XP reaches the threshold of the
//! current level, the threshold is paid and the level goes up. A level past
//! the end of the threshold table has an infinite threshold.
//!
//! Progress is persisted as `"<level>:<xp>"`. Decoding is best effort: a part
//! that does not parse counts as zero.

/// Level and XP carried across rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Progression {
    pub level: u32,
    pub xp: u32,
}

impl Progression {
    pub fn new(level: u32, xp: u32) -> Self {
        Self { level, xp }
    }

    /// XP needed to leave the current level, `None` when unreachable
    pub fn threshold(&self, thresholds: &[u32]) -> Option<u32> {
        thresholds.get(self.level as usize).copied()
    }

    /// Add `score` to XP and level up as far as it goes.
    ///
    /// Returns the number of levels gained.
    pub fn bank(&mut self, score: u32, thresholds: &[u32]) -> u32 {
        self.xp = self.xp.saturating_add(score);
        let mut gained = 0;
        while let Some(threshold) = self.threshold(thresholds) {
            if self.xp < threshold {
                break;
            }
            self.xp -= threshold;
            self.level += 1;
            gained += 1;
        }
        gained
    }

    /// Fraction of the current threshold earned, in `[0, 1]`
    pub fn fraction(&self, thresholds: &[u32]) -> f32 {
        match self.threshold(thresholds) {
            Some(0) => 1.0,
            Some(t) => (self.xp as f32 / t as f32).min(1.0),
            None => 0.0,
        }
    }

    /// Persisted form: `"<level>:<xp>"`
    pub fn encode(&self) -> String {
        format!("{}:{}", self.level, self.xp)
    }

    /// Parse the persisted form. Missing or malformed parts become zero.
    pub fn decode(raw: &str) -> Self {
        let mut parts = raw.split(':').map(|p| p.trim().parse::<u32>().unwrap_or(0));
        let level = parts.next().unwrap_or(0);
        let xp = parts.next().unwrap_or(0);
        Self { level, xp }
    }
}
