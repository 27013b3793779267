//! Session controller - owns the one current game and everything round-local.
//!
//! The controller is driven by discrete triggers (move, tick, powerup click,
//! tile click), each processed to completion. Time is passed in as `now_ms`.
//!
//! Round lifecycle:
//!
//! ```text
//! Active --(countdown hits zero)----> bank score, level up, save --+
//!   ^                                                              |
//!   |    --(move leaves no legal moves)--> no XP, notify ---------+
//!   |                                                              |
//!   +------------- fresh game, restart clock, reset powerups <-----+
//! ```
//!
//! After each move the pre-move snapshot stays on screen for the animation
//! delay while tiles slide along the reconciled motions, then the new snapshot
//! is presented. A new trigger arriving before that forces the pending
//! presentation first, so motions are always computed against what was last
//! shown.

use crate::clock::{RoundClock, Timeout};
use crate::config::SessionConfig;
use crate::core::{
    reconcile, Activation, Board, GameState, Powerup, PowerupActivation, PowerupState,
    Progression, Reconciliation, POWERUPS,
};
use crate::engine::Engine;
use crate::store::SaveStore;
use crate::types::{strings, Direction, SAVE_KEY};

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// Countdown reached zero; score is banked
    TimeUp,
    /// The last move left no legal moves; nothing is banked
    NoMoves,
}

/// What happened when a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub reason: RoundEnd,
    /// Score added to XP (0 for `NoMoves`)
    pub banked: u32,
    pub levels_gained: u32,
    pub level: u32,
    pub xp: u32,
}

/// Result of a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the engine changed the board
    pub changed: bool,
    pub round_end: Option<RoundSummary>,
}

/// Tile motion currently being shown
#[derive(Debug, Clone, Copy)]
pub struct Animation<'a> {
    pub motions: &'a Reconciliation,
    /// Elapsed fraction of the animation delay, `[0, 1]`
    pub progress: f32,
}

/// What the presentation layer should draw right now
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub board: &'a Board,
    pub animation: Option<Animation<'a>>,
}

#[derive(Debug, Clone, Copy)]
struct Message {
    text: &'static str,
    until_ms: u64,
}

pub struct Session<E: Engine, S: SaveStore> {
    engine: E,
    store: S,
    config: SessionConfig,
    catalog: Vec<Powerup>,
    progression: Progression,
    powerups: PowerupActivation,
    clock: RoundClock,
    presentation: Timeout,
    /// Snapshot last handed to the presentation layer
    presented: GameState,
    /// Motions from `presented` to the engine's current state
    motions: Reconciliation,
    message: Option<Message>,
    rounds: u32,
}

impl<E: Engine, S: SaveStore> Session<E, S> {
    /// Start a session: load progress, create a game, start the clock.
    pub fn new(mut engine: E, store: S, config: SessionConfig, now_ms: u64) -> Self {
        let progression = load_progression(&store);
        let presented = *engine.create_game();
        tracing::info!(
            level = progression.level,
            xp = progression.xp,
            "session started"
        );

        Self {
            engine,
            store,
            clock: RoundClock::new(config.round_secs, now_ms),
            config,
            catalog: POWERUPS.to_vec(),
            progression,
            powerups: PowerupActivation::new(),
            presentation: Timeout::default(),
            presented,
            motions: Reconciliation::default(),
            message: None,
            rounds: 0,
        }
    }

    /// Replace the powerup catalog (display order = identity)
    pub fn with_catalog(mut self, catalog: impl Into<Vec<Powerup>>) -> Self {
        self.catalog = catalog.into();
        self.powerups.reset();
        self
    }

    // ---------------------------------------------------------------------
    // Triggers
    // ---------------------------------------------------------------------

    /// Slide the board.
    pub fn handle_move(&mut self, direction: Direction, now_ms: u64) -> MoveOutcome {
        self.flush_presentation();

        let before = *self.engine.current_state();
        let changed = self.engine.apply_move(direction);

        if changed {
            self.motions = reconcile(before.board(), self.engine.current_state().board());
            self.presentation.schedule(now_ms, self.config.animation_ms);
            tracing::debug!(
                direction = direction.as_str(),
                motions = self.motions.len(),
                "move scheduled"
            );
        }

        let round_end = if self.engine.current_state().has_possible_moves() {
            None
        } else {
            Some(self.end_round(RoundEnd::NoMoves, now_ms))
        };

        MoveOutcome { changed, round_end }
    }

    /// Advance timers: presentation, message expiry, round countdown.
    pub fn tick(&mut self, now_ms: u64) -> Option<RoundSummary> {
        if self.presentation.fire_if_due(now_ms) {
            self.present();
        }

        if self.message.is_some_and(|m| now_ms >= m.until_ms) {
            self.message = None;
        }

        if self.clock.advance(now_ms) {
            return Some(self.end_round(RoundEnd::TimeUp, now_ms));
        }
        None
    }

    /// Click catalog entry `index`. Returns true if anything happened.
    pub fn click_powerup(&mut self, index: usize) -> bool {
        self.flush_presentation();

        let state = *self.engine.current_state();
        match self
            .powerups
            .activate(&self.catalog, index, self.progression.level, &state)
        {
            Activation::Ignored => false,
            Activation::Applied(next) => {
                tracing::debug!(powerup = self.catalog[index].name, "powerup applied");
                self.adopt(next);
                true
            }
            Activation::Armed { index } => {
                tracing::debug!(powerup = self.catalog[index].name, "powerup armed");
                true
            }
        }
    }

    /// Click the tile at `(x, y)`. Only does something while an effect is armed
    /// and the cell holds a tile.
    pub fn click_tile(&mut self, x: u8, y: u8) -> bool {
        if self.powerups.armed().is_none() {
            return false;
        }
        self.flush_presentation();

        let state = *self.engine.current_state();
        if !state.board().is_occupied(x, y) {
            return false;
        }
        let Some(next) = self.powerups.target(&state, x, y) else {
            return false;
        };
        tracing::debug!(x, y, "targeted powerup applied");
        self.adopt(next);
        true
    }

    // ---------------------------------------------------------------------
    // Views
    // ---------------------------------------------------------------------

    /// Board to draw at `now_ms`, with motion while a move is animating
    pub fn frame(&self, now_ms: u64) -> Frame<'_> {
        Frame {
            board: self.presented.board(),
            animation: self.presentation.progress(now_ms).map(|progress| Animation {
                motions: &self.motions,
                progress,
            }),
        }
    }

    /// Catalog entries with their state for the current level and round
    pub fn powerups(&self) -> impl Iterator<Item = (usize, &Powerup, PowerupState)> + '_ {
        self.catalog.iter().enumerate().map(move |(i, p)| {
            (
                i,
                p,
                self.powerups
                    .state_of(&self.catalog, i, self.progression.level),
            )
        })
    }

    /// Catalog index of the armed targeted effect
    pub fn armed(&self) -> Option<usize> {
        self.powerups.armed()
    }

    /// Transient message, if one is still visible at `now_ms`
    pub fn message(&self, now_ms: u64) -> Option<&'static str> {
        self.message
            .filter(|m| now_ms < m.until_ms)
            .map(|m| m.text)
    }

    pub fn current_state(&self) -> &GameState {
        self.engine.current_state()
    }

    pub fn presented_state(&self) -> &GameState {
        &self.presented
    }

    pub fn is_animating(&self) -> bool {
        self.presentation.is_pending()
    }

    pub fn progression(&self) -> Progression {
        self.progression
    }

    pub fn level(&self) -> u32 {
        self.progression.level
    }

    pub fn xp(&self) -> u32 {
        self.progression.xp
    }

    /// XP needed to leave the current level, `None` when unreachable
    pub fn threshold(&self) -> Option<u32> {
        self.progression.threshold(&self.config.thresholds)
    }

    /// Fraction of the current threshold earned
    pub fn xp_fraction(&self) -> f32 {
        self.progression.fraction(&self.config.thresholds)
    }

    pub fn seconds_left(&self) -> u32 {
        self.clock.remaining()
    }

    /// Rounds completed since the session started
    pub fn rounds_played(&self) -> u32 {
        self.rounds
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ---------------------------------------------------------------------
    // Internals
    // ---------------------------------------------------------------------

    /// Fire a pending presentation immediately.
    fn flush_presentation(&mut self) {
        if self.presentation.fire_now() {
            self.present();
        }
    }

    fn present(&mut self) {
        self.presented = *self.engine.current_state();
        self.motions = Reconciliation::default();
    }

    /// Whole-state replacement: the only way a powerup changes the game.
    fn adopt(&mut self, next: GameState) {
        self.engine.replace_state(next);
        self.present();
    }

    fn end_round(&mut self, reason: RoundEnd, now_ms: u64) -> RoundSummary {
        let score = self.engine.current_state().score();

        let (banked, levels_gained) = match reason {
            RoundEnd::TimeUp => {
                let gained = self.progression.bank(score, &self.config.thresholds);
                self.save();
                (score, gained)
            }
            RoundEnd::NoMoves => (0, 0),
        };

        let text = match reason {
            RoundEnd::NoMoves => strings::GAME_OVER_NO_XP,
            RoundEnd::TimeUp if levels_gained > 0 => strings::LEVEL_UP,
            RoundEnd::TimeUp => strings::ROUND_COMPLETE,
        };
        self.message = Some(Message {
            text,
            until_ms: now_ms + self.config.message_ms,
        });

        tracing::info!(
            ?reason,
            score,
            banked,
            levels_gained,
            level = self.progression.level,
            xp = self.progression.xp,
            "round ended"
        );

        self.reset_round(now_ms);

        RoundSummary {
            reason,
            banked,
            levels_gained,
            level: self.progression.level,
            xp: self.progression.xp,
        }
    }

    fn reset_round(&mut self, now_ms: u64) {
        self.presentation.cancel();
        self.presented = *self.engine.create_game();
        self.motions = Reconciliation::default();
        self.clock.restart(now_ms);
        self.powerups.reset();
        self.rounds += 1;
    }

    fn save(&mut self) {
        let encoded = self.progression.encode();
        if let Err(e) = self.store.set(SAVE_KEY, &encoded) {
            tracing::warn!("failed to save progress {}: {}", encoded, e);
        }
    }
}

/// Read saved progress. Missing, unreadable or malformed data yields level 0, xp 0.
pub fn load_progression(store: &impl SaveStore) -> Progression {
    match store.get(SAVE_KEY) {
        Ok(Some(raw)) => Progression::decode(&raw),
        Ok(None) => Progression::default(),
        Err(e) => {
            tracing::warn!("failed to load progress: {}", e);
            Progression::default()
        }
    }
}
