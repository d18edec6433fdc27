//! Held-direction auto-repeat for terminal environments.
//!
//! A fresh press moves immediately. Holding the key repeats the step after
//! `repeat_delay` ms, then every `repeat_rate` ms. Terminals that never
//! report key releases are handled with a timeout.

use std::time::Instant;

use crossterm::event::KeyCode;

use arrayvec::ArrayVec;

use crate::map::direction_for_key;
use crate::types::{Direction, MazeAction, DEFAULT_REPEAT_DELAY_MS, DEFAULT_REPEAT_RATE_MS};

/// Tracks input state for auto-repeat handling.
#[derive(Debug, Clone)]
pub struct InputHandler {
    held: Option<Direction>,
    last_key_time: Instant,
    delay_timer: u32,
    repeat_accumulator: u32,
    repeat_delay: u32,
    repeat_rate: u32,
    key_release_timeout_ms: u32,
}

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state that keeps walking.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_REPEAT_DELAY_MS, DEFAULT_REPEAT_RATE_MS)
    }

    pub fn with_config(repeat_delay: u32, repeat_rate: u32) -> Self {
        Self {
            held: None,
            last_key_time: Instant::now(),
            delay_timer: 0,
            repeat_accumulator: 0,
            repeat_delay,
            repeat_rate: repeat_rate.max(1),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn held(&self) -> Option<Direction> {
        self.held
    }

    /// Handle a key press. Returns the immediate step for a newly held
    /// direction; repeated presses of the held key only keep it alive.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<MazeAction> {
        let dir = direction_for_key(code)?;
        self.last_key_time = Instant::now();
        if self.held == Some(dir) {
            return None;
        }
        self.held = Some(dir);
        self.delay_timer = 0;
        self.repeat_accumulator = 0;
        Some(MazeAction::Move(dir))
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if direction_for_key(code).is_some_and(|dir| self.held == Some(dir)) {
            self.release();
        }
    }

    fn release(&mut self) {
        self.held = None;
        self.delay_timer = 0;
        self.repeat_accumulator = 0;
    }

    /// Advance timers by `elapsed_ms` and return the repeated steps due.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<MazeAction, 32> {
        let mut actions = ArrayVec::<MazeAction, 32>::new();

        // Auto-release when terminal does not emit release events.
        let since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if since_last_key > self.key_release_timeout_ms && self.held.is_some() {
            self.release();
        }

        let Some(dir) = self.held else {
            return actions;
        };

        let prev_delay = self.delay_timer;
        self.delay_timer = self.delay_timer.saturating_add(elapsed_ms);
        if self.delay_timer < self.repeat_delay {
            return actions;
        }

        let excess = if prev_delay < self.repeat_delay {
            self.delay_timer - self.repeat_delay
        } else {
            elapsed_ms
        };
        self.repeat_accumulator = self.repeat_accumulator.saturating_add(excess);
        while self.repeat_accumulator >= self.repeat_rate {
            let _ = actions.try_push(MazeAction::Move(dir));
            self.repeat_accumulator -= self.repeat_rate;
        }
        actions
    }

    pub fn reset(&mut self) {
        self.release();
        self.last_key_time = Instant::now();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
