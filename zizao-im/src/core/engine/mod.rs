//! Composer - the composition state machine
//!
//! Holds the key sequence typed so far ("memory"), derives the ranked
//! candidate list from the code table on every change, and reports each
//! text delta to the host as a [`CompositionResult`].

mod input;
mod types;

pub use types::EngineConfig;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::trace;
use zizao_engine::{CodeTable, render_keys};

use super::candidate::RankedCandidates;
use super::keycode::InputSymbol;
use super::patch::CompositionResult;
use super::state::ComposeState;

/// The composition engine for one text field.
///
/// The code table is shared read-only between any number of composers;
/// each composer owns its own composing session and has no internal
/// locking. All operations are total and synchronous: one symbol is fully
/// processed before the next is accepted.
pub struct Composer {
    /// Shared, immutable code table
    table: Arc<CodeTable>,
    /// Current composition state
    state: ComposeState,
    /// Engine configuration
    config: EngineConfig,
}

impl Composer {
    /// Create a composer over a shared code table.
    pub fn new(table: Arc<CodeTable>) -> Self {
        Self::with_config(table, EngineConfig::default())
    }

    /// Create with configuration.
    pub fn with_config(table: Arc<CodeTable>, config: EngineConfig) -> Self {
        Self {
            table,
            state: ComposeState::Idle,
            config,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> &ComposeState {
        &self.state
    }

    /// Check if a composition is in progress.
    pub fn is_composing(&self) -> bool {
        !self.state.is_idle()
    }

    /// The current preview (primary text), empty when idle.
    pub fn preview(&self) -> &str {
        self.state.ranked().map(|r| r.primary()).unwrap_or("")
    }

    /// The full ranked candidate list, primary first; empty when idle.
    pub fn current_candidates(&self) -> &[String] {
        self.state.ranked().map(|r| r.all()).unwrap_or(&[])
    }

    /// The typed key sequence rendered through the radical legend.
    ///
    /// Recomputed from memory on every call; letters without a legend
    /// entry render as the placeholder glyph.
    pub fn progress_display(&self) -> String {
        render_keys(self.state.memory())
    }

    /// Drop any composition in progress and return to idle.
    pub fn reset(&mut self) {
        self.state = ComposeState::Idle;
    }

    /// Process one classified input symbol.
    ///
    /// Returns `None` when the symbol is a no-op for the composer: digits
    /// out of range, or backspace/commit while idle (the host handles
    /// those on its own buffer).
    pub fn process(&mut self, symbol: InputSymbol) -> Option<CompositionResult> {
        trace!("processing {:?} in state {:?}", symbol, self.state);
        match symbol {
            InputSymbol::Letter(ch) => self.type_letter(ch),
            InputSymbol::Digit(d) => self.type_digit(d),
            InputSymbol::Backspace => self.backspace(),
            InputSymbol::Commit => self.commit_now(),
        }
    }
}
