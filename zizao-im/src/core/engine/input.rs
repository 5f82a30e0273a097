//! Symbol handling (Idle and Composing states)

use tracing::{debug, trace};

use super::*;

impl Composer {
    /// Append a letter to the key sequence and re-derive the candidates.
    ///
    /// Starts a new composing session when idle. Non-letter characters are
    /// the host's responsibility and are ignored here.
    pub fn type_letter(&mut self, ch: char) -> Option<CompositionResult> {
        let ch = ch.to_ascii_lowercase();
        if !ch.is_ascii_lowercase() {
            return None;
        }

        let prev = self.preview().to_string();
        match &mut self.state {
            ComposeState::Idle => {
                self.state = ComposeState::Composing {
                    memory: ch.to_string(),
                    ranked: RankedCandidates::default(),
                };
            }
            ComposeState::Composing { memory, .. } => memory.push(ch),
        }
        self.rederive();

        Some(CompositionResult::new(prev, self.preview(), ""))
    }

    /// Remove the last letter of the key sequence and re-derive.
    ///
    /// Backspacing the last remaining letter returns to idle; the emitted
    /// result erases the preview without producing any commit text.
    /// Backspace while idle is not the composer's concern: `None`.
    pub fn backspace(&mut self) -> Option<CompositionResult> {
        let ComposeState::Composing { memory, ranked } = &mut self.state else {
            return None;
        };

        let prev = ranked.primary().to_string();
        memory.pop();

        if memory.is_empty() {
            debug!("memory exhausted by backspace, back to idle");
            self.state = ComposeState::Idle;
            return Some(CompositionResult::new(prev, "", ""));
        }

        self.rederive();
        Some(CompositionResult::new(prev, self.preview(), ""))
    }

    /// Select a candidate by digit (1 = primary) and commit it.
    ///
    /// The selection is read against the candidate list as it existed
    /// before this keystroke, never re-derived. Out of range, or idle:
    /// no-op, no state change, `None`.
    pub fn type_digit(&mut self, digit: u8) -> Option<CompositionResult> {
        let ranked = self.state.ranked()?;
        let chosen = ranked.select_digit(digit)?.to_string();
        let prev = ranked.primary().to_string();
        debug!("digit {} selected {:?}", digit, chosen);
        self.state = ComposeState::Idle;
        Some(CompositionResult::new(prev, "", chosen))
    }

    /// Commit the current preview verbatim and return to idle.
    ///
    /// The preview may be empty if no derivation ever matched; the commit
    /// is then empty too and the host inserts its own literal. Commit
    /// while idle: `None`.
    pub fn commit_now(&mut self) -> Option<CompositionResult> {
        let ranked = self.state.ranked()?;
        let text = ranked.primary().to_string();
        debug!("committing {:?}", text);
        self.state = ComposeState::Idle;
        Some(CompositionResult::new(text.clone(), "", text))
    }

    /// Re-derive the ranked candidates from the current memory.
    ///
    /// Exact match wins; otherwise the one-level prefix fallback is tried.
    /// When neither yields anything the previous list is kept as-is, so an
    /// invalid continuation never blanks the preview. That retention is
    /// deliberate UX behavior, not a missing case.
    fn rederive(&mut self) {
        let ComposeState::Composing { memory, ranked } = &mut self.state else {
            return;
        };

        let exact = self.table.exact_match(memory);
        if !exact.is_empty() {
            *ranked = RankedCandidates::new(exact.to_vec());
            return;
        }

        let fallback = self
            .table
            .fallback_candidates(memory, self.config.fallback_limit);
        if !fallback.is_empty() {
            trace!("prefix fallback for {:?}: {} candidates", memory, fallback.len());
            *ranked = RankedCandidates::new(fallback);
            return;
        }

        trace!("no match for {:?}, preview retained", memory);
    }
}
