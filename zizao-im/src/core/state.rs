//! Composition state machine states
//!
//! The composer is either idle or composing; "composing with nothing typed"
//! is not representable. An empty key sequence always means `Idle`.

use super::candidate::RankedCandidates;

/// The current state of the composer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ComposeState {
    /// No composition in progress, waiting for the first letter
    #[default]
    Idle,

    /// A key sequence is being composed
    Composing {
        /// Letters typed since the last commit or reset (never empty)
        memory: String,
        /// Latest derivation from `memory`: primary first, then alternates
        ranked: RankedCandidates,
    },
}

impl ComposeState {
    /// Check if the composer is idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The current key sequence, empty when idle
    pub fn memory(&self) -> &str {
        match self {
            Self::Idle => "",
            Self::Composing { memory, .. } => memory,
        }
    }

    /// The current ranked candidates, if composing
    pub fn ranked(&self) -> Option<&RankedCandidates> {
        match self {
            Self::Idle => None,
            Self::Composing { ranked, .. } => Some(ranked),
        }
    }
}
