//! zizao-im: composition engine for structural logographic input
//!
//! This crate provides the stateful composition layer of the zizao input
//! method: a host feeds it classified input symbols (letters, digits,
//! backspace, commit) and receives composition results describing exactly
//! how to patch its text buffer. Lookups go through zizao-engine.

pub mod config;
pub mod core;

pub use core::candidate::RankedCandidates;
pub use core::engine::{Composer, EngineConfig};
pub use core::keycode::InputSymbol;
pub use core::patch::{CompositionResult, apply_patch};
pub use core::state::ComposeState;
