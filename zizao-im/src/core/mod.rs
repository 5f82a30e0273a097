//! Core composition functionality
//!
//! This module contains the composing state machine and the result/patch
//! protocol toward the host.

pub mod candidate;
pub mod engine;
pub mod keycode;
pub mod patch;
pub mod state;
