//! CLI layer
//!
//! This module contains the interactive surfaces of the binary: the
//! onboarding wizard that builds the session's ledger and the command loop
//! that drives it.

pub mod onboarding;
pub mod prompt;
pub mod session;
