//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands build a
//! serialisable report first and render it second, so the simulation half can
//! be tested without capturing stdout.

pub mod absorb;
pub mod hitting;
pub mod msd;
pub mod walk;
