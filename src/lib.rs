//! Stellar Blocks (workspace facade crate).
//!
//! Re-exports the workspace crates under short paths
//! (`stellar_blocks::{core, input, store, term, types}`) and hosts the
//! front-end screen machine in [`app`] and the runner's tick clock in
//! [`clock`].

pub mod app;
pub mod clock;

pub use stellar_blocks_core as core;
pub use stellar_blocks_input as input;
pub use stellar_blocks_store as store;
pub use stellar_blocks_term as term;
pub use stellar_blocks_types as types;
