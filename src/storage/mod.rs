// src/storage/mod.rs

//! Local persisted state.

mod ledger;

pub use ledger::ReviewLedger;
