#![no_std]
//! Phase-gated election contract.
//!
//! One deployed instance runs one election: the administrator registers
//! participants, participants submit proposals and vote, and the
//! administrator drives the phases through to a tallied result.

mod contract;
mod events;
mod storage;
mod tally;

pub use contract::{ElectionContract, ElectionContractClient};
pub use shared::{ElectionError, ElectionPhase, Participant, Proposal};
pub use tally::first_strict_maximum;
