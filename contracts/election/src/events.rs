//! Contract events
//!
//! Exactly one event is published per successful state-changing call.
//! Failed calls publish nothing.
//!
//! | Topics                    | Data                |
//! |---------------------------|---------------------|
//! | `("p_reg", participant)`  | `()`                |
//! | `("proposal", index)`     | `author`            |
//! | `("voted", voter)`        | `proposal_index`    |
//! | `("phase",)`              | `(previous, next)`  |

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use shared::types::ElectionPhase;

pub const PARTICIPANT_REGISTERED: Symbol = symbol_short!("p_reg");
pub const PROPOSAL_SUBMITTED: Symbol = symbol_short!("proposal");
pub const VOTE_CAST: Symbol = symbol_short!("voted");
pub const PHASE_CHANGED: Symbol = symbol_short!("phase");

pub fn participant_registered(env: &Env, participant: &Address) {
    env.events()
        .publish((PARTICIPANT_REGISTERED, participant.clone()), ());
}

pub fn proposal_submitted(env: &Env, index: u32, author: &Address) {
    env.events()
        .publish((PROPOSAL_SUBMITTED, index), author.clone());
}

pub fn vote_cast(env: &Env, voter: &Address, proposal_index: u32) {
    env.events()
        .publish((VOTE_CAST, voter.clone()), proposal_index);
}

pub fn phase_changed(env: &Env, previous: ElectionPhase, next: ElectionPhase) {
    env.events().publish((PHASE_CHANGED,), (previous, next));
}
