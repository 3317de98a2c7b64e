use soroban_sdk::{contracttype, panic_with_error, Address, Env};

use shared::constants::{
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, NO_PROPOSAL, REGISTRY_BUMP_AMOUNT,
    REGISTRY_LIFETIME_THRESHOLD,
};
use shared::errors::ElectionError;
use shared::types::{ElectionPhase, Participant, Proposal};

/// Storage keys
///
/// Election-wide values live in instance storage and share the contract's
/// TTL; registry entries are persistent and extended individually.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Administrator,
    Phase,
    ProposalCount,
    ParticipantCount,
    Turnout,
    WinningProposal,
    Participant(Address),
    Proposal(u32),
}

// ── Instance ─────────────────────────────────────────────────────────────────

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// ── Administrator ────────────────────────────────────────────────────────────

pub fn set_administrator(env: &Env, administrator: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::Administrator, administrator);
}

/// Set by the constructor and never removed.
pub fn get_administrator(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Administrator)
        .unwrap_or_else(|| panic_with_error!(env, ElectionError::NotAdministrator))
}

// ── Phase ────────────────────────────────────────────────────────────────────

pub fn set_phase(env: &Env, phase: ElectionPhase) {
    env.storage().instance().set(&DataKey::Phase, &phase);
}

pub fn get_phase(env: &Env) -> ElectionPhase {
    env.storage()
        .instance()
        .get(&DataKey::Phase)
        .unwrap_or(ElectionPhase::RegisteringParticipants)
}

// ── Counters ─────────────────────────────────────────────────────────────────

fn get_counter(env: &Env, key: &DataKey) -> u32 {
    env.storage().instance().get(key).unwrap_or(0u32)
}

pub fn get_proposal_count(env: &Env) -> u32 {
    get_counter(env, &DataKey::ProposalCount)
}

pub fn set_proposal_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::ProposalCount, &count);
}

pub fn get_participant_count(env: &Env) -> u32 {
    get_counter(env, &DataKey::ParticipantCount)
}

pub fn set_participant_count(env: &Env, count: u32) {
    env.storage()
        .instance()
        .set(&DataKey::ParticipantCount, &count);
}

pub fn get_turnout(env: &Env) -> u32 {
    get_counter(env, &DataKey::Turnout)
}

pub fn set_turnout(env: &Env, turnout: u32) {
    env.storage().instance().set(&DataKey::Turnout, &turnout);
}

// ── Result ───────────────────────────────────────────────────────────────────

pub fn get_winning_proposal(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::WinningProposal)
        .unwrap_or(NO_PROPOSAL)
}

pub fn set_winning_proposal(env: &Env, index: u32) {
    env.storage()
        .instance()
        .set(&DataKey::WinningProposal, &index);
}

// ── Participants ─────────────────────────────────────────────────────────────

pub fn get_participant(env: &Env, participant: &Address) -> Option<Participant> {
    let key = DataKey::Participant(participant.clone());
    let record = env.storage().persistent().get(&key);
    if record.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, REGISTRY_LIFETIME_THRESHOLD, REGISTRY_BUMP_AMOUNT);
    }
    record
}

pub fn save_participant(env: &Env, participant: &Address, record: &Participant) {
    let key = DataKey::Participant(participant.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, REGISTRY_LIFETIME_THRESHOLD, REGISTRY_BUMP_AMOUNT);
}

// ── Proposals ────────────────────────────────────────────────────────────────

pub fn get_proposal(env: &Env, index: u32) -> Option<Proposal> {
    let key = DataKey::Proposal(index);
    let proposal = env.storage().persistent().get(&key);
    if proposal.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, REGISTRY_LIFETIME_THRESHOLD, REGISTRY_BUMP_AMOUNT);
    }
    proposal
}

pub fn save_proposal(env: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.index);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, REGISTRY_LIFETIME_THRESHOLD, REGISTRY_BUMP_AMOUNT);
}
