use soroban_sdk::{contract, contractimpl, log, Address, Env, String};

use shared::{
    errors::ElectionError,
    types::{ElectionPhase, Participant, Proposal},
    validation::{safe_increment, validate_description, validate_phase, validate_proposal_index},
};

use crate::{events, storage, tally};

#[contract]
pub struct ElectionContract;

#[contractimpl]
impl ElectionContract {
    // ── Construction ─────────────────────────────────────────────────────────

    /// Create an election administered by `administrator`.
    /// The administrator is fixed for the life of the contract.
    pub fn __constructor(env: Env, administrator: Address) {
        storage::set_administrator(&env, &administrator);
        storage::set_phase(&env, ElectionPhase::RegisteringParticipants);
        storage::set_proposal_count(&env, 0);
        storage::set_participant_count(&env, 0);
        storage::set_turnout(&env, 0);
        storage::set_winning_proposal(&env, shared::constants::NO_PROPOSAL);
        storage::bump_instance(&env);

        log!(&env, "election created", administrator);
    }

    // ── Registration ─────────────────────────────────────────────────────────

    /// Register `participant` as a voter. Administrator only, while
    /// participants are being registered.
    pub fn register_participant(
        env: Env,
        caller: Address,
        participant: Address,
    ) -> Result<(), ElectionError> {
        Self::require_administrator(&env, &caller)?;
        validate_phase(
            storage::get_phase(&env),
            ElectionPhase::RegisteringParticipants,
        )?;

        if storage::get_participant(&env, &participant).is_some() {
            return Err(ElectionError::AlreadyRegistered);
        }
        let count = safe_increment(storage::get_participant_count(&env))?;

        storage::save_participant(&env, &participant, &Participant::registered());
        storage::set_participant_count(&env, count);
        storage::bump_instance(&env);

        events::participant_registered(&env, &participant);
        Ok(())
    }

    // ── Phase Transitions ────────────────────────────────────────────────────

    pub fn open_proposals(env: Env, caller: Address) -> Result<(), ElectionError> {
        Self::advance_phase(&env, &caller, ElectionPhase::RegisteringParticipants)
    }

    pub fn close_proposals(env: Env, caller: Address) -> Result<(), ElectionError> {
        Self::advance_phase(&env, &caller, ElectionPhase::ProposalsOpen)
    }

    pub fn open_voting(env: Env, caller: Address) -> Result<(), ElectionError> {
        Self::advance_phase(&env, &caller, ElectionPhase::ProposalsClosed)
    }

    pub fn close_voting(env: Env, caller: Address) -> Result<(), ElectionError> {
        Self::advance_phase(&env, &caller, ElectionPhase::VotingOpen)
    }

    /// Compute the winner and move to `ResultsTallied`.
    /// Returns the winning index, 0 when no votes were cast.
    pub fn tally_votes(env: Env, caller: Address) -> Result<u32, ElectionError> {
        Self::advance_phase(&env, &caller, ElectionPhase::VotingClosed)?;
        Ok(storage::get_winning_proposal(&env))
    }

    // ── Proposals ────────────────────────────────────────────────────────────

    /// Submit a proposal and return its index (1-based).
    pub fn submit_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<u32, ElectionError> {
        Self::require_participant(&env, &caller)?;
        validate_phase(storage::get_phase(&env), ElectionPhase::ProposalsOpen)?;
        validate_description(&description)?;

        let index = safe_increment(storage::get_proposal_count(&env))?;
        let proposal = Proposal {
            index,
            author: caller.clone(),
            description,
            vote_count: 0,
        };

        storage::save_proposal(&env, &proposal);
        storage::set_proposal_count(&env, index);
        storage::bump_instance(&env);

        events::proposal_submitted(&env, index, &caller);
        Ok(index)
    }

    // ── Voting ───────────────────────────────────────────────────────────────

    pub fn cast_vote(env: Env, caller: Address, proposal_index: u32) -> Result<(), ElectionError> {
        let mut voter = Self::require_participant(&env, &caller)?;
        validate_phase(storage::get_phase(&env), ElectionPhase::VotingOpen)?;

        if voter.has_voted {
            return Err(ElectionError::AlreadyVoted);
        }
        validate_proposal_index(proposal_index, storage::get_proposal_count(&env))?;

        let mut proposal =
            storage::get_proposal(&env, proposal_index).ok_or(ElectionError::ProposalNotFound)?;
        proposal.vote_count = safe_increment(proposal.vote_count)?;
        let turnout = safe_increment(storage::get_turnout(&env))?;

        voter.has_voted = true;
        voter.voted_proposal_index = proposal_index;

        storage::save_proposal(&env, &proposal);
        storage::save_participant(&env, &caller, &voter);
        storage::set_turnout(&env, turnout);
        storage::bump_instance(&env);

        events::vote_cast(&env, &caller, proposal_index);
        Ok(())
    }

    // ── Participant Queries ──────────────────────────────────────────────────

    /// Registry record of `participant`. Unknown identities read back as an
    /// unregistered record.
    pub fn get_participant(
        env: Env,
        caller: Address,
        participant: Address,
    ) -> Result<Participant, ElectionError> {
        Self::require_participant(&env, &caller)?;
        Ok(storage::get_participant(&env, &participant).unwrap_or(Participant::unregistered()))
    }

    pub fn get_proposal(env: Env, caller: Address, index: u32) -> Result<Proposal, ElectionError> {
        Self::require_participant(&env, &caller)?;
        validate_proposal_index(index, storage::get_proposal_count(&env))?;
        storage::get_proposal(&env, index).ok_or(ElectionError::ProposalNotFound)
    }

    // ── Public Queries ───────────────────────────────────────────────────────

    pub fn administrator(env: Env) -> Address {
        storage::get_administrator(&env)
    }

    pub fn phase(env: Env) -> ElectionPhase {
        storage::get_phase(&env)
    }

    /// Winning proposal index; 0 until tallied or when nobody voted.
    pub fn winning_proposal(env: Env) -> u32 {
        storage::get_winning_proposal(&env)
    }

    pub fn proposal_count(env: Env) -> u32 {
        storage::get_proposal_count(&env)
    }

    pub fn participant_count(env: Env) -> u32 {
        storage::get_participant_count(&env)
    }

    /// Number of participants who have voted.
    pub fn turnout(env: Env) -> u32 {
        storage::get_turnout(&env)
    }
}

impl ElectionContract {
    fn require_administrator(env: &Env, caller: &Address) -> Result<(), ElectionError> {
        caller.require_auth();
        if *caller != storage::get_administrator(env) {
            return Err(ElectionError::NotAdministrator);
        }
        Ok(())
    }

    fn require_participant(env: &Env, caller: &Address) -> Result<Participant, ElectionError> {
        caller.require_auth();
        storage::get_participant(env, caller)
            .filter(|record| record.is_registered)
            .ok_or(ElectionError::NotRegisteredParticipant)
    }

    /// Move from `expected_current` to its successor. Entering
    /// `ResultsTallied` records the winner first; no other transition
    /// touches it.
    fn advance_phase(
        env: &Env,
        caller: &Address,
        expected_current: ElectionPhase,
    ) -> Result<(), ElectionError> {
        Self::require_administrator(env, caller)?;
        let current = storage::get_phase(env);
        validate_phase(current, expected_current)?;
        let next = current
            .next()
            .ok_or(ElectionError::wrong_phase(expected_current))?;

        if next.is_terminal() {
            let winner = tally::winning_proposal(env);
            storage::set_winning_proposal(env, winner);
            log!(env, "votes tallied", winner, storage::get_turnout(env));
        }
        storage::set_phase(env, next);
        storage::bump_instance(env);

        events::phase_changed(env, current, next);
        Ok(())
    }
}
