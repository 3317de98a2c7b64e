//! Error codes for the election contracts
//!
//! Every contract entry point returns `Result<_, ElectionError>`. Codes are
//! stable and grouped by category:
//! - 1-9: Authorization errors
//! - 10-19: Phase errors (one code per required phase)
//! - 20-39: Input and state validation errors
//! - 40-49: Arithmetic errors

use soroban_sdk::contracterror;

use crate::types::ElectionPhase;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum ElectionError {
    // ===== Authorization Errors (1-9) =====
    /// Caller is not the election administrator
    NotAdministrator = 1,

    /// Caller is not a registered participant
    NotRegisteredParticipant = 2,

    // ===== Phase Errors (10-19) =====
    /// Operation requires `RegisteringParticipants`
    RegistrationClosed = 10,

    /// Operation requires `ProposalsOpen`
    ProposalsNotOpen = 11,

    /// Operation requires `ProposalsClosed`
    ProposalsNotClosed = 12,

    /// Operation requires `VotingOpen`
    VotingNotOpen = 13,

    /// Operation requires `VotingClosed`
    VotingNotClosed = 14,

    // ===== Validation Errors (20-39) =====
    /// Participant is already registered
    AlreadyRegistered = 20,

    /// Participant has already cast a vote
    AlreadyVoted = 21,

    /// Proposal description is empty or blank
    EmptyProposal = 22,

    /// Proposal index is 0 or beyond the last submitted proposal
    ProposalNotFound = 23,

    // ===== Arithmetic Errors (40-49) =====
    /// Counter overflow
    Overflow = 40,
}

impl ElectionError {
    /// Error returned when an operation needs `required` but the election is
    /// elsewhere. `ResultsTallied` is terminal and never required, so it maps
    /// to the error of the only transition that reaches it.
    pub fn wrong_phase(required: ElectionPhase) -> Self {
        match required {
            ElectionPhase::RegisteringParticipants => ElectionError::RegistrationClosed,
            ElectionPhase::ProposalsOpen => ElectionError::ProposalsNotOpen,
            ElectionPhase::ProposalsClosed => ElectionError::ProposalsNotClosed,
            ElectionPhase::VotingOpen => ElectionError::VotingNotOpen,
            ElectionPhase::VotingClosed | ElectionPhase::ResultsTallied => {
                ElectionError::VotingNotClosed
            }
        }
    }

    /// The phase a wrong-phase error was raised for, `None` for other errors.
    pub fn required_phase(&self) -> Option<ElectionPhase> {
        match self {
            ElectionError::RegistrationClosed => Some(ElectionPhase::RegisteringParticipants),
            ElectionError::ProposalsNotOpen => Some(ElectionPhase::ProposalsOpen),
            ElectionError::ProposalsNotClosed => Some(ElectionPhase::ProposalsClosed),
            ElectionError::VotingNotOpen => Some(ElectionPhase::VotingOpen),
            ElectionError::VotingNotClosed => Some(ElectionPhase::VotingClosed),
            _ => None,
        }
    }

    /// Get a human-readable description of the error
    pub fn message(&self) -> &str {
        match self {
            ElectionError::NotAdministrator => "Caller is not the administrator",
            ElectionError::NotRegisteredParticipant => "Caller is not a registered participant",

            ElectionError::RegistrationClosed => "Participant registration is closed",
            ElectionError::ProposalsNotOpen => "Proposal submission is not open",
            ElectionError::ProposalsNotClosed => "Proposal submission has not been closed",
            ElectionError::VotingNotOpen => "Voting is not open",
            ElectionError::VotingNotClosed => "Voting has not been closed",

            ElectionError::AlreadyRegistered => "Participant already registered",
            ElectionError::AlreadyVoted => "Participant has already voted",
            ElectionError::EmptyProposal => "Proposal description is empty",
            ElectionError::ProposalNotFound => "Proposal not found",

            ElectionError::Overflow => "Arithmetic overflow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_phase_carries_required_phase() {
        let phases = [
            ElectionPhase::RegisteringParticipants,
            ElectionPhase::ProposalsOpen,
            ElectionPhase::ProposalsClosed,
            ElectionPhase::VotingOpen,
            ElectionPhase::VotingClosed,
        ];
        for phase in phases {
            assert_eq!(ElectionError::wrong_phase(phase).required_phase(), Some(phase));
        }
    }

    #[test]
    fn non_phase_errors_have_no_required_phase() {
        assert_eq!(ElectionError::AlreadyVoted.required_phase(), None);
        assert_eq!(ElectionError::NotAdministrator.required_phase(), None);
    }
}
