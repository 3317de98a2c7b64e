//! Data types shared by the election contracts
//!
//! ## Phase lifecycle
//!
//! [`ElectionPhase`] only ever moves forward, one step at a time:
//!
//! ```text
//! RegisteringParticipants ──► ProposalsOpen ──► ProposalsClosed
//!     ──► VotingOpen ──► VotingClosed ──► ResultsTallied
//! ```
//!
//! `ResultsTallied` is terminal.

use soroban_sdk::{contracttype, Address, String};

// ===== Phase =====

/// Stage of the election lifecycle
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ElectionPhase {
    /// Administrator registers participants
    RegisteringParticipants = 0,
    /// Participants submit proposals
    ProposalsOpen = 1,
    /// Proposal list is frozen
    ProposalsClosed = 2,
    /// Participants cast votes
    VotingOpen = 3,
    /// Votes are frozen, awaiting tally
    VotingClosed = 4,
    /// Winner computed; terminal
    ResultsTallied = 5,
}

impl ElectionPhase {
    /// Immediate successor, `None` once tallied.
    pub fn next(&self) -> Option<ElectionPhase> {
        match self {
            ElectionPhase::RegisteringParticipants => Some(ElectionPhase::ProposalsOpen),
            ElectionPhase::ProposalsOpen => Some(ElectionPhase::ProposalsClosed),
            ElectionPhase::ProposalsClosed => Some(ElectionPhase::VotingOpen),
            ElectionPhase::VotingOpen => Some(ElectionPhase::VotingClosed),
            ElectionPhase::VotingClosed => Some(ElectionPhase::ResultsTallied),
            ElectionPhase::ResultsTallied => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ElectionPhase::ResultsTallied)
    }
}

// ===== Registry Entries =====

/// Registry record of a participant
///
/// An identity that was never registered reads back as
/// `Participant::unregistered()`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Participant {
    pub is_registered: bool,
    pub has_voted: bool,
    /// Only meaningful once `has_voted` is set
    pub voted_proposal_index: u32,
}

impl Participant {
    pub fn registered() -> Self {
        Participant {
            is_registered: true,
            has_voted: false,
            voted_proposal_index: crate::constants::NO_PROPOSAL,
        }
    }

    pub fn unregistered() -> Self {
        Participant {
            is_registered: false,
            has_voted: false,
            voted_proposal_index: crate::constants::NO_PROPOSAL,
        }
    }
}

/// A submitted proposal
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    /// 1-based position in submission order
    pub index: u32,
    pub author: Address,
    pub description: String,
    pub vote_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_advance_one_step_in_order() {
        let mut phase = ElectionPhase::RegisteringParticipants;
        let mut steps = 0;
        while let Some(next) = phase.next() {
            assert!(next > phase);
            assert_eq!(next as u32, phase as u32 + 1);
            phase = next;
            steps += 1;
        }
        assert_eq!(steps, 5);
        assert!(phase.is_terminal());
    }

    #[test]
    fn new_participant_has_not_voted() {
        let participant = Participant::registered();
        assert!(participant.is_registered);
        assert!(!participant.has_voted);
        assert_eq!(participant.voted_proposal_index, 0);
    }
}
