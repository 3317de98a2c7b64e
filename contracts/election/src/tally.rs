use soroban_sdk::{log, Env};

use shared::constants::{FIRST_PROPOSAL_INDEX, NO_PROPOSAL};

use crate::storage;

/// Index of the first proposal holding the highest vote count.
///
/// Proposals must arrive in ascending index order. A later proposal only
/// takes the lead with strictly more votes, so ties go to the lowest index.
/// Returns `NO_PROPOSAL` when every count is zero.
pub fn first_strict_maximum<I>(counts: I) -> u32
where
    I: IntoIterator<Item = (u32, u32)>,
{
    let mut winner = NO_PROPOSAL;
    let mut best = 0u32;
    for (index, vote_count) in counts {
        if vote_count > best {
            best = vote_count;
            winner = index;
        }
    }
    winner
}

/// Runs the tally over every stored proposal.
///
/// Indices `1..=count` are always stored; an entry that has gone missing
/// (archived registry entry) is logged and counts zero votes.
pub fn winning_proposal(env: &Env) -> u32 {
    let count = storage::get_proposal_count(env);
    first_strict_maximum((FIRST_PROPOSAL_INDEX..=count).map(|index| {
        let votes = match storage::get_proposal(env, index) {
            Some(proposal) => proposal.vote_count,
            None => {
                log!(env, "proposal missing from tally", index);
                0
            }
        };
        (index, votes)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ElectionContract, Proposal};
    use soroban_sdk::{testutils::Address as _, Address, String};

    fn indexed(counts: &[u32]) -> impl Iterator<Item = (u32, u32)> + '_ {
        counts
            .iter()
            .enumerate()
            .map(|(i, c)| (i as u32 + FIRST_PROPOSAL_INDEX, *c))
    }

    #[test]
    fn first_of_tied_maximum_wins() {
        assert_eq!(first_strict_maximum(indexed(&[3, 5, 5, 2])), 2);
    }

    #[test]
    fn all_zero_counts_have_no_winner() {
        assert_eq!(first_strict_maximum(indexed(&[0, 0, 0])), NO_PROPOSAL);
    }

    #[test]
    fn two_way_draw_goes_to_lower_index() {
        assert_eq!(first_strict_maximum(indexed(&[1, 1])), 1);
    }

    #[test]
    fn later_strict_maximum_takes_the_lead() {
        assert_eq!(first_strict_maximum(indexed(&[1, 0, 4])), 3);
    }

    #[test]
    fn no_proposals_have_no_winner() {
        assert_eq!(first_strict_maximum(indexed(&[])), NO_PROPOSAL);
    }

    #[test]
    fn missing_proposal_counts_zero_votes() {
        let env = Env::default();
        let admin = Address::generate(&env);
        let contract_id = env.register(ElectionContract, (&admin,));

        env.as_contract(&contract_id, || {
            for (index, vote_count) in [(1u32, 1u32), (3, 2)] {
                storage::save_proposal(
                    &env,
                    &Proposal {
                        index,
                        author: admin.clone(),
                        description: String::from_str(&env, "Stored"),
                        vote_count,
                    },
                );
            }
            storage::set_proposal_count(&env, 3);
            assert_eq!(winning_proposal(&env), 3);

            storage::set_proposal_count(&env, 2);
            assert_eq!(winning_proposal(&env), 1);
        });
    }
}
