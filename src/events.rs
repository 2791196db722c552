multiversx_sc::imports!();

use crate::types::{ProposalId, VoteSide};

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] amount: &BigUint,
        shares: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] member: &ManagedAddress,
        #[indexed] amount: &BigUint,
        shares: &BigUint,
    );

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] target: &ManagedAddress,
        #[indexed] deadline: u64,
        timestamp: u64,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] voter: &ManagedAddress,
        #[indexed] side: VoteSide,
        weight: &BigUint,
    );

    #[event("proposalApproved")]
    fn proposal_approved_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] votes_yes: &BigUint,
        #[indexed] votes_no: &BigUint,
        approved_percent: u64,
    );

    #[event("proposalRejected")]
    fn proposal_rejected_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] votes_yes: &BigUint,
        #[indexed] votes_no: &BigUint,
        approved_percent: u64,
    );

    #[event("executionSucceeded")]
    fn execution_succeeded_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] target: &ManagedAddress,
    );

    #[event("executionFailed")]
    fn execution_failed_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] target: &ManagedAddress,
        #[indexed] err_code: u32,
        err_msg: &ManagedBuffer,
    );

    #[event("votingPeriodChanged")]
    fn voting_period_changed_event(&self, #[indexed] old: u64, #[indexed] new: u64);

    #[event("approvedPercentChanged")]
    fn approved_percent_changed_event(&self, #[indexed] old: u64, #[indexed] new: u64);

    #[event("adminChanged")]
    fn admin_changed_event(
        &self,
        #[indexed] previous: &ManagedAddress,
        #[indexed] admin: &ManagedAddress,
    );
}
