multiversx_sc::imports!();

use crate::types::{ExecutionStatus, Proposal, ProposalId, VoteRecord};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Admin policy ──

    #[view(getAdmin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getPeriodDuration)]
    #[storage_mapper("periodDuration")]
    fn period_duration(&self) -> SingleValueMapper<u64>;

    #[view(getApprovedPercent)]
    #[storage_mapper("approvedPercent")]
    fn approved_percent(&self) -> SingleValueMapper<u64>;

    #[view(getGovernanceToken)]
    #[storage_mapper("governanceToken")]
    fn governance_token(&self) -> SingleValueMapper<TokenIdentifier>;

    // ── Membership ledger ──

    #[storage_mapper("shares")]
    fn shares(&self, member: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getTotalShares)]
    #[storage_mapper("totalShares")]
    fn total_shares(&self) -> SingleValueMapper<BigUint>;

    /// Proposals a member voted on. Entries past their deadline are pruned on withdraw.
    #[storage_mapper("memberVotes")]
    fn member_votes(&self, member: &ManagedAddress) -> VecMapper<ProposalId<Self::Api>>;

    // ── Proposals ──

    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: &ProposalId<Self::Api>) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("voters")]
    fn voters(&self, id: &ProposalId<Self::Api>) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("voteRecords")]
    fn vote_records(
        &self,
        id: &ProposalId<Self::Api>,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<VoteRecord<Self::Api>>;

    // ── Execution ──

    #[storage_mapper("executionStatus")]
    fn execution_status(&self, id: &ProposalId<Self::Api>) -> SingleValueMapper<ExecutionStatus>;
}
