multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_FINALIZED, ERR_ALREADY_VOTED, ERR_PROPOSAL_EXISTS, ERR_PROPOSAL_NOT_FOUND,
    ERR_VOTING_PERIOD_ACTIVE, ERR_VOTING_PERIOD_OVER,
};
use crate::types::{Proposal, ProposalId, ProposalStatus, VoteRecord, VoteSide};

#[multiversx_sc::module]
pub trait VotingModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::policy::PolicyModule
    + crate::execution::ExecutionModule
{
    // ========================================================
    // ENDPOINT: createProposal
    // Admin only. The deadline is frozen here.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        proposal_id: ProposalId<Self::Api>,
        target: ManagedAddress,
        payload: MultiValueEncoded<ManagedBuffer>,
    ) {
        self.require_admin();
        require!(self.proposals(&proposal_id).is_empty(), ERR_PROPOSAL_EXISTS);

        let now = self.blockchain().get_block_timestamp();
        let deadline = now + self.period_duration().get();

        let proposal = Proposal {
            proposer: self.blockchain().get_caller(),
            target,
            payload: payload.to_vec(),
            votes_yes: BigUint::zero(),
            votes_no: BigUint::zero(),
            created_at: now,
            deadline,
            status: ProposalStatus::Undecided,
        };

        self.proposals(&proposal_id).set(&proposal);
        self.proposal_count().update(|count| *count += 1);

        self.proposal_created_event(&proposal_id, &proposal.target, deadline, now);
    }

    // ========================================================
    // ENDPOINT: vote
    // Weight is the caller's share balance right now. Members
    // without shares may vote; they just add nothing.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: ProposalId<Self::Api>, side: VoteSide) {
        let caller = self.blockchain().get_caller();
        let proposal_mapper = self.proposals(&proposal_id);
        require!(!proposal_mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);
        require!(self.voters(&proposal_id).insert(caller.clone()), ERR_ALREADY_VOTED);

        let mut proposal = proposal_mapper.get();
        let now = self.blockchain().get_block_timestamp();
        require!(proposal.is_open_at(now), ERR_VOTING_PERIOD_OVER);

        let weight = self.shares(&caller).get();
        match side {
            VoteSide::Yes => proposal.votes_yes += &weight,
            VoteSide::No => proposal.votes_no += &weight,
        }
        proposal_mapper.set(&proposal);

        self.vote_records(&proposal_id, &caller).set(VoteRecord {
            side,
            weight: weight.clone(),
        });
        self.member_votes(&caller).push(&proposal_id);

        self.vote_event(&proposal_id, &caller, side, &weight);
    }

    // ========================================================
    // ENDPOINT: finishProposal
    // Anyone, once the deadline is reached. Decides the outcome
    // exactly once and hands approved actions to execution.
    // ========================================================

    #[endpoint(finishProposal)]
    fn finish_proposal(&self, proposal_id: ProposalId<Self::Api>) {
        let proposal_mapper = self.proposals(&proposal_id);
        require!(!proposal_mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);

        let mut proposal = proposal_mapper.get();
        let now = self.blockchain().get_block_timestamp();
        require!(!proposal.is_open_at(now), ERR_VOTING_PERIOD_ACTIVE);
        require!(
            proposal.status == ProposalStatus::Undecided,
            ERR_ALREADY_FINALIZED
        );

        let approved_percent = self.approved_percent().get();
        if !self.is_approved(&proposal.votes_yes, &proposal.votes_no, approved_percent) {
            proposal.status = ProposalStatus::Rejected;
            proposal_mapper.set(&proposal);
            self.proposal_rejected_event(
                &proposal_id,
                &proposal.votes_yes,
                &proposal.votes_no,
                approved_percent,
            );
            return;
        }

        proposal.status = ProposalStatus::Approved;
        proposal_mapper.set(&proposal);
        self.proposal_approved_event(
            &proposal_id,
            &proposal.votes_yes,
            &proposal.votes_no,
            approved_percent,
        );

        self.dispatch_execution(&proposal_id, &proposal);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: ProposalId<Self::Api>) -> Proposal<Self::Api> {
        let proposal_mapper = self.proposals(&proposal_id);
        require!(!proposal_mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);
        proposal_mapper.get()
    }

    #[view(getProposalStatus)]
    fn get_proposal_status(&self, proposal_id: ProposalId<Self::Api>) -> ProposalStatus {
        self.get_proposal(proposal_id).status
    }

    #[view(hasVoted)]
    fn has_voted(&self, proposal_id: ProposalId<Self::Api>, member: ManagedAddress) -> bool {
        self.voters(&proposal_id).contains(&member)
    }

    #[view(getVote)]
    fn get_vote(
        &self,
        proposal_id: ProposalId<Self::Api>,
        member: ManagedAddress,
    ) -> OptionalValue<VoteRecord<Self::Api>> {
        let record_mapper = self.vote_records(&proposal_id, &member);
        if record_mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(record_mapper.get())
        }
    }
}
