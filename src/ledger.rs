multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_SHARES, ERR_TRANSFER_FAILED, ERR_VOTING_PERIOD_ACTIVE};
use crate::types::ProposalId;

/// Share accounting. One governance token deposited is one share.
#[multiversx_sc::module]
pub trait LedgerModule: crate::storage::StorageModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: deposit
    // A call without payment is accepted and changes nothing.
    // ========================================================

    #[endpoint(deposit)]
    #[payable("*")]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            self.call_value().all_esdt_transfers().len() <= 1,
            ERR_TRANSFER_FAILED
        );

        let payment = self.call_value().egld_or_single_esdt();
        if payment.amount == 0u64 {
            return;
        }

        let governance_token = EgldOrEsdtTokenIdentifier::esdt(self.governance_token().get());
        require!(
            payment.token_identifier == governance_token && payment.token_nonce == 0,
            ERR_TRANSFER_FAILED
        );

        self.shares(&caller).update(|s| *s += &payment.amount);
        self.total_shares().update(|ts| *ts += &payment.amount);

        let shares = self.shares(&caller).get();
        self.deposit_event(&caller, &payment.amount, &shares);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Shares that voted on `reference_proposal_id` stay locked
    // until that proposal's deadline.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint, reference_proposal_id: ProposalId<Self::Api>) {
        let caller = self.blockchain().get_caller();
        let balance = self.shares(&caller).get();
        require!(amount <= balance, ERR_INSUFFICIENT_SHARES);
        require!(
            !self.is_locked_by(&caller, &reference_proposal_id),
            ERR_VOTING_PERIOD_ACTIVE
        );
        self.prune_expired_votes(&caller);

        if amount == 0u64 {
            return;
        }

        let token_id = self.governance_token().get();
        let custody = self
            .blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token_id.clone()), 0);
        require!(custody >= amount, ERR_TRANSFER_FAILED);

        let remaining = &balance - &amount;
        self.shares(&caller).set(&remaining);
        self.total_shares().update(|ts| *ts -= &amount);

        self.send().direct_esdt(&caller, &token_id, 0, &amount);
        self.withdraw_event(&caller, &amount, &remaining);
    }

    /// True while `member` has a counted vote on a proposal whose
    /// deadline is still ahead. Unknown proposals lock nothing.
    fn is_locked_by(&self, member: &ManagedAddress, proposal_id: &ProposalId<Self::Api>) -> bool {
        let proposal_mapper = self.proposals(proposal_id);
        if proposal_mapper.is_empty() || !self.voters(proposal_id).contains(member) {
            return false;
        }

        let now = self.blockchain().get_block_timestamp();
        proposal_mapper.get().is_open_at(now)
    }

    /// Drops vote entries whose proposal can no longer lock anything, so
    /// `member_votes` only holds open proposals after each withdrawal.
    fn prune_expired_votes(&self, member: &ManagedAddress) {
        let now = self.blockchain().get_block_timestamp();
        let mut member_votes = self.member_votes(member);

        // Backwards, so the entry swapped in from the tail is already checked.
        let mut index = member_votes.len();
        while index > 0 {
            let proposal_id = member_votes.get(index);
            if !self.proposals(&proposal_id).get().is_open_at(now) {
                member_votes.swap_remove(index);
            }
            index -= 1;
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getShares)]
    fn get_shares(&self, member: ManagedAddress) -> BigUint {
        self.shares(&member).get()
    }

    /// Proposals currently holding a withdrawal lock on `member`.
    #[view(getActiveLocks)]
    fn get_active_locks(&self, member: ManagedAddress) -> MultiValueEncoded<ProposalId<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for proposal_id in self.member_votes(&member).iter() {
            if self.is_locked_by(&member, &proposal_id) {
                result.push(proposal_id);
            }
        }
        result
    }
}
