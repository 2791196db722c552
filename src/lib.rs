#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod events;
pub mod execution;
pub mod ledger;
pub mod policy;
pub mod storage;
pub mod types;
pub mod voting;

use errors::{ERR_INVALID_PERCENT, ERR_INVALID_PERIOD, ERR_INVALID_TOKEN};
use policy::{
    DEFAULT_APPROVED_PERCENT, DEFAULT_PERIOD_DURATION, MAX_PERCENT, MAX_PERIOD_DURATION,
};

// ============================================================
// Contract
// ============================================================

/// Members lock the governance token for shares, vote with those shares on
/// admin-created proposals, and approved proposals call out to their target.
#[multiversx_sc::contract]
pub trait MembershipDao:
    storage::StorageModule
    + events::EventsModule
    + policy::PolicyModule
    + ledger::LedgerModule
    + execution::ExecutionModule
    + voting::VotingModule
{
    // ========================================================
    // Init / Upgrade
    // The deployer becomes the admin.
    // ========================================================

    #[init]
    fn init(
        &self,
        governance_token: TokenIdentifier,
        period_duration: OptionalValue<u64>,
        approved_percent: OptionalValue<u64>,
    ) {
        require!(governance_token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);

        let approved_percent = approved_percent
            .into_option()
            .unwrap_or(DEFAULT_APPROVED_PERCENT);
        require!(approved_percent <= MAX_PERCENT, ERR_INVALID_PERCENT);

        let period_duration = period_duration
            .into_option()
            .unwrap_or(DEFAULT_PERIOD_DURATION);
        require!(period_duration <= MAX_PERIOD_DURATION, ERR_INVALID_PERIOD);

        self.admin().set(self.blockchain().get_caller());
        self.governance_token().set(&governance_token);
        self.period_duration().set(period_duration);
        self.approved_percent().set(approved_percent);
        self.total_shares().set(BigUint::zero());
        self.proposal_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
