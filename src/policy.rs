multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_PERCENT, ERR_INVALID_PERIOD, ERR_NOT_ADMIN};

/// Voting window: 3 days in seconds
pub const DEFAULT_PERIOD_DURATION: u64 = 259_200;

/// Longest accepted voting window: 365 days. Keeps `now + period` far from overflow.
pub const MAX_PERIOD_DURATION: u64 = 31_536_000;

/// Share of cast weight that must be "yes", in percent
pub const DEFAULT_APPROVED_PERCENT: u64 = 50;

pub const MAX_PERCENT: u64 = 100;

#[multiversx_sc::module]
pub trait PolicyModule: crate::storage::StorageModule + crate::events::EventsModule {
    /// New durations only affect proposals created afterwards.
    #[endpoint(changeVotingPeriod)]
    fn change_voting_period(&self, new_duration: u64) {
        self.require_admin();
        require!(new_duration <= MAX_PERIOD_DURATION, ERR_INVALID_PERIOD);

        let old = self.period_duration().replace(new_duration);
        self.voting_period_changed_event(old, new_duration);
    }

    /// Read at `finish`, so it also applies to proposals already open.
    #[endpoint(changeApprovedPercent)]
    fn change_approved_percent(&self, new_percent: u64) {
        self.require_admin();
        require!(new_percent <= MAX_PERCENT, ERR_INVALID_PERCENT);

        let old = self.approved_percent().replace(new_percent);
        self.approved_percent_changed_event(old, new_percent);
    }

    #[endpoint(changeAdmin)]
    fn change_admin(&self, new_admin: ManagedAddress) {
        self.require_admin();

        let previous = self.admin().replace(&new_admin);
        self.admin_changed_event(&previous, &new_admin);
    }

    fn require_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin().get(), ERR_NOT_ADMIN);
    }

    /// `votes_yes * 100 >= (votes_yes + votes_no) * approved_percent`.
    /// Zero turnout never passes, whatever the threshold.
    fn is_approved(&self, votes_yes: &BigUint, votes_no: &BigUint, approved_percent: u64) -> bool {
        let total = votes_yes + votes_no;
        if total == 0u64 {
            return false;
        }

        votes_yes * MAX_PERCENT >= &total * approved_percent
    }
}
