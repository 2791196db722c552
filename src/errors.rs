pub const ERR_NOT_ADMIN: &str = "Caller is not the admin";
pub const ERR_PROPOSAL_EXISTS: &str = "Proposal already exists";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal does not exist";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_VOTING_PERIOD_ACTIVE: &str = "Voting period is not over";
pub const ERR_VOTING_PERIOD_OVER: &str = "Voting period is over";
pub const ERR_ALREADY_FINALIZED: &str = "Proposal already finalized";
pub const ERR_INSUFFICIENT_SHARES: &str = "Not enough shares";
pub const ERR_TRANSFER_FAILED: &str = "Transfer failed";
pub const ERR_INVALID_PERCENT: &str = "Approved percent must not exceed 100";
pub const ERR_NOT_RETRYABLE: &str = "Proposal execution cannot be retried";
pub const ERR_INVALID_PERIOD: &str = "Voting period exceeds the maximum duration";
pub const ERR_INVALID_TOKEN: &str = "Invalid token identifier";
