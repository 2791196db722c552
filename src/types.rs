multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Caller-supplied proposal identifier, typically a keccak/blake hash of the
/// proposal's description.
pub type ProposalId<M> = ManagedByteArray<M, 32>;

// ============================================================
// Proposal Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Voting is open, or the deadline passed and nobody called `finish` yet.
    Undecided,
    /// Threshold cleared at finish. Terminal.
    Approved,
    /// Threshold missed, or nobody voted. Terminal.
    Rejected,
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub proposer: ManagedAddress<M>,
    /// Account called on approval.
    pub target: ManagedAddress<M>,
    /// Endpoint name followed by raw arguments. Never interpreted by the DAO.
    pub payload: ManagedVec<M, ManagedBuffer<M>>,
    pub votes_yes: BigUint<M>,
    pub votes_no: BigUint<M>,
    pub created_at: u64,
    /// Fixed at creation from the voting period in force at that time.
    pub deadline: u64,
    pub status: ProposalStatus,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn is_open_at(&self, timestamp: u64) -> bool {
        timestamp < self.deadline
    }
}

// ============================================================
// Votes
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VoteSide {
    Yes,
    No,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub side: VoteSide,
    /// Ledger balance of the voter when the vote was cast.
    pub weight: BigUint<M>,
}

// ============================================================
// Execution outcome of an approved proposal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ExecutionStatus {
    NotExecuted,
    /// Async call dispatched, callback not yet received.
    Pending,
    Succeeded,
    Failed,
}
