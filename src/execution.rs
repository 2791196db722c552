multiversx_sc::imports!();

use crate::errors::{ERR_NOT_RETRYABLE, ERR_PROPOSAL_NOT_FOUND};
use crate::types::{ExecutionStatus, Proposal, ProposalId, ProposalStatus};

/// Runs the action of approved proposals. The call is asynchronous, so a
/// failing target never undoes the approval; the callback records the
/// outcome instead.
#[multiversx_sc::module]
pub trait ExecutionModule: crate::storage::StorageModule + crate::events::EventsModule {
    /// Re-dispatches an approved proposal whose last execution failed.
    #[endpoint(retryExecution)]
    fn retry_execution(&self, proposal_id: ProposalId<Self::Api>) {
        let proposal_mapper = self.proposals(&proposal_id);
        require!(!proposal_mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);

        let proposal = proposal_mapper.get();
        require!(
            proposal.status == ProposalStatus::Approved
                && self.execution_status(&proposal_id).get() == ExecutionStatus::Failed,
            ERR_NOT_RETRYABLE
        );

        self.dispatch_execution(&proposal_id, &proposal);
    }

    /// Calls `payload[0]` on the target with the remaining buffers as raw
    /// arguments. An empty payload has nothing to run.
    fn dispatch_execution(&self, proposal_id: &ProposalId<Self::Api>, proposal: &Proposal<Self::Api>) {
        if proposal.payload.is_empty() {
            self.execution_status(proposal_id).set(ExecutionStatus::Succeeded);
            self.execution_succeeded_event(proposal_id, &proposal.target);
            return;
        }

        let (endpoint, raw_args) = self.split_call_data(&proposal.payload);
        let mut arguments = ManagedArgBuffer::new();
        for arg in raw_args.iter() {
            arguments.push_arg_raw((*arg).clone());
        }

        self.execution_status(proposal_id).set(ExecutionStatus::Pending);

        self.tx()
            .to(&proposal.target)
            .raw_call(endpoint)
            .arguments_raw(arguments)
            .callback(
                self.callbacks()
                    .execution_callback(proposal_id.clone(), proposal.target.clone()),
            )
            .async_call_and_exit();
    }

    /// `payload[0]` is the endpoint, the rest are its raw arguments.
    fn split_call_data(
        &self,
        payload: &ManagedVec<ManagedBuffer>,
    ) -> (ManagedBuffer, ManagedVec<ManagedBuffer>) {
        let mut endpoint = ManagedBuffer::new();
        let mut raw_args = ManagedVec::new();
        for (index, buffer) in payload.iter().enumerate() {
            if index == 0 {
                endpoint = (*buffer).clone();
            } else {
                raw_args.push((*buffer).clone());
            }
        }
        (endpoint, raw_args)
    }

    #[callback]
    fn execution_callback(
        &self,
        proposal_id: ProposalId<Self::Api>,
        target: ManagedAddress,
        #[call_result] result: ManagedAsyncCallResult<MultiValueEncoded<ManagedBuffer>>,
    ) {
        match result {
            ManagedAsyncCallResult::Ok(_) => {
                self.execution_status(&proposal_id).set(ExecutionStatus::Succeeded);
                self.execution_succeeded_event(&proposal_id, &target);
            },
            ManagedAsyncCallResult::Err(err) => {
                self.execution_status(&proposal_id).set(ExecutionStatus::Failed);
                self.execution_failed_event(&proposal_id, &target, err.err_code, &err.err_msg);
            },
        }
    }

    #[view(getExecutionStatus)]
    fn get_execution_status(&self, proposal_id: ProposalId<Self::Api>) -> ExecutionStatus {
        self.execution_status(&proposal_id).get()
    }
}
