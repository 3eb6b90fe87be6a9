use alloy_primitives::Address;
use async_trait::async_trait;

use crate::ids::NetworkId;
use crate::status::{ExecutionRecord, WorkableCheck};

/// Failure from a chain-facing collaborator. Display is the bare message
/// so the invocation boundary can return the underlying error text as-is.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("{0}")]
    Provider(String),

    #[error("{0}")]
    Contract(String),
}

/// The sequencer registry: a dense, 0-based enumeration of jobs and
/// networks, stable for the duration of one scan.
#[async_trait]
pub trait Registry {
    async fn num_jobs(&self) -> Result<u64, SourceError>;
    async fn num_networks(&self) -> Result<u64, SourceError>;
    async fn job_at(&self, index: u64) -> Result<Address, SourceError>;
    async fn network_at(&self, index: u64) -> Result<NetworkId, SourceError>;
}

/// Current chain height, the reference point for the lookback window.
#[async_trait]
pub trait BlockSource {
    async fn current_block(&self) -> Result<u64, SourceError>;
}

/// A job's own eligibility predicate. May involve contract simulation,
/// so callers treat it as expensive.
#[async_trait]
pub trait JobPredicate {
    async fn workable(
        &self,
        job: Address,
        network: NetworkId,
    ) -> Result<WorkableCheck, SourceError>;
}

/// `Work` events emitted by a job contract over an inclusive block range,
/// in the order the log source returns them (ascending block height).
#[async_trait]
pub trait WorkLog {
    async fn work_events(
        &self,
        job: Address,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<ExecutionRecord>, SourceError>;
}

/// Best-effort alert delivery. Implementations log failures and never
/// propagate them; a failed alert must not fail a run.
#[async_trait]
pub trait AlertSink {
    async fn notify(&self, message: &str);
}
