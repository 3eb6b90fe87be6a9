use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};

use crate::ids::NetworkId;

/// How far back (in blocks) a job may go unworked before it counts as stale.
pub const LOOKBACK_BLOCKS: u64 = 10;

/// The inclusive block range `[reference - LOOKBACK_BLOCKS, reference]`
/// inspected for `Work` events.
pub fn lookback_window(reference_block: u64) -> (u64, u64) {
    (reference_block.saturating_sub(LOOKBACK_BLOCKS), reference_block)
}

/// One observed `Work` event, fields copied verbatim from the log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    pub address: Address,
    pub block_number: u64,
    pub transaction_hash: B256,
}

/// Raw result of a job's `workable(network)` call. `args` is the opaque
/// execution payload; it is kept on the collaborator interface for a
/// future work-submission path and never reaches the verdict.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkableCheck {
    pub can_work: bool,
    pub args: Vec<u8>,
}

/// The evaluator's verdict for one (job, network) pair: eligibility plus
/// the `Work` events seen inside the lookback window. A pure snapshot,
/// never cached or merged across runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkableStatus {
    pub job: Address,
    pub network: NetworkId,
    pub can_work: bool,
    pub executions: Vec<ExecutionRecord>,
}

impl WorkableStatus {
    /// The default negative verdict: not workable, no executions.
    pub fn not_workable(job: Address, network: NetworkId) -> Self {
        WorkableStatus {
            job,
            network,
            can_work: false,
            executions: Vec::new(),
        }
    }

    /// The alert rule: eligible to run, yet nothing worked it inside the
    /// lookback window.
    pub fn is_stale(&self) -> bool {
        self.can_work && self.executions.is_empty()
    }
}
