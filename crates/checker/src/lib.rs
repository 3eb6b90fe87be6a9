use alloy_primitives::Address;
use monitor_core::ids::NetworkId;
use monitor_core::source::{JobPredicate, SourceError, WorkLog};
use monitor_core::status::{lookback_window, WorkableStatus};

/// Evaluate one (job, network) pair at a reference block height.
///
/// Calls the job's own `workable` predicate first and only touches the
/// work log when the job is eligible; an ineligible pair costs exactly
/// one query. Failures in either query degrade to the negative verdict
/// (`can_work = false`, no executions) instead of propagating, so one
/// unreachable job never aborts a scan over the rest of the matrix.
pub async fn workable_status<S>(
    source: &S,
    job: Address,
    network: NetworkId,
    reference_block: u64,
) -> WorkableStatus
where
    S: JobPredicate + WorkLog + Sync,
{
    match evaluate(source, job, network, reference_block).await {
        Ok(status) => status,
        Err(e) => {
            tracing::warn!(job = %job, network = %network, error = %e, "workable check failed");
            WorkableStatus::not_workable(job, network)
        }
    }
}

async fn evaluate<S>(
    source: &S,
    job: Address,
    network: NetworkId,
    reference_block: u64,
) -> Result<WorkableStatus, SourceError>
where
    S: JobPredicate + WorkLog + Sync,
{
    let check = source.workable(job, network).await?;
    if !check.can_work {
        return Ok(WorkableStatus::not_workable(job, network));
    }

    let (from_block, to_block) = lookback_window(reference_block);
    let executions = source.work_events(job, from_block, to_block).await?;

    Ok(WorkableStatus {
        job,
        network,
        can_work: true,
        executions,
    })
}
