use monitor_core::source::{AlertSink, BlockSource, JobPredicate, Registry, SourceError, WorkLog};
use monitor_core::status::LOOKBACK_BLOCKS;
use serde::{Deserialize, Serialize};

/// What one scan covered, returned as the success body of `/check`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub jobs: u64,
    pub networks: u64,
    pub reference_block: u64,
    pub alerts_sent: u64,
}

/// Run one full scan: enumerate the registry, evaluate every
/// job × network pair at the current block, and alert on every pair that
/// is workable but unworked inside the lookback window.
///
/// Registry and block-height failures propagate (there is no partial
/// result at this tier); per-pair failures are absorbed inside the
/// checker and the scan continues.
pub async fn run_scan<C, A>(chain: &C, sink: &A) -> Result<ScanSummary, SourceError>
where
    C: Registry + BlockSource + JobPredicate + WorkLog + Sync,
    A: AlertSink + Sync,
{
    let num_jobs = chain.num_jobs().await?;
    let num_networks = chain.num_networks().await?;
    tracing::info!(num_jobs, num_networks, "starting scan");

    let reference_block = chain.current_block().await?;

    let mut jobs = Vec::with_capacity(num_jobs as usize);
    for index in 0..num_jobs {
        jobs.push(chain.job_at(index).await?);
    }

    let mut networks = Vec::with_capacity(num_networks as usize);
    for index in 0..num_networks {
        networks.push(chain.network_at(index).await?);
    }

    let mut alerts_sent = 0u64;
    for &job in &jobs {
        for &network in &networks {
            let status = checker::workable_status(chain, job, network, reference_block).await;
            tracing::debug!(
                job = %job,
                network = %network,
                can_work = status.can_work,
                executions = status.executions.len(),
                "pair evaluated"
            );

            if status.is_stale() {
                tracing::info!(job = %job, network = %network, "stale job detected");
                sink.notify(&stale_job_message(&status.job.to_string(), &network.to_string()))
                    .await;
                alerts_sent += 1;
            }
        }
    }

    Ok(ScanSummary {
        jobs: num_jobs,
        networks: num_networks,
        reference_block,
        alerts_sent,
    })
}

fn stale_job_message(job: &str, network: &str) -> String {
    format!(
        "Job {job} hasn't been worked for the past {LOOKBACK_BLOCKS} consequent blocks on network {network}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_pair_and_the_window() {
        let msg = stale_job_message("0xabc", "NTWK-MAIN");
        assert_eq!(
            msg,
            "Job 0xabc hasn't been worked for the past 10 consequent blocks on network NTWK-MAIN"
        );
    }
}
