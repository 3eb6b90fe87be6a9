use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use alloy_primitives::{Address, B256};
use async_trait::async_trait;
use checker::workable_status;
use monitor_core::ids::NetworkId;
use monitor_core::source::{JobPredicate, SourceError, WorkLog};
use monitor_core::status::{ExecutionRecord, WorkableCheck};

/// Scripted chain source with per-method call counters.
struct ScriptedSource {
    workable: Result<WorkableCheck, String>,
    events: Result<Vec<ExecutionRecord>, String>,
    workable_calls: AtomicUsize,
    event_calls: AtomicUsize,
    event_ranges: Mutex<Vec<(u64, u64)>>,
}

impl ScriptedSource {
    fn new(workable: Result<WorkableCheck, String>, events: Result<Vec<ExecutionRecord>, String>) -> Self {
        Self {
            workable,
            events,
            workable_calls: AtomicUsize::new(0),
            event_calls: AtomicUsize::new(0),
            event_ranges: Mutex::new(Vec::new()),
        }
    }

    fn workable_with(can_work: bool) -> Result<WorkableCheck, String> {
        Ok(WorkableCheck {
            can_work,
            args: vec![0xde, 0xad],
        })
    }
}

#[async_trait]
impl JobPredicate for ScriptedSource {
    async fn workable(&self, _job: Address, _network: NetworkId) -> Result<WorkableCheck, SourceError> {
        self.workable_calls.fetch_add(1, Ordering::SeqCst);
        self.workable.clone().map_err(SourceError::Contract)
    }
}

#[async_trait]
impl WorkLog for ScriptedSource {
    async fn work_events(
        &self,
        _job: Address,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<ExecutionRecord>, SourceError> {
        self.event_calls.fetch_add(1, Ordering::SeqCst);
        self.event_ranges.lock().unwrap().push((from_block, to_block));
        self.events.clone().map_err(SourceError::Provider)
    }
}

fn job() -> Address {
    Address::repeat_byte(0x4a)
}

fn network() -> NetworkId {
    NetworkId::from_label("NTWK-MAIN")
}

fn record(block_number: u64, tx_byte: u8) -> ExecutionRecord {
    ExecutionRecord {
        address: job(),
        block_number,
        transaction_hash: B256::repeat_byte(tx_byte),
    }
}

#[tokio::test]
async fn ineligible_job_skips_the_work_log() {
    let source = ScriptedSource::new(ScriptedSource::workable_with(false), Ok(vec![record(999, 1)]));

    let status = workable_status(&source, job(), network(), 1000).await;

    assert!(!status.can_work);
    assert!(status.executions.is_empty());
    assert_eq!(source.workable_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        source.event_calls.load(Ordering::SeqCst),
        0,
        "ineligible pair must not spend a log query"
    );
}

#[tokio::test]
async fn eligible_job_with_no_events_is_stale() {
    let source = ScriptedSource::new(ScriptedSource::workable_with(true), Ok(vec![]));

    let status = workable_status(&source, job(), network(), 1000).await;

    assert!(status.can_work);
    assert!(status.executions.is_empty());
    assert!(status.is_stale());
}

#[tokio::test]
async fn events_are_copied_verbatim_in_order() {
    let records = vec![record(991, 1), record(995, 2), record(1000, 3)];
    let source = ScriptedSource::new(ScriptedSource::workable_with(true), Ok(records.clone()));

    let status = workable_status(&source, job(), network(), 1000).await;

    assert!(status.can_work);
    assert_eq!(status.executions, records);
    assert!(!status.is_stale());
}

#[tokio::test]
async fn lookback_window_is_ten_blocks_inclusive() {
    let source = ScriptedSource::new(ScriptedSource::workable_with(true), Ok(vec![]));

    workable_status(&source, job(), network(), 1000).await;

    let ranges = source.event_ranges.lock().unwrap();
    assert_eq!(ranges.as_slice(), &[(990, 1000)]);
}

#[tokio::test]
async fn predicate_failure_degrades_to_negative_verdict() {
    let source = ScriptedSource::new(Err("rpc unreachable".to_string()), Ok(vec![record(999, 1)]));

    let status = workable_status(&source, job(), network(), 1000).await;

    assert_eq!(status, monitor_core::status::WorkableStatus::not_workable(job(), network()));
    assert_eq!(source.event_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn history_failure_degrades_to_negative_verdict() {
    let source = ScriptedSource::new(
        ScriptedSource::workable_with(true),
        Err("log query timed out".to_string()),
    );

    let status = workable_status(&source, job(), network(), 1000).await;

    assert!(!status.can_work, "a pair we could not inspect must not alert");
    assert!(status.executions.is_empty());
}

#[tokio::test]
async fn verdict_carries_the_pair_identity() {
    let source = ScriptedSource::new(ScriptedSource::workable_with(false), Ok(vec![]));

    let status = workable_status(&source, job(), network(), 1000).await;

    assert_eq!(status.job, job());
    assert_eq!(status.network, network());
}
