use alloy::primitives::{Address, B256, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::Filter;
use alloy::sol;
use alloy::sol_types::SolEvent;
use alloy::transports::http::reqwest::Url;
use async_trait::async_trait;
use monitor_core::ids::NetworkId;
use monitor_core::source::{BlockSource, JobPredicate, Registry, SourceError, WorkLog};
use monitor_core::status::{ExecutionRecord, WorkableCheck};

sol! {
    #[sol(rpc)]
    contract Sequencer {
        function numJobs() external view returns (uint256);
        function numNetworks() external view returns (uint256);
        function jobAt(uint256 index) public view returns (address);
        function networkAt(uint256 index) public view returns (bytes32);
        function windows(bytes32 network) public view returns (uint256 start, uint256 length);
        function getMaster() external view returns (bytes32);
    }

    #[sol(rpc)]
    contract IJob {
        function workable(bytes32 network) external returns (bool, bytes memory);
        function work(bytes32 network, bytes calldata args) external;

        event Work(bytes32 indexed network);
    }
}

/// Typed access to the sequencer registry and its job contracts over one
/// provider. Implements every chain-facing collaborator of the monitor.
pub struct ChainClient<P: Provider> {
    provider: P,
    sequencer: Address,
}

impl<P: Provider> ChainClient<P> {
    pub fn new(provider: P, sequencer: Address) -> Self {
        Self { provider, sequencer }
    }
}

/// Build a `ChainClient` over an HTTP provider.
pub fn connect(rpc_url: &str, sequencer: Address) -> Result<ChainClient<impl Provider>, SourceError> {
    let url: Url = rpc_url
        .parse()
        .map_err(|e| SourceError::Provider(format!("invalid rpc url: {e}")))?;
    let provider = ProviderBuilder::new().connect_http(url);
    Ok(ChainClient::new(provider, sequencer))
}

fn to_u64(count: U256, what: &str) -> Result<u64, SourceError> {
    u64::try_from(count).map_err(|_| SourceError::Contract(format!("{what} out of range: {count}")))
}

#[async_trait]
impl<P: Provider> Registry for ChainClient<P> {
    async fn num_jobs(&self) -> Result<u64, SourceError> {
        let count = Sequencer::new(self.sequencer, &self.provider)
            .numJobs()
            .call()
            .await
            .map_err(|e| SourceError::Contract(format!("numJobs failed: {e}")))?;
        to_u64(count, "job count")
    }

    async fn num_networks(&self) -> Result<u64, SourceError> {
        let count = Sequencer::new(self.sequencer, &self.provider)
            .numNetworks()
            .call()
            .await
            .map_err(|e| SourceError::Contract(format!("numNetworks failed: {e}")))?;
        to_u64(count, "network count")
    }

    async fn job_at(&self, index: u64) -> Result<Address, SourceError> {
        Sequencer::new(self.sequencer, &self.provider)
            .jobAt(U256::from(index))
            .call()
            .await
            .map_err(|e| SourceError::Contract(format!("jobAt({index}) failed: {e}")))
    }

    async fn network_at(&self, index: u64) -> Result<NetworkId, SourceError> {
        let raw = Sequencer::new(self.sequencer, &self.provider)
            .networkAt(U256::from(index))
            .call()
            .await
            .map_err(|e| SourceError::Contract(format!("networkAt({index}) failed: {e}")))?;
        Ok(NetworkId(raw.0))
    }
}

#[async_trait]
impl<P: Provider> BlockSource for ChainClient<P> {
    async fn current_block(&self) -> Result<u64, SourceError> {
        self.provider
            .get_block_number()
            .await
            .map_err(|e| SourceError::Provider(e.to_string()))
    }
}

#[async_trait]
impl<P: Provider> JobPredicate for ChainClient<P> {
    async fn workable(
        &self,
        job: Address,
        network: NetworkId,
    ) -> Result<WorkableCheck, SourceError> {
        let contract = IJob::new(job, &self.provider);

        // eth_call simulation; the job never actually runs here.
        let result = contract
            .workable(B256::from(network.0))
            .call()
            .await
            .map_err(|e| SourceError::Contract(format!("workable({network}) failed: {e}")))?;

        Ok(WorkableCheck {
            can_work: result._0,
            args: result._1.to_vec(),
        })
    }
}

#[async_trait]
impl<P: Provider> WorkLog for ChainClient<P> {
    async fn work_events(
        &self,
        job: Address,
        from_block: u64,
        to_block: u64,
    ) -> Result<Vec<ExecutionRecord>, SourceError> {
        let filter = Filter::new()
            .address(job)
            .event_signature(IJob::Work::SIGNATURE_HASH)
            .from_block(from_block)
            .to_block(to_block);

        let logs = self
            .provider
            .get_logs(&filter)
            .await
            .map_err(|e| SourceError::Provider(e.to_string()))?;

        tracing::debug!(
            job = %job,
            from_block,
            to_block,
            matched = logs.len(),
            "queried work events"
        );

        Ok(logs
            .into_iter()
            .map(|log| ExecutionRecord {
                address: log.address(),
                block_number: log.block_number.unwrap_or_default(),
                transaction_hash: log.transaction_hash.unwrap_or_default(),
            })
            .collect())
    }
}
