//! Production `ChainClient` backed by the nonblocking Solana RPC client

mod methods;

use crate::config::{parse_commitment, NetworkConfig};
use crate::errors::ConfigError;
use crate::logger::{self, LogTag};
use crate::rpc::types::RpcStats;
use solana_client::nonblocking::rpc_client::RpcClient;
use std::sync::Mutex;
use std::time::{Duration, Instant};

pub struct SolanaRpcClient {
    client: RpcClient,
    stats: Mutex<RpcStats>,
}

impl SolanaRpcClient {
    /// Create a client for the configured endpoint
    ///
    /// No request is made here; the first network call happens on first use.
    pub fn new(network: &NetworkConfig) -> Result<Self, ConfigError> {
        let commitment = parse_commitment(&network.commitment)?;
        let client = RpcClient::new_with_timeout_and_commitment(
            network.rpc_url.clone(),
            Duration::from_secs(network.rpc_timeout_secs),
            commitment,
        );

        logger::debug(
            LogTag::Rpc,
            &format!(
                "RPC client ready: {} (commitment: {}, timeout: {}s)",
                network.rpc_url, network.commitment, network.rpc_timeout_secs
            ),
        );

        Ok(Self {
            client,
            stats: Mutex::new(RpcStats::default()),
        })
    }

    pub fn snapshot_stats(&self) -> RpcStats {
        match self.stats.lock() {
            Ok(stats) => stats.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn record(&self, method: &str, started: Instant, success: bool) {
        let elapsed = started.elapsed();
        if let Ok(mut stats) = self.stats.lock() {
            stats.record(elapsed, success);
        }
        logger::debug(
            LogTag::Rpc,
            &format!(
                "{} {} in {}ms",
                method,
                if success { "ok" } else { "failed" },
                elapsed.as_millis()
            ),
        );
    }

    fn record_confirmation(&self) {
        if let Ok(mut stats) = self.stats.lock() {
            stats.transactions_confirmed += 1;
        }
    }
}
