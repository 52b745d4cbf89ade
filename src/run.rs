/// Top-level run sequence: configuration, identities, client, preflight,
/// batch and summary
use crate::config::{load_config, MinterConfig, NetworkConfig};
use crate::errors::ConfigError;
use crate::logger::{self, LogTag};
use crate::minter::{create_nft_collection, BatchReport, FailurePolicy, MintContext};
use crate::rpc::{lamports_to_sol, ChainClient, SolanaRpcClient};
use crate::summary::print_summary;
use anyhow::{Context, Result};
use solana_sdk::signer::Signer;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub count: u32,
    pub policy: FailurePolicy,
    pub config_path: Option<String>,
}

/// Run against the configured cluster
pub async fn run_minter(options: RunOptions) -> Result<BatchReport> {
    let config_path = options.config_path.clone();
    run_minter_with(
        move || load_config(config_path.as_deref()),
        SolanaRpcClient::new,
        options,
    )
    .await
}

/// Run with injected configuration loading and client construction
///
/// Every setup step is fatal; configuration and keys are fully checked before
/// `connect` is called.
pub async fn run_minter_with<L, F, C>(load: L, connect: F, options: RunOptions) -> Result<BatchReport>
where
    L: FnOnce() -> Result<MinterConfig, ConfigError>,
    F: FnOnce(&NetworkConfig) -> Result<C, ConfigError>,
    C: ChainClient,
{
    let config = load().context("Failed to load configuration")?;
    logger::debug(LogTag::Config, &format!("Configuration: {:?}", config));

    let ctx = MintContext::new(&config).context("Failed to load identities")?;
    let client = connect(&ctx.network).context("Failed to create RPC client")?;

    preflight(&client, &ctx).await?;

    let report = create_nft_collection(&client, &ctx, options.count, options.policy).await;
    let stats = client.stats();
    print_summary(&report, &ctx.network, stats.as_ref());

    Ok(report)
}

/// Start-up banner and payer balance check
async fn preflight<C: ChainClient + ?Sized>(client: &C, ctx: &MintContext) -> Result<()> {
    let payer = ctx.payer.pubkey();

    logger::info(
        LogTag::System,
        &format!(
            "Minting {} ({}) on {} via {}",
            ctx.collection.name, ctx.collection.symbol, ctx.network.cluster, ctx.network.rpc_url
        ),
    );
    logger::info(LogTag::System, &format!("Payer:     {}", payer));
    logger::info(LogTag::System, &format!("Authority: {}", ctx.authority.pubkey()));
    logger::info(LogTag::System, &format!("Owner:     {}", ctx.owner));

    let balance = client
        .get_balance(&payer)
        .await
        .with_context(|| format!("Failed to get payer balance for {}", payer))?;

    if balance == 0 {
        logger::warning(
            LogTag::System,
            &format!(
                "Payer {} has no SOL, every edition will fail (airdrop devnet SOL first)",
                payer
            ),
        );
    } else {
        logger::info(
            LogTag::System,
            &format!("Payer balance: {:.4} SOL", lamports_to_sol(balance)),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::testing::MockChainClient;
    use solana_sdk::signature::Keypair;
    use std::cell::Cell;
    use std::sync::Arc;

    fn options(count: u32) -> RunOptions {
        RunOptions {
            count,
            policy: FailurePolicy::default(),
            config_path: None,
        }
    }

    #[tokio::test]
    async fn test_missing_private_key_is_fatal_before_connecting() {
        let connected = Cell::new(false);
        let client = Arc::new(MockChainClient::new());

        let result = run_minter_with(
            || Ok(MinterConfig::default()),
            |_network: &NetworkConfig| {
                connected.set(true);
                Ok(Arc::clone(&client))
            },
            options(1),
        )
        .await;

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingPrivateKey)
        ));
        assert!(!connected.get());
        assert_eq!(client.network_calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_private_key_is_fatal() {
        let result = run_minter_with(
            || {
                let mut config = MinterConfig::default();
                config.identities.private_key = Some("not-a-key".to_string());
                Ok(config)
            },
            |_network: &NetworkConfig| Ok(MockChainClient::new()),
            options(1),
        )
        .await;

        assert!(matches!(
            result.unwrap_err().downcast_ref::<ConfigError>(),
            Some(ConfigError::InvalidPrivateKey { .. })
        ));
    }

    #[tokio::test]
    async fn test_full_run_with_zero_balance_still_attempts() {
        let client = Arc::new(MockChainClient::new().with_balance(0));
        let result = run_minter_with(
            || {
                let mut config = MinterConfig::default();
                config.identities.private_key = Some(Keypair::new().to_base58_string());
                Ok(config)
            },
            |_network: &NetworkConfig| Ok(Arc::clone(&client)),
            options(2),
        )
        .await;

        let report = result.unwrap();
        assert!(report.is_complete_success());
        assert_eq!(report.created().len(), 2);
        // balance check, then rent query and four submissions per edition
        assert_eq!(client.network_calls(), 11);
    }
}
