use crate::config::{load_identities, CollectionConfig, MinterConfig, NetworkConfig};
use crate::errors::{ConfigError, MintError, MintStage};
use chrono::{DateTime, Utc};
use solana_sdk::{pubkey::Pubkey, signature::Keypair};

/// Everything one run needs, built once from configuration and passed down
pub struct MintContext {
    pub payer: Keypair,
    /// Mint authority and metadata update authority
    pub authority: Keypair,
    /// Wallet receiving each edition
    pub owner: Pubkey,
    pub network: NetworkConfig,
    pub collection: CollectionConfig,
}

impl MintContext {
    pub fn new(config: &MinterConfig) -> Result<Self, ConfigError> {
        let identities = load_identities(config)?;
        Ok(Self {
            payer: identities.payer,
            authority: identities.authority,
            owner: identities.owner,
            network: config.network.clone(),
            collection: config.collection.clone(),
        })
    }
}

/// What the batch does after an edition fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record the failure and move on to the next edition
    #[default]
    ContinueOnError,
    /// Stop the batch at the first failure
    AbortOnFirstFailure,
}

/// A fully created edition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationResult {
    pub edition: u32,
    pub mint_address: String,
    pub initialization_signature: String,
    pub mint_signature: String,
    pub authority_revocation_signature: String,
}

/// An edition that did not complete
#[derive(Debug)]
pub struct MintFailure {
    pub edition: u32,
    pub mint_address: String,
    pub error: MintError,
}

impl MintFailure {
    pub fn stage(&self) -> Option<MintStage> {
        self.error.stage()
    }

    /// The mint exists on-chain but is not fully set up
    pub fn is_partial(&self) -> bool {
        self.stage().map(|s| s.leaves_partial_mint()).unwrap_or(false)
    }
}

pub type MintOutcome = Result<CreationResult, MintFailure>;

/// Outcome of a whole batch, in edition order
#[derive(Debug)]
pub struct BatchReport {
    pub requested: u32,
    pub outcomes: Vec<MintOutcome>,
    /// Stopped early under `FailurePolicy::AbortOnFirstFailure`
    pub aborted: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl BatchReport {
    pub fn created(&self) -> Vec<&CreationResult> {
        self.outcomes.iter().filter_map(|o| o.as_ref().ok()).collect()
    }

    pub fn failures(&self) -> Vec<&MintFailure> {
        self.outcomes.iter().filter_map(|o| o.as_ref().err()).collect()
    }

    /// Editions never attempted because the batch was aborted
    pub fn skipped(&self) -> u32 {
        self.requested.saturating_sub(self.outcomes.len() as u32)
    }

    pub fn is_complete_success(&self) -> bool {
        self.created().len() as u32 == self.requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(edition: u32) -> MintOutcome {
        Ok(CreationResult {
            edition,
            mint_address: format!("mint{}", edition),
            initialization_signature: "a".to_string(),
            mint_signature: "b".to_string(),
            authority_revocation_signature: "c".to_string(),
        })
    }

    fn failure(edition: u32, stage: MintStage) -> MintOutcome {
        Err(MintFailure {
            edition,
            mint_address: format!("mint{}", edition),
            error: MintError::rpc("boom").at(stage),
        })
    }

    #[test]
    fn test_default_policy_continues() {
        assert_eq!(FailurePolicy::default(), FailurePolicy::ContinueOnError);
    }

    #[test]
    fn test_report_partitions_outcomes() {
        let now = Utc::now();
        let report = BatchReport {
            requested: 4,
            outcomes: vec![result(1), failure(2, MintStage::MintTo), result(3)],
            aborted: true,
            started_at: now,
            finished_at: now,
        };

        assert_eq!(report.created().len(), 2);
        assert_eq!(report.failures()[0].edition, 2);
        assert!(report.failures()[0].is_partial());
        assert_eq!(report.skipped(), 1);
        assert!(!report.is_complete_success());
    }

    #[test]
    fn test_initialize_failure_is_not_partial() {
        let outcome = failure(1, MintStage::Initialize);
        assert!(!outcome.unwrap_err().is_partial());
    }
}
