/// Error types for the minter
///
/// Two tiers:
/// - `ConfigError`: fatal setup failures, raised before any network activity
/// - `MintError`: per-NFT failures, captured into the batch report
use std::fmt;
use thiserror::Error;

// =============================================================================
// CONFIGURATION ERRORS
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PRIVATE_KEY is not set")] MissingPrivateKey,

    #[error("Invalid private key for {field}: {reason}")] InvalidPrivateKey {
        field: &'static str,
        reason: String,
    },

    #[error("Invalid value for {field}: {reason}")] InvalidValue {
        field: &'static str,
        reason: String,
    },

    #[error("Failed to read config file {path}: {source}")] Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")] Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

// =============================================================================
// MINTING ERRORS
// =============================================================================

/// Step of the per-NFT creation protocol that produced a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MintStage {
    /// Rent query plus the create + initialize transaction
    Initialize,
    /// Idempotent associated token account creation
    AssociatedAccount,
    /// Minting the edition supply to the owner
    MintTo,
    /// Setting the mint authority to none
    RevokeAuthority,
}

impl MintStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            MintStage::Initialize => "initialize",
            MintStage::AssociatedAccount => "associated-account",
            MintStage::MintTo => "mint-to",
            MintStage::RevokeAuthority => "revoke-authority",
        }
    }

    /// Whether the mint account already exists on-chain when this stage fails
    pub fn leaves_partial_mint(&self) -> bool {
        !matches!(self, MintStage::Initialize)
    }
}

impl fmt::Display for MintStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum MintError {
    #[error("RPC error: {0}")] Rpc(String),

    #[error("Instruction error: {0}")] Instruction(String),

    #[error("Signing error: {0}")] Signing(String),

    #[error("{stage} step failed: {source}")] Stage {
        stage: MintStage,
        #[source]
        source: Box<MintError>,
    },
}

impl MintError {
    pub fn rpc(message: impl Into<String>) -> Self {
        MintError::Rpc(message.into())
    }

    pub fn instruction(message: impl Into<String>) -> Self {
        MintError::Instruction(message.into())
    }

    pub fn signing(message: impl Into<String>) -> Self {
        MintError::Signing(message.into())
    }

    /// Tag the error with the protocol step it came from; an already tagged
    /// error keeps its original stage
    pub fn at(self, stage: MintStage) -> Self {
        match self {
            MintError::Stage { .. } => self,
            other => MintError::Stage {
                stage,
                source: Box::new(other),
            },
        }
    }

    pub fn stage(&self) -> Option<MintStage> {
        match self {
            MintError::Stage { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// Short operator hint for common devnet failures
    pub fn hint(&self) -> Option<&'static str> {
        let message = self.to_string().to_lowercase();
        if message.contains("insufficient funds") || message.contains("insufficient lamports") {
            Some("payer balance too low, airdrop devnet SOL to the payer")
        } else if message.contains("blockhash not found") || message.contains("block height exceeded") {
            Some("transaction expired before confirmation, the network may be congested")
        } else if message.contains("timed out") || message.contains("timeout") {
            Some("RPC endpoint did not answer in time")
        } else {
            None
        }
    }
}

pub type MintResult<T> = Result<T, MintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_tag_is_not_overwritten() {
        let err = MintError::rpc("boom").at(MintStage::MintTo).at(MintStage::Initialize);
        assert_eq!(err.stage(), Some(MintStage::MintTo));
        assert_eq!(err.to_string(), "mint-to step failed: RPC error: boom");
    }

    #[test]
    fn test_untagged_error_has_no_stage() {
        assert_eq!(MintError::instruction("bad data").stage(), None);
    }

    #[test]
    fn test_partial_mint_stages() {
        assert!(!MintStage::Initialize.leaves_partial_mint());
        assert!(MintStage::AssociatedAccount.leaves_partial_mint());
        assert!(MintStage::RevokeAuthority.leaves_partial_mint());
    }

    #[test]
    fn test_hints() {
        let err = MintError::rpc("Transaction simulation failed: insufficient funds for rent");
        assert!(err.hint().unwrap().contains("airdrop"));
        assert!(MintError::rpc("Blockhash not found").hint().is_some());
        assert!(MintError::signing("not enough signers").hint().is_none());
    }

    #[test]
    fn test_missing_key_message() {
        assert_eq!(ConfigError::MissingPrivateKey.to_string(), "PRIVATE_KEY is not set");
    }
}
