/// Configuration schemas - every section defined once with its defaults
use crate::config_struct;
use std::fmt;

/// Default metadata base URI of the collection (IPFS folder holding <n>.json)
pub const DEFAULT_BASE_URI: &str =
    "https://gateway.pinata.cloud/ipfs/bafybeigqqtyg64xaw2lksco45jl3yuk7pcc7hfj45zjl2nvj3fii4ex6bq";

// ============================================================================
// NETWORK CONFIGURATION
// ============================================================================

config_struct! {
    /// Cluster endpoints and explorer settings
    #[derive(Debug)]
    pub struct NetworkConfig {
        rpc_url: String = "https://api.devnet.solana.com".to_string(),
        explorer_url: String = "https://explorer.solana.com".to_string(),
        /// Explorer `?cluster=` value
        cluster: String = "devnet".to_string(),
        /// processed | confirmed | finalized
        commitment: String = "confirmed".to_string(),
        /// HTTP timeout for each RPC request
        rpc_timeout_secs: u64 = 30,
    }
}

// ============================================================================
// COLLECTION CONFIGURATION
// ============================================================================

config_struct! {
    /// Collection-wide metadata parameters
    #[derive(Debug)]
    pub struct CollectionConfig {
        name: String = "Bullievers".to_string(),
        symbol: String = "BULL".to_string(),
        /// Units minted per edition
        mint_amount: u64 = 1,
        base_uri: String = DEFAULT_BASE_URI.to_string(),
    }
}

// ============================================================================
// IDENTITY CONFIGURATION
// ============================================================================

config_struct! {
    /// Key material for the fixed identities of a run
    ///
    /// Authority and owner fall back to freshly generated keypairs.
    pub struct IdentityConfig {
        /// Payer secret key (required)
        private_key: Option<String> = None,
        /// Mint and metadata update authority secret key
        authority_private_key: Option<String> = None,
        /// Wallet receiving the minted editions
        owner_address: Option<String> = None,
    }
}

impl fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("IdentityConfig")
            .field("private_key", &redact(&self.private_key))
            .field("authority_private_key", &redact(&self.authority_private_key))
            .field("owner_address", &self.owner_address)
            .finish()
    }
}

// ============================================================================
// ROOT CONFIGURATION
// ============================================================================

config_struct! {
    /// Complete minter configuration, read once at startup
    #[derive(Debug)]
    pub struct MinterConfig {
        network: NetworkConfig = NetworkConfig::default(),
        collection: CollectionConfig = CollectionConfig::default(),
        identities: IdentityConfig = IdentityConfig::default(),
    }
}
