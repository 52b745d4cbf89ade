/// Configuration utilities - loading, validation and key material parsing
///
/// Loading order (later wins):
/// 1. Schema defaults
/// 2. Optional JSON file (--config <path>)
/// 3. Environment variables (a `.env` file is loaded first when present)
///
/// Missing `PRIVATE_KEY` is reported here, before any RPC client exists.
use super::schemas::MinterConfig;
use crate::errors::ConfigError;
use crate::logger::{self, LogTag};
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use std::collections::HashMap;
use std::str::FromStr;

pub const ENV_PRIVATE_KEY: &str = "PRIVATE_KEY";
pub const ENV_AUTHORITY_PRIVATE_KEY: &str = "AUTHORITY_PRIVATE_KEY";
pub const ENV_OWNER_ADDRESS: &str = "OWNER_ADDRESS";
pub const ENV_RPC_URL: &str = "RPC_URL";
pub const ENV_EXPLORER_URL: &str = "EXPLORER_URL";
pub const ENV_CLUSTER: &str = "CLUSTER";
pub const ENV_COMMITMENT: &str = "COMMITMENT";
pub const ENV_COLLECTION_NAME: &str = "COLLECTION_NAME";
pub const ENV_COLLECTION_SYMBOL: &str = "COLLECTION_SYMBOL";
pub const ENV_COLLECTION_BASE_URI: &str = "COLLECTION_BASE_URI";
pub const ENV_MINT_AMOUNT: &str = "MINT_AMOUNT";

/// Fixed identities shared by every iteration of a run
pub struct Identities {
    pub payer: Keypair,
    pub authority: Keypair,
    pub owner: Pubkey,
}

/// Load configuration from the process environment and an optional file
pub fn load_config(path: Option<&str>) -> Result<MinterConfig, ConfigError> {
    if dotenv::dotenv().is_ok() {
        logger::debug(LogTag::Config, "Loaded variables from .env");
    }
    let env: HashMap<String, String> = std::env::vars().collect();
    load_config_with(path, |key| env.get(key).cloned())
}

/// Load configuration using an explicit variable lookup
pub fn load_config_with<F>(path: Option<&str>, lookup: F) -> Result<MinterConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => MinterConfig::default(),
    };

    apply_env_overrides(&mut config, &lookup)?;
    validate_config(&config)?;

    Ok(config)
}

fn read_config_file(path: &str) -> Result<MinterConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;

    let config = serde_json::from_str::<MinterConfig>(&contents).map_err(|source| {
        ConfigError::Parse {
            path: path.to_string(),
            source,
        }
    })?;

    logger::debug(LogTag::Config, &format!("Read configuration file {}", path));
    Ok(config)
}

fn apply_env_overrides<F>(config: &mut MinterConfig, lookup: &F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(v) = get(ENV_PRIVATE_KEY) {
        config.identities.private_key = Some(v);
    }
    if let Some(v) = get(ENV_AUTHORITY_PRIVATE_KEY) {
        config.identities.authority_private_key = Some(v);
    }
    if let Some(v) = get(ENV_OWNER_ADDRESS) {
        config.identities.owner_address = Some(v);
    }
    if let Some(v) = get(ENV_RPC_URL) {
        config.network.rpc_url = v;
    }
    if let Some(v) = get(ENV_EXPLORER_URL) {
        config.network.explorer_url = v;
    }
    if let Some(v) = get(ENV_CLUSTER) {
        config.network.cluster = v;
    }
    if let Some(v) = get(ENV_COMMITMENT) {
        config.network.commitment = v;
    }
    if let Some(v) = get(ENV_COLLECTION_NAME) {
        config.collection.name = v;
    }
    if let Some(v) = get(ENV_COLLECTION_SYMBOL) {
        config.collection.symbol = v;
    }
    if let Some(v) = get(ENV_COLLECTION_BASE_URI) {
        config.collection.base_uri = v;
    }
    if let Some(v) = get(ENV_MINT_AMOUNT) {
        config.collection.mint_amount = v.parse().map_err(|e| ConfigError::InvalidValue {
            field: ENV_MINT_AMOUNT,
            reason: format!("'{}' is not a whole number: {}", v, e),
        })?;
    }

    Ok(())
}

/// Validate a configuration without touching the network
pub fn validate_config(config: &MinterConfig) -> Result<(), ConfigError> {
    let has_key = config
        .identities
        .private_key
        .as_deref()
        .map(|k| !k.trim().is_empty())
        .unwrap_or(false);
    if !has_key {
        return Err(ConfigError::MissingPrivateKey);
    }

    let required = [
        ("network.rpc_url", &config.network.rpc_url),
        ("network.explorer_url", &config.network.explorer_url),
        ("collection.name", &config.collection.name),
        ("collection.symbol", &config.collection.symbol),
        ("collection.base_uri", &config.collection.base_uri),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field,
                reason: "must not be empty".to_string(),
            });
        }
    }

    if config.collection.mint_amount == 0 {
        return Err(ConfigError::InvalidValue {
            field: "collection.mint_amount",
            reason: "must be at least 1".to_string(),
        });
    }

    parse_commitment(&config.network.commitment)?;

    if let Some(owner) = &config.identities.owner_address {
        parse_pubkey("identities.owner_address", owner)?;
    }

    Ok(())
}

pub fn parse_commitment(raw: &str) -> Result<CommitmentConfig, ConfigError> {
    CommitmentConfig::from_str(raw.trim()).map_err(|_| ConfigError::InvalidValue {
        field: "network.commitment",
        reason: format!("'{}' is not one of processed, confirmed, finalized", raw),
    })
}

pub fn parse_pubkey(field: &'static str, raw: &str) -> Result<Pubkey, ConfigError> {
    Pubkey::from_str(raw.trim()).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: format!("'{}' is not a valid address: {}", raw, e),
    })
}

// ============================================================================
// KEY MATERIAL
// ============================================================================

/// Build the payer, authority and owner identities for a run
pub fn load_identities(config: &MinterConfig) -> Result<Identities, ConfigError> {
    let payer_key = config
        .identities
        .private_key
        .as_deref()
        .ok_or(ConfigError::MissingPrivateKey)?;
    let payer = parse_keypair("PRIVATE_KEY", payer_key)?;

    let authority = match config.identities.authority_private_key.as_deref() {
        Some(raw) => parse_keypair("AUTHORITY_PRIVATE_KEY", raw)?,
        None => {
            logger::debug(LogTag::Config, "No authority key configured, generating one");
            Keypair::new()
        }
    };

    let owner = match config.identities.owner_address.as_deref() {
        Some(raw) => parse_pubkey("identities.owner_address", raw)?,
        None => {
            logger::debug(LogTag::Config, "No owner address configured, generating one");
            Keypair::new().pubkey()
        }
    };

    Ok(Identities {
        payer,
        authority,
        owner,
    })
}

/// Parse a secret key in base58 or `[1,2,3,...]` array format
pub fn parse_keypair(field: &'static str, raw: &str) -> Result<Keypair, ConfigError> {
    let raw = raw.trim();
    if raw.starts_with('[') && raw.ends_with(']') {
        load_keypair_from_array_format(field, raw)
    } else {
        load_keypair_from_base58_format(field, raw)
    }
}

fn load_keypair_from_array_format(field: &'static str, raw: &str) -> Result<Keypair, ConfigError> {
    let bytes: Vec<u8> = serde_json::from_str(raw).map_err(|e| ConfigError::InvalidPrivateKey {
        field,
        reason: format!("failed to parse byte array: {}", e),
    })?;
    keypair_from_bytes(field, &bytes)
}

fn load_keypair_from_base58_format(
    field: &'static str,
    raw: &str,
) -> Result<Keypair, ConfigError> {
    let bytes = bs58::decode(raw)
        .into_vec()
        .map_err(|e| ConfigError::InvalidPrivateKey {
            field,
            reason: format!("failed to decode base58: {}", e),
        })?;
    keypair_from_bytes(field, &bytes)
}

fn keypair_from_bytes(field: &'static str, bytes: &[u8]) -> Result<Keypair, ConfigError> {
    if bytes.len() != 64 {
        return Err(ConfigError::InvalidPrivateKey {
            field,
            reason: format!("expected 64 bytes, got {}", bytes.len()),
        });
    }

    Keypair::try_from(bytes).map_err(|e| ConfigError::InvalidPrivateKey {
        field,
        reason: e.to_string(),
    })
}
