/// Token metadata records for collection editions
///
/// Builds the metadata stored in the mint account by the Token-2022 token
/// metadata extension, and computes its on-chain size so the mint can be
/// funded for rent before the metadata is written.
use crate::config::CollectionConfig;
use solana_sdk::pubkey::Pubkey;

/// Additional metadata key recording the edition number
pub const EDITION_FIELD: &str = "Edition";

/// TLV entry header: 2-byte extension type followed by a 2-byte length
pub const TLV_TYPE_SIZE: usize = 2;
pub const TLV_LENGTH_SIZE: usize = 2;

/// Borsh length prefix for strings and vectors
const BORSH_LEN_PREFIX: usize = 4;

/// Metadata of a single edition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NftMetadata {
    pub update_authority: Pubkey,
    pub mint: Pubkey,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub additional_metadata: Vec<(String, String)>,
}

impl NftMetadata {
    /// Borsh-packed size of the metadata as stored in the TLV entry
    ///
    /// Layout: update authority (32) + mint (32) + name + symbol + uri +
    /// additional metadata vector, strings carrying a 4-byte length prefix.
    pub fn packed_len(&self) -> usize {
        let string_len = |s: &str| BORSH_LEN_PREFIX + s.len();

        let additional: usize = self
            .additional_metadata
            .iter()
            .map(|(key, value)| string_len(key) + string_len(value))
            .sum();

        32 + 32
            + string_len(&self.name)
            + string_len(&self.symbol)
            + string_len(&self.uri)
            + BORSH_LEN_PREFIX
            + additional
    }

    /// Space the metadata occupies in the mint account including its TLV header
    pub fn tlv_len(&self) -> usize {
        TLV_TYPE_SIZE + TLV_LENGTH_SIZE + self.packed_len()
    }
}

/// Build the metadata record for edition `index` (1-based)
pub fn generate_nft_metadata(
    collection: &CollectionConfig,
    update_authority: &Pubkey,
    mint: &Pubkey,
    index: u32,
) -> NftMetadata {
    NftMetadata {
        update_authority: *update_authority,
        mint: *mint,
        name: format!("{} #{}", collection.name, index),
        symbol: collection.symbol.clone(),
        uri: format!("{}/{}.json", collection.base_uri.trim_end_matches('/'), index),
        additional_metadata: vec![(EDITION_FIELD.to_string(), index.to_string())],
    }
}
