//! Instruction builders for the creation protocol
//!
//! Pure functions; every instruction targets the Token-2022 program (or the
//! system / associated token account programs on its behalf).

use crate::errors::{MintError, MintResult};
use crate::metadata::NftMetadata;
use solana_sdk::{instruction::Instruction, pubkey::Pubkey, system_instruction};
use spl_associated_token_account::{
    get_associated_token_address_with_program_id,
    instruction::create_associated_token_account_idempotent,
};
use spl_token_2022::{
    extension::{metadata_pointer, ExtensionType},
    instruction::{initialize_mint, mint_to, set_authority, AuthorityType},
    state::Mint,
};
use spl_token_metadata_interface::{instruction as metadata_instruction, state::Field};

/// NFTs carry no fractional units
pub const NFT_DECIMALS: u8 = 0;

pub fn token_program_id() -> Pubkey {
    spl_token_2022::id()
}

/// Size of a mint account carrying the metadata pointer extension
///
/// The metadata itself is appended later by the metadata initialize
/// instruction, which reallocates the account.
pub fn mint_account_len() -> MintResult<usize> {
    ExtensionType::try_calculate_account_len::<Mint>(&[ExtensionType::MetadataPointer])
        .map_err(|e| MintError::instruction(format!("Failed to size mint account: {}", e)))
}

/// Instructions of the initialize transaction, in submission order:
/// create account, metadata pointer, initialize mint, initialize metadata,
/// one update per additional metadata field
pub fn build_initialize_instructions(
    payer: &Pubkey,
    authority: &Pubkey,
    metadata: &NftMetadata,
    mint_len: usize,
    lamports: u64,
) -> MintResult<Vec<Instruction>> {
    let program_id = token_program_id();
    let mint = &metadata.mint;

    let mut instructions = vec![
        system_instruction::create_account(payer, mint, lamports, mint_len as u64, &program_id),
        metadata_pointer::instruction::initialize(&program_id, mint, Some(*authority), Some(*mint))
            .map_err(|e| {
                MintError::instruction(format!("Failed to build metadata pointer init: {}", e))
            })?,
        initialize_mint(&program_id, mint, authority, None, NFT_DECIMALS)
            .map_err(|e| MintError::instruction(format!("Failed to build mint init: {}", e)))?,
        metadata_instruction::initialize(
            &program_id,
            mint,
            &metadata.update_authority,
            mint,
            authority,
            metadata.name.clone(),
            metadata.symbol.clone(),
            metadata.uri.clone(),
        ),
    ];

    for (key, value) in &metadata.additional_metadata {
        instructions.push(metadata_instruction::update_field(
            &program_id,
            mint,
            &metadata.update_authority,
            Field::Key(key.clone()),
            value.clone(),
        ));
    }

    Ok(instructions)
}

/// Owner's Token-2022 associated account for `mint`
pub fn associated_token_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, &token_program_id())
}

pub fn build_associated_account_instruction(
    payer: &Pubkey,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Instruction {
    create_associated_token_account_idempotent(payer, owner, mint, &token_program_id())
}

pub fn build_mint_to_instruction(
    mint: &Pubkey,
    destination: &Pubkey,
    authority: &Pubkey,
    amount: u64,
) -> MintResult<Instruction> {
    mint_to(&token_program_id(), mint, destination, authority, &[], amount)
        .map_err(|e| MintError::instruction(format!("Failed to build mint-to: {}", e)))
}

/// Set the mint authority to none, fixing the supply permanently
pub fn build_revoke_mint_authority_instruction(
    mint: &Pubkey,
    authority: &Pubkey,
) -> MintResult<Instruction> {
    set_authority(
        &token_program_id(),
        mint,
        None,
        AuthorityType::MintTokens,
        authority,
        &[],
    )
    .map_err(|e| MintError::instruction(format!("Failed to build set-authority: {}", e)))
}
