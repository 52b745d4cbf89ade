//! Sequential creation of collection editions

use super::instructions::{
    associated_token_address, build_associated_account_instruction,
    build_initialize_instructions, build_mint_to_instruction,
    build_revoke_mint_authority_instruction, mint_account_len,
};
use super::types::{BatchReport, CreationResult, FailurePolicy, MintContext, MintFailure, MintOutcome};
use crate::errors::{MintError, MintResult, MintStage};
use crate::explorer::{address_url, tx_url};
use crate::logger::{self, LogTag};
use crate::metadata::{generate_nft_metadata, NftMetadata};
use crate::rpc::ChainClient;
use chrono::Utc;
use solana_sdk::{pubkey::Pubkey, signature::{Keypair, Signature}, signer::Signer};

/// Signatures of step A and the mint half of step B
struct MintedToken {
    initialization_signature: Signature,
    mint_signature: Signature,
}

/// Create `count` editions one after another
///
/// Editions are numbered from 1. Every edition gets a fresh mint keypair;
/// payer, authority and owner come from `ctx`.
pub async fn create_nft_collection<C: ChainClient + ?Sized>(
    client: &C,
    ctx: &MintContext,
    count: u32,
    policy: FailurePolicy,
) -> BatchReport {
    let started_at = Utc::now();
    let mut outcomes: Vec<MintOutcome> = Vec::new();
    let mut aborted = false;

    logger::info(
        LogTag::Minter,
        &format!(
            "Creating {} {} edition(s) ({:?})",
            count, ctx.collection.name, policy
        ),
    );

    for edition in 1..=count {
        let outcome = create_nft(client, ctx, edition).await;

        match &outcome {
            Ok(result) => {
                logger::info(
                    LogTag::Minter,
                    &format!(
                        "NFT #{} created: {}",
                        edition,
                        address_url(&ctx.network, &result.mint_address)
                    ),
                );
                for (label, signature) in [
                    ("initialize", &result.initialization_signature),
                    ("mint", &result.mint_signature),
                    ("revoke", &result.authority_revocation_signature),
                ] {
                    logger::debug(
                        LogTag::Transactions,
                        &format!("  {}: {}", label, tx_url(&ctx.network, signature)),
                    );
                }
            }
            Err(failure) => log_failure(failure),
        }

        let failed = outcome.is_err();
        outcomes.push(outcome);

        if failed && policy == FailurePolicy::AbortOnFirstFailure {
            aborted = edition < count;
            if aborted {
                logger::warning(
                    LogTag::Minter,
                    &format!(
                        "Stopping after edition {}, {} edition(s) not attempted",
                        edition,
                        count - edition
                    ),
                );
            }
            break;
        }
    }

    BatchReport {
        requested: count,
        outcomes,
        aborted,
        started_at,
        finished_at: Utc::now(),
    }
}

fn log_failure(failure: &MintFailure) {
    logger::error(LogTag::Minter, &failure_message(failure));
    if let Some(hint) = failure.error.hint() {
        logger::error(LogTag::Minter, &format!("  hint: {}", hint));
    }
    if failure.is_partial() {
        logger::warning(
            LogTag::Minter,
            &format!(
                "Mint {} was left partially created (no supply or authority still set)",
                failure.mint_address
            ),
        );
    }
}

/// Error line logged for a failed edition
pub fn failure_message(failure: &MintFailure) -> String {
    format!("Failed to create NFT #{}: {}", failure.edition, failure.error)
}

/// Create a single edition: fresh mint, metadata, both protocol steps
pub async fn create_nft<C: ChainClient + ?Sized>(
    client: &C,
    ctx: &MintContext,
    edition: u32,
) -> MintOutcome {
    let mint = Keypair::new();
    let mint_address = mint.pubkey();
    let metadata = generate_nft_metadata(
        &ctx.collection,
        &ctx.authority.pubkey(),
        &mint_address,
        edition,
    );

    logger::debug(
        LogTag::Metadata,
        &format!(
            "Edition {}: name '{}', uri {}, {} metadata bytes",
            edition,
            metadata.name,
            metadata.uri,
            metadata.tlv_len()
        ),
    );

    let fail = |error: MintError| MintFailure {
        edition,
        mint_address: mint_address.to_string(),
        error,
    };

    let minted = create_token_and_mint(client, ctx, &mint, &metadata)
        .await
        .map_err(fail)?;
    let revocation = remove_token_authority(client, ctx, &mint_address)
        .await
        .map_err(fail)?;

    Ok(CreationResult {
        edition,
        mint_address: mint_address.to_string(),
        initialization_signature: minted.initialization_signature.to_string(),
        mint_signature: minted.mint_signature.to_string(),
        authority_revocation_signature: revocation.to_string(),
    })
}

/// Step A and the mint half of step B
async fn create_token_and_mint<C: ChainClient + ?Sized>(
    client: &C,
    ctx: &MintContext,
    mint: &Keypair,
    metadata: &NftMetadata,
) -> MintResult<MintedToken> {
    let payer = ctx.payer.pubkey();
    let authority = ctx.authority.pubkey();
    let mint_address = mint.pubkey();

    let mint_len = mint_account_len().map_err(|e| e.at(MintStage::Initialize))?;
    let lamports = client
        .get_minimum_balance_for_rent_exemption(mint_len + metadata.tlv_len())
        .await
        .map_err(|e| e.at(MintStage::Initialize))?;

    let instructions =
        build_initialize_instructions(&payer, &authority, metadata, mint_len, lamports)
            .map_err(|e| e.at(MintStage::Initialize))?;
    for (i, ix) in instructions.iter().enumerate() {
        logger::verbose(
            LogTag::Transactions,
            &format!(
                "  initialize[{}]: program {}, {} account(s), {} data byte(s)",
                i,
                ix.program_id,
                ix.accounts.len(),
                ix.data.len()
            ),
        );
    }
    let initialization_signature = client
        .send_and_confirm(&instructions, &payer, &[&ctx.payer, mint, &ctx.authority])
        .await
        .map_err(|e| e.at(MintStage::Initialize))?;

    logger::debug(
        LogTag::Minter,
        &format!("Mint {} initialized ({} lamports)", mint_address, lamports),
    );

    let token_account = associated_token_address(&ctx.owner, &mint_address);
    let create_account = build_associated_account_instruction(&payer, &ctx.owner, &mint_address);
    client
        .send_and_confirm(&[create_account], &payer, &[&ctx.payer])
        .await
        .map_err(|e| e.at(MintStage::AssociatedAccount))?;

    let mint_to = build_mint_to_instruction(
        &mint_address,
        &token_account,
        &authority,
        ctx.collection.mint_amount,
    )
    .map_err(|e| e.at(MintStage::MintTo))?;
    let mint_signature = client
        .send_and_confirm(&[mint_to], &payer, &[&ctx.payer, &ctx.authority])
        .await
        .map_err(|e| e.at(MintStage::MintTo))?;

    logger::debug(
        LogTag::Minter,
        &format!(
            "Minted {} to {} (owner {})",
            ctx.collection.mint_amount, token_account, ctx.owner
        ),
    );

    Ok(MintedToken {
        initialization_signature,
        mint_signature,
    })
}

/// Set the mint authority of `mint` to none
async fn remove_token_authority<C: ChainClient + ?Sized>(
    client: &C,
    ctx: &MintContext,
    mint: &Pubkey,
) -> MintResult<Signature> {
    let revoke = build_revoke_mint_authority_instruction(mint, &ctx.authority.pubkey())
        .map_err(|e| e.at(MintStage::RevokeAuthority))?;
    client
        .send_and_confirm(&[revoke], &ctx.payer.pubkey(), &[&ctx.payer, &ctx.authority])
        .await
        .map_err(|e| e.at(MintStage::RevokeAuthority))
}
