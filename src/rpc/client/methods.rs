//! `ChainClient` methods for `SolanaRpcClient`

use super::SolanaRpcClient;
use crate::errors::{MintError, MintResult};
use crate::logger::{self, LogTag};
use crate::rpc::types::RpcStats;
use crate::rpc::ChainClient;
use async_trait::async_trait;
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};
use std::time::Instant;

#[async_trait]
impl ChainClient for SolanaRpcClient {
    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> MintResult<u64> {
        let started = Instant::now();
        let result = self
            .client
            .get_minimum_balance_for_rent_exemption(data_len)
            .await;
        self.record("getMinimumBalanceForRentExemption", started, result.is_ok());

        result.map_err(|e| {
            MintError::rpc(format!(
                "Failed to get rent-exempt minimum for {} bytes: {}",
                data_len, e
            ))
        })
    }

    async fn get_balance(&self, pubkey: &Pubkey) -> MintResult<u64> {
        let started = Instant::now();
        let result = self.client.get_balance(pubkey).await;
        self.record("getBalance", started, result.is_ok());

        result.map_err(|e| MintError::rpc(format!("Failed to get balance of {}: {}", pubkey, e)))
    }

    async fn send_and_confirm(
        &self,
        instructions: &[Instruction],
        payer: &Pubkey,
        signers: &[&Keypair],
    ) -> MintResult<Signature> {
        let started = Instant::now();
        let blockhash = self.client.get_latest_blockhash().await;
        self.record("getLatestBlockhash", started, blockhash.is_ok());
        let blockhash =
            blockhash.map_err(|e| MintError::rpc(format!("Failed to get latest blockhash: {}", e)))?;

        let mut transaction = Transaction::new_with_payer(instructions, Some(payer));
        transaction.try_sign(signers, blockhash).map_err(|e| {
            let signer_keys: Vec<String> = signers.iter().map(|s| s.pubkey().to_string()).collect();
            MintError::signing(format!("{} (signers: {})", e, signer_keys.join(", ")))
        })?;

        logger::debug(
            LogTag::Transactions,
            &format!(
                "Submitting transaction with {} instruction(s), {} signer(s), blockhash {}",
                instructions.len(),
                signers.len(),
                blockhash
            ),
        );

        let started = Instant::now();
        let result = self.client.send_and_confirm_transaction(&transaction).await;
        self.record("sendAndConfirmTransaction", started, result.is_ok());

        let signature = result.map_err(|e| MintError::rpc(e.to_string()))?;
        self.record_confirmation();

        logger::debug(LogTag::Transactions, &format!("Confirmed {}", signature));
        Ok(signature)
    }

    fn stats(&self) -> Option<RpcStats> {
        Some(self.snapshot_stats())
    }
}
