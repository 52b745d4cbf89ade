//! Chain access for the minting workflow
//!
//! `ChainClient` is the seam between the workflow and the network: the three
//! primitives the creation protocol needs (rent query, balance query and
//! submit-with-confirmation). `SolanaRpcClient` implements it over the
//! nonblocking Solana RPC client; tests use `testing::MockChainClient`.

pub mod client;
pub mod types;

#[cfg(test)]
pub mod testing;

use crate::errors::MintResult;
use async_trait::async_trait;
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
};

pub use client::SolanaRpcClient;
pub use types::RpcStats;

/// Lamports per SOL, for display
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Minimum balance for an account of `data_len` bytes to be rent exempt
    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> MintResult<u64>;

    /// Balance of an account in lamports
    async fn get_balance(&self, pubkey: &Pubkey) -> MintResult<u64>;

    /// Build a transaction from `instructions`, sign it with `signers`
    /// (the fee payer included), submit it and wait for confirmation
    async fn send_and_confirm(
        &self,
        instructions: &[Instruction],
        payer: &Pubkey,
        signers: &[&Keypair],
    ) -> MintResult<Signature>;

    /// Request counters, when the client keeps them
    fn stats(&self) -> Option<RpcStats> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lamports_to_sol() {
        assert_eq!(lamports_to_sol(1_500_000_000), 1.5);
        assert_eq!(lamports_to_sol(0), 0.0);
    }
}
