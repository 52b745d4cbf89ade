//! In-memory `ChainClient` for workflow tests
//!
//! Records every submitted transaction, classifies it into the creation step
//! it belongs to and can fail a chosen occurrence of a step.

use super::ChainClient;
use crate::errors::{MintError, MintResult, MintStage};
use async_trait::async_trait;
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Token-2022 instruction tags used for classification
const MINT_TO_TAG: u8 = 7;
const SET_AUTHORITY_TAG: u8 = 6;

/// Rent quoted for any size, per byte
const RENT_PER_BYTE: u64 = 6_960;

#[derive(Debug, Clone)]
pub struct SubmittedTransaction {
    pub stage: MintStage,
    pub instructions: Vec<Instruction>,
    pub payer: Pubkey,
    pub signers: Vec<Pubkey>,
    /// None when the submission was failed on purpose
    pub signature: Option<Signature>,
}

#[derive(Default)]
struct MockState {
    submitted: Vec<SubmittedTransaction>,
    rent_requests: Vec<usize>,
    stage_counts: HashMap<MintStage, usize>,
    network_calls: usize,
}

pub struct MockChainClient {
    state: Mutex<MockState>,
    /// Fail the n-th (1-based) submission of this stage
    failure: Option<(MintStage, usize)>,
    balance: u64,
}

impl MockChainClient {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState::default()),
            failure: None,
            balance: 2_000_000_000,
        }
    }

    pub fn failing_at(stage: MintStage, occurrence: usize) -> Self {
        Self {
            failure: Some((stage, occurrence)),
            ..Self::new()
        }
    }

    pub fn with_balance(mut self, lamports: u64) -> Self {
        self.balance = lamports;
        self
    }

    pub fn submitted(&self) -> Vec<SubmittedTransaction> {
        self.state.lock().unwrap().submitted.clone()
    }

    pub fn rent_requests(&self) -> Vec<usize> {
        self.state.lock().unwrap().rent_requests.clone()
    }

    pub fn network_calls(&self) -> usize {
        self.state.lock().unwrap().network_calls
    }

    /// Which creation step a transaction belongs to, from its first instruction
    pub fn classify(instructions: &[Instruction]) -> MintStage {
        let first = &instructions[0];
        if first.program_id == spl_associated_token_account::id() {
            MintStage::AssociatedAccount
        } else if first.program_id != spl_token_2022::id() {
            MintStage::Initialize
        } else {
            match first.data.first() {
                Some(&MINT_TO_TAG) => MintStage::MintTo,
                Some(&SET_AUTHORITY_TAG) => MintStage::RevokeAuthority,
                other => panic!("unexpected token instruction tag {:?}", other),
            }
        }
    }
}

#[async_trait]
impl ChainClient for MockChainClient {
    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> MintResult<u64> {
        let mut state = self.state.lock().unwrap();
        state.network_calls += 1;
        state.rent_requests.push(data_len);
        Ok(data_len as u64 * RENT_PER_BYTE)
    }

    async fn get_balance(&self, _pubkey: &Pubkey) -> MintResult<u64> {
        self.state.lock().unwrap().network_calls += 1;
        Ok(self.balance)
    }

    async fn send_and_confirm(
        &self,
        instructions: &[Instruction],
        payer: &Pubkey,
        signers: &[&Keypair],
    ) -> MintResult<Signature> {
        let stage = Self::classify(instructions);
        let mut state = self.state.lock().unwrap();
        state.network_calls += 1;

        let count = state.stage_counts.entry(stage).or_insert(0);
        *count += 1;
        let should_fail = self.failure == Some((stage, *count));

        let signature = if should_fail {
            None
        } else {
            Some(Signature::new_unique())
        };

        state.submitted.push(SubmittedTransaction {
            stage,
            instructions: instructions.to_vec(),
            payer: *payer,
            signers: signers.iter().map(|s| s.pubkey()).collect(),
            signature,
        });

        signature.ok_or_else(|| MintError::rpc(format!("simulated {} failure", stage)))
    }
}

/// Shared handle, so a test can inspect the client after handing it over
#[async_trait]
impl ChainClient for Arc<MockChainClient> {
    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> MintResult<u64> {
        self.as_ref().get_minimum_balance_for_rent_exemption(data_len).await
    }

    async fn get_balance(&self, pubkey: &Pubkey) -> MintResult<u64> {
        self.as_ref().get_balance(pubkey).await
    }

    async fn send_and_confirm(
        &self,
        instructions: &[Instruction],
        payer: &Pubkey,
        signers: &[&Keypair],
    ) -> MintResult<Signature> {
        self.as_ref().send_and_confirm(instructions, payer, signers).await
    }
}
