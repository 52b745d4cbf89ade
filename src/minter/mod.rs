//! Collection minting
//!
//! Each edition goes through a two-step protocol on Token-2022:
//! - initialize: create the mint account with the metadata pointer extension,
//!   initialize the mint and write its token metadata (one transaction)
//! - mint and lock: create the owner's associated account, mint the edition
//!   supply to it, then revoke the mint authority
//!
//! A failure after the first step leaves a partially created mint on-chain;
//! it is reported with its stage and never reconciled.

pub mod instructions;
pub mod types;
pub mod workflow;

pub use types::{BatchReport, CreationResult, FailurePolicy, MintContext, MintFailure, MintOutcome};
pub use workflow::{create_nft, create_nft_collection};
