#![warn(missing_docs)]

//! Mint an NFT on Sui with one Move call.

pub use crate::{
    config::MinterConfig,
    error::{Error, Result},
    minter::{MetadataReference, MintedNft, NftMinter},
};

/// Account addresses and object ids
pub mod address;
/// Environment configuration
pub mod config;
#[allow(missing_docs)]
pub mod error;
/// What the ledger reports after execution
pub mod execution;
/// Ed25519 signing keys
pub mod keys;
/// Ledger client module
pub mod ledger_client;
pub mod logging;
/// Mint invoker
pub mod minter;
/// Unsigned transaction model
pub mod transaction;
