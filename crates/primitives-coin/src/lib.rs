//! Static registry of the coins known to the wallet/explorer ecosystem.
//!
//! This crate provides:
//! - One [`Coin`] constant per supported chain, plus numeric ids in [`id`]
//! - Lookups by id and by handle
//! - EVM-family classification
//! - Asset id construction for native coins and their tokens
//! - Per-chain block-explorer URL templates for tokens

pub mod coins;
pub mod error;
pub mod explorer;
pub mod models;

pub use coins::*;
pub use error::CoinError;
pub use models::{AssetId, Blockchain, Coin};
