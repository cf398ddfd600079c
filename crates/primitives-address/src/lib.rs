//! Address canonicalization for EVM-family chains.
//!
//! This crate provides:
//! - EIP-55 mixed-case checksum encoding of hex addresses
//! - A coin-aware wrapper that skips non-EVM chains and handles chains with
//!   an alternate human-readable address prefix
//! - [`ChainRegistry`], the read-only chain classification the wrapper consults

pub mod checksum;
pub mod error;
pub mod registry;

pub use checksum::{eip55_checksum, remove_0x, to_eip55_by_coin_id, to_eip55_with_registry};
pub use error::AddressError;
pub use registry::{ChainRegistry, CoinRegistry};
