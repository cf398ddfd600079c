//! Chain primitives for wallet and explorer backends.
//!
//! Re-exports the member crates under short module names:
//!
//! - [`coin`]: static coin registry and token explorer URLs
//! - [`address`]: EIP-55 checksumming, aware of per-chain address prefixes
//! - [`asset`]: `c<coin>_t<token>` asset ids
//! - [`types`]: token types, hex numbers and transaction DTOs
//! - [`utils`]: decimal amount conversions and batching

pub use primitives_address as address;
pub use primitives_asset as asset;
pub use primitives_coin as coin;
pub use primitives_types as types;
pub use primitives_utils as utils;

pub use primitives_address::{eip55_checksum, to_eip55_by_coin_id};
pub use primitives_coin::{get_coin, get_coin_by_handle, AssetId, Coin};
