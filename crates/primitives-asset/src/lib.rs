//! Composite asset identifiers.
//!
//! An asset id names either a native coin (`c60`) or a token living on that
//! coin's chain (`c60_t0xdAC17F958D2ee523a2206206994597C13D831ec7`). The coin
//! and token words may appear in either order when parsing.

pub mod chain;
pub mod error;
pub mod id;

pub use chain::chain_handle_from_asset_type;
pub use error::AssetError;
pub use id::{build_id, find_coin_id, find_token_id, parse_id, remove_first_char, CoinType, ParsedAssetId};
