//! Wire-level types shared by wallet and explorer services.
//!
//! This crate provides:
//! - Token type tags (ERC20, BEP20, TRC20, ...), their versions and the
//!   coins that issue them
//! - Token descriptors
//! - Generic transaction, page and block DTOs with JSON (de)serialization
//!   and derived fields (direction, UTXO value, involved addresses)
//! - `0x`-prefixed hex numbers as used by EVM JSON-RPC
//! - Well-known EVM chain ids

pub mod chain;
pub mod chain_id;
pub mod error;
pub mod hex_number;
pub mod token;
pub mod tx;
mod wire;

pub use chain::{chain_from_asset_type, chains_from_asset_type};
pub use error::TypesError;
pub use hex_number::HexNumber;
pub use token::{
    ethereum_token_type_by_index, parse_token_type, token_type_for_coin, token_types, token_version,
    Token, TokenType, TokenVersion,
};
pub use tx::{
    infer_direction, is_tx_type_among, Amount, Block, ContractCall, Direction, Fee, Ics20Transfer,
    Metadata, Status, Swap, TransactionType, Transfer, TransferNft, Tx, TxOutput, TxPage, Txs,
    SUPPORTED_TYPES,
};
