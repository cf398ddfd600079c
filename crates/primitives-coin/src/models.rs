use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coins::id;

const COIN_PREFIX: &str = "c";
const TOKEN_PREFIX: &str = "t";

/// Family of a chain's account and address model.
///
/// Every coin whose family is [`Blockchain::Ethereum`] is treated as an EVM
/// chain (EIP-55 addresses, ERC-20 style tokens).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Blockchain {
    Algorand,
    Aptos,
    Binance,
    Bitcoin,
    Cardano,
    Cosmos,
    Elrond,
    Eos,
    Ethereum,
    Harmony,
    InternetComputer,
    Near,
    Neo,
    Nuls,
    Oasis,
    Ontology,
    Polkadot,
    Ripple,
    Solana,
    Stellar,
    Sui,
    Tezos,
    Theta,
    Ton,
    Tron,
    Vechain,
    Waves,
}

/// The native currency of a blockchain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coin {
    pub id: u32,
    pub handle: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    pub decimals: u32,
    /// Average block time in milliseconds.
    pub block_time: u64,
    pub min_confirmations: u64,
    pub blockchain: Blockchain,
    pub is_token_supported: bool,
}

impl Coin {
    /// Whether this coin shares Ethereum's account and address model.
    pub fn is_evm(&self) -> bool {
        self.blockchain == Blockchain::Ethereum
    }

    /// Asset id of the native coin, e.g. `c60`.
    pub fn asset_id(&self) -> AssetId {
        AssetId(format!("{COIN_PREFIX}{}", self.id))
    }

    /// Asset id of a token issued on this chain, e.g. `c60_t0xdAC1...`.
    ///
    /// An empty token id yields the native asset id.
    pub fn token_asset_id(&self, token_id: &str) -> AssetId {
        let mut result = self.asset_id();
        if !token_id.is_empty() {
            result.0.push('_');
            result.0.push_str(TOKEN_PREFIX);
            result.0.push_str(token_id);
        }
        result
    }

    /// Human-readable address prefix used instead of `0x`, if the chain has one.
    pub fn alternate_address_prefix(&self) -> Option<&'static str> {
        match self.id {
            id::RONIN => Some("ronin:"),
            _ => None,
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} (#{})", self.symbol, self.name, self.id)
    }
}

/// Composite asset identifier: `c<coin>` or `c<coin>_t<token>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(pub String);

impl AssetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for AssetId {
    fn from(value: String) -> Self {
        AssetId(value)
    }
}

impl From<&str> for AssetId {
    fn from(value: &str) -> Self {
        AssetId(value.to_owned())
    }
}

impl AsRef<str> for AssetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coins::{BINANCE, ETHEREUM, RONIN, SMARTCHAIN};

    #[test]
    fn display_format() {
        assert_eq!(ETHEREUM.to_string(), "[ETH] Ethereum (#60)");
    }

    #[test]
    fn native_asset_id() {
        assert_eq!(ETHEREUM.asset_id().as_str(), "c60");
        assert_eq!(SMARTCHAIN.asset_id().as_str(), "c20000714");
    }

    #[test]
    fn token_asset_id() {
        assert_eq!(BINANCE.token_asset_id("TWT-8C2").as_str(), "c714_tTWT-8C2");
    }

    #[test]
    fn token_asset_id_empty_token_is_native() {
        assert_eq!(ETHEREUM.token_asset_id(""), ETHEREUM.asset_id());
    }

    #[test]
    fn only_ronin_has_alternate_prefix() {
        assert_eq!(RONIN.alternate_address_prefix(), Some("ronin:"));
        assert_eq!(ETHEREUM.alternate_address_prefix(), None);
    }

    #[test]
    fn asset_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&AssetId::from("c60")).unwrap();
        assert_eq!(json, "\"c60\"");

        let back: AssetId = serde_json::from_str("\"c714_tBUSD-BD1\"").unwrap();
        assert_eq!(back.as_str(), "c714_tBUSD-BD1");
    }

    #[test]
    fn coin_serializes_with_blockchain_name() {
        let value = serde_json::to_value(ETHEREUM).unwrap();
        assert_eq!(value["handle"], "ethereum");
        assert_eq!(value["blockchain"], "Ethereum");
        assert_eq!(value["decimals"], 18);
    }
}
