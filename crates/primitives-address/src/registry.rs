use primitives_coin::{get_coin, is_evm};

/// Read-only chain classification consulted by the coin-aware checksum.
pub trait ChainRegistry {
    /// Whether the chain uses Ethereum's address model.
    fn is_evm(&self, coin_id: u32) -> bool;

    /// Prefix the chain displays instead of `0x`, if any (e.g. `ronin:`).
    fn alternate_address_prefix(&self, coin_id: u32) -> Option<&'static str>;
}

/// [`ChainRegistry`] backed by the static coin table of `primitives-coin`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoinRegistry;

impl ChainRegistry for CoinRegistry {
    fn is_evm(&self, coin_id: u32) -> bool {
        is_evm(coin_id)
    }

    fn alternate_address_prefix(&self, coin_id: u32) -> Option<&'static str> {
        get_coin(coin_id).and_then(|c| c.alternate_address_prefix())
    }
}
