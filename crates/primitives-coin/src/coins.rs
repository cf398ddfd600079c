use crate::error::CoinError;
use crate::models::{Blockchain, Coin};

/// Expands one table row per coin into an id constant (in [`id`]), a [`Coin`]
/// constant and an entry of [`ALL_COINS`].
///
/// Row layout: `CONST => (id, handle, symbol, name, decimals, block_time_ms,
/// min_confirmations, blockchain, is_token_supported)`.
macro_rules! define_coins {
    ($(
        $konst:ident => (
            $id:literal, $handle:literal, $symbol:literal, $name:literal,
            $decimals:literal, $block_time:literal, $min_conf:literal,
            $chain:ident, $tokens:literal
        ),
    )*) => {
        /// Numeric coin ids, usable in `match` patterns.
        pub mod id {
            $(
                #[doc = concat!("Id of ", $name, ".")]
                pub const $konst: u32 = $id;
            )*
        }

        $(
            #[doc = concat!($name, " (#", stringify!($id), ").")]
            pub const $konst: Coin = Coin {
                id: $id,
                handle: $handle,
                symbol: $symbol,
                name: $name,
                decimals: $decimals,
                block_time: $block_time,
                min_confirmations: $min_conf,
                blockchain: Blockchain::$chain,
                is_token_supported: $tokens,
            };
        )*

        /// Every coin in the registry, ordered by id.
        pub const ALL_COINS: &[Coin] = &[$($konst),*];
    };
}

define_coins! {
    BITCOIN => (0, "bitcoin", "BTC", "Bitcoin", 8, 600000, 0, Bitcoin, true),
    LITECOIN => (2, "litecoin", "LTC", "Litecoin", 8, 150000, 0, Bitcoin, false),
    DOGE => (3, "doge", "DOGE", "Dogecoin", 8, 60000, 0, Bitcoin, false),
    DASH => (5, "dash", "DASH", "Dash", 8, 150000, 0, Bitcoin, false),
    ETHEREUM => (60, "ethereum", "ETH", "Ethereum", 18, 10000, 12, Ethereum, true),
    CLASSIC => (61, "classic", "ETC", "Ethereum Classic", 18, 30000, 12, Ethereum, true),
    COSMOS => (118, "cosmos", "ATOM", "Cosmos", 6, 5000, 7, Cosmos, true),
    ZCASH => (133, "zcash", "ZEC", "Zcash", 8, 150000, 0, Bitcoin, false),
    RIPPLE => (144, "ripple", "XRP", "XRP", 6, 5000, 0, Ripple, true),
    BITCOINCASH => (145, "bitcoincash", "BCH", "Bitcoin Cash", 8, 600000, 0, Bitcoin, false),
    STELLAR => (148, "stellar", "XLM", "Stellar", 7, 5000, 0, Stellar, true),
    MANTA => (169, "manta", "ETH", "Manta Pacific", 18, 2000, 12, Ethereum, true),
    POA => (178, "poa", "POA", "POA Network", 18, 5000, 12, Ethereum, true),
    EOS => (194, "eos", "EOS", "EOS", 4, 1000, 0, Eos, true),
    TRON => (195, "tron", "TRX", "Tron", 6, 3000, 0, Tron, true),
    OPBNB => (204, "opbnb", "BNB", "opBNB", 18, 1000, 12, Ethereum, true),
    INTERNET_COMPUTER => (223, "internet_computer", "ICP", "Internet Computer", 8, 2000, 0, InternetComputer, true),
    FANTOM => (250, "fantom", "FTM", "Fantom", 18, 1000, 12, Ethereum, true),
    ALGORAND => (283, "algorand", "ALGO", "Algorand", 6, 4000, 0, Algorand, true),
    TERRA => (330, "terra", "LUNC", "Terra Classic", 6, 6000, 7, Cosmos, true),
    POLKADOT => (354, "polkadot", "DOT", "Polkadot", 10, 6000, 0, Polkadot, false),
    CRYPTOORG => (394, "cryptoorg", "CRO", "Crypto.org", 8, 6000, 7, Cosmos, true),
    NEAR => (397, "near", "NEAR", "NEAR", 24, 1000, 0, Near, false),
    KAVA => (459, "kava", "KAVA", "Kava", 6, 6000, 7, Cosmos, true),
    OASIS => (474, "oasis", "ROSE", "Oasis", 9, 6000, 0, Oasis, true),
    THETA => (500, "theta", "THETA", "Theta", 18, 6000, 0, Theta, true),
    SOLANA => (501, "solana", "SOL", "Solana", 9, 400, 0, Solana, true),
    ELROND => (508, "elrond", "EGLD", "MultiversX", 18, 6000, 0, Elrond, true),
    AGORIC => (564, "agoric", "BLD", "Agoric", 6, 6000, 7, Cosmos, true),
    TON => (607, "ton", "TON", "TON", 9, 5000, 0, Ton, true),
    APTOS => (637, "aptos", "APT", "Aptos", 8, 1000, 0, Aptos, true),
    BINANCE => (714, "binance", "BNB", "BNB Beacon Chain", 8, 1000, 0, Binance, true),
    SUI => (784, "sui", "SUI", "Sui", 9, 1000, 0, Sui, true),
    ACALA => (787, "acala", "ACA", "Acala", 12, 12000, 0, Polkadot, true),
    VECHAIN => (818, "vechain", "VET", "VeChain", 18, 10000, 0, Vechain, true),
    CALLISTO => (820, "callisto", "CLO", "Callisto", 18, 15000, 12, Ethereum, true),
    NEO => (888, "neo", "NEO", "NEO", 0, 15000, 0, Neo, true),
    TOMOCHAIN => (889, "tomochain", "TOMO", "TomoChain", 18, 2000, 12, Ethereum, true),
    POLYGON => (966, "polygon", "MATIC", "Polygon", 18, 2000, 12, Ethereum, true),
    OKC => (996, "okc", "OKT", "OKX Chain", 18, 3000, 12, Ethereum, true),
    THUNDERTOKEN => (1001, "thundertoken", "TT", "ThunderCore", 18, 1000, 12, Ethereum, true),
    HARMONY => (1023, "harmony", "ONE", "Harmony", 18, 2000, 0, Harmony, true),
    ONTOLOGY => (1024, "ontology", "ONT", "Ontology", 0, 1000, 0, Ontology, true),
    CFXEVM => (1030, "cfxevm", "CFX", "Conflux eSpace", 18, 1000, 12, Ethereum, true),
    MOONBEAM => (1284, "moonbeam", "GLMR", "Moonbeam", 18, 12000, 12, Ethereum, true),
    TEZOS => (1729, "tezos", "XTZ", "Tezos", 6, 30000, 0, Tezos, true),
    CARDANO => (1815, "cardano", "ADA", "Cardano", 6, 20000, 0, Cardano, true),
    MERLIN => (4200, "merlin", "BTC", "Merlin", 18, 3000, 12, Ethereum, true),
    MANTLE => (5000, "mantle", "MNT", "Mantle", 18, 2000, 12, Ethereum, true),
    BOUNCEBIT => (6001, "bouncebit", "BB", "BounceBit", 18, 3000, 12, Ethereum, true),
    GOCHAIN => (6060, "gochain", "GO", "GoChain", 18, 5000, 12, Ethereum, true),
    ZETACHAIN => (7000, "zetachain", "ZETA", "ZetaChain", 18, 6000, 7, Cosmos, true),
    BASE => (8453, "base", "ETH", "Base", 18, 2000, 12, Ethereum, true),
    NULS => (8964, "nuls", "NULS", "NULS", 8, 10000, 0, Nuls, true),
    PLASMA => (9745, "plasma", "XPL", "Plasma", 18, 1000, 12, Ethereum, true),
    MONAD => (10143, "monad", "MON", "Monad", 18, 1000, 12, Ethereum, true),
    METER => (18000, "meter", "MTR", "Meter", 18, 2000, 12, Ethereum, true),
    CELO => (52752, "celo", "CELO", "Celo", 18, 5000, 12, Ethereum, true),
    LINEA => (59144, "linea", "ETH", "Linea", 18, 12000, 12, Ethereum, true),
    BLAST => (81457, "blast", "ETH", "Blast", 18, 2000, 12, Ethereum, true),
    SCROLL => (534352, "scroll", "ETH", "Scroll", 18, 3000, 12, Ethereum, true),
    ZKLINKNOVA => (810180, "zklinknova", "ETH", "zkLink Nova", 18, 1000, 12, Ethereum, true),
    METIS => (1001088, "metis", "METIS", "Metis", 18, 4000, 12, Ethereum, true),
    JUNO => (4000118, "juno", "JUNO", "Juno", 6, 6000, 7, Cosmos, true),
    WANCHAIN => (5718350, "wanchain", "WAN", "Wanchain", 18, 5000, 12, Ethereum, true),
    WAVES => (5741564, "waves", "WAVES", "Waves", 8, 60000, 0, Waves, true),
    AXELAR => (6000118, "axelar", "AXL", "Axelar", 6, 6000, 7, Cosmos, true),
    CRONOS => (10000025, "cronos", "CRO", "Cronos", 18, 6000, 12, Ethereum, true),
    NATIVEINJECTIVE => (10000060, "nativeinjective", "INJ", "Native Injective", 18, 2000, 7, Cosmos, true),
    OPTIMISM => (10000070, "optimism", "ETH", "Optimism", 18, 2000, 12, Ethereum, true),
    XDAI => (10000100, "xdai", "xDAI", "Gnosis Chain", 18, 5000, 12, Ethereum, true),
    OSMOSIS => (10000118, "osmosis", "OSMO", "Osmosis", 6, 6000, 7, Cosmos, true),
    SONIC => (10000146, "sonic", "S", "Sonic", 18, 1000, 12, Ethereum, true),
    BOBA => (10000288, "boba", "ETH", "Boba", 18, 4000, 12, Ethereum, true),
    KCC => (10000321, "kcc", "KCS", "KuCoin Community Chain", 18, 3000, 12, Ethereum, true),
    ZKSYNC => (10000324, "zksync", "ETH", "zkSync Era", 18, 1000, 12, Ethereum, true),
    HECO => (10000553, "heco", "HT", "Huobi ECO Chain", 18, 3000, 12, Ethereum, true),
    ACALAEVM => (10000787, "acalaevm", "ACA", "Acala EVM", 18, 12000, 12, Ethereum, true),
    POLYGONZKEVM => (10001101, "polygonzkevm", "ETH", "Polygon zkEVM", 18, 3000, 12, Ethereum, true),
    MOONRIVER => (10001285, "moonriver", "MOVR", "Moonriver", 18, 12000, 12, Ethereum, true),
    RONIN => (10002020, "ronin", "RON", "Ronin", 18, 3000, 12, Ethereum, true),
    KAVAEVM => (10002222, "kavaevm", "KAVA", "Kava EVM", 18, 6000, 12, Ethereum, true),
    IOTEXEVM => (10004689, "iotexevm", "IOTX", "IoTeX EVM", 18, 5000, 12, Ethereum, true),
    KLAYTN => (10008217, "klaytn", "KLAY", "Klaytn", 18, 1000, 12, Ethereum, true),
    AVALANCHEC => (10009000, "avalanchec", "AVAX", "Avalanche C-Chain", 18, 2000, 12, Ethereum, true),
    EVMOS => (10009001, "evmos", "EVMOS", "Evmos", 18, 2000, 12, Ethereum, true),
    ARBITRUM => (10042221, "arbitrum", "ETH", "Arbitrum", 18, 1000, 12, Ethereum, true),
    AKASH => (17000118, "akash", "AKT", "Akash", 6, 6000, 7, Cosmos, true),
    SEI => (19000118, "sei", "SEI", "Sei", 6, 1000, 7, Cosmos, true),
    STARGAZE => (20000118, "stargaze", "STARS", "Stargaze", 6, 6000, 7, Cosmos, true),
    SMARTCHAIN => (20000714, "smartchain", "BNB", "Smart Chain", 18, 3000, 12, Ethereum, true),
    ZETAEVM => (20007000, "zetaevm", "ZETA", "Zeta EVM", 18, 6000, 12, Ethereum, true),
    NATIVEEVMOS => (20009001, "nativeevmos", "EVMOS", "Native Evmos", 18, 2000, 7, Cosmos, true),
    TIA => (21000118, "tia", "TIA", "Celestia", 6, 12000, 7, Cosmos, true),
    DYDX => (22000118, "dydx", "DYDX", "dYdX", 18, 1000, 7, Cosmos, true),
    STRIDE => (30000118, "stride", "STRD", "Stride", 6, 6000, 7, Cosmos, true),
    NEUTRON => (40000118, "neutron", "NTRN", "Neutron", 6, 6000, 7, Cosmos, true),
    NEON => (245022934, "neon", "NEON", "Neon EVM", 18, 400, 12, Ethereum, true),
    AURORA => (1323161554, "aurora", "ETH", "Aurora", 18, 1000, 12, Ethereum, true),
}

/// Returns the coin with the given id, or `None` if it is not registered.
pub fn get_coin(coin_id: u32) -> Option<&'static Coin> {
    ALL_COINS.iter().find(|c| c.id == coin_id)
}

/// Returns the coin registered under `handle` (e.g. `"smartchain"`).
pub fn get_coin_by_handle(handle: &str) -> Result<&'static Coin, CoinError> {
    ALL_COINS
        .iter()
        .find(|c| c.handle == handle)
        .ok_or_else(|| CoinError::UnknownCoin(handle.to_owned()))
}

/// Returns all registered coins.
pub fn supported_coins() -> Vec<&'static Coin> {
    ALL_COINS.iter().collect()
}

/// Whether the coin with the given id belongs to the EVM family.
///
/// Unknown ids are not EVM.
pub fn is_evm(coin_id: u32) -> bool {
    get_coin(coin_id).is_some_and(Coin::is_evm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const EVM_COINS: &[u32] = &[
        id::ETHEREUM,
        id::CLASSIC,
        id::POA,
        id::CALLISTO,
        id::WANCHAIN,
        id::THUNDERTOKEN,
        id::GOCHAIN,
        id::TOMOCHAIN,
        id::SMARTCHAIN,
        id::POLYGON,
        id::OPTIMISM,
        id::XDAI,
        id::AVALANCHEC,
        id::FANTOM,
        id::HECO,
        id::RONIN,
        id::CRONOS,
        id::KCC,
        id::AURORA,
        id::ARBITRUM,
        id::KAVAEVM,
        id::METER,
        id::EVMOS,
        id::CELO,
        id::OKC,
        id::MOONBEAM,
        id::KLAYTN,
        id::METIS,
        id::MOONRIVER,
        id::BOBA,
        id::POLYGONZKEVM,
        id::ZKSYNC,
        id::CFXEVM,
        id::ACALAEVM,
        id::BASE,
        id::NEON,
        id::IOTEXEVM,
        id::OPBNB,
        id::LINEA,
        id::MANTLE,
        id::MANTA,
        id::ZETAEVM,
        id::MERLIN,
        id::BLAST,
        id::SCROLL,
        id::BOUNCEBIT,
        id::ZKLINKNOVA,
        id::SONIC,
        id::PLASMA,
        id::MONAD,
    ];

    #[test]
    fn get_ethereum() {
        let coin = get_coin(60).expect("Ethereum should be registered");
        assert_eq!(coin.handle, "ethereum");
        assert_eq!(coin.symbol, "ETH");
        assert_eq!(coin.name, "Ethereum");
        assert_eq!(coin.decimals, 18);
        assert_eq!(coin.block_time, 10000);
        assert_eq!(coin.min_confirmations, 12);
        assert!(coin.is_token_supported);
    }

    #[test]
    fn get_smartchain() {
        let coin = get_coin(20000714).expect("Smart Chain should be registered");
        assert_eq!(coin.handle, "smartchain");
        assert_eq!(coin.symbol, "BNB");
        assert_eq!(coin.name, "Smart Chain");
        assert_eq!(coin.block_time, 3000);
        assert_eq!(coin.blockchain, Blockchain::Ethereum);
    }

    #[test]
    fn get_cosmos() {
        let coin = get_coin(118).expect("Cosmos should be registered");
        assert_eq!(coin.symbol, "ATOM");
        assert_eq!(coin.decimals, 6);
        assert_eq!(coin.block_time, 5000);
        assert_eq!(coin.min_confirmations, 7);
        assert_eq!(coin.blockchain, Blockchain::Cosmos);
    }

    #[test]
    fn unknown_id_returns_none() {
        assert!(get_coin(999_999_999).is_none());
    }

    #[test]
    fn lookup_by_handle() {
        assert_eq!(get_coin_by_handle("ethereum").unwrap(), &ETHEREUM);
        assert_eq!(get_coin_by_handle("internet_computer").unwrap().symbol, "ICP");
    }

    #[test]
    fn lookup_by_unknown_handle_errors() {
        let err = get_coin_by_handle("dogechain").unwrap_err();
        assert_eq!(err.to_string(), "unknown coin: dogechain");
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<u32> = ALL_COINS.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), ALL_COINS.len());
    }

    #[test]
    fn handles_are_unique() {
        let handles: HashSet<&str> = ALL_COINS.iter().map(|c| c.handle).collect();
        assert_eq!(handles.len(), ALL_COINS.len());
    }

    #[test]
    fn table_is_ordered_by_id() {
        assert!(ALL_COINS.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn id_constants_match_coins() {
        assert_eq!(ETHEREUM.id, id::ETHEREUM);
        assert_eq!(RONIN.id, id::RONIN);
        assert_eq!(AURORA.id, id::AURORA);
    }

    #[test]
    fn evm_set_matches_blockchain_family() {
        // Fails when an EVM chain is added without extending EVM_COINS.
        for coin in ALL_COINS {
            assert_eq!(
                EVM_COINS.contains(&coin.id),
                coin.blockchain == Blockchain::Ethereum,
                "chain: {}",
                coin.handle
            );
        }
    }

    #[test]
    fn is_evm_by_id() {
        for id in EVM_COINS {
            assert!(is_evm(*id), "coin {id} should be EVM");
        }
        assert!(!is_evm(id::BITCOIN));
        assert!(!is_evm(id::SOLANA));
        assert!(!is_evm(id::TON));
        assert!(!is_evm(999_999_999));
    }

    #[test]
    fn supported_coins_includes_all() {
        assert_eq!(supported_coins().len(), ALL_COINS.len());
    }
}
