use std::fmt;
use std::str::FromStr;

use primitives_asset::build_id;
use primitives_coin::{id, is_evm};
use serde::{Deserialize, Serialize};

use crate::error::TypesError;

/// Expands the token type table into the [`TokenType`] enum with its wire
/// strings and the [`TokenType::ALL`] listing.
macro_rules! define_token_types {
    ($( $variant:ident => $wire:literal, )*) => {
        /// Token standard tag, serialized as its wire string (`"ERC20"`, `"ASA"`, ...).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum TokenType {
            $(
                #[serde(rename = $wire)]
                $variant,
            )*
        }

        impl TokenType {
            /// Every tag, including the native `coin` and `gas` pseudo types.
            pub const ALL: &'static [TokenType] = &[$(TokenType::$variant),*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(TokenType::$variant => $wire,)*
                }
            }
        }
    };
}

define_token_types! {
    Coin => "coin",
    Gas => "gas",
    Brc20 => "BRC20",
    Erc20 => "ERC20",
    Erc721 => "ERC721",
    Erc1155 => "ERC1155",
    Bep2 => "BEP2",
    Bep8 => "BEP8",
    Bep20 => "BEP20",
    Trc10 => "TRC10",
    Etc20 => "ETC20",
    Poa20 => "POA20",
    Trc20 => "TRC20",
    Trc21 => "TRC21",
    Clo20 => "CLO20",
    Go20 => "GO20",
    Wan20 => "WAN20",
    Tt20 => "TT20",
    Kava => "KAVA",
    Cosmos => "COSMOS",
    CryptoOrg => "CRYPTOORG",
    NativeEvmos => "NATIVEEVMOS",
    NativeInjective => "INJECTIVE",
    Stargaze => "STARGAZE",
    Neutron => "NEUTRON",
    Osmosis => "OSMOSIS",
    Spl => "SPL",
    Polygon => "POLYGON",
    Optimism => "OPTIMISM",
    Xdai => "XDAI",
    Avalanche => "AVALANCHE",
    Fantom => "FANTOM",
    Hrc20 => "HRC20",
    Arbitrum => "ARBITRUM",
    Terra => "TERRA",
    Ronin => "RONIN",
    Eos => "EOS",
    Nep5 => "NEP5",
    Nrc20 => "NRC20",
    Vet => "VET",
    Ontology => "ONTOLOGY",
    Theta => "THETA",
    Tomo => "TOMO",
    Waves => "WAVES",
    Poa => "POA",
    Celo => "CELO",
    Esdt => "ESDT",
    Cw20 => "CW20",
    Oasis => "OASIS",
    Crc20 => "CRC20",
    Stellar => "STELLAR",
    Krc20 => "KRC20",
    Aurora => "AURORA",
    Algorand => "ASA",
    KavaEvm => "KAVAEVM",
    Meter => "METER",
    EvmosErc20 => "EVMOS_ERC20",
    Kip20 => "KIP20",
    Aptos => "APTOS",
    AptosFa => "APTOSFA",
    Moonbeam => "MOONBEAM",
    Klaytn => "KAIA",
    Metis => "METIS",
    Moonriver => "MOONRIVER",
    Boba => "BOBA",
    Jetton => "JETTON",
    PolygonZkEvm => "ZKEVM",
    Zksync => "ZKSYNC",
    Sui => "SUI",
    Stride => "STRIDE",
    Fa2 => "FA2",
    Conflux => "CONFLUX",
    Aca => "ACA",
    AcalaEvm => "ACALAEVM",
    Base => "BASE",
    Akash => "AKT",
    Agoric => "BLD",
    Axelar => "AXL",
    Juno => "JUNO",
    Sei => "SEI",
    Cardano => "CARDANO",
    Neon => "NEON",
    IotexEvm => "XRC20",
    Opbnb => "OPBNB",
    Linea => "LINEA",
    Mantle => "MANTLE",
    Manta => "MANTA",
    Zetachain => "ZETACHAIN",
    ZetaEvm => "ZETAEVM",
    Merlin => "MERLIN",
    Blast => "BLAST",
    Scroll => "SCROLL",
    Icp => "ICP",
    Bouncebit => "BOUNCEBIT",
    ZklinkNova => "ZKLINKNOVA",
    Xrp => "XRP",
    Sonic => "SONIC",
    Tia => "TIA",
    Dydx => "DYDX",
    Plasma => "PLASMA",
    Monad => "MONAD",
}

impl TokenType {
    /// `coin` and `gas` describe native balances rather than tokens.
    pub fn is_native(&self) -> bool {
        matches!(self, TokenType::Coin | TokenType::Gas)
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenType {
    type Err = TypesError;

    /// Parses a concrete token type. The native `coin` and `gas` tags are
    /// not token types and are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        token_types()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| TypesError::UnknownTokenType(s.to_owned()))
    }
}

/// Every concrete token type, in table order.
pub fn token_types() -> impl Iterator<Item = TokenType> {
    TokenType::ALL.iter().copied().filter(|t| !t.is_native())
}

pub fn parse_token_type(s: &str) -> Result<TokenType, TypesError> {
    s.parse()
}

/// Version of the token list a token type was introduced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenVersion(pub i32);

impl TokenVersion {
    pub const V0: TokenVersion = TokenVersion(0);
    pub const V1: TokenVersion = TokenVersion(1);
    pub const V3: TokenVersion = TokenVersion(3);
    pub const V4: TokenVersion = TokenVersion(4);
    pub const V5: TokenVersion = TokenVersion(5);
    pub const V6: TokenVersion = TokenVersion(6);
    pub const V7: TokenVersion = TokenVersion(7);
    pub const V8: TokenVersion = TokenVersion(8);
    pub const V9: TokenVersion = TokenVersion(9);
    pub const V10: TokenVersion = TokenVersion(10);
    pub const V11: TokenVersion = TokenVersion(11);
    pub const V12: TokenVersion = TokenVersion(12);
    pub const V13: TokenVersion = TokenVersion(13);
    pub const V14: TokenVersion = TokenVersion(14);
    pub const V15: TokenVersion = TokenVersion(15);
    pub const V16: TokenVersion = TokenVersion(16);
    pub const V17: TokenVersion = TokenVersion(17);
    pub const V18: TokenVersion = TokenVersion(18);
    pub const V19: TokenVersion = TokenVersion(19);
    pub const V20: TokenVersion = TokenVersion(20);
    pub const V21: TokenVersion = TokenVersion(21);
    pub const V22: TokenVersion = TokenVersion(22);
    pub const V23: TokenVersion = TokenVersion(23);
    pub const V24: TokenVersion = TokenVersion(24);
    pub const UNDEFINED: TokenVersion = TokenVersion(-1);
}

impl TokenType {
    /// Token list version of this type. `None` for the native pseudo types.
    pub fn version(&self) -> Option<TokenVersion> {
        use TokenType::*;

        let version = match self {
            Coin | Gas => return None,
            Erc20 | Bep2 | Bep20 | Bep8 | Etc20 | Poa20 | Clo20 | Trc10 | Trc21 | Wan20 | Go20
            | Tt20 | Waves | Aptos => TokenVersion::V0,
            Trc20 => TokenVersion::V1,
            Spl | Kava => TokenVersion::V3,
            Polygon => TokenVersion::V4,
            Avalanche | Arbitrum | Fantom | Hrc20 | Optimism | Xdai => TokenVersion::V5,
            Terra => TokenVersion::V6,
            Celo | Nrc20 => TokenVersion::V7,
            Cw20 => TokenVersion::V8,
            Esdt | Crc20 => TokenVersion::V9,
            Krc20 | Stellar => TokenVersion::V10,
            Ronin | Aurora => TokenVersion::V11,
            Jetton | PolygonZkEvm | Zksync | Sui => TokenVersion::V12,
            Base | Akash | Agoric | Axelar | Juno | Sei | Opbnb => TokenVersion::V13,
            KavaEvm | Boba | Metis | Neon | Linea | Aca | AcalaEvm | Conflux | IotexEvm | Klaytn
            | Moonriver | Moonbeam | Mantle | NativeInjective | Manta | Zetachain | ZetaEvm => {
                TokenVersion::V14
            }
            Brc20 => TokenVersion::V16,
            Merlin | Icp => TokenVersion::V17,
            Blast | Scroll => TokenVersion::V18,
            Bouncebit => TokenVersion::V19,
            ZklinkNova => TokenVersion::V20,
            AptosFa => TokenVersion::V21,
            Xrp | Sonic => TokenVersion::V22,
            Plasma => TokenVersion::V23,
            Monad => TokenVersion::V24,
            Erc721 | Erc1155 | Eos | Nep5 | Vet | Ontology | Theta | Tomo | Poa | Oasis
            | Algorand | Meter | EvmosErc20 | Kip20 | Stride | Neutron | Fa2 | Cardano
            | NativeEvmos | CryptoOrg | Cosmos | Osmosis | Stargaze | Tia | Dydx => {
                TokenVersion::UNDEFINED
            }
        };

        Some(version)
    }
}

/// Looks up the token list version of a wire token type string.
pub fn token_version(token_type: &str) -> Result<TokenVersion, TypesError> {
    let parsed = parse_token_type(token_type)?;
    parsed
        .version()
        .ok_or_else(|| TypesError::TokenVersionNotImplemented(token_type.to_owned()))
}

/// Token standard of an EVM chain, by coin id.
pub fn ethereum_token_type_by_index(coin_id: u32) -> Result<TokenType, TypesError> {
    let token_type = match coin_id {
        id::ETHEREUM => TokenType::Erc20,
        id::CLASSIC => TokenType::Etc20,
        id::POA => TokenType::Poa20,
        id::CALLISTO => TokenType::Clo20,
        id::WANCHAIN => TokenType::Wan20,
        id::THUNDERTOKEN => TokenType::Tt20,
        id::GOCHAIN => TokenType::Go20,
        id::TOMOCHAIN => TokenType::Trc21,
        id::SMARTCHAIN => TokenType::Bep20,
        id::POLYGON => TokenType::Polygon,
        id::OPTIMISM => TokenType::Optimism,
        id::XDAI => TokenType::Xdai,
        id::AVALANCHEC => TokenType::Avalanche,
        id::FANTOM => TokenType::Fantom,
        id::HECO => TokenType::Hrc20,
        id::RONIN => TokenType::Ronin,
        id::CELO => TokenType::Celo,
        id::CRONOS => TokenType::Crc20,
        id::KCC => TokenType::Krc20,
        id::AURORA => TokenType::Aurora,
        id::ARBITRUM => TokenType::Arbitrum,
        id::KAVAEVM => TokenType::KavaEvm,
        id::METER => TokenType::Meter,
        id::EVMOS => TokenType::EvmosErc20,
        id::OKC => TokenType::Kip20,
        id::MOONBEAM => TokenType::Moonbeam,
        id::KLAYTN => TokenType::Klaytn,
        id::METIS => TokenType::Metis,
        id::MOONRIVER => TokenType::Moonriver,
        id::BOBA => TokenType::Boba,
        id::POLYGONZKEVM => TokenType::PolygonZkEvm,
        id::ZKSYNC => TokenType::Zksync,
        id::CFXEVM => TokenType::Conflux,
        id::ACALAEVM => TokenType::AcalaEvm,
        id::BASE => TokenType::Base,
        id::NEON => TokenType::Neon,
        id::IOTEXEVM => TokenType::IotexEvm,
        id::OPBNB => TokenType::Opbnb,
        id::LINEA => TokenType::Linea,
        id::MANTLE => TokenType::Mantle,
        id::MANTA => TokenType::Manta,
        id::ZETAEVM => TokenType::ZetaEvm,
        id::MERLIN => TokenType::Merlin,
        id::BLAST => TokenType::Blast,
        id::SCROLL => TokenType::Scroll,
        id::BOUNCEBIT => TokenType::Bouncebit,
        id::ZKLINKNOVA => TokenType::ZklinkNova,
        id::SONIC => TokenType::Sonic,
        id::PLASMA => TokenType::Plasma,
        id::MONAD => TokenType::Monad,
        _ => return Err(TypesError::NotEvmCoin(coin_id)),
    };

    Ok(token_type)
}

/// Token standard used for `token_id` on the given coin.
///
/// Tron, Terra and Aptos host two standards; the token id decides which one
/// applies. `None` when the coin has no tokens.
pub fn token_type_for_coin(coin_id: u32, token_id: &str) -> Option<TokenType> {
    if is_evm(coin_id) {
        return ethereum_token_type_by_index(coin_id).ok();
    }

    let token_type = match coin_id {
        id::BITCOIN => TokenType::Brc20,
        id::TRON => {
            if token_id.parse::<i64>().is_ok() {
                TokenType::Trc10
            } else {
                TokenType::Trc20
            }
        }
        id::TERRA => {
            if token_id.len() == 44 {
                TokenType::Cw20
            } else {
                TokenType::Terra
            }
        }
        id::BINANCE => TokenType::Bep2,
        id::WAVES => TokenType::Waves,
        id::THETA => TokenType::Theta,
        id::ONTOLOGY => TokenType::Ontology,
        id::NULS => TokenType::Nrc20,
        id::VECHAIN => TokenType::Vet,
        id::NEO => TokenType::Nep5,
        id::EOS => TokenType::Eos,
        id::SOLANA => TokenType::Spl,
        id::HARMONY => TokenType::Hrc20,
        id::OASIS => TokenType::Oasis,
        id::STELLAR => TokenType::Stellar,
        id::ALGORAND => TokenType::Algorand,
        id::KAVA => TokenType::Kava,
        id::COSMOS => TokenType::Cosmos,
        id::CRYPTOORG => TokenType::CryptoOrg,
        id::NATIVEEVMOS => TokenType::NativeEvmos,
        id::NATIVEINJECTIVE => TokenType::NativeInjective,
        id::STARGAZE => TokenType::Stargaze,
        id::NEUTRON => TokenType::Neutron,
        id::OSMOSIS => TokenType::Osmosis,
        id::ELROND => TokenType::Esdt,
        id::APTOS => {
            if token_id.contains("::") {
                TokenType::Aptos
            } else {
                TokenType::AptosFa
            }
        }
        id::TON => TokenType::Jetton,
        id::SUI => TokenType::Sui,
        id::STRIDE => TokenType::Stride,
        id::TEZOS => TokenType::Fa2,
        id::ACALA => TokenType::Aca,
        id::AKASH => TokenType::Akash,
        id::AGORIC => TokenType::Agoric,
        id::AXELAR => TokenType::Axelar,
        id::JUNO => TokenType::Juno,
        id::SEI => TokenType::Sei,
        id::CARDANO => TokenType::Cardano,
        id::ZETACHAIN => TokenType::Zetachain,
        id::INTERNET_COMPUTER => TokenType::Icp,
        id::RIPPLE => TokenType::Xrp,
        id::TIA => TokenType::Tia,
        id::DYDX => TokenType::Dydx,
        _ => return None,
    };

    Some(token_type)
}

/// A non-native token such as an ERC-20, TRC-20 or BEP-2 asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub token_id: String,
    pub coin: u32,
    #[serde(rename = "type")]
    pub token_type: TokenType,
}

impl Token {
    pub fn asset_id(&self) -> String {
        build_id(self.coin, &self.token_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitives_coin::ALL_COINS;

    use crate::chain::chain_from_asset_type;

    #[test]
    fn wire_strings() {
        assert_eq!(TokenType::Erc20.as_str(), "ERC20");
        assert_eq!(TokenType::NativeInjective.as_str(), "INJECTIVE");
        assert_eq!(TokenType::Algorand.as_str(), "ASA");
        assert_eq!(TokenType::Klaytn.as_str(), "KAIA");
        assert_eq!(TokenType::PolygonZkEvm.as_str(), "ZKEVM");
        assert_eq!(TokenType::Akash.as_str(), "AKT");
        assert_eq!(TokenType::IotexEvm.to_string(), "XRC20");
    }

    #[test]
    fn wire_strings_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for t in TokenType::ALL {
            assert!(seen.insert(t.as_str()), "duplicate wire string {}", t.as_str());
        }
    }

    #[test]
    fn parse_known_and_unknown() {
        assert_eq!(parse_token_type("BEP20").unwrap(), TokenType::Bep20);
        assert_eq!("ASA".parse::<TokenType>().unwrap(), TokenType::Algorand);

        let err = parse_token_type("UNKNOWN").unwrap_err();
        assert_eq!(err.to_string(), "unknown token type: UNKNOWN");
        assert!(parse_token_type("erc20").is_err());
        assert!(parse_token_type("coin").is_err());
    }

    #[test]
    fn serde_uses_wire_string() {
        assert_eq!(serde_json::to_string(&TokenType::Klaytn).unwrap(), "\"KAIA\"");
        let t: TokenType = serde_json::from_str("\"EVMOS_ERC20\"").unwrap();
        assert_eq!(t, TokenType::EvmosErc20);
        let native: TokenType = serde_json::from_str("\"coin\"").unwrap();
        assert_eq!(native, TokenType::Coin);
    }

    #[test]
    fn token_types_exclude_native() {
        assert!(token_types().all(|t| !t.is_native()));
        assert_eq!(token_types().count(), TokenType::ALL.len() - 2);
    }

    #[test]
    fn versions() {
        let cases = [
            ("ERC20", TokenVersion::V0),
            ("TRC20", TokenVersion::V1),
            ("SPL", TokenVersion::V3),
            ("POLYGON", TokenVersion::V4),
            ("ARBITRUM", TokenVersion::V5),
            ("TERRA", TokenVersion::V6),
            ("CW20", TokenVersion::V8),
            ("JETTON", TokenVersion::V12),
            ("BASE", TokenVersion::V13),
            ("KAIA", TokenVersion::V14),
            ("BRC20", TokenVersion::V16),
            ("ICP", TokenVersion::V17),
            ("ZKLINKNOVA", TokenVersion::V20),
            ("APTOSFA", TokenVersion::V21),
            ("XRP", TokenVersion::V22),
            ("PLASMA", TokenVersion::V23),
            ("MONAD", TokenVersion::V24),
            ("ERC721", TokenVersion::UNDEFINED),
            ("FA2", TokenVersion::UNDEFINED),
        ];

        for (token_type, expected) in cases {
            assert_eq!(token_version(token_type).unwrap(), expected, "version of {token_type}");
        }
    }

    #[test]
    fn version_of_unknown_type_errors() {
        assert!(matches!(
            token_version("UNKNOWN20"),
            Err(TypesError::UnknownTokenType(_))
        ));
    }

    #[test]
    fn every_token_type_has_a_version() {
        for t in token_types() {
            assert!(token_version(t.as_str()).is_ok(), "{t} has no version");
        }
    }

    #[test]
    fn ethereum_token_types() {
        assert_eq!(ethereum_token_type_by_index(id::ETHEREUM).unwrap(), TokenType::Erc20);
        assert_eq!(ethereum_token_type_by_index(id::SMARTCHAIN).unwrap(), TokenType::Bep20);
        assert_eq!(ethereum_token_type_by_index(id::KLAYTN).unwrap(), TokenType::Klaytn);

        let err = ethereum_token_type_by_index(id::SOLANA).unwrap_err();
        assert_eq!(err.to_string(), "not evm coin 501");
    }

    #[test]
    fn every_evm_coin_has_a_token_type() {
        for coin in ALL_COINS.iter().filter(|c| c.is_evm()) {
            assert!(
                ethereum_token_type_by_index(coin.id).is_ok(),
                "{} is evm without a token type",
                coin.handle
            );
        }
    }

    #[test]
    fn token_type_for_coin_cases() {
        let cases: &[(u32, &str, Option<TokenType>)] = &[
            (id::ETHEREUM, "", Some(TokenType::Erc20)),
            (id::TRON, "1002000", Some(TokenType::Trc10)),
            (id::TRON, "TEkxiTehnzSmSe2XqrBj4w32RUN966rdz8", Some(TokenType::Trc20)),
            (id::TERRA, "terra14z56l0fp2lsf86zy3hty2z47ezkhnthtr9yq76", Some(TokenType::Cw20)),
            (id::TERRA, "uusd", Some(TokenType::Terra)),
            (
                id::APTOS,
                "0x1::aptos_coin::AptosCoin",
                Some(TokenType::Aptos),
            ),
            (id::APTOS, "0xa", Some(TokenType::AptosFa)),
            (id::HARMONY, "", Some(TokenType::Hrc20)),
            (id::HECO, "", Some(TokenType::Hrc20)),
            (id::TON, "", Some(TokenType::Jetton)),
            (id::INTERNET_COMPUTER, "", Some(TokenType::Icp)),
            (id::LITECOIN, "", None),
            (999_999, "", None),
        ];

        for (coin_id, token_id, expected) in cases {
            assert_eq!(
                token_type_for_coin(*coin_id, token_id),
                *expected,
                "token type for coin {coin_id} / {token_id}"
            );
        }
    }

    #[test]
    fn every_token_type_round_trips_through_its_chain() {
        for t in token_types() {
            if matches!(t, TokenType::Erc721 | TokenType::Erc1155) {
                continue;
            }

            let coin = chain_from_asset_type(t.as_str())
                .unwrap_or_else(|e| panic!("no chain for {t}: {e}"));
            assert!(
                token_type_for_coin(coin.id, "").is_some(),
                "no token type for coin {}",
                coin.id
            );
        }
    }

    #[test]
    fn token_asset_id() {
        let token = Token {
            name: "Trust Wallet".into(),
            symbol: "TWT".into(),
            decimals: 8,
            token_id: "TWT-8C2".into(),
            coin: id::BINANCE,
            token_type: TokenType::Bep2,
        };
        assert_eq!(token.asset_id(), "c714_tTWT-8C2");
    }

    #[test]
    fn token_json_shape() {
        let json = r#"{"name":"Tether","symbol":"USDT","decimals":6,"token_id":"0xdAC17F958D2ee523a2206206994597C13D831ec7","coin":60,"type":"ERC20"}"#;
        let token: Token = serde_json::from_str(json).unwrap();
        assert_eq!(token.token_type, TokenType::Erc20);
        assert_eq!(serde_json::to_string(&token).unwrap(), json);
    }
}
