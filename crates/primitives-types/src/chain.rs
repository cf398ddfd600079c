use primitives_coin::{self as coin, Coin};

use crate::error::TypesError;
use crate::token::TokenType;

/// Primary issuing chain of a token type.
fn primary_chain(token_type: TokenType) -> Option<Coin> {
    use TokenType::*;

    let chain = match token_type {
        Coin | Gas | Erc721 | Erc1155 => return None,
        Brc20 => coin::BITCOIN,
        Erc20 => coin::ETHEREUM,
        Bep2 | Bep8 => coin::BINANCE,
        Bep20 => coin::SMARTCHAIN,
        Etc20 => coin::CLASSIC,
        Trc10 | Trc20 => coin::TRON,
        Wan20 => coin::WANCHAIN,
        Tt20 => coin::THUNDERTOKEN,
        Spl => coin::SOLANA,
        Eos => coin::EOS,
        Go20 => coin::GOCHAIN,
        Kava => coin::KAVA,
        Nep5 => coin::NEO,
        Nrc20 => coin::NULS,
        Vet => coin::VECHAIN,
        Ontology => coin::ONTOLOGY,
        Theta => coin::THETA,
        Tomo | Trc21 => coin::TOMOCHAIN,
        Xdai => coin::XDAI,
        Waves => coin::WAVES,
        Poa | Poa20 => coin::POA,
        Polygon => coin::POLYGON,
        Optimism => coin::OPTIMISM,
        Avalanche => coin::AVALANCHEC,
        Arbitrum => coin::ARBITRUM,
        Fantom => coin::FANTOM,
        Terra | Cw20 => coin::TERRA,
        Ronin => coin::RONIN,
        Celo => coin::CELO,
        Hrc20 => coin::HECO,
        Clo20 => coin::CALLISTO,
        Esdt => coin::ELROND,
        Oasis => coin::OASIS,
        Crc20 => coin::CRONOS,
        Stellar => coin::STELLAR,
        Krc20 => coin::KCC,
        Aurora => coin::AURORA,
        Algorand => coin::ALGORAND,
        KavaEvm => coin::KAVAEVM,
        Meter => coin::METER,
        EvmosErc20 => coin::EVMOS,
        Kip20 => coin::OKC,
        Aptos | AptosFa => coin::APTOS,
        Moonbeam => coin::MOONBEAM,
        Klaytn => coin::KLAYTN,
        Metis => coin::METIS,
        Moonriver => coin::MOONRIVER,
        Boba => coin::BOBA,
        Jetton => coin::TON,
        PolygonZkEvm => coin::POLYGONZKEVM,
        Zksync => coin::ZKSYNC,
        Sui => coin::SUI,
        Stride => coin::STRIDE,
        Neutron => coin::NEUTRON,
        Fa2 => coin::TEZOS,
        Conflux => coin::CFXEVM,
        Aca => coin::ACALA,
        AcalaEvm => coin::ACALAEVM,
        Base => coin::BASE,
        Akash => coin::AKASH,
        Agoric => coin::AGORIC,
        Axelar => coin::AXELAR,
        Juno => coin::JUNO,
        Sei => coin::SEI,
        Cardano => coin::CARDANO,
        Neon => coin::NEON,
        Osmosis => coin::OSMOSIS,
        NativeInjective => coin::NATIVEINJECTIVE,
        NativeEvmos => coin::NATIVEEVMOS,
        CryptoOrg => coin::CRYPTOORG,
        Cosmos => coin::COSMOS,
        Opbnb => coin::OPBNB,
        Linea => coin::LINEA,
        Stargaze => coin::STARGAZE,
        Mantle => coin::MANTLE,
        Manta => coin::MANTA,
        Zetachain => coin::ZETACHAIN,
        ZetaEvm => coin::ZETAEVM,
        IotexEvm => coin::IOTEXEVM,
        Merlin => coin::MERLIN,
        Blast => coin::BLAST,
        Scroll => coin::SCROLL,
        Icp => coin::INTERNET_COMPUTER,
        Bouncebit => coin::BOUNCEBIT,
        ZklinkNova => coin::ZKLINKNOVA,
        Xrp => coin::RIPPLE,
        Sonic => coin::SONIC,
        Tia => coin::TIA,
        Dydx => coin::DYDX,
        Plasma => coin::PLASMA,
        Monad => coin::MONAD,
    };

    Some(chain)
}

fn parse_asset_type(asset_type: &str) -> Result<TokenType, TypesError> {
    asset_type
        .parse::<TokenType>()
        .map_err(|_| TypesError::UnknownAssetType(asset_type.to_owned()))
}

/// Chain issuing tokens of `asset_type`.
///
/// Several chains may share a token type; this returns the first of them.
/// Prefer [`chains_from_asset_type`].
pub fn chain_from_asset_type(asset_type: &str) -> Result<Coin, TypesError> {
    let token_type = parse_asset_type(asset_type)?;
    primary_chain(token_type).ok_or_else(|| TypesError::UnknownAssetType(asset_type.to_owned()))
}

/// Every chain issuing tokens of `asset_type`.
pub fn chains_from_asset_type(asset_type: &str) -> Result<Vec<Coin>, TypesError> {
    let token_type = parse_asset_type(asset_type)?;
    match token_type {
        TokenType::Cw20 => Ok(vec![coin::TERRA, coin::NATIVEINJECTIVE]),
        other => primary_chain(other)
            .map(|c| vec![c])
            .ok_or_else(|| TypesError::UnknownAssetType(asset_type.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::token_types;

    #[test]
    fn chain_from_asset_type_cases() {
        let cases = [
            ("ERC20", coin::ETHEREUM),
            ("BEP2", coin::BINANCE),
            ("BEP8", coin::BINANCE),
            ("BEP20", coin::SMARTCHAIN),
            ("TRC10", coin::TRON),
            ("TRC20", coin::TRON),
            ("AVALANCHE", coin::AVALANCHEC),
            ("CW20", coin::TERRA),
            ("HRC20", coin::HECO),
            ("ASA", coin::ALGORAND),
            ("CONFLUX", coin::CFXEVM),
            ("JETTON", coin::TON),
            ("FA2", coin::TEZOS),
            ("ICP", coin::INTERNET_COMPUTER),
        ];

        for (asset_type, expected) in cases {
            let got = chain_from_asset_type(asset_type).unwrap();
            assert_eq!(got.id, expected.id, "chain of {asset_type}");
        }
    }

    #[test]
    fn unknown_asset_type() {
        let err = chain_from_asset_type("CSTM20").unwrap_err();
        assert_eq!(err.to_string(), "unknown asset type: CSTM20");
        assert!(chains_from_asset_type("").is_err());
    }

    #[test]
    fn nft_types_have_no_single_chain() {
        assert!(chain_from_asset_type("ERC721").is_err());
        assert!(chains_from_asset_type("ERC1155").is_err());
    }

    #[test]
    fn cw20_lives_on_two_chains() {
        let ids: Vec<u32> = chains_from_asset_type("CW20")
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![coin::id::TERRA, coin::id::NATIVEINJECTIVE]);
    }

    #[test]
    fn every_token_type_has_a_chain() {
        for t in token_types() {
            if matches!(t, TokenType::Erc721 | TokenType::Erc1155) {
                continue;
            }
            assert!(chain_from_asset_type(t.as_str()).is_ok(), "{t} has no chain");

            let chains = chains_from_asset_type(t.as_str()).unwrap();
            assert_eq!(chains[0].id, chain_from_asset_type(t.as_str()).unwrap().id);
        }
    }
}
