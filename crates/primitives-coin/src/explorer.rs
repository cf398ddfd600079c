use crate::coins::id;
use crate::error::CoinError;
use crate::models::Coin;

/// Token type tag that selects Acala's custom-token page.
const ACALA_CUSTOM_TOKEN: &str = "custom_token";

/// Builds the block-explorer URL of a token (or token contract) on `coin`.
///
/// `token_type` only matters on chains with several token standards sharing
/// one explorer; elsewhere it is ignored. Chains without a known explorer
/// return [`CoinError::NoExplorer`].
pub fn token_explorer_url(coin: &Coin, token_id: &str, token_type: &str) -> Result<String, CoinError> {
    let url = match coin.id {
        id::ETHEREUM => format!("https://etherscan.io/token/{token_id}"),
        id::CLASSIC => format!("https://blockscout.com/etc/mainnet/tokens/{token_id}"),
        id::POA => format!("https://blockscout.com/poa/core/tokens/{token_id}"),
        id::CALLISTO => format!("https://explorer.callisto.network/tokens/{token_id}"),
        id::WANCHAIN => format!("https://www.wanscan.org/token/{token_id}"),
        id::THUNDERTOKEN => format!("https://viewblock.io/thundercore/address/{token_id}"),
        id::GOCHAIN => format!("https://explorer.gochain.io/addr/{token_id}"),
        id::TOMOCHAIN => format!("https://tomoscan.io/token/{token_id}"),
        id::SMARTCHAIN => format!("https://bscscan.com/token/{token_id}"),
        id::BINANCE => format!("https://explorer.binance.org/asset/{token_id}"),
        id::TRON => {
            if !token_id.is_empty() && token_id.bytes().all(|b| b.is_ascii_digit()) {
                format!("https://tronscan.io/#/token/{token_id}")
            } else {
                format!("https://tronscan.io/#/token20/{token_id}")
            }
        }
        id::SOLANA => format!("https://solscan.io/token/{token_id}"),
        id::POLYGON => format!("https://polygonscan.com/token/{token_id}"),
        id::OPTIMISM => format!("https://optimistic.etherscan.io/token/{token_id}"),
        id::ARBITRUM => format!("https://arbiscan.io/token/{token_id}"),
        id::XDAI => format!("https://gnosisscan.io/token/{token_id}"),
        id::AVALANCHEC => format!("https://snowtrace.io/token/{token_id}"),
        id::FANTOM => format!("https://ftmscan.com/token/{token_id}"),
        id::HECO => format!("https://hecoinfo.com/token/{token_id}"),
        id::RONIN => format!("https://app.roninchain.com/token/{token_id}"),
        id::CELO => format!("https://explorer.celo.org/mainnet/tokens/{token_id}"),
        id::TERRA => format!("https://finder.terra.money/classic/address/{token_id}"),
        id::ELROND => format!("https://explorer.multiversx.com/tokens/{token_id}"),
        id::STELLAR => format!("https://stellar.expert/explorer/public/asset/{token_id}"),
        id::CRONOS => format!("https://cronos.org/explorer/address/{token_id}/token-transfers"),
        id::AURORA => format!("https://aurorascan.dev/address/{token_id}"),
        id::KCC => format!("https://explorer.kcc.io/token/{token_id}"),
        id::ALGORAND => format!("https://algoexplorer.io/asset/{token_id}"),
        id::KAVAEVM => format!("https://explorer.kava.io/token/{token_id}"),
        id::METER => format!("https://scan.meter.io/address/{token_id}"),
        id::EVMOS => format!("https://evm.evmos.org/address/{token_id}"),
        id::OKC => format!("https://www.oklink.com/en/okc/address/{token_id}"),
        id::APTOS => format!("https://explorer.aptoslabs.com/coin/{token_id}"),
        id::MOONBEAM => format!("https://moonscan.io/token/{token_id}"),
        id::KLAYTN => format!("https://scope.klaytn.com/token/{token_id}"),
        id::METIS => format!("https://andromeda-explorer.metis.io/token/{token_id}"),
        id::MOONRIVER => format!("https://moonriver.moonscan.io/token/{token_id}"),
        id::BOBA => format!("https://bobascan.com/token/{token_id}"),
        id::TON => format!("https://tonscan.org/address/{token_id}"),
        id::POLYGONZKEVM => format!("https://explorer.public.zkevm-test.net/address/{token_id}"),
        id::ZKSYNC => format!("https://explorer.zksync.io/address/{token_id}"),
        id::SUI => format!("https://explorer.sui.io/address/{token_id}"),
        id::STRIDE => format!("https://www.mintscan.io/stride/account/{token_id}"),
        id::NEUTRON => format!("https://www.mintscan.io/neutron/account/{token_id}"),
        id::IOTEXEVM => format!("https://iotexscan.io/address/{token_id}#transactions"),
        id::CFXEVM => format!("https://evm.confluxscan.net/address/{token_id}"),
        id::ACALA => {
            if token_type == ACALA_CUSTOM_TOKEN {
                format!("https://acala.subscan.io/custom_token?customTokenId={token_id}")
            } else {
                format!("https://acala.subscan.io/system_token_detail?unique_id={token_id}")
            }
        }
        id::ACALAEVM => format!("https://blockscout.acala.network/token/{token_id}"),
        id::BASE => format!("https://basescan.org/token/{token_id}"),
        id::NEON => format!("https://neonscan.org/token/{token_id}"),
        id::OPBNB => format!("https://opbnbscan.com/token/{token_id}"),
        id::LINEA => format!("https://lineascan.build/token/{token_id}"),
        id::MANTLE => format!("https://explorer.mantle.xyz/token/{token_id}"),
        id::MANTA => format!("https://pacific-explorer.manta.network/token/{token_id}"),
        id::ZETAEVM => format!("https://explorer.zetachain.com/address/{token_id}"),
        id::BLAST => format!("https://blastscan.io/token/{token_id}"),
        id::SCROLL => format!("https://scrollscan.com/token/{token_id}"),
        id::SONIC => format!("https://sonicscan.org/token/{token_id}"),
        _ => return Err(CoinError::NoExplorer(coin.handle.to_owned())),
    };

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coins::*;
    use crate::models::Blockchain;

    #[test]
    fn explorer_urls_for_known_chains() {
        let cases: &[(&Coin, &str, &str, &str)] = &[
            (&ETHEREUM, "token", "", "https://etherscan.io/token/token"),
            (&TRON, "10001", "", "https://tronscan.io/#/token/10001"),
            (&TRON, "token", "", "https://tronscan.io/#/token20/token"),
            (
                &ELROND,
                "EGLDUSDC-594e5e",
                "ESDT",
                "https://explorer.multiversx.com/tokens/EGLDUSDC-594e5e",
            ),
            (
                &CRONOS,
                "0x145677FC4d9b8F19B5D56d1820c48e0443049a30",
                "CRC20",
                "https://cronos.org/explorer/address/0x145677FC4d9b8F19B5D56d1820c48e0443049a30/token-transfers",
            ),
            (&KCC, "0xabc", "KRC20", "https://explorer.kcc.io/token/0xabc"),
            (&ALGORAND, "test", "ASA", "https://algoexplorer.io/asset/test"),
            (&KAVAEVM, "test", "KAVAEVM", "https://explorer.kava.io/token/test"),
            (&OKC, "test", "KIP20", "https://www.oklink.com/en/okc/address/test"),
            (&TON, "test", "JETTON", "https://tonscan.org/address/test"),
            (&STRIDE, "test", "STRIDE", "https://www.mintscan.io/stride/account/test"),
            (&IOTEXEVM, "test", "", "https://iotexscan.io/address/test#transactions"),
            (&CFXEVM, "test", "", "https://evm.confluxscan.net/address/test"),
            (
                &BASE,
                "0x48bcf9455ba97cc439a2efbcfdf8f1afe692139b",
                "BASE",
                "https://basescan.org/token/0x48bcf9455ba97cc439a2efbcfdf8f1afe692139b",
            ),
        ];

        for (coin, token_id, token_type, expected) in cases {
            let url = token_explorer_url(coin, token_id, token_type).unwrap();
            assert_eq!(&url, expected, "explorer url mismatch for {}", coin.handle);
        }
    }

    #[test]
    fn acala_system_and_custom_tokens() {
        assert_eq!(
            token_explorer_url(&ACALA, "test", "").unwrap(),
            "https://acala.subscan.io/system_token_detail?unique_id=test"
        );
        assert_eq!(
            token_explorer_url(&ACALA, "test", "custom_token").unwrap(),
            "https://acala.subscan.io/custom_token?customTokenId=test"
        );
    }

    #[test]
    fn tron_empty_token_is_trc20_page() {
        assert_eq!(
            token_explorer_url(&TRON, "", "").unwrap(),
            "https://tronscan.io/#/token20/"
        );
    }

    #[test]
    fn custom_chain_has_no_explorer() {
        let custom = Coin {
            id: 424242,
            handle: "custom",
            symbol: "CST",
            name: "Custom Coin",
            decimals: 18,
            block_time: 0,
            min_confirmations: 0,
            blockchain: Blockchain::Ethereum,
            is_token_supported: false,
        };
        let err = token_explorer_url(&custom, "token", "").unwrap_err();
        assert_eq!(err.to_string(), "no explorer for coin: custom");
    }

    #[test]
    fn bitcoin_has_no_token_explorer() {
        assert!(token_explorer_url(&BITCOIN, "ordi", "BRC20").is_err());
    }

    #[test]
    fn all_explorer_urls_are_https() {
        for coin in ALL_COINS {
            if let Ok(url) = token_explorer_url(coin, "x", "") {
                assert!(url.starts_with("https://"), "{} explorer url should be https", coin.handle);
            }
        }
    }
}
