use crate::error::AssetError;

/// Maps a legacy asset type tag to the handle of the chain issuing it.
///
/// Handle-only legacy table. Richer lookups returning registry
/// coins live with the token types.
pub fn chain_handle_from_asset_type(asset_type: &str) -> Result<&'static str, AssetError> {
    let handle = match asset_type {
        "ERC20" => "ethereum",
        "BEP2" => "binance",
        "BEP20" => "smartchain",
        "ETC20" => "classic",
        "TRC10" | "TRC20" => "tron",
        "WAN20" => "wanchain",
        "TRC21" | "TOMO" => "tomochain",
        "TT20" => "thundertoken",
        "SPL" => "solana",
        "EOS" => "eos",
        "GO20" => "gochain",
        "KAVA" => "kava",
        "NEP5" => "neo",
        "NRC20" => "nuls",
        "VET" => "vechain",
        "ONTOLOGY" => "ontology",
        "THETA" => "theta",
        "XDAI" => "xdai",
        "WAVES" => "waves",
        "POA" => "poa",
        "POLYGON" => "polygon",
        "OPTIMISM" => "optimism",
        "AVALANCHE" => "avalanchec",
        "ARBITRUM" => "arbitrum",
        "FANTOM" => "fantom",
        "TERRA" => "terra",
        _ => return Err(AssetError::UnknownAssetType(asset_type.to_owned())),
    };

    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_asset_types() {
        assert_eq!(chain_handle_from_asset_type("ERC20").unwrap(), "ethereum");
        assert_eq!(chain_handle_from_asset_type("BEP20").unwrap(), "smartchain");
        assert_eq!(chain_handle_from_asset_type("TRC10").unwrap(), "tron");
        assert_eq!(chain_handle_from_asset_type("TRC20").unwrap(), "tron");
        assert_eq!(chain_handle_from_asset_type("AVALANCHE").unwrap(), "avalanchec");
    }

    #[test]
    fn unknown_asset_type_errors() {
        let err = chain_handle_from_asset_type("CSTM20").unwrap_err();
        assert_eq!(err, AssetError::UnknownAssetType("CSTM20".into()));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(chain_handle_from_asset_type("erc20").is_err());
    }
}
