use thiserror::Error;

/// Asset id errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("bad ID")]
    BadAssetId,

    #[error("no coin")]
    NoCoin,

    #[error("bad coin")]
    BadCoin,

    #[error("unknown asset type: {0}")]
    UnknownAssetType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(AssetError::BadAssetId.to_string(), "bad ID");
        assert_eq!(AssetError::NoCoin.to_string(), "no coin");
        assert_eq!(AssetError::BadCoin.to_string(), "bad coin");
        assert_eq!(
            AssetError::UnknownAssetType("CSTM20".into()).to_string(),
            "unknown asset type: CSTM20"
        );
    }
}
