use primitives_asset::AssetError;
use thiserror::Error;

/// Token and transaction type errors.
#[derive(Debug, Error)]
pub enum TypesError {
    #[error("unknown token type: {0}")]
    UnknownTokenType(String),

    #[error("token version not implemented: {0}")]
    TokenVersionNotImplemented(String),

    #[error("unknown asset type: {0}")]
    UnknownAssetType(String),

    #[error("not evm coin {0}")]
    NotEvmCoin(u32),

    #[error("could not parse hex value {0}")]
    InvalidHexNumber(String),

    #[error("unsupported tx metadata for type {0}")]
    UnsupportedMetadata(String),

    #[error("invalid {side} value for address {address}: {value}")]
    InvalidValue {
        side: &'static str,
        address: String,
        value: String,
    },

    #[error("empty {kind} {field}")]
    EmptyField {
        kind: &'static str,
        field: &'static str,
    },

    #[error("asset id error: {0}")]
    Asset(#[from] AssetError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_token_type() {
        let err = TypesError::UnknownTokenType("UNKNOWN20".into());
        assert_eq!(err.to_string(), "unknown token type: UNKNOWN20");
    }

    #[test]
    fn display_not_evm_coin() {
        assert_eq!(TypesError::NotEvmCoin(501).to_string(), "not evm coin 501");
    }

    #[test]
    fn display_invalid_value() {
        let err = TypesError::InvalidValue {
            side: "input",
            address: "bc1q".into(),
            value: "1.5".into(),
        };
        assert_eq!(err.to_string(), "invalid input value for address bc1q: 1.5");
    }

    #[test]
    fn display_empty_field() {
        let err = TypesError::EmptyField {
            kind: "transfer",
            field: "value",
        };
        assert_eq!(err.to_string(), "empty transfer value");
    }

    #[test]
    fn from_asset_error() {
        let err: TypesError = AssetError::BadAssetId.into();
        assert_eq!(err.to_string(), "asset id error: bad ID");
    }
}
