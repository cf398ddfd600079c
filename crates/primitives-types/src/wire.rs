//! JSON representation of [`Tx`].
//!
//! The `metadata` object has no tag of its own; its shape follows the
//! transaction `type`.

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::TypesError;
use crate::token::Token;
use crate::tx::{Direction, Fee, Metadata, Status, TransactionType, Tx, TxOutput};

#[derive(Serialize, Deserialize)]
struct RawTx {
    #[serde(default)]
    id: String,
    #[serde(default)]
    from: String,
    #[serde(default)]
    to: String,
    #[serde(default)]
    block_created_at: i64,
    #[serde(default)]
    block: u64,
    #[serde(default)]
    status: Status,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    error: String,
    #[serde(default)]
    sequence: u64,
    #[serde(rename = "type")]
    tx_type: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    direction: Option<Direction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    inputs: Vec<TxOutput>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    outputs: Vec<TxOutput>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tokens: Vec<Token>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    memo: String,
    #[serde(default)]
    fee: Fee,
    metadata: Value,
    #[serde(default)]
    created_at: i64,
}

fn decode_metadata(tx_type: TransactionType, raw: Value) -> Result<Metadata, TypesError> {
    let metadata = match tx_type {
        TransactionType::Transfer
        | TransactionType::StakeDelegate
        | TransactionType::StakeUndelegate
        | TransactionType::StakeRedelegate
        | TransactionType::StakeClaimRewards
        | TransactionType::StakeCompound => Metadata::Transfer(serde_json::from_value(raw)?),
        TransactionType::ContractCall => Metadata::ContractCall(serde_json::from_value(raw)?),
        TransactionType::Swap => Metadata::Swap(serde_json::from_value(raw)?),
        TransactionType::TransferNft => Metadata::TransferNft(serde_json::from_value(raw)?),
        TransactionType::TransferIcs20 => Metadata::Ics20Transfer(serde_json::from_value(raw)?),
    };

    Ok(metadata)
}

impl TryFrom<RawTx> for Tx {
    type Error = TypesError;

    fn try_from(raw: RawTx) -> Result<Self, Self::Error> {
        let metadata = decode_metadata(raw.tx_type, raw.metadata)?;

        Ok(Tx {
            id: raw.id,
            from: raw.from,
            to: raw.to,
            block_created_at: raw.block_created_at,
            block: raw.block,
            status: raw.status,
            error: raw.error,
            sequence: raw.sequence,
            tx_type: raw.tx_type,
            direction: raw.direction,
            inputs: raw.inputs,
            outputs: raw.outputs,
            tokens: raw.tokens,
            memo: raw.memo,
            fee: raw.fee,
            metadata,
            created_at: raw.created_at,
        })
    }
}

impl TryFrom<&Tx> for RawTx {
    type Error = TypesError;

    fn try_from(tx: &Tx) -> Result<Self, Self::Error> {
        if !tx.metadata.fits(tx.tx_type) {
            return Err(TypesError::UnsupportedMetadata(tx.tx_type.to_string()));
        }

        Ok(RawTx {
            id: tx.id.clone(),
            from: tx.from.clone(),
            to: tx.to.clone(),
            block_created_at: tx.block_created_at,
            block: tx.block,
            status: tx.status,
            error: tx.error.clone(),
            sequence: tx.sequence,
            tx_type: tx.tx_type,
            direction: tx.direction,
            inputs: tx.inputs.clone(),
            outputs: tx.outputs.clone(),
            tokens: tx.tokens.clone(),
            memo: tx.memo.clone(),
            fee: tx.fee.clone(),
            metadata: serde_json::to_value(&tx.metadata)?,
            created_at: tx.created_at,
        })
    }
}

impl Serialize for Tx {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawTx::try_from(self)
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Tx {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawTx::deserialize(deserializer)?;
        Tx::try_from(raw).map_err(de::Error::custom)
    }
}
