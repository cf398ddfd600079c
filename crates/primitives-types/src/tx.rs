use std::collections::HashSet;
use std::fmt;

use indexmap::IndexSet;
use primitives_asset::parse_id;
use primitives_coin::{is_evm, AssetId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TypesError;
use crate::token::Token;

/// Length of the bech32 human-readable prefix shared by addresses of one
/// Cosmos-SDK chain (`cosm`, `osmo`, `terr`, ...).
const SUB_CHAIN_PREFIX_LEN: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Completed,
    Pending,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "outgoing")]
    Outgoing,
    #[serde(rename = "incoming")]
    Incoming,
    #[serde(rename = "yourself")]
    SelfTransfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Transfer,
    Swap,
    ContractCall,
    StakeClaimRewards,
    StakeDelegate,
    StakeUndelegate,
    StakeRedelegate,
    StakeCompound,
    #[serde(rename = "transfer_nft")]
    TransferNft,
    #[serde(rename = "transfer_ics20")]
    TransferIcs20,
}

pub const SUPPORTED_TYPES: &[TransactionType] = &[
    TransactionType::Transfer,
    TransactionType::Swap,
    TransactionType::ContractCall,
    TransactionType::StakeClaimRewards,
    TransactionType::StakeDelegate,
    TransactionType::StakeUndelegate,
    TransactionType::StakeRedelegate,
    TransactionType::StakeCompound,
    TransactionType::TransferNft,
    TransactionType::TransferIcs20,
];

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Transfer => "transfer",
            TransactionType::Swap => "swap",
            TransactionType::ContractCall => "contract_call",
            TransactionType::StakeClaimRewards => "stake_claim_rewards",
            TransactionType::StakeDelegate => "stake_delegate",
            TransactionType::StakeUndelegate => "stake_undelegate",
            TransactionType::StakeRedelegate => "stake_redelegate",
            TransactionType::StakeCompound => "stake_compound",
            TransactionType::TransferNft => "transfer_nft",
            TransactionType::TransferIcs20 => "transfer_ics20",
        }
    }

    pub fn is_stake(&self) -> bool {
        matches!(
            self,
            TransactionType::StakeClaimRewards
                | TransactionType::StakeDelegate
                | TransactionType::StakeUndelegate
                | TransactionType::StakeRedelegate
                | TransactionType::StakeCompound
        )
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_tx_type_among(tx_type: TransactionType, types: &[TransactionType]) -> bool {
    types.contains(&tx_type)
}

/// Non-negative integer amount in the smallest unit of its asset (wei,
/// satoshi, ...), kept as a decimal string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(pub String);

impl Amount {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Amount(value.to_owned())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Amount(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fee {
    pub asset: AssetId,
    pub value: Amount,
}

/// One side of a UTXO transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxOutput {
    pub address: String,
    pub value: Amount,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transfer {
    pub asset: AssetId,
    pub value: Amount,
}

impl Transfer {
    pub fn validate(&self) -> Result<(), TypesError> {
        require(&self.value, "transfer", "value")?;
        require(&self.asset, "transfer", "asset")
    }
}

/// IBC fungible token transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ics20Transfer {
    #[serde(flatten)]
    pub transfer: Transfer,
    pub source_port: String,
    pub source_channel: String,
}

impl Ics20Transfer {
    pub fn validate(&self) -> Result<(), TypesError> {
        require(&self.transfer.value, "ICS20 transfer", "value")?;
        require(&self.transfer.asset, "ICS20 transfer", "asset")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferNft {
    pub asset: AssetId,
    pub collection: String,
    pub collectible_id: String,
    pub collection_symbol: String,
    pub value: Amount,
}

impl TransferNft {
    pub fn validate(&self) -> Result<(), TypesError> {
        require(&self.collectible_id, "transfer NFT", "collectible ID")?;
        require(&self.asset, "transfer NFT", "asset")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Swap {
    pub from: Transfer,
    pub to: Transfer,
}

impl Swap {
    /// Native coin of the chain the swap happened on.
    pub fn asset(&self) -> AssetId {
        let from = self.from.asset.as_str();
        AssetId::from(from.split('_').next().unwrap_or(from))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractCall {
    pub asset: AssetId,
    pub value: Amount,
    pub input: String,
}

impl ContractCall {
    pub fn validate(&self) -> Result<(), TypesError> {
        require(&self.value, "contract call", "value")?;
        require(&self.asset, "contract call", "asset")
    }
}

fn require(field: impl AsRef<str>, kind: &'static str, name: &'static str) -> Result<(), TypesError> {
    if field.as_ref().is_empty() {
        return Err(TypesError::EmptyField { kind, field: name });
    }
    Ok(())
}

impl AsRef<str> for Amount {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Type-specific payload of a [`Tx`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Metadata {
    Transfer(Transfer),
    ContractCall(ContractCall),
    Swap(Swap),
    TransferNft(TransferNft),
    Ics20Transfer(Ics20Transfer),
}

impl Metadata {
    pub fn asset(&self) -> AssetId {
        match self {
            Metadata::Transfer(t) => t.asset.clone(),
            Metadata::ContractCall(c) => c.asset.clone(),
            Metadata::Swap(s) => s.asset(),
            Metadata::TransferNft(n) => n.asset.clone(),
            Metadata::Ics20Transfer(i) => i.transfer.asset.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), TypesError> {
        match self {
            Metadata::Transfer(t) => t.validate(),
            Metadata::ContractCall(c) => c.validate(),
            Metadata::Swap(_) => Ok(()),
            Metadata::TransferNft(n) => n.validate(),
            Metadata::Ics20Transfer(i) => i.validate(),
        }
    }

    /// Whether this payload is the one carried by transactions of `tx_type`.
    pub fn fits(&self, tx_type: TransactionType) -> bool {
        match self {
            Metadata::Transfer(_) => tx_type == TransactionType::Transfer || tx_type.is_stake(),
            Metadata::ContractCall(_) => tx_type == TransactionType::ContractCall,
            Metadata::Swap(_) => tx_type == TransactionType::Swap,
            Metadata::TransferNft(_) => tx_type == TransactionType::TransferNft,
            Metadata::Ics20Transfer(_) => tx_type == TransactionType::TransferIcs20,
        }
    }
}

/// A generic on-chain transaction.
///
/// JSON (de)serialization lives in the wire module: `type` decides how
/// `metadata` is read, and writing fails when the two disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tx {
    pub id: String,
    pub from: String,
    pub to: String,
    /// Unix time of the including block.
    pub block_created_at: i64,
    pub block: u64,
    pub status: Status,
    /// Failure reason; empty unless `status` is [`Status::Error`].
    pub error: String,
    pub sequence: u64,
    pub tx_type: TransactionType,
    pub direction: Option<Direction>,
    pub inputs: Vec<TxOutput>,
    pub outputs: Vec<TxOutput>,
    pub tokens: Vec<Token>,
    pub memo: String,
    pub fee: Fee,
    pub metadata: Metadata,
    /// Unix time the record was stored.
    pub created_at: i64,
}

impl Tx {
    pub fn validate(&self) -> Result<(), TypesError> {
        self.metadata.validate()
    }

    pub fn asset_id(&self) -> AssetId {
        self.metadata.asset()
    }

    /// Addresses involved in the transaction, without duplicates.
    pub fn addresses(&self) -> Vec<String> {
        match self.tx_type {
            TransactionType::Transfer | TransactionType::TransferNft
                if !self.inputs.is_empty() || !self.outputs.is_empty() =>
            {
                let unique: IndexSet<&str> = self
                    .inputs
                    .iter()
                    .chain(&self.outputs)
                    .map(|o| o.address.as_str())
                    .collect();
                unique.into_iter().map(str::to_owned).collect()
            }
            TransactionType::Transfer
            | TransactionType::TransferNft
            | TransactionType::ContractCall
            | TransactionType::Swap => vec![self.from.clone(), self.to.clone()],
            TransactionType::StakeDelegate
            | TransactionType::StakeRedelegate
            | TransactionType::StakeUndelegate
            | TransactionType::StakeClaimRewards
            | TransactionType::StakeCompound => vec![self.from.clone()],
            TransactionType::TransferIcs20 => {
                if self.in_same_sub_chain() {
                    vec![self.to.clone(), self.from.clone()]
                } else {
                    vec![self.from.clone()]
                }
            }
        }
    }

    /// [`addresses`](Self::addresses) keyed by coin: `"<coin>_<address>"`.
    pub fn subscription_addresses(&self) -> Result<Vec<String>, TypesError> {
        let coin = parse_id(self.asset_id().as_str())?.coin;
        Ok(self
            .addresses()
            .into_iter()
            .map(|address| format!("{coin}_{address}"))
            .collect())
    }

    /// Direction of the transaction as seen from `address`.
    ///
    /// An explicit `direction` wins. UTXO transactions are classified by
    /// their inputs and outputs, account transactions by sender and recipient.
    pub fn direction_for(&self, address: &str) -> Direction {
        if let Some(direction) = self.direction {
            return direction;
        }

        if !self.inputs.is_empty() && !self.outputs.is_empty() {
            let addresses = HashSet::from([address]);
            return infer_direction(self, &addresses);
        }

        self.account_direction(address)
    }

    fn account_direction(&self, address: &str) -> Direction {
        if matches!(
            self.tx_type,
            TransactionType::StakeUndelegate | TransactionType::StakeClaimRewards
        ) {
            return Direction::Incoming;
        }

        if address == self.to {
            if self.from == self.to {
                return Direction::SelfTransfer;
            }
            return Direction::Incoming;
        }

        Direction::Outgoing
    }

    pub fn is_utxo(&self) -> bool {
        self.tx_type == TransactionType::Transfer && !self.outputs.is_empty()
    }

    /// Whether the transaction's asset lives on an EVM chain.
    pub fn is_evm(&self) -> Result<bool, TypesError> {
        let coin = parse_id(self.asset_id().as_str())?.coin;
        Ok(is_evm(coin))
    }

    /// Net value `address` moved in a UTXO transaction.
    ///
    /// For an outgoing transfer the fee is not attributable to one sender, so
    /// an equal share of it is charged to every input. An address that got
    /// back more than it spent counts as zero.
    pub fn utxo_value_for(&self, address: &str) -> Result<Amount, TypesError> {
        let mut is_transfer_out = false;
        let mut is_self = true;

        let mut total_input: i128 = 0;
        let mut address_input: i128 = 0;
        for input in &self.inputs {
            let value = parse_value(input, "input")?;
            total_input = add_value(total_input, value, input, "input")?;

            if input.address == address {
                address_input = value;
                is_transfer_out = true;
            }
        }

        let mut total_output: i128 = 0;
        let mut address_output: i128 = 0;
        for output in &self.outputs {
            let value = parse_value(output, "output")?;
            total_output = add_value(total_output, value, output, "output")?;

            if output.address == address {
                address_output = add_value(address_output, value, output, "output")?;
            } else {
                is_self = false;
            }
        }

        let result = if is_transfer_out && !is_self {
            if address_input < address_output {
                0
            } else {
                let inputs = i128::try_from(self.inputs.len()).unwrap_or(i128::MAX);
                let avg_sent = total_input
                    .checked_sub(total_output)
                    .ok_or_else(|| overflow(address, "input", total_input))?
                    .div_euclid(inputs);
                address_input
                    .checked_sub(address_output)
                    .and_then(|v| v.checked_sub(avg_sent))
                    .ok_or_else(|| overflow(address, "input", address_input))?
            }
        } else {
            address_output
        };

        Ok(Amount(result.to_string()))
    }

    fn in_same_sub_chain(&self) -> bool {
        if self.from.len() <= SUB_CHAIN_PREFIX_LEN || self.to.len() <= SUB_CHAIN_PREFIX_LEN {
            return false;
        }
        self.from.as_bytes()[..SUB_CHAIN_PREFIX_LEN] == self.to.as_bytes()[..SUB_CHAIN_PREFIX_LEN]
    }
}

fn parse_value(output: &TxOutput, side: &'static str) -> Result<i128, TypesError> {
    output.value.as_str().parse().map_err(|_| invalid_value(output, side))
}

fn add_value(acc: i128, value: i128, output: &TxOutput, side: &'static str) -> Result<i128, TypesError> {
    acc.checked_add(value).ok_or_else(|| invalid_value(output, side))
}

fn overflow(address: &str, side: &'static str, value: i128) -> TypesError {
    TypesError::InvalidValue {
        side,
        address: address.to_owned(),
        value: value.to_string(),
    }
}

fn invalid_value(output: &TxOutput, side: &'static str) -> TypesError {
    TypesError::InvalidValue {
        side,
        address: output.address.clone(),
        value: output.value.0.clone(),
    }
}

/// Direction of a UTXO transaction as seen from a wallet owning `addresses`.
///
/// Incoming when none of the wallet's addresses spent an input. Self when
/// every output goes back to the wallet, or outputs and inputs coincide.
pub fn infer_direction(tx: &Tx, addresses: &HashSet<&str>) -> Direction {
    let inputs: HashSet<&str> = tx.inputs.iter().map(|i| i.address.as_str()).collect();
    let outputs: HashSet<&str> = tx.outputs.iter().map(|o| o.address.as_str()).collect();

    if addresses.is_disjoint(&inputs) {
        return Direction::Incoming;
    }

    let proper_subset = outputs.len() < addresses.len() && outputs.is_subset(addresses);
    if proper_subset || outputs == inputs {
        return Direction::SelfTransfer;
    }

    Direction::Outgoing
}

fn clean_memo(memo: &str) -> String {
    if memo.is_empty() {
        return String::new();
    }

    match memo.parse::<f64>() {
        Ok(_) => memo.to_owned(),
        Err(_) => {
            debug!(memo, "dropping non-numeric memo");
            String::new()
        }
    }
}

/// A list of transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Txs(pub Vec<Tx>);

impl Txs {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tx> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<Tx> {
        self.0
    }

    /// Keeps the first transaction of every id.
    pub fn filter_unique_id(&self) -> Txs {
        let mut seen = HashSet::new();
        self.0
            .iter()
            .filter(|tx| seen.insert(tx.id.as_str()))
            .cloned()
            .collect()
    }

    /// Clears every memo that is not a number.
    pub fn clean_memos(&mut self) {
        for tx in &mut self.0 {
            tx.memo = clean_memo(&tx.memo);
        }
    }

    /// Newest block first.
    pub fn sort_by_block_creation_time(&mut self) {
        self.0.sort_by(|a, b| b.block_created_at.cmp(&a.block_created_at));
    }

    /// Most recently stored first.
    pub fn sort_by_created_at(&mut self) {
        self.0.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }

    pub fn filter_by_types(&self, types: &[TransactionType]) -> Txs {
        self.0
            .iter()
            .filter(|tx| is_tx_type_among(tx.tx_type, types))
            .cloned()
            .collect()
    }
}

impl From<Vec<Tx>> for Txs {
    fn from(txs: Vec<Tx>) -> Self {
        Txs(txs)
    }
}

impl FromIterator<Tx> for Txs {
    fn from_iter<I: IntoIterator<Item = Tx>>(iter: I) -> Self {
        Txs(iter.into_iter().collect())
    }
}

impl IntoIterator for Txs {
    type Item = Tx;
    type IntoIter = std::vec::IntoIter<Tx>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxPage {
    pub total: usize,
    pub docs: Txs,
}

impl TxPage {
    pub fn new(txs: Txs) -> Self {
        TxPage {
            total: txs.len(),
            docs: txs,
        }
    }

    pub fn empty() -> Self {
        TxPage::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub number: i64,
    pub txs: Vec<Tx>,
}
