use serde::{Deserialize, Serialize};

use crate::error::AssetError;

const COIN_PREFIX: char = 'c';
const TOKEN_PREFIX: char = 't';
const SEPARATOR: char = '_';

/// Whether an asset id names a native coin or a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinType {
    Coin,
    Token,
}

/// The parts of a parsed asset id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAssetId {
    pub coin: u32,
    pub token: Option<String>,
}

impl ParsedAssetId {
    pub fn kind(&self) -> CoinType {
        match self.token {
            Some(_) => CoinType::Token,
            None => CoinType::Coin,
        }
    }

    /// Token id, or `""` for a native coin.
    pub fn token_id(&self) -> &str {
        self.token.as_deref().unwrap_or_default()
    }
}

/// Builds an asset id: `c<coin>` or `c<coin>_t<token>`.
///
/// The token id is copied verbatim.
pub fn build_id(coin: u32, token: &str) -> String {
    if token.is_empty() {
        format!("{COIN_PREFIX}{coin}")
    } else {
        format!("{COIN_PREFIX}{coin}{SEPARATOR}{TOKEN_PREFIX}{token}")
    }
}

/// Parses an asset id into its coin and optional token.
///
/// Only the first `_` separates words, so token ids may themselves contain
/// underscores. The coin and token words may come in either order; a second
/// word without the token prefix is ignored.
pub fn parse_id(id: &str) -> Result<ParsedAssetId, AssetError> {
    let words: Vec<&str> = id.splitn(2, SEPARATOR).collect();

    let coin = find_coin_id(&words).map_err(|_| AssetError::BadAssetId)?;
    let token = find_token_id(&words).map(str::to_owned);

    Ok(ParsedAssetId { coin, token })
}

/// Finds the first word carrying the coin prefix and parses its id.
pub fn find_coin_id(words: &[&str]) -> Result<u32, AssetError> {
    let word = words
        .iter()
        .find(|w| w.starts_with(COIN_PREFIX))
        .ok_or(AssetError::NoCoin)?;

    let digits = remove_first_char(word);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AssetError::BadCoin);
    }

    digits.parse().map_err(|_| AssetError::BadCoin)
}

/// Finds the first non-empty word carrying the token prefix.
pub fn find_token_id<'a>(words: &[&'a str]) -> Option<&'a str> {
    words
        .iter()
        .find(|w| w.len() > 1 && w.starts_with(TOKEN_PREFIX))
        .copied()
        .map(remove_first_char)
}

/// Drops the first character of `input`.
pub fn remove_first_char(input: &str) -> &str {
    let mut chars = input.chars();
    chars.next();
    chars.as_str()
}
