use thiserror::Error;

/// Coin registry errors.
#[derive(Debug, Error)]
pub enum CoinError {
    #[error("unknown coin: {0}")]
    UnknownCoin(String),

    #[error("no explorer for coin: {0}")]
    NoExplorer(String),
}
