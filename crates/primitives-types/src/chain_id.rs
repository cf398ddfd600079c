//! EIP-155 chain ids of well-known EVM networks.

pub const ETHEREUM: u64 = 1;
pub const OPTIMISM: u64 = 10;
pub const SMART_CHAIN: u64 = 56;
pub const GNOSIS: u64 = 100;
pub const POLYGON: u64 = 137;
pub const FANTOM: u64 = 250;
pub const BOBA: u64 = 288;
pub const METIS: u64 = 1088;
pub const MOONBEAM: u64 = 1284;
pub const MOONRIVER: u64 = 1285;
pub const KLAYTN: u64 = 8217;
pub const ARBITRUM: u64 = 42161;
pub const AVALANCHE: u64 = 43114;
