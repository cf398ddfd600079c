use sha3::{Digest, Keccak256};

use crate::error::AddressError;
use crate::registry::{ChainRegistry, CoinRegistry};

const HEX_PREFIX: &str = "0x";

/// Strips a literal leading `0x`, if present.
pub fn remove_0x(input: &str) -> &str {
    input.strip_prefix(HEX_PREFIX).unwrap_or(input)
}

/// Applies EIP-55 mixed-case checksum encoding to a hex address.
///
/// The input is case-insensitive and may carry a `0x` prefix. Its length is
/// not checked beyond the digest bound, so any even-length hex string is
/// accepted, including the empty one (which encodes to `"0x"`).
pub fn eip55_checksum(address: &str) -> Result<String, AddressError> {
    let lowered = address.to_lowercase();
    let hex_part = remove_0x(&lowered);

    hex::decode(hex_part).map_err(|e| AddressError::InvalidHexInput(e.to_string()))?;

    // EIP-55 hashes the lowercase hex text, not the decoded bytes.
    let hash = Keccak256::digest(hex_part.as_bytes());

    // Each character consumes half a digest byte.
    if hex_part.len().saturating_sub(1) / 2 >= hash.len() {
        return Err(AddressError::InvalidInput(format!(
            "{} hex characters exceed the {}-byte digest",
            hex_part.len(),
            hash.len()
        )));
    }

    let mut checksummed = String::with_capacity(HEX_PREFIX.len() + hex_part.len());
    checksummed.push_str(HEX_PREFIX);

    for (i, c) in hex_part.bytes().enumerate() {
        let hash_byte = hash[i / 2];
        let nibble = if i % 2 == 0 { hash_byte >> 4 } else { hash_byte & 0x0f };

        if c > b'9' && nibble > 7 {
            checksummed.push(char::from(c.to_ascii_uppercase()));
        } else {
            checksummed.push(char::from(c));
        }
    }

    Ok(checksummed)
}

/// Checksums `address` according to the conventions of the given coin.
///
/// Non-EVM coins are returned unchanged. Uses the static coin registry; see
/// [`to_eip55_with_registry`] to supply another classification.
pub fn to_eip55_by_coin_id(address: &str, coin_id: u32) -> Result<String, AddressError> {
    to_eip55_with_registry(address, coin_id, &CoinRegistry)
}

/// Checksums `address` for `coin_id`, classifying the chain through `registry`.
///
/// A chain with an alternate prefix (e.g. `ronin:`) has that prefix swapped
/// for `0x` before checksumming and restored afterwards. Addresses on such a
/// chain that already use `0x` are checksummed as-is.
pub fn to_eip55_with_registry<R>(
    address: &str,
    coin_id: u32,
    registry: &R,
) -> Result<String, AddressError>
where
    R: ChainRegistry + ?Sized,
{
    if !registry.is_evm(coin_id) {
        return Ok(address.to_owned());
    }

    let alternate = registry
        .alternate_address_prefix(coin_id)
        .and_then(|prefix| address.strip_prefix(prefix).map(|rest| (prefix, rest)));

    match alternate {
        Some((prefix, rest)) => {
            let checksummed = eip55_checksum(&format!("{HEX_PREFIX}{rest}"))?;
            Ok(format!("{prefix}{}", remove_0x(&checksummed)))
        }
        None => eip55_checksum(address),
    }
}
