//! Genesis hash encoding
//!
//! A network is identified by the hash of its genesis block. Lookups against
//! the known-network table only hit when both sides use the same string form,
//! so that form is fixed here: `0x` followed by 64 lowercase hex digits, the
//! same rendering Substrate RPC clients produce for block hashes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sp_core::H256;

use crate::core::constants::GENESIS_HASH_LEN;
use crate::error::{Error, Result};

/// 32-byte genesis block hash with a single canonical hex rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GenesisHash(H256);

impl GenesisHash {
    pub const fn from_bytes(bytes: [u8; GENESIS_HASH_LEN]) -> Self {
        Self(H256(bytes))
    }

    pub const fn from_h256(hash: H256) -> Self {
        Self(hash)
    }

    pub fn as_bytes(&self) -> &[u8; GENESIS_HASH_LEN] {
        self.0.as_fixed_bytes()
    }

    pub fn as_h256(&self) -> H256 {
        self.0
    }

    /// Canonical string form used as the known-network table key
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0.as_bytes()))
    }

    /// Parse a hash rendered as hex.
    ///
    /// The `0x` prefix is optional and digits may be either case; the result
    /// always renders back in canonical form.
    pub fn from_hex(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        let bytes = hex::decode(digits)?;
        let fixed: [u8; GENESIS_HASH_LEN] = bytes.as_slice().try_into().map_err(|_| {
            Error::invalid_genesis(format!(
                "expected {} bytes, got {}",
                GENESIS_HASH_LEN,
                bytes.len()
            ))
        })?;

        Ok(Self::from_bytes(fixed))
    }
}

impl From<H256> for GenesisHash {
    fn from(hash: H256) -> Self {
        Self(hash)
    }
}

impl From<[u8; GENESIS_HASH_LEN]> for GenesisHash {
    fn from(bytes: [u8; GENESIS_HASH_LEN]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl FromStr for GenesisHash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for GenesisHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for GenesisHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for GenesisHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::KUSAMA_GENESIS;

    #[test]
    fn test_canonical_roundtrip() {
        let hash = GenesisHash::from_hex(KUSAMA_GENESIS).unwrap();
        assert_eq!(hash.to_hex(), KUSAMA_GENESIS);
        assert_eq!(hash.to_string(), KUSAMA_GENESIS);
    }

    #[test]
    fn test_parse_normalizes_case_and_prefix() {
        let upper = KUSAMA_GENESIS.trim_start_matches("0x").to_uppercase();
        let hash: GenesisHash = upper.parse().unwrap();
        assert_eq!(hash.to_hex(), KUSAMA_GENESIS);

        let prefixed_upper = format!("0X{}", upper);
        assert_eq!(
            GenesisHash::from_hex(&prefixed_upper).unwrap().to_hex(),
            KUSAMA_GENESIS
        );
    }

    #[test]
    fn test_zero_hash() {
        let zero = GenesisHash::from_bytes([0u8; 32]);
        assert_eq!(zero, GenesisHash::default());
        assert_eq!(zero.to_hex(), format!("0x{}", "0".repeat(64)));
    }

    #[test]
    fn test_rejects_wrong_length() {
        let err = GenesisHash::from_hex("0xdeadbeef").unwrap_err();
        assert!(matches!(err, Error::InvalidGenesis(_)));
        assert!(err.to_string().contains("expected 32 bytes, got 4"));
        assert!(GenesisHash::from_hex("").is_err());
    }

    #[test]
    fn test_rejects_bad_hex() {
        let bad = format!("0x{}", "zz".repeat(32));
        assert!(matches!(
            GenesisHash::from_hex(&bad),
            Err(Error::InvalidGenesis(_))
        ));
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let hash = GenesisHash::from_hex(KUSAMA_GENESIS).unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, format!("\"{}\"", KUSAMA_GENESIS));
        let back: GenesisHash = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }
}
