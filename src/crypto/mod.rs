//! Script digests used to identify token contract code

use bitcoin::hashes::{hash160 as bitcoin_hash160, Hash};

/// RIPEMD160(SHA256(data))
pub fn hash160(data: &[u8]) -> [u8; 20] {
    bitcoin_hash160::Hash::hash(data).to_byte_array()
}
