//! Origin-chain address codec.
//!
//! QLC accounts are written as `qlc_` followed by 60 base32 characters from
//! the alphabet `13456789abcdefghijkmnopqrstuwxyz`:
//! - chars 0-51:  4 zero padding bits + 256-bit account public key
//! - chars 52-59: 40-bit checksum
//!
//! `Burn` only accepts destinations that parse here, so tokens are never
//! burned towards an address the origin chain cannot credit.

use crate::error::ContractError;

pub const QLC_ADDRESS_PREFIX: &str = "qlc_";

/// Total length including the prefix
pub const QLC_ADDRESS_LEN: usize = 64;

const ALPHABET: &[u8; 32] = b"13456789abcdefghijkmnopqrstuwxyz";

const KEY_CHARS: usize = 52;
const KEY_PAD_BITS: usize = 4;

/// A parsed origin-chain account address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QlcAddress {
    public_key: [u8; 32],
    checksum: [u8; 5],
}

impl QlcAddress {
    pub fn new(public_key: [u8; 32], checksum: [u8; 5]) -> Self {
        Self {
            public_key,
            checksum,
        }
    }

    /// Parse and format-check an address string.
    pub fn parse(addr: &str) -> Result<Self, ContractError> {
        if addr.len() != QLC_ADDRESS_LEN {
            return Err(invalid(format!(
                "expected {} characters, got {}",
                QLC_ADDRESS_LEN,
                addr.len()
            )));
        }
        let payload = addr
            .strip_prefix(QLC_ADDRESS_PREFIX)
            .ok_or_else(|| invalid(format!("missing {} prefix", QLC_ADDRESS_PREFIX)))?;

        let (key_part, checksum_part) = payload.as_bytes().split_at(KEY_CHARS);

        let key_bytes = chars_to_bytes(key_part, KEY_PAD_BITS)?;
        let checksum_bytes = chars_to_bytes(checksum_part, 0)?;

        let mut public_key = [0u8; 32];
        public_key.copy_from_slice(&key_bytes);
        let mut checksum = [0u8; 5];
        checksum.copy_from_slice(&checksum_bytes);

        Ok(Self::new(public_key, checksum))
    }

    pub fn public_key(&self) -> &[u8; 32] {
        &self.public_key
    }

    pub fn checksum(&self) -> &[u8; 5] {
        &self.checksum
    }

    /// Render back to the canonical `qlc_...` form.
    pub fn to_address_string(&self) -> String {
        let mut out = String::with_capacity(QLC_ADDRESS_LEN);
        out.push_str(QLC_ADDRESS_PREFIX);
        out.push_str(&bytes_to_chars(&self.public_key, KEY_PAD_BITS));
        out.push_str(&bytes_to_chars(&self.checksum, 0));
        out
    }
}

fn invalid(reason: String) -> ContractError {
    ContractError::InvalidForeignAddress { reason }
}

fn char_value(c: u8) -> Result<u8, ContractError> {
    ALPHABET
        .iter()
        .position(|&a| a == c)
        .map(|p| p as u8)
        .ok_or_else(|| invalid(format!("invalid character '{}'", c as char)))
}

/// Unpack 5-bit characters into bytes, requiring the first `pad_bits` to be zero.
fn chars_to_bytes(chars: &[u8], pad_bits: usize) -> Result<Vec<u8>, ContractError> {
    let mut bits = Vec::with_capacity(chars.len() * 5);
    for &c in chars {
        let v = char_value(c)?;
        for shift in (0..5).rev() {
            bits.push((v >> shift) & 1);
        }
    }

    if bits[..pad_bits].iter().any(|&b| b != 0) {
        return Err(invalid("non-zero padding bits".to_string()));
    }

    Ok(bits[pad_bits..]
        .chunks(8)
        .map(|byte| byte.iter().fold(0u8, |acc, &b| (acc << 1) | b))
        .collect())
}

/// Pack bytes into 5-bit characters after `pad_bits` leading zero bits.
fn bytes_to_chars(bytes: &[u8], pad_bits: usize) -> String {
    let mut bits = vec![0u8; pad_bits];
    for byte in bytes {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }

    bits.chunks(5)
        .map(|group| {
            let v = group.iter().fold(0u8, |acc, &b| (acc << 1) | b);
            ALPHABET[v as usize] as char
        })
        .collect()
}
