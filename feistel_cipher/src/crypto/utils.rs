use crate::crypto::cipher_types::PaddingPolicy;
use crate::crypto::error::CipherError;
use bitvec::prelude::BitVec;

/// MSB-first within each byte, so bit 1 of the published permutation
/// tables is the high bit of the first byte.
pub fn bytes_to_bits(input: &[u8]) -> BitVec {
    let mut bits = BitVec::with_capacity(input.len() * 8);
    for &byte in input {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 != 0);
        }
    }
    bits
}

pub fn bits_to_bytes(bits: &BitVec) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len() / 8);

    for chunk in bits.chunks(8) {
        let mut byte = 0;
        for (i, bit) in chunk.iter().enumerate() {
            if *bit {
                byte |= 1 << (7 - i);
            }
        }
        bytes.push(byte);
    }
    bytes
}

/// Reorder bits per a 1-based selection table. The output carries one bit
/// per table entry, so the table may select, drop or duplicate positions.
pub fn permute_bits(data: &[u8], table: &[usize]) -> Vec<u8> {
    let bits = bytes_to_bits(data);
    let bit_count = bits.len();
    let mut permuted = BitVec::with_capacity(table.len());

    for &pos in table {
        let idx = pos - 1;
        if idx < bit_count {
            permuted.push(bits[idx]);
        } else {
            permuted.push(false);
        }
    }

    bits_to_bytes(&permuted)
}

pub fn xor_bytes(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

pub fn hex_to_bytes(s: &str) -> Result<Vec<u8>, hex::FromHexError> {
    hex::decode(s)
}

/// One char per byte: each character contributes its low code-point byte.
/// Input outside the Latin-1 range does not round-trip.
pub fn text_to_bytes(text: &str) -> Vec<u8> {
    text.chars().map(|c| c as u8).collect()
}

pub fn bytes_to_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

pub fn parse_hex_key(key: &str, expected_hex_chars: usize) -> Result<Vec<u8>, CipherError> {
    if key.len() != expected_hex_chars {
        return Err(CipherError::InvalidKeyFormat {
            expected: expected_hex_chars,
        });
    }
    hex::decode(key).map_err(|_| CipherError::InvalidKeyFormat {
        expected: expected_hex_chars,
    })
}

pub fn parse_hex_ciphertext(ciphertext: &str, block_size: usize) -> Result<Vec<u8>, CipherError> {
    let granularity = block_size * 2;
    if ciphertext.len() % granularity != 0 {
        return Err(CipherError::InvalidCiphertextFormat { granularity });
    }
    hex::decode(ciphertext).map_err(|_| CipherError::InvalidCiphertextFormat { granularity })
}

/// PKCS#7-style: always pads, with a full extra block when the input is
/// already aligned (including the empty message).
pub fn apply_padding(mut data: Vec<u8>, block_size: usize) -> Vec<u8> {
    let padding_length = block_size - (data.len() % block_size);
    data.extend(vec![padding_length as u8; padding_length]);
    data
}

pub fn remove_padding(
    mut data: Vec<u8>,
    block_size: usize,
    policy: PaddingPolicy,
) -> Result<Vec<u8>, CipherError> {
    let Some(&last_byte) = data.last() else {
        return Ok(data);
    };

    let pad_len = last_byte as usize;
    if pad_len == 0 || pad_len > block_size || pad_len > data.len() {
        return match policy {
            PaddingPolicy::Lenient => Ok(data),
            PaddingPolicy::Strict => Err(CipherError::InvalidPadding),
        };
    }

    if policy == PaddingPolicy::Strict
        && !data[data.len() - pad_len..].iter().all(|&b| b == last_byte)
    {
        return Err(CipherError::InvalidPadding);
    }

    data.truncate(data.len() - pad_len);
    Ok(data)
}
