use crate::gf::arithmetic::gf_mul;
use crate::rijndael::key_schedule::expand_key;
use crate::rijndael::sbox::{inv_sbox, sbox};
use feistel_cipher::crypto::cipher_context::CipherContext;
use feistel_cipher::crypto::cipher_traits::{
    CipherAlgorithm, SymmetricCipher, SymmetricCipherWithRounds,
};
use feistel_cipher::crypto::cipher_types::PaddingPolicy;
use feistel_cipher::crypto::error::CipherError;
use feistel_cipher::crypto::utils::parse_hex_key;

pub const BLOCK_SIZE: usize = 16;
pub const KEY_BYTES: usize = 16;
pub const KEY_HEX_CHARS: usize = 32;

/// 4x4 byte state, stored as four columns (block loads column-major).
type State = [[u8; 4]; 4];

fn block_to_state(block: &[u8]) -> State {
    let mut s = [[0u8; 4]; 4];
    for c in 0..4 {
        for r in 0..4 {
            s[c][r] = block[c * 4 + r];
        }
    }
    s
}

fn state_to_block(s: &State) -> Vec<u8> {
    let mut out = vec![0u8; BLOCK_SIZE];
    for c in 0..4 {
        for r in 0..4 {
            out[c * 4 + r] = s[c][r];
        }
    }
    out
}

fn add_round_key(state: &mut State, round_key: &[u8]) {
    for c in 0..4 {
        for r in 0..4 {
            state[c][r] ^= round_key[c * 4 + r];
        }
    }
}

fn sub_bytes(state: &mut State) {
    for col in state.iter_mut() {
        for byte in col.iter_mut() {
            *byte = sbox(*byte);
        }
    }
}

fn inv_sub_bytes(state: &mut State) {
    for col in state.iter_mut() {
        for byte in col.iter_mut() {
            *byte = inv_sbox(*byte);
        }
    }
}

// row r cycles left by r positions
fn shift_rows(state: &mut State) {
    for r in 1..4 {
        let mut tmp = [0u8; 4];
        for c in 0..4 {
            tmp[c] = state[(c + r) % 4][r];
        }
        for c in 0..4 {
            state[c][r] = tmp[c];
        }
    }
}

fn inv_shift_rows(state: &mut State) {
    for r in 1..4 {
        let mut tmp = [0u8; 4];
        for c in 0..4 {
            tmp[c] = state[(c + 4 - r) % 4][r];
        }
        for c in 0..4 {
            state[c][r] = tmp[c];
        }
    }
}

fn mix_columns(state: &mut State) {
    for col in state.iter_mut() {
        let a = *col;
        col[0] = gf_mul(a[0], 2) ^ gf_mul(a[1], 3) ^ a[2] ^ a[3];
        col[1] = a[0] ^ gf_mul(a[1], 2) ^ gf_mul(a[2], 3) ^ a[3];
        col[2] = a[0] ^ a[1] ^ gf_mul(a[2], 2) ^ gf_mul(a[3], 3);
        col[3] = gf_mul(a[0], 3) ^ a[1] ^ a[2] ^ gf_mul(a[3], 2);
    }
}

fn inv_mix_columns(state: &mut State) {
    for col in state.iter_mut() {
        let a = *col;
        col[0] = gf_mul(a[0], 0x0e) ^ gf_mul(a[1], 0x0b) ^ gf_mul(a[2], 0x0d) ^ gf_mul(a[3], 0x09);
        col[1] = gf_mul(a[0], 0x09) ^ gf_mul(a[1], 0x0e) ^ gf_mul(a[2], 0x0b) ^ gf_mul(a[3], 0x0d);
        col[2] = gf_mul(a[0], 0x0d) ^ gf_mul(a[1], 0x09) ^ gf_mul(a[2], 0x0e) ^ gf_mul(a[3], 0x0b);
        col[3] = gf_mul(a[0], 0x0b) ^ gf_mul(a[1], 0x0d) ^ gf_mul(a[2], 0x09) ^ gf_mul(a[3], 0x0e);
    }
}

fn encrypt_block_internal(block: &[u8], round_keys: &[Vec<u8>]) -> Vec<u8> {
    let mut state = block_to_state(block);
    let nr = round_keys.len() - 1;

    add_round_key(&mut state, &round_keys[0]);
    for round in 1..nr {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, &round_keys[round]);
    }
    // the final round skips MixColumns, keeping encryption and
    // decryption structurally symmetric
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[nr]);

    state_to_block(&state)
}

fn decrypt_block_internal(block: &[u8], round_keys: &[Vec<u8>]) -> Vec<u8> {
    let mut state = block_to_state(block);
    let nr = round_keys.len() - 1;

    add_round_key(&mut state, &round_keys[nr]);
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    for round in (1..nr).rev() {
        add_round_key(&mut state, &round_keys[round]);
        inv_mix_columns(&mut state);
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
    }
    add_round_key(&mut state, &round_keys[0]);

    state_to_block(&state)
}

#[derive(Default)]
pub struct Rijndael {
    round_keys: Vec<Vec<u8>>,
}

impl Rijndael {
    pub fn new() -> Self {
        Rijndael {
            round_keys: Vec::new(),
        }
    }
}

impl CipherAlgorithm for Rijndael {
    fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        data.chunks(BLOCK_SIZE)
            .flat_map(|chunk| encrypt_block_internal(chunk, &self.round_keys))
            .collect()
    }
    fn decrypt(&self, data: &[u8]) -> Vec<u8> {
        data.chunks(BLOCK_SIZE)
            .flat_map(|chunk| decrypt_block_internal(chunk, &self.round_keys))
            .collect()
    }
}

impl SymmetricCipher for Rijndael {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if key.len() != KEY_BYTES {
            return Err(CipherError::InvalidKeyLength {
                expected: KEY_BYTES,
                actual: key.len(),
            });
        }
        self.round_keys = expand_key(key);
        Ok(())
    }
}

impl SymmetricCipherWithRounds for Rijndael {
    fn encrypt_block(&self, block: &[u8], _round_key: &[u8]) -> Vec<u8> {
        encrypt_block_internal(block, &self.round_keys)
    }
    fn decrypt_block(&self, block: &[u8], _round_key: &[u8]) -> Vec<u8> {
        decrypt_block_internal(block, &self.round_keys)
    }
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }
    fn export_round_keys(&self) -> Option<Vec<u8>> {
        Some(self.round_keys.iter().flatten().copied().collect())
    }
}

/// Encrypt `plaintext` under a 32-hex-character key. ECB, PKCS#7-style
/// padding, uppercase hex out.
pub fn encrypt(plaintext: &str, key: &str) -> Result<String, CipherError> {
    Ok(build_context(key)?.encrypt_text(plaintext))
}

pub fn decrypt(ciphertext: &str, key: &str) -> Result<String, CipherError> {
    build_context(key)?.decrypt_text(ciphertext)
}

fn build_context(key: &str) -> Result<CipherContext, CipherError> {
    let key_bytes = parse_hex_key(key, KEY_HEX_CHARS)?;
    let mut ctx = CipherContext::new(Box::new(Rijndael::new()), PaddingPolicy::Lenient);
    ctx.set_key(&key_bytes)?;
    Ok(ctx)
}
