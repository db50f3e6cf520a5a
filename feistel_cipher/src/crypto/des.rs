use crate::crypto::cipher_context::CipherContext;
use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher, SymmetricCipherWithRounds};
use crate::crypto::cipher_types::PaddingPolicy;
use crate::crypto::des_key_expansion::DesKeyExpansion;
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::des_transformation::DesTransformation;
use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::error::CipherError;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::{parse_hex_key, permute_bits};
use std::sync::Arc;

pub const BLOCK_SIZE: usize = 8;
pub const KEY_HEX_CHARS: usize = 16;

pub struct DES {
    feistel_network: FeistelNetwork,
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
    round_keys: Vec<Vec<u8>>,
}

impl DES {
    pub fn new(
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        let feistel_network = FeistelNetwork::new(16, key_expansion.clone(), transformation);

        DES {
            feistel_network,
            key_expansion,
            round_keys: Vec::new(),
        }
    }

    pub fn encrypt(&self, block: &[u8]) -> Vec<u8> {
        let permuted = permute_bits(block, &IP);
        let result = self
            .feistel_network
            .encrypt_with_round_keys(&permuted, &self.round_keys);
        permute_bits(&result, &FP)
    }

    pub fn decrypt(&self, block: &[u8]) -> Vec<u8> {
        let permuted = permute_bits(block, &IP);
        let result = self
            .feistel_network
            .decrypt_with_round_keys(&permuted, &self.round_keys);
        permute_bits(&result, &FP)
    }
}

impl Default for DES {
    fn default() -> Self {
        DES::new(Arc::new(DesKeyExpansion), Arc::new(DesTransformation))
    }
}

impl CipherAlgorithm for DES {
    fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        data.chunks(BLOCK_SIZE)
            .flat_map(|chunk| DES::encrypt(self, chunk))
            .collect()
    }
    fn decrypt(&self, data: &[u8]) -> Vec<u8> {
        data.chunks(BLOCK_SIZE)
            .flat_map(|chunk| DES::decrypt(self, chunk))
            .collect()
    }
}

impl SymmetricCipher for DES {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if key.len() != BLOCK_SIZE {
            return Err(CipherError::InvalidKeyLength {
                expected: BLOCK_SIZE,
                actual: key.len(),
            });
        }
        self.round_keys = self.key_expansion.generate_round_keys(key);
        Ok(())
    }
}

impl SymmetricCipherWithRounds for DES {
    fn encrypt_block(&self, data: &[u8], _round_key: &[u8]) -> Vec<u8> {
        DES::encrypt(self, data)
    }

    fn decrypt_block(&self, data: &[u8], _round_key: &[u8]) -> Vec<u8> {
        DES::decrypt(self, data)
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn export_round_keys(&self) -> Option<Vec<u8>> {
        None
    }
}

/// Encrypt `plaintext` under a 16-hex-character key. ECB, PKCS#7-style
/// padding, uppercase hex out.
pub fn encrypt(plaintext: &str, key: &str) -> Result<String, CipherError> {
    Ok(build_context(key)?.encrypt_text(plaintext))
}

pub fn decrypt(ciphertext: &str, key: &str) -> Result<String, CipherError> {
    build_context(key)?.decrypt_text(ciphertext)
}

fn build_context(key: &str) -> Result<CipherContext, CipherError> {
    let key_bytes = parse_hex_key(key, KEY_HEX_CHARS)?;
    let mut ctx = CipherContext::new(Box::new(DES::default()), PaddingPolicy::Lenient);
    ctx.set_key(&key_bytes)?;
    Ok(ctx)
}
