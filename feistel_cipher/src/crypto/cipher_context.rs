use crate::crypto::cipher_traits::SymmetricCipherWithRounds;
use crate::crypto::cipher_types::PaddingPolicy;
use crate::crypto::error::CipherError;
use crate::crypto::utils::{
    apply_padding, bytes_to_hex, bytes_to_text, parse_hex_ciphertext, remove_padding,
    text_to_bytes,
};
use rayon::prelude::*;

// Below this input size the rayon fan-out costs more than it saves.
const PARALLEL_THRESHOLD: usize = 64 * 1024;

/// ECB pipeline around a block cipher: pad, transform each block
/// independently, unpad. Also carries the text/hex surface.
pub struct CipherContext {
    algorithm: Box<dyn SymmetricCipherWithRounds + Send + Sync>,
    padding: PaddingPolicy,
    round_key_material: Vec<u8>,
}

impl CipherContext {
    pub fn new(
        algorithm: Box<dyn SymmetricCipherWithRounds + Send + Sync>,
        padding: PaddingPolicy,
    ) -> Self {
        Self {
            algorithm,
            padding,
            round_key_material: Vec::new(),
        }
    }

    pub fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        self.algorithm.set_key(key)?;

        self.round_key_material = match self.algorithm.export_round_keys() {
            Some(keys) => keys,
            None => key.to_vec(),
        };

        Ok(())
    }

    pub fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }

    pub fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        let padded = apply_padding(data.to_vec(), self.block_size());
        self.process_blocks(&padded, true)
    }

    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        let block_size = self.block_size();
        if data.len() % block_size != 0 {
            return Err(CipherError::InvalidCiphertextFormat {
                granularity: block_size * 2,
            });
        }

        let processed = self.process_blocks(data, false);
        remove_padding(processed, block_size, self.padding)
    }

    pub fn encrypt_text(&self, plaintext: &str) -> String {
        bytes_to_hex(&self.encrypt(&text_to_bytes(plaintext)))
    }

    pub fn decrypt_text(&self, ciphertext: &str) -> Result<String, CipherError> {
        let data = parse_hex_ciphertext(ciphertext, self.block_size())?;
        Ok(bytes_to_text(&self.decrypt(&data)?))
    }

    // Blocks are independent in ECB, so the parallel and sequential paths
    // produce identical output.
    fn process_blocks(&self, data: &[u8], encrypt: bool) -> Vec<u8> {
        let block_size = self.algorithm.block_size();
        debug_assert_eq!(data.len() % block_size, 0);

        let process = |chunk: &[u8]| {
            if encrypt {
                self.algorithm.encrypt_block(chunk, &self.round_key_material)
            } else {
                self.algorithm.decrypt_block(chunk, &self.round_key_material)
            }
        };

        if data.len() >= PARALLEL_THRESHOLD {
            data.par_chunks(block_size).flat_map_iter(process).collect()
        } else {
            data.chunks(block_size).flat_map(process).collect()
        }
    }
}
