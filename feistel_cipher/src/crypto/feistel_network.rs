use crate::crypto::encryption_transformation::EncryptionTransformation;
use crate::crypto::key_expansion::KeyExpansion;
use crate::crypto::utils::xor_bytes;
use std::sync::Arc;

/// Balanced Feistel skeleton: the round count and both seams (key
/// expansion, round function) are supplied by the concrete cipher.
pub struct FeistelNetwork {
    num_rounds: usize,
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(
        num_rounds: usize,
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    ) -> Self {
        FeistelNetwork {
            num_rounds,
            key_expansion,
            transformation,
        }
    }

    pub fn generate_round_keys(&self, key: &[u8]) -> Vec<Vec<u8>> {
        self.key_expansion.generate_round_keys(key)
    }

    pub fn encrypt_with_round_keys(&self, block: &[u8], round_keys: &[Vec<u8>]) -> Vec<u8> {
        self.run_rounds(block, round_keys.iter())
    }

    /// Same structure as encryption; only the subkey order is reversed.
    pub fn decrypt_with_round_keys(&self, block: &[u8], round_keys: &[Vec<u8>]) -> Vec<u8> {
        self.run_rounds(block, round_keys.iter().rev())
    }

    fn run_rounds<'a, I>(&self, block: &[u8], keys: I) -> Vec<u8>
    where
        I: Iterator<Item = &'a Vec<u8>>,
    {
        let half = block.len() / 2;
        let mut left = block[..half].to_vec();
        let mut right = block[half..].to_vec();

        let mut rounds = 0;
        for key in keys {
            let f_out = self.transformation.transform(&right, key);
            let new_right = xor_bytes(&left, &f_out);
            left = std::mem::replace(&mut right, new_right);
            rounds += 1;
        }
        debug_assert_eq!(rounds, self.num_rounds);

        // the halves leave the last round in (R, L) order
        right.extend_from_slice(&left);
        right
    }
}
