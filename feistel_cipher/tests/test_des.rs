#[cfg(test)]
mod tests {
    use feistel_cipher::crypto::cipher_traits::SymmetricCipher;
    use feistel_cipher::crypto::des::{self, DES};
    use feistel_cipher::crypto::des_key_expansion::DesKeyExpansion;
    use feistel_cipher::crypto::error::CipherError;
    use feistel_cipher::crypto::key_expansion::KeyExpansion;
    use feistel_cipher::crypto::utils::bytes_to_text;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    const KEY: &str = "133457799BBCDFF1";

    #[test]
    fn test_des_published_vector() {
        let key = hex_literal::hex!("13 34 57 79 9B BC DF F1");
        let plaintext = hex_literal::hex!("01 23 45 67 89 AB CD EF");
        let expected_ciphertext = hex_literal::hex!("85 E8 13 54 0F 0A B4 05");

        let mut cipher = DES::default();
        cipher.set_key(&key).unwrap();

        let ciphertext = cipher.encrypt(&plaintext);
        assert_eq!(ciphertext, expected_ciphertext);

        let decrypted = cipher.decrypt(&ciphertext);
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_round_key_schedule() {
        let key = hex_literal::hex!("13 34 57 79 9B BC DF F1");
        let round_keys = DesKeyExpansion.generate_round_keys(&key);

        assert_eq!(round_keys.len(), 16);
        assert!(round_keys.iter().all(|k| k.len() == 6));

        // first and last subkeys for the classic key
        assert_eq!(round_keys[0], hex_literal::hex!("1B 02 EF FC 70 72"));
        assert_eq!(round_keys[15], hex_literal::hex!("CB 3D 8B 0E 17 F5"));
    }

    #[test]
    fn test_encrypt_decrypt_hello() {
        let ciphertext = des::encrypt("HELLO", KEY).unwrap();

        // one 8-byte block, uppercase hex
        assert_eq!(ciphertext.len(), 16);
        assert!(ciphertext.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(ciphertext, ciphertext.to_uppercase());

        assert_eq!(des::decrypt(&ciphertext, KEY).unwrap(), "HELLO");
    }

    #[test]
    fn test_encrypt_is_deterministic() {
        let a = des::encrypt("determinism check", KEY).unwrap();
        let b = des::encrypt("determinism check", KEY).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_key_is_case_insensitive() {
        let upper = des::encrypt("HELLO", "133457799BBCDFF1").unwrap();
        let lower = des::encrypt("HELLO", "133457799bbcdff1").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_block_independence() {
        // 8-char blocks; only the first block differs
        let c1 = des::encrypt("AAAAAAAABBBBBBBB", KEY).unwrap();
        let c2 = des::encrypt("CCCCCCCCBBBBBBBB", KEY).unwrap();

        assert_eq!(c1.len(), 48);
        assert_ne!(c1[..16], c2[..16]);
        assert_eq!(c1[16..], c2[16..]);
    }

    #[test]
    fn test_avalanche_on_single_bit_flip() {
        let key = hex_literal::hex!("13 34 57 79 9B BC DF F1");
        let block_a = hex_literal::hex!("01 23 45 67 89 AB CD EF");
        let mut block_b = block_a;
        block_b[0] ^= 0x80;

        let mut cipher = DES::default();
        cipher.set_key(&key).unwrap();

        let ca = cipher.encrypt(&block_a);
        let cb = cipher.encrypt(&block_b);

        let differing: u32 = ca
            .iter()
            .zip(cb.iter())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum();

        // roughly half of 64, with generous slack
        assert!((16..=48).contains(&differing), "differing bits: {differing}");
    }

    #[test]
    fn test_invalid_key_rejected() {
        assert_eq!(
            des::encrypt("HELLO", "00"),
            Err(CipherError::InvalidKeyFormat { expected: 16 })
        );
        assert_eq!(
            des::encrypt("HELLO", "not-hex-not-hex!"),
            Err(CipherError::InvalidKeyFormat { expected: 16 })
        );
        assert_eq!(
            des::decrypt("0123456789ABCDEF", "too short"),
            Err(CipherError::InvalidKeyFormat { expected: 16 })
        );
    }

    #[test]
    fn test_invalid_ciphertext_rejected() {
        assert_eq!(
            des::decrypt("zz", KEY),
            Err(CipherError::InvalidCiphertextFormat { granularity: 16 })
        );
        assert_eq!(
            des::decrypt("ZZZZZZZZZZZZZZZZ", KEY),
            Err(CipherError::InvalidCiphertextFormat { granularity: 16 })
        );
        assert_eq!(
            des::decrypt("0123456789ABCDEF01", KEY),
            Err(CipherError::InvalidCiphertextFormat { granularity: 16 })
        );
    }

    #[test]
    fn test_aligned_plaintext_gains_padding_block() {
        // 8 bytes of text -> 16 bytes of ciphertext
        let ciphertext = des::encrypt("ABCDEFGH", KEY).unwrap();
        assert_eq!(ciphertext.len(), 32);
        assert_eq!(des::decrypt(&ciphertext, KEY).unwrap(), "ABCDEFGH");
    }

    #[test]
    fn test_empty_plaintext() {
        let ciphertext = des::encrypt("", KEY).unwrap();
        assert_eq!(ciphertext.len(), 16);
        assert_eq!(des::decrypt(&ciphertext, KEY).unwrap(), "");
    }

    #[test]
    fn test_random_latin1_roundtrips() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for len in [1usize, 7, 8, 9, 63, 200] {
            let mut bytes = vec![0u8; len];
            rng.fill_bytes(&mut bytes);
            let text = bytes_to_text(&bytes);

            let ciphertext = des::encrypt(&text, KEY).unwrap();
            assert_eq!(des::decrypt(&ciphertext, KEY).unwrap(), text);
        }
    }
}
