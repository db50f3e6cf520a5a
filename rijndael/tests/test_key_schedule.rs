#[cfg(test)]
mod tests {
    use feistel_cipher::crypto::key_expansion::KeyExpansion;
    use rijndael::rijndael::key_schedule::{expand_key, RijndaelKeyExpansion};

    const KEY: [u8; 16] = hex_literal::hex!("2B 7E 15 16 28 AE D2 A6 AB F7 15 88 09 CF 4F 3C");

    #[test]
    fn test_round_key_shape() {
        let round_keys = expand_key(&KEY);
        assert_eq!(round_keys.len(), 11);
        assert!(round_keys.iter().all(|k| k.len() == 16));
    }

    #[test]
    fn test_round_zero_is_the_key() {
        let round_keys = expand_key(&KEY);
        assert_eq!(round_keys[0], KEY);
    }

    #[test]
    fn test_published_expansion_words() {
        let round_keys = expand_key(&KEY);

        // w4..w7 from the FIPS-197 key expansion example
        assert_eq!(
            round_keys[1],
            hex_literal::hex!("A0 FA FE 17 88 54 2C B1 23 A3 39 39 2A 6C 76 05")
        );
        // final round key
        assert_eq!(
            round_keys[10],
            hex_literal::hex!("D0 14 F9 A8 C9 EE 25 89 E1 3F 0C C8 B6 63 0C A6")
        );
    }

    #[test]
    fn test_trait_wrapper_matches_free_function() {
        assert_eq!(RijndaelKeyExpansion.generate_round_keys(&KEY), expand_key(&KEY));
    }
}
