use feistel_cipher::crypto::cipher_traits::{SymmetricCipher, SymmetricCipherWithRounds};
use rijndael::rijndael::cipher::{self, Rijndael};
use rijndael::rijndael::key_schedule::expand_key;

fn main() {
    let key = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6,
        0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
    ];

    let round_keys = expand_key(&key);
    println!("Round 1 key: {:02X?}", &round_keys[1]);

    let block = [
        0x32, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d,
        0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37, 0x07, 0x34,
    ];
    let mut block_cipher = Rijndael::new();
    block_cipher.set_key(&key).unwrap();

    let encrypted = block_cipher.encrypt_block(&block, &[]);
    println!("Encrypted block: {encrypted:02X?}");
    assert_eq!(block_cipher.decrypt_block(&encrypted, &[]), block);

    let hex_key = "2B7E151628AED2A6ABF7158809CF4F3C";
    let ciphertext = cipher::encrypt("HELLO", hex_key).unwrap();
    println!("AES-128 ciphertext: {ciphertext}");
    assert_eq!(cipher::decrypt(&ciphertext, hex_key).unwrap(), "HELLO");
    println!("AES-128 ECB round-trip OK");
}
