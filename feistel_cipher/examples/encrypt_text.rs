use feistel_cipher::crypto::des;

fn main() {
    let key = "133457799BBCDFF1";
    let text = "The quick brown fox jumps over the lazy dog.";

    let ciphertext = des::encrypt(text, key).unwrap();
    println!("DES ciphertext: {ciphertext}");

    let plaintext = des::decrypt(&ciphertext, key).unwrap();
    assert_eq!(plaintext, text);
    println!("DES ECB round-trip OK");
}
