/// How trailing PKCS#7-style padding is treated on removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddingPolicy {
    /// A final byte outside `[1, block_size]` means "no padding present";
    /// the data is returned unchanged.
    #[default]
    Lenient,
    /// Every pad byte must equal the pad length.
    Strict,
}
